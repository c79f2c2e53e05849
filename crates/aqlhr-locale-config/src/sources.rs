// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Where locale settings come from.
//!
//! Each source yields a [`LocaleConfigLayer`] whose unset fields defer to
//! lower-ranked sources. [`crate::load_from_sources`] sorts by
//! [`Precedence`] and merges, so the order sources are listed in is irrelevant.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::LocaleConfigLayer;
use crate::settings::LocaleSettings;

/// Prefix shared by every locale environment variable.
pub const ENV_PREFIX: &str = "AQLHR_LOCALE_";

/// Rank of a source when layers are merged. A field set by a higher rank
/// replaces the same field from a lower one.
///
/// Operators override the packaged file through the environment, and the
/// file overrides the compiled-in values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Produces one layer of locale settings.
pub trait ConfigSource: Send + Sync {
	/// Label used in logs.
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<LocaleConfigLayer, ConfigError>;
}

/// The compiled-in settings: English default, the `aqlhr.lang` cookie on
/// `/` for a year and the `aqlhr.locale` storage key.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<LocaleConfigLayer, ConfigError> {
		let defaults = LocaleSettings::default();
		debug!(default_lang = %defaults.default_lang, "loading built-in locale defaults");
		Ok(LocaleConfigLayer {
			default_lang: Some(defaults.default_lang.code().to_string()),
			cookie_name: Some(defaults.cookie_name),
			cookie_path: Some(defaults.cookie_path),
			cookie_max_age_days: Some(defaults.cookie_max_age_days),
			storage_key: Some(defaults.storage_key),
		})
	}
}

/// Settings read from a TOML file with the same field names as
/// [`LocaleConfigLayer`].
///
/// Deployments are not required to ship the file, so an absent path loads as
/// an empty layer and the defaults and environment decide. A file that exists
/// but cannot be read or parsed is an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// `/etc/aqlhr/locale.toml`
	pub fn system() -> Self {
		Self::new("/etc/aqlhr/locale.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"locale-file"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<LocaleConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "no locale file, deferring to other sources");
			return Ok(LocaleConfigLayer::default());
		}

		debug!(path = %self.path.display(), "reading locale file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: LocaleConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!(?layer, "parsed locale file");
		Ok(layer)
	}
}

/// Settings from `AQLHR_LOCALE_<FIELD>` variables, e.g.
/// `AQLHR_LOCALE_DEFAULT_LANG=ar` or `AQLHR_LOCALE_COOKIE_MAX_AGE_DAYS=30`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<LocaleConfigLayer, ConfigError> {
		debug!(prefix = ENV_PREFIX, "reading locale environment");
		layer_from_lookup(|name| std::env::var(name).ok())
	}
}

fn env_key(field: &str) -> String {
	format!("{ENV_PREFIX}{}", field.to_ascii_uppercase())
}

/// Build a layer from an arbitrary variable lookup. Empty values count as unset.
pub fn layer_from_lookup<F>(lookup: F) -> Result<LocaleConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let var = |field: &str| lookup(&env_key(field)).filter(|s| !s.is_empty());

	let cookie_max_age_days = match var("cookie_max_age_days") {
		Some(v) => Some(v.parse::<u32>().map_err(|_| {
			ConfigError::invalid_value(
				env_key("cookie_max_age_days"),
				format!("invalid u32 value '{v}'"),
			)
		})?),
		None => None,
	};

	Ok(LocaleConfigLayer {
		default_lang: var("default_lang"),
		cookie_name: var("cookie_name"),
		cookie_path: var("cookie_path"),
		cookie_max_age_days,
		storage_key: var("storage_key"),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;
	use std::io::Write;

	fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |name: &str| map.get(name).cloned()
	}

	#[test]
	fn test_precedence_order() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
	}

	#[test]
	fn test_defaults_layer_finalizes_to_default_settings() {
		let layer = DefaultsSource.load().unwrap();
		assert_eq!(layer.default_lang.as_deref(), Some("en"));
		assert_eq!(layer.finalize().unwrap(), LocaleSettings::default());
	}

	#[test]
	fn test_toml_source_missing_file_is_empty() {
		let source = TomlSource::new("/nonexistent/aqlhr/locale.toml");
		assert_eq!(source.load().unwrap(), LocaleConfigLayer::default());
	}

	#[test]
	fn test_toml_source_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "default_lang = \"ar\"\ncookie_max_age_days = 30").unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		assert_eq!(layer.default_lang.as_deref(), Some("ar"));
		assert_eq!(layer.cookie_max_age_days, Some(30));
		assert!(layer.cookie_name.is_none());
	}

	#[test]
	fn test_toml_source_reports_parse_errors() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "default_lang = [").unwrap();

		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}

	#[test]
	fn test_env_layer_reads_variables() {
		let layer = layer_from_lookup(lookup(&[
			("AQLHR_LOCALE_DEFAULT_LANG", "ar"),
			("AQLHR_LOCALE_COOKIE_NAME", "hr.lang"),
			("AQLHR_LOCALE_COOKIE_MAX_AGE_DAYS", "90"),
			("AQLHR_LOCALE_STORAGE_KEY", ""),
		]))
		.unwrap();

		assert_eq!(layer.default_lang.as_deref(), Some("ar"));
		assert_eq!(layer.cookie_name.as_deref(), Some("hr.lang"));
		assert_eq!(layer.cookie_max_age_days, Some(90));
		assert!(layer.storage_key.is_none());
		assert!(layer.cookie_path.is_none());
	}

	#[test]
	fn test_env_layer_rejects_bad_number() {
		let err = layer_from_lookup(lookup(&[("AQLHR_LOCALE_COOKIE_MAX_AGE_DAYS", "year")]))
			.unwrap_err();
		assert!(
			matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "AQLHR_LOCALE_COOKIE_MAX_AGE_DAYS")
		);
	}
}
