// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation catalog.
//!
//! Catalogs are TOML documents whose tables act as namespaces, so
//! `[common] save = "Save"` is addressed as `common.save`. Lookups fall back
//! from the requested language to English, then to the key itself.

use std::collections::{BTreeSet, HashMap};

use aqlhr_locale_core::Lang;
use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{error, warn};

const EN_CATALOG: &str = include_str!("../catalogs/en.toml");
const AR_CATALOG: &str = include_str!("../catalogs/ar.toml");

static BUNDLED: Lazy<Catalog> = Lazy::new(|| {
	Catalog::from_sources(&[(Lang::En, EN_CATALOG), (Lang::Ar, AR_CATALOG)]).unwrap_or_else(|e| {
		error!(error = %e, "bundled translation catalog is invalid");
		Catalog::default()
	})
});

#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to parse {lang} catalog: {source}")]
	Parse {
		lang: Lang,
		#[source]
		source: toml::de::Error,
	},

	#[error("{lang} catalog entry '{key}' is not a string or table")]
	NotAString { lang: Lang, key: String },
}

/// Flattened messages per language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	messages: HashMap<Lang, HashMap<String, String>>,
}

impl Catalog {
	/// The catalog compiled into this crate.
	pub fn bundled() -> &'static Catalog {
		&BUNDLED
	}

	/// Build a catalog from TOML sources, one per language.
	pub fn from_sources(sources: &[(Lang, &str)]) -> Result<Self, CatalogError> {
		let mut messages = HashMap::new();
		for (lang, source) in sources {
			let table: toml::Table = toml::from_str(source).map_err(|e| CatalogError::Parse {
				lang: *lang,
				source: e,
			})?;
			let mut flat = HashMap::new();
			flatten(*lang, "", table, &mut flat)?;
			messages.insert(*lang, flat);
		}
		Ok(Self { messages })
	}

	/// Exact lookup without fallback.
	pub fn get(&self, lang: Lang, key: &str) -> Option<&str> {
		self.messages.get(&lang)?.get(key).map(String::as_str)
	}

	/// Lookup with fallback to English, then to the key itself.
	pub fn translate(&self, lang: Lang, key: &str) -> String {
		self.translate_or(lang, key, key)
	}

	/// Lookup with fallback to English, then to `fallback`.
	pub fn translate_or(&self, lang: Lang, key: &str, fallback: &str) -> String {
		match self.get(lang, key).or_else(|| self.get(Lang::En, key)) {
			Some(message) => message.to_string(),
			None => {
				warn!(%lang, key, "translation missing");
				fallback.to_string()
			}
		}
	}

	/// [`Catalog::translate`] with `{name}` placeholder substitution.
	pub fn translate_fmt(&self, lang: Lang, key: &str, vars: &[(&str, &str)]) -> String {
		interpolate(self.translate(lang, key), vars)
	}

	/// Whether `key` exists in the English catalog.
	pub fn has_key(&self, key: &str) -> bool {
		self.get(Lang::En, key).is_some()
	}

	/// Keys present in English but absent in `lang`, sorted.
	pub fn missing_keys(&self, lang: Lang) -> Vec<String> {
		let Some(english) = self.messages.get(&Lang::En) else {
			return Vec::new();
		};
		let target = self.messages.get(&lang);
		english
			.keys()
			.filter(|key| target.map_or(true, |t| !t.contains_key(*key)))
			.cloned()
			.collect::<BTreeSet<_>>()
			.into_iter()
			.collect()
	}

	pub fn len(&self, lang: Lang) -> usize {
		self.messages.get(&lang).map_or(0, HashMap::len)
	}
}

fn flatten(
	lang: Lang,
	prefix: &str,
	table: toml::Table,
	out: &mut HashMap<String, String>,
) -> Result<(), CatalogError> {
	for (name, value) in table {
		let key = if prefix.is_empty() {
			name
		} else {
			format!("{prefix}.{name}")
		};
		match value {
			toml::Value::String(message) => {
				out.insert(key, message);
			}
			toml::Value::Table(nested) => flatten(lang, &key, nested, out)?,
			_ => return Err(CatalogError::NotAString { lang, key }),
		}
	}
	Ok(())
}

fn interpolate(mut message: String, vars: &[(&str, &str)]) -> String {
	for (name, value) in vars {
		message = message.replace(&format!("{{{name}}}"), value);
	}
	message
}

/// Translate `key` into `lang` using the bundled catalog.
pub fn t(lang: Lang, key: &str) -> String {
	Catalog::bundled().translate(lang, key)
}

/// Translate with `{name}` placeholders replaced by `vars`.
pub fn t_fmt(lang: Lang, key: &str, vars: &[(&str, &str)]) -> String {
	Catalog::bundled().translate_fmt(lang, key, vars)
}

/// Translate `key` within `namespace` (`t_ns(lang, "nav", "home")`).
pub fn t_ns(lang: Lang, namespace: &str, key: &str) -> String {
	t(lang, &format!("{namespace}.{key}"))
}
