// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered configuration for the AqlHR locale system.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Validation of the persisted-signal keys and the default language
//! - Consistent environment variable naming (`AQLHR_LOCALE_*`)
//!
//! # Usage
//!
//! ```ignore
//! use aqlhr_locale_config::load_config;
//!
//! let settings = load_config()?;
//! println!("cookie {} lives {} days", settings.cookie_name, settings.cookie_max_age_days);
//! ```

pub mod error;
pub mod layer;
pub mod settings;
pub mod sources;

pub use error::ConfigError;
pub use layer::LocaleConfigLayer;
pub use settings::{
	LocaleSettings, DEFAULT_COOKIE_MAX_AGE_DAYS, DEFAULT_COOKIE_NAME, DEFAULT_COOKIE_PATH,
	DEFAULT_STORAGE_KEY,
};
pub use sources::{
	layer_from_lookup, ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource,
	ENV_PREFIX,
};

use tracing::{debug, info};

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`AQLHR_LOCALE_*`)
/// 2. Config file (`/etc/aqlhr/locale.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<LocaleSettings, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<LocaleSettings, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge `sources` in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<LocaleSettings, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = LocaleConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	let settings = merged.finalize()?;
	info!(
		default_lang = %settings.default_lang,
		cookie = %settings.cookie_name,
		storage_key = %settings.storage_key,
		"Locale configuration loaded"
	);
	Ok(settings)
}
