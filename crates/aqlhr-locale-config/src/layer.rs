// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use std::str::FromStr;

use aqlhr_locale_core::Lang;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::settings::{
	LocaleSettings, DEFAULT_COOKIE_MAX_AGE_DAYS, DEFAULT_COOKIE_NAME, DEFAULT_COOKIE_PATH,
	DEFAULT_STORAGE_KEY,
};

/// One layer of locale configuration. Unset fields defer to lower layers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocaleConfigLayer {
	pub default_lang: Option<String>,
	pub cookie_name: Option<String>,
	pub cookie_path: Option<String>,
	pub cookie_max_age_days: Option<u32>,
	pub storage_key: Option<String>,
}

impl LocaleConfigLayer {
	/// Overlay `other` on top of `self`; set fields in `other` win.
	pub fn merge(&mut self, other: Self) {
		if other.default_lang.is_some() {
			self.default_lang = other.default_lang;
		}
		if other.cookie_name.is_some() {
			self.cookie_name = other.cookie_name;
		}
		if other.cookie_path.is_some() {
			self.cookie_path = other.cookie_path;
		}
		if other.cookie_max_age_days.is_some() {
			self.cookie_max_age_days = other.cookie_max_age_days;
		}
		if other.storage_key.is_some() {
			self.storage_key = other.storage_key;
		}
	}

	/// Fill defaults and validate.
	pub fn finalize(self) -> Result<LocaleSettings, ConfigError> {
		let default_lang = match self.default_lang {
			Some(code) => Lang::from_str(&code)
				.map_err(|e| ConfigError::invalid_value("default_lang", e.to_string()))?,
			None => Lang::default(),
		};

		let cookie_name = self
			.cookie_name
			.unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string());
		if cookie_name.trim().is_empty() || cookie_name.contains([';', '=', ' ']) {
			return Err(ConfigError::invalid_value(
				"cookie_name",
				format!("'{cookie_name}' is not a valid cookie name"),
			));
		}

		let cookie_path = self
			.cookie_path
			.unwrap_or_else(|| DEFAULT_COOKIE_PATH.to_string());
		if !cookie_path.starts_with('/') {
			return Err(ConfigError::invalid_value(
				"cookie_path",
				format!("'{cookie_path}' must start with '/'"),
			));
		}

		let cookie_max_age_days = self
			.cookie_max_age_days
			.unwrap_or(DEFAULT_COOKIE_MAX_AGE_DAYS);
		if cookie_max_age_days == 0 {
			return Err(ConfigError::invalid_value(
				"cookie_max_age_days",
				"must be at least 1",
			));
		}

		let storage_key = self
			.storage_key
			.unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
		if storage_key.trim().is_empty() {
			return Err(ConfigError::invalid_value("storage_key", "must not be empty"));
		}

		Ok(LocaleSettings {
			default_lang,
			cookie_name,
			cookie_path,
			cookie_max_age_days,
			storage_key,
		})
	}
}
