// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use aqlhr_locale_core::Lang;
use serde::Serialize;

pub const DEFAULT_COOKIE_NAME: &str = "aqlhr.lang";
pub const DEFAULT_COOKIE_PATH: &str = "/";
pub const DEFAULT_COOKIE_MAX_AGE_DAYS: u32 = 365;
pub const DEFAULT_STORAGE_KEY: &str = "aqlhr.locale";

/// Fully resolved locale configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSettings {
	/// Language used when no signal is present.
	pub default_lang: Lang,
	pub cookie_name: String,
	pub cookie_path: String,
	/// Forward expiry applied every time the cookie is written.
	pub cookie_max_age_days: u32,
	/// Local key-value store key mirroring the language.
	pub storage_key: String,
}

impl Default for LocaleSettings {
	fn default() -> Self {
		Self {
			default_lang: Lang::default(),
			cookie_name: DEFAULT_COOKIE_NAME.to_string(),
			cookie_path: DEFAULT_COOKIE_PATH.to_string(),
			cookie_max_age_days: DEFAULT_COOKIE_MAX_AGE_DAYS,
			storage_key: DEFAULT_STORAGE_KEY.to_string(),
		}
	}
}
