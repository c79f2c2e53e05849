// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use aqlhr_locale_core::{Direction, Lang};

/// Display metadata for a supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
	pub code: &'static str,
	/// English name.
	pub name: &'static str,
	/// Name in the locale itself.
	pub native_name: &'static str,
	pub direction: Direction,
}

pub const DEFAULT_LOCALE: &str = "en";

pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
];

pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}

/// Look up a locale by code. Accepts the same spellings as [`Lang`]'s `FromStr`.
pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	let lang: Lang = code.parse().ok()?;
	LOCALES.iter().find(|l| l.code == lang.code())
}

pub fn is_rtl(code: &str) -> bool {
	locale_info(code).is_some_and(|l| l.direction.is_rtl())
}

pub fn is_supported(code: &str) -> bool {
	locale_info(code).is_some()
}
