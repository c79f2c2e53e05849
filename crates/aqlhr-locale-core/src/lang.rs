// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported interface languages and their text direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An interface language supported by AqlHR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
	#[default]
	En,
	Ar,
}

/// The language used when no signal yields a definite answer.
pub const DEFAULT_LANG: Lang = Lang::En;

impl Lang {
	/// All supported languages, default first.
	pub const ALL: [Lang; 2] = [Lang::En, Lang::Ar];

	/// The two-letter code stored in cookies, storage and URL segments.
	pub fn code(self) -> &'static str {
		match self {
			Lang::En => "en",
			Lang::Ar => "ar",
		}
	}

	pub fn direction(self) -> Direction {
		match self {
			Lang::En => Direction::Ltr,
			Lang::Ar => Direction::Rtl,
		}
	}

	pub fn is_rtl(self) -> bool {
		self.direction().is_rtl()
	}

	/// The other supported language.
	pub fn opposite(self) -> Lang {
		match self {
			Lang::En => Lang::Ar,
			Lang::Ar => Lang::En,
		}
	}

	/// Parse an exact lowercase two-letter code, as found in URL segments.
	pub fn from_code(code: &str) -> Option<Lang> {
		match code {
			"en" => Some(Lang::En),
			"ar" => Some(Lang::Ar),
			_ => None,
		}
	}

	/// Match a BCP 47-ish tag (`ar-SA`, `EN_us`, `ar`) by its primary subtag.
	pub fn from_tag_prefix(tag: &str) -> Option<Lang> {
		let primary = tag.trim().split(['-', '_']).next()?;
		if primary.eq_ignore_ascii_case("ar") {
			Some(Lang::Ar)
		} else if primary.eq_ignore_ascii_case("en") {
			Some(Lang::En)
		} else {
			None
		}
	}
}

impl fmt::Display for Lang {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

/// Error returned when a string is not one of the supported language codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code '{0}'")]
pub struct LangParseError(pub String);

impl FromStr for Lang {
	type Err = LangParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if trimmed.eq_ignore_ascii_case("en") {
			Ok(Lang::En)
		} else if trimmed.eq_ignore_ascii_case("ar") {
			Ok(Lang::Ar)
		} else {
			Err(LangParseError(s.to_string()))
		}
	}
}

/// Text direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	#[default]
	Ltr,
	Rtl,
}

impl Direction {
	/// Value of the document `dir` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}

	pub fn is_rtl(self) -> bool {
		matches!(self, Direction::Rtl)
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
