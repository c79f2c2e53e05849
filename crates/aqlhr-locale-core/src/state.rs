// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Serialize;

use crate::lang::{Direction, Lang, DEFAULT_LANG};

/// Snapshot of the active interface locale.
///
/// `is_rtl` is derived from `lang` at construction and the fields are private,
/// so a state with a mismatched direction cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LocaleState {
	lang: Lang,
	is_rtl: bool,
	is_loading: bool,
}

impl LocaleState {
	/// State before the first detection has run.
	pub fn loading() -> Self {
		Self {
			lang: DEFAULT_LANG,
			is_rtl: DEFAULT_LANG.is_rtl(),
			is_loading: true,
		}
	}

	/// Settled state for `lang`.
	pub fn ready(lang: Lang) -> Self {
		Self {
			lang,
			is_rtl: lang.is_rtl(),
			is_loading: false,
		}
	}

	pub fn lang(&self) -> Lang {
		self.lang
	}

	pub fn is_rtl(&self) -> bool {
		self.is_rtl
	}

	pub fn is_loading(&self) -> bool {
		self.is_loading
	}

	pub fn direction(&self) -> Direction {
		self.lang.direction()
	}
}

impl Default for LocaleState {
	fn default() -> Self {
		Self::loading()
	}
}
