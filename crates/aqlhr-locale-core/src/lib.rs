// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core locale types for AqlHR.
//!
//! This crate has no notion of a document or a store. It provides:
//!
//! - [`Lang`] and [`Direction`]: the two supported interface languages
//! - [`LocaleState`]: the `{lang, is_rtl, is_loading}` value object
//! - Signal detectors and the precedence chain ([`resolve`])
//! - Helpers for language-prefixed paths
//!
//! # Example
//!
//! ```
//! use aqlhr_locale_core::{resolve, DetectionSource, Lang, Signals};
//!
//! let signals = Signals {
//!     path: "/ar/dashboard".to_string(),
//!     cookie_header: "aqlhr.lang=en".to_string(),
//!     ..Default::default()
//! };
//! let detection = resolve(&signals, "aqlhr.lang", Lang::En);
//! assert_eq!(detection.lang, Lang::Ar);
//! assert_eq!(detection.source, DetectionSource::Url);
//! ```

mod detect;
mod lang;
mod path;
mod state;

pub use detect::{
	cookie_value, detect_from_browser, detect_from_cookie, detect_from_storage, detect_from_url,
	parse_accept_language, resolve, Detection, DetectionSource, Signals,
};
pub use lang::{Direction, Lang, LangParseError, DEFAULT_LANG};
pub use path::{localize_path, route_lang_token, strip_lang_prefix, switch_lang_path};
pub use state::LocaleState;
