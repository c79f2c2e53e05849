// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Signal detectors and the precedence chain.
//!
//! Each detector reads one ambient signal and returns `Some(lang)` when it has
//! an opinion and `None` otherwise. Detectors never fail: malformed input is
//! simply "no opinion", and the chain falls through to the next source.
//!
//! Resolution order (highest to lowest priority):
//! 1. Leading language segment of the URL path (`/ar/...`)
//! 2. Persisted signal: the locale cookie, then the local storage entry
//! 3. Browser language preferences
//! 4. The configured default language

use serde::Serialize;
use tracing::trace;

use crate::lang::Lang;

/// Which signal decided the language during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionSource {
	Url,
	Cookie,
	Storage,
	Browser,
	Default,
}

impl DetectionSource {
	pub fn as_str(self) -> &'static str {
		match self {
			DetectionSource::Url => "url",
			DetectionSource::Cookie => "cookie",
			DetectionSource::Storage => "storage",
			DetectionSource::Browser => "browser",
			DetectionSource::Default => "default",
		}
	}
}

/// Outcome of running the precedence chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
	pub lang: Lang,
	pub source: DetectionSource,
}

/// Raw ambient signals read once at initialization.
#[derive(Debug, Clone, Default)]
pub struct Signals {
	/// Current URL path, e.g. `/ar/dashboard`.
	pub path: String,
	/// Raw `Cookie` header / `document.cookie` string.
	pub cookie_header: String,
	/// Value of the local storage locale entry, if any.
	pub stored: Option<String>,
	/// Browser language tags in preference order.
	pub browser_languages: Vec<String>,
}

/// Language of the leading path segment, if it is exactly `en` or `ar`.
pub fn detect_from_url(path: &str) -> Option<Lang> {
	let rest = path.strip_prefix('/')?;
	let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
	Lang::from_code(&rest[..end])
}

/// Value of cookie `name` in a `name=value; other=value` header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
	header.split(';').find_map(|pair| {
		let (key, value) = pair.split_once('=')?;
		(key.trim() == name).then(|| value.trim())
	})
}

/// Language stored in cookie `name`.
pub fn detect_from_cookie(header: &str, name: &str) -> Option<Lang> {
	cookie_value(header, name).and_then(Lang::from_code)
}

/// Language stored in the local key-value entry.
pub fn detect_from_storage(stored: Option<&str>) -> Option<Lang> {
	stored.and_then(|value| Lang::from_code(value.trim()))
}

/// First browser tag whose primary subtag is a supported language.
pub fn detect_from_browser<S: AsRef<str>>(preferences: &[S]) -> Option<Lang> {
	preferences
		.iter()
		.find_map(|tag| Lang::from_tag_prefix(tag.as_ref()))
}

/// Parse an `Accept-Language` header into tags ordered by descending quality.
///
/// Ties keep header order. Entries with `q=0` or an unparseable quality are
/// dropped, as are empty tags and the `*` wildcard.
pub fn parse_accept_language(header: &str) -> Vec<String> {
	let mut weighted: Vec<(String, f32)> = header
		.split(',')
		.filter_map(|entry| {
			let mut parts = entry.split(';');
			let tag = parts.next()?.trim();
			if tag.is_empty() || tag == "*" {
				return None;
			}
			let mut quality = 1.0_f32;
			for param in parts {
				if let Some(q) = param.trim().strip_prefix("q=") {
					quality = q.trim().parse().ok()?;
				}
			}
			(quality > 0.0 && quality <= 1.0).then(|| (tag.to_string(), quality))
		})
		.collect();

	// stable sort keeps header order for equal weights
	weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
	weighted.into_iter().map(|(tag, _)| tag).collect()
}

/// Run the precedence chain over `signals`.
pub fn resolve(signals: &Signals, cookie_name: &str, default: Lang) -> Detection {
	let chain: [(DetectionSource, Option<Lang>); 4] = [
		(DetectionSource::Url, detect_from_url(&signals.path)),
		(
			DetectionSource::Cookie,
			detect_from_cookie(&signals.cookie_header, cookie_name),
		),
		(
			DetectionSource::Storage,
			detect_from_storage(signals.stored.as_deref()),
		),
		(
			DetectionSource::Browser,
			detect_from_browser(&signals.browser_languages),
		),
	];

	for (source, detected) in chain {
		trace!(source = source.as_str(), ?detected, "consulted locale signal");
		if let Some(lang) = detected {
			return Detection { lang, source };
		}
	}

	Detection {
		lang: default,
		source: DetectionSource::Default,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn signals(path: &str, cookie: &str, stored: Option<&str>, browser: &[&str]) -> Signals {
		Signals {
			path: path.to_string(),
			cookie_header: cookie.to_string(),
			stored: stored.map(str::to_string),
			browser_languages: browser.iter().map(|s| s.to_string()).collect(),
		}
	}

	#[test]
	fn test_detect_from_url() {
		assert_eq!(detect_from_url("/ar/dashboard"), Some(Lang::Ar));
		assert_eq!(detect_from_url("/en"), Some(Lang::En));
		assert_eq!(detect_from_url("/ar?tab=1"), Some(Lang::Ar));
		assert_eq!(detect_from_url("/en#top"), Some(Lang::En));
		assert_eq!(detect_from_url("/dashboard"), None);
		assert_eq!(detect_from_url("/arabic/x"), None);
		assert_eq!(detect_from_url("/fr/x"), None);
		assert_eq!(detect_from_url("/AR/x"), None);
		assert_eq!(detect_from_url("ar/x"), None);
		assert_eq!(detect_from_url(""), None);
		assert_eq!(detect_from_url("/"), None);
	}

	#[test]
	fn test_cookie_value() {
		let header = "theme=dark; aqlhr.lang=ar; session=abc=def";
		assert_eq!(cookie_value(header, "aqlhr.lang"), Some("ar"));
		assert_eq!(cookie_value(header, "session"), Some("abc=def"));
		assert_eq!(cookie_value(header, "missing"), None);
		assert_eq!(cookie_value("", "aqlhr.lang"), None);
		assert_eq!(cookie_value("garbage", "aqlhr.lang"), None);
	}

	#[test]
	fn test_detect_from_cookie_rejects_invalid_values() {
		assert_eq!(detect_from_cookie("aqlhr.lang=en", "aqlhr.lang"), Some(Lang::En));
		assert_eq!(detect_from_cookie("aqlhr.lang=fr", "aqlhr.lang"), None);
		assert_eq!(detect_from_cookie("aqlhr.lang=", "aqlhr.lang"), None);
		assert_eq!(detect_from_cookie("other.lang=ar", "aqlhr.lang"), None);
	}

	#[test]
	fn test_detect_from_storage() {
		assert_eq!(detect_from_storage(Some("ar")), Some(Lang::Ar));
		assert_eq!(detect_from_storage(Some("arabic")), None);
		assert_eq!(detect_from_storage(None), None);
	}

	#[test]
	fn test_detect_from_browser_first_match_wins() {
		assert_eq!(detect_from_browser(&["fr-FR", "ar-SA", "en-US"]), Some(Lang::Ar));
		assert_eq!(detect_from_browser(&["EN-gb", "ar"]), Some(Lang::En));
		assert_eq!(detect_from_browser(&["de", "fr"]), None);
		assert_eq!(detect_from_browser::<&str>(&[]), None);
	}

	#[test]
	fn test_parse_accept_language_orders_by_quality() {
		let tags = parse_accept_language("fr;q=0.5, ar-SA, en;q=0.8, de;q=0");
		assert_eq!(tags, vec!["ar-SA", "en", "fr"]);
	}

	#[test]
	fn test_parse_accept_language_skips_malformed() {
		let tags = parse_accept_language("en;q=abc, *, , ar;q=2, ar-EG");
		assert_eq!(tags, vec!["ar-EG"]);
		assert!(parse_accept_language("").is_empty());
	}

	#[test]
	fn test_parse_accept_language_keeps_ties_in_order() {
		let tags = parse_accept_language("en-GB;q=0.7, ar;q=0.7, en-US");
		assert_eq!(tags, vec!["en-US", "en-GB", "ar"]);
	}

	#[test]
	fn test_url_wins_over_cookie_and_browser() {
		let detection = resolve(
			&signals("/ar/home", "aqlhr.lang=en", Some("en"), &["en-US"]),
			"aqlhr.lang",
			Lang::En,
		);
		assert_eq!(detection.lang, Lang::Ar);
		assert_eq!(detection.source, DetectionSource::Url);
	}

	#[test]
	fn test_cookie_wins_over_browser() {
		let detection = resolve(
			&signals("/home", "aqlhr.lang=ar", None, &["en-US"]),
			"aqlhr.lang",
			Lang::En,
		);
		assert_eq!(detection.lang, Lang::Ar);
		assert_eq!(detection.source, DetectionSource::Cookie);
	}

	#[test]
	fn test_storage_used_when_cookie_missing() {
		let detection = resolve(
			&signals("/home", "", Some("ar"), &["en-US"]),
			"aqlhr.lang",
			Lang::En,
		);
		assert_eq!(detection.lang, Lang::Ar);
		assert_eq!(detection.source, DetectionSource::Storage);
	}

	#[test]
	fn test_browser_used_when_nothing_persisted() {
		let detection = resolve(&signals("/", "", None, &["ar-SA"]), "aqlhr.lang", Lang::En);
		assert_eq!(detection.source, DetectionSource::Browser);
		assert_eq!(detection.lang, Lang::Ar);
	}

	#[test]
	fn test_default_when_no_signal() {
		let detection = resolve(&Signals::default(), "aqlhr.lang", Lang::En);
		assert_eq!(detection.lang, Lang::En);
		assert_eq!(detection.source, DetectionSource::Default);

		let detection = resolve(&Signals::default(), "aqlhr.lang", Lang::Ar);
		assert_eq!(detection.lang, Lang::Ar);
	}

	proptest! {
		/// Detectors must never panic, whatever the ambient input looks like.
		#[test]
		fn detectors_are_total(input in ".*") {
			let _ = detect_from_url(&input);
			let _ = detect_from_cookie(&input, "aqlhr.lang");
			let _ = detect_from_storage(Some(&input));
			let _ = detect_from_browser(&[input.as_str()]);
			let _ = parse_accept_language(&input);
		}

		/// Anything after a supported language segment does not change the answer.
		#[test]
		fn url_segment_is_prefix_stable(rest in "(/[a-z0-9-]{0,12}){0,4}") {
			let path = format!("/ar{rest}");
			prop_assert_eq!(detect_from_url(&path), Some(Lang::Ar));
		}
	}
}
