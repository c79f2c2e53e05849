// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language-prefixed URL paths (`/ar/dashboard`, `/en/settings`).

use crate::detect::detect_from_url;
use crate::lang::Lang;

/// Raw leading path segment when it looks like a language token
/// (exactly two ASCII letters), whether or not it is supported.
///
/// This is what a router hands to `sync_with_route`.
pub fn route_lang_token(path: &str) -> Option<&str> {
	let rest = path.strip_prefix('/')?;
	let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
	let segment = &rest[..end];
	(segment.len() == 2 && segment.bytes().all(|b| b.is_ascii_alphabetic())).then_some(segment)
}

/// Remove a supported language segment from the front of `path`.
pub fn strip_lang_prefix(path: &str) -> String {
	let path = if path.starts_with('/') {
		path.to_string()
	} else {
		format!("/{path}")
	};

	if detect_from_url(&path).is_none() {
		return path;
	}

	// "/xx" is three bytes, all ASCII
	let rest = &path[3..];
	if rest.starts_with('/') {
		rest.to_string()
	} else {
		format!("/{rest}")
	}
}

/// Prefix `path` with `lang`, replacing any existing supported prefix.
/// Query strings and fragments are preserved.
pub fn localize_path(path: &str, lang: Lang) -> String {
	let stripped = strip_lang_prefix(path);
	let tail = &stripped[1..];
	if tail.is_empty() || tail.starts_with('?') || tail.starts_with('#') {
		format!("/{}{tail}", lang.code())
	} else {
		format!("/{}/{tail}", lang.code())
	}
}

/// The same page in the other language.
pub fn switch_lang_path(path: &str, current: Lang) -> String {
	localize_path(path, current.opposite())
}
