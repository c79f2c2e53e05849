// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server-side resolution: run the store against an in-memory document
//! seeded from request headers and report what the browser would end up with.

use std::collections::BTreeMap;
use std::sync::Arc;

use aqlhr_locale::{LocaleStore, MemoryEnvironment};
use aqlhr_locale_config::LocaleSettings;
use aqlhr_locale_core::{
	detect_from_url, localize_path, parse_accept_language, Direction, Lang,
};
use serde::Serialize;

/// Request-side inputs to a resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolveInput {
	pub path: String,
	pub cookie_header: Option<String>,
	pub accept_language: Option<String>,
	/// Appended after the `Accept-Language` preferences.
	pub system_locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
	pub lang: Lang,
	pub dir: Direction,
	pub classes: Vec<String>,
	pub set_cookie: Option<String>,
	pub storage: BTreeMap<String, String>,
	/// Where to redirect when the request path carries no language prefix.
	pub redirect: Option<String>,
}

pub fn resolve_request(settings: &LocaleSettings, input: &ResolveInput) -> ResolveReport {
	let mut browser = input
		.accept_language
		.as_deref()
		.map(parse_accept_language)
		.unwrap_or_default();
	browser.extend(input.system_locale.iter().cloned());

	let mut env = MemoryEnvironment::new()
		.with_path(input.path.clone())
		.with_browser_languages(browser);
	if let Some(header) = &input.cookie_header {
		env = env.with_cookie_header(header);
	}

	let store = LocaleStore::new(Arc::new(env.clone()), settings.clone());
	let state = store.initialize();

	let redirect = match detect_from_url(&input.path) {
		Some(_) => None,
		None => Some(localize_path(&input.path, state.lang())),
	};

	ResolveReport {
		lang: state.lang(),
		dir: state.direction(),
		classes: env.root_classes(),
		set_cookie: env.last_set_cookie().map(|c| c.to_set_cookie()),
		storage: env.snapshot().storage,
		redirect,
	}
}
