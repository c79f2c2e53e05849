// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Adapter over the ambient document, cookie jar and local storage.
//!
//! The store never touches a browser directly. Everything it reads during
//! initialization and everything the synchronizer writes goes through
//! [`LocaleEnvironment`]. [`MemoryEnvironment`] is the in-process
//! implementation used by tests and by server-side resolution.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

/// A cookie as written by the document synchronizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistedCookie {
	pub name: String,
	pub value: String,
	pub path: String,
	pub expires: DateTime<Utc>,
}

impl PersistedCookie {
	/// Render as a `Set-Cookie` header value.
	pub fn to_set_cookie(&self) -> String {
		format!(
			"{}={}; Path={}; Expires={}",
			self.name,
			self.value,
			self.path,
			self.expires.format("%a, %d %b %Y %H:%M:%S GMT")
		)
	}
}

pub trait LocaleEnvironment: Send + Sync {
	/// Current location path, e.g. `/ar/dashboard`.
	fn pathname(&self) -> String;

	/// Raw `Cookie` header (`a=1; b=2`).
	fn cookie_header(&self) -> String;

	/// Browser language preferences, most preferred first.
	fn browser_languages(&self) -> Vec<String>;

	fn storage_get(&self, key: &str) -> Option<String>;

	fn storage_set(&self, key: &str, value: &str);

	fn set_cookie(&self, cookie: &PersistedCookie);

	/// Set an attribute on the document root element.
	fn set_document_attribute(&self, name: &str, value: &str);

	/// Add or remove a class on the document root element.
	fn set_root_class(&self, class: &str, present: bool);

	fn now(&self) -> DateTime<Utc> {
		Utc::now()
	}
}

#[derive(Debug, Default)]
struct MemoryState {
	path: String,
	cookies: BTreeMap<String, String>,
	browser_languages: Vec<String>,
	storage: BTreeMap<String, String>,
	attributes: BTreeMap<String, String>,
	classes: BTreeSet<String>,
	last_set_cookie: Option<PersistedCookie>,
	now: Option<DateTime<Utc>>,
}

/// Observable state of a [`MemoryEnvironment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSnapshot {
	pub attributes: BTreeMap<String, String>,
	pub classes: Vec<String>,
	pub cookies: BTreeMap<String, String>,
	pub storage: BTreeMap<String, String>,
}

/// In-memory environment. Clones share the same underlying document.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnvironment {
	inner: Arc<Mutex<MemoryState>>,
}

impl MemoryEnvironment {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_path(self, path: impl Into<String>) -> Self {
		self.inner.lock().path = path.into();
		self
	}

	pub fn with_cookie(self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.inner.lock().cookies.insert(name.into(), value.into());
		self
	}

	/// Seed cookies from a raw `Cookie` header. Malformed pairs are skipped.
	pub fn with_cookie_header(self, header: &str) -> Self {
		{
			let mut state = self.inner.lock();
			for pair in header.split(';') {
				if let Some((name, value)) = pair.split_once('=') {
					let name = name.trim();
					if !name.is_empty() {
						state
							.cookies
							.insert(name.to_string(), value.trim().to_string());
					}
				}
			}
		}
		self
	}

	pub fn with_browser_languages<I, S>(self, languages: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.inner.lock().browser_languages = languages.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_storage(self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.inner.lock().storage.insert(key.into(), value.into());
		self
	}

	/// Pin the clock used for cookie expiry.
	pub fn with_now(self, now: DateTime<Utc>) -> Self {
		self.inner.lock().now = Some(now);
		self
	}

	pub fn set_path(&self, path: impl Into<String>) {
		self.inner.lock().path = path.into();
	}

	pub fn clear_storage(&self) {
		self.inner.lock().storage.clear();
	}

	pub fn document_attribute(&self, name: &str) -> Option<String> {
		self.inner.lock().attributes.get(name).cloned()
	}

	pub fn root_classes(&self) -> Vec<String> {
		self.inner.lock().classes.iter().cloned().collect()
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.inner.lock().classes.contains(class)
	}

	pub fn cookie_value(&self, name: &str) -> Option<String> {
		self.inner.lock().cookies.get(name).cloned()
	}

	pub fn last_set_cookie(&self) -> Option<PersistedCookie> {
		self.inner.lock().last_set_cookie.clone()
	}

	pub fn storage_value(&self, key: &str) -> Option<String> {
		self.inner.lock().storage.get(key).cloned()
	}

	pub fn snapshot(&self) -> DocumentSnapshot {
		let state = self.inner.lock();
		DocumentSnapshot {
			attributes: state.attributes.clone(),
			classes: state.classes.iter().cloned().collect(),
			cookies: state.cookies.clone(),
			storage: state.storage.clone(),
		}
	}
}

impl LocaleEnvironment for MemoryEnvironment {
	fn pathname(&self) -> String {
		self.inner.lock().path.clone()
	}

	fn cookie_header(&self) -> String {
		self.inner
			.lock()
			.cookies
			.iter()
			.map(|(name, value)| format!("{name}={value}"))
			.collect::<Vec<_>>()
			.join("; ")
	}

	fn browser_languages(&self) -> Vec<String> {
		self.inner.lock().browser_languages.clone()
	}

	fn storage_get(&self, key: &str) -> Option<String> {
		self.storage_value(key)
	}

	fn storage_set(&self, key: &str, value: &str) {
		self.inner
			.lock()
			.storage
			.insert(key.to_string(), value.to_string());
	}

	fn set_cookie(&self, cookie: &PersistedCookie) {
		let mut state = self.inner.lock();
		state
			.cookies
			.insert(cookie.name.clone(), cookie.value.clone());
		state.last_set_cookie = Some(cookie.clone());
	}

	fn set_document_attribute(&self, name: &str, value: &str) {
		self.inner
			.lock()
			.attributes
			.insert(name.to_string(), value.to_string());
	}

	fn set_root_class(&self, class: &str, present: bool) {
		let mut state = self.inner.lock();
		if present {
			state.classes.insert(class.to_string());
		} else {
			state.classes.remove(class);
		}
	}

	fn now(&self) -> DateTime<Utc> {
		self.inner.lock().now.unwrap_or_else(Utc::now)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn test_cookie_header_round_trips_through_builder() {
		let env = MemoryEnvironment::new().with_cookie_header("theme=dark; aqlhr.lang=ar;broken");
		assert_eq!(env.cookie_value("aqlhr.lang").as_deref(), Some("ar"));
		assert_eq!(env.cookie_value("theme").as_deref(), Some("dark"));
		assert_eq!(env.cookie_header(), "aqlhr.lang=ar; theme=dark");
	}

	#[test]
	fn test_clones_share_document() {
		let env = MemoryEnvironment::new();
		let other = env.clone();
		other.set_root_class("rtl", true);
		assert!(env.has_class("rtl"));
		other.set_root_class("rtl", false);
		assert!(env.root_classes().is_empty());
	}

	#[test]
	fn test_set_cookie_format() {
		let cookie = PersistedCookie {
			name: "aqlhr.lang".to_string(),
			value: "ar".to_string(),
			path: "/".to_string(),
			expires: Utc.with_ymd_and_hms(2027, 10, 19, 8, 30, 0).unwrap(),
		};
		assert_eq!(
			cookie.to_set_cookie(),
			"aqlhr.lang=ar; Path=/; Expires=Tue, 19 Oct 2027 08:30:00 GMT"
		);
	}

	#[test]
	fn test_pinned_clock() {
		let now = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
		let env = MemoryEnvironment::new().with_now(now);
		assert_eq!(env.now(), now);
	}
}
