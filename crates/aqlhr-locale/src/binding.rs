// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Binding between the store and a component tree.
//!
//! A [`LocaleProvider`] is mounted over a store. Code running inside
//! [`LocaleProvider::render`] can reach the provider's [`LocaleHandle`] through
//! [`use_locale`] and its aliases; outside a provider they fail with
//! [`BindingError::OutsideProvider`].

use std::cell::RefCell;
use std::sync::{Arc, Weak};

use aqlhr_common_i18n::Catalog;
use aqlhr_locale_core::{Direction, Lang, LocaleState};
use parking_lot::RwLock;
use tracing::debug;

use crate::error::BindingError;
use crate::store::{LangChange, LocaleStore};
use crate::subscription::Subscription;

thread_local! {
	static PROVIDERS: RefCell<Vec<LocaleHandle>> = RefCell::new(Vec::new());
}

struct ProviderShared {
	store: LocaleStore,
	state: RwLock<LocaleState>,
}

/// A mounted provider. Unmounting (dropping) removes its store listener.
pub struct LocaleProvider {
	handle: LocaleHandle,
	subscription: Subscription,
}

impl LocaleProvider {
	/// Initialize `store` and start tracking its state.
	pub fn mount(store: &LocaleStore) -> Self {
		let initial = store.initialize();
		let shared = Arc::new(ProviderShared {
			store: store.clone(),
			state: RwLock::new(initial),
		});

		let weak: Weak<ProviderShared> = Arc::downgrade(&shared);
		let subscription = store.subscribe(move |state| {
			if let Some(shared) = weak.upgrade() {
				*shared.state.write() = *state;
			}
		});

		debug!(lang = %initial.lang(), "Locale provider mounted");
		Self {
			handle: LocaleHandle { shared },
			subscription,
		}
	}

	pub fn handle(&self) -> LocaleHandle {
		self.handle.clone()
	}

	/// Run `f` as a descendant of this provider.
	pub fn render<R>(&self, f: impl FnOnce() -> R) -> R {
		PROVIDERS.with(|stack| stack.borrow_mut().push(self.handle.clone()));
		let _scope = ProviderScope;
		f()
	}
}

impl Drop for LocaleProvider {
	fn drop(&mut self) {
		self.subscription.unsubscribe();
		debug!("Locale provider unmounted");
	}
}

struct ProviderScope;

impl Drop for ProviderScope {
	fn drop(&mut self) {
		PROVIDERS.with(|stack| {
			stack.borrow_mut().pop();
		});
	}
}

/// Consumer view of the nearest provider.
#[derive(Clone)]
pub struct LocaleHandle {
	shared: Arc<ProviderShared>,
}

impl LocaleHandle {
	pub fn state(&self) -> LocaleState {
		*self.shared.state.read()
	}

	pub fn lang(&self) -> Lang {
		self.state().lang()
	}

	pub fn is_rtl(&self) -> bool {
		self.state().is_rtl()
	}

	pub fn is_loading(&self) -> bool {
		self.state().is_loading()
	}

	pub fn direction(&self) -> Direction {
		self.state().direction()
	}

	pub fn is_arabic(&self) -> bool {
		self.lang() == Lang::Ar
	}

	pub fn is_english(&self) -> bool {
		self.lang() == Lang::En
	}

	/// Translate `key` into the current language.
	pub fn t(&self, key: &str) -> String {
		aqlhr_common_i18n::t(self.lang(), key)
	}

	/// Like [`LocaleHandle::t`], but returns `fallback` for a key neither
	/// catalog knows.
	pub fn t_or(&self, key: &str, fallback: &str) -> String {
		Catalog::bundled().translate_or(self.lang(), key, fallback)
	}

	pub fn set_lang(&self, code: &str) -> LangChange {
		self.shared.store.set_lang(code)
	}

	pub fn set(&self, lang: Lang) -> LangChange {
		self.shared.store.set(lang)
	}

	pub fn toggle_lang(&self) -> LangChange {
		self.shared.store.toggle_lang()
	}

	pub fn store(&self) -> &LocaleStore {
		&self.shared.store
	}

	/// Whether both handles read the same provider state.
	pub fn ptr_eq(&self, other: &LocaleHandle) -> bool {
		Arc::ptr_eq(&self.shared, &other.shared)
	}

	pub fn route_sync(&self) -> RouteSync {
		RouteSync::new(self.shared.store.clone())
	}
}

impl std::fmt::Debug for LocaleHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LocaleHandle")
			.field("state", &self.state())
			.finish()
	}
}

fn current(accessor: &'static str) -> Result<LocaleHandle, BindingError> {
	PROVIDERS
		.with(|stack| stack.borrow().last().cloned())
		.ok_or(BindingError::OutsideProvider { accessor })
}

pub fn use_locale() -> Result<LocaleHandle, BindingError> {
	current("use_locale")
}

/// Alias of [`use_locale`].
pub fn use_unified_locale() -> Result<LocaleHandle, BindingError> {
	current("use_unified_locale")
}

/// Alias of [`use_locale`].
pub fn use_language() -> Result<LocaleHandle, BindingError> {
	current("use_language")
}

/// Reduced view kept for older call sites.
pub fn use_simple_language() -> Result<SimpleLanguage, BindingError> {
	current("use_simple_language").map(|handle| SimpleLanguage { handle })
}

#[derive(Debug, Clone)]
pub struct SimpleLanguage {
	handle: LocaleHandle,
}

impl SimpleLanguage {
	pub fn language(&self) -> Lang {
		self.handle.lang()
	}

	pub fn is_arabic(&self) -> bool {
		self.handle.is_arabic()
	}

	pub fn is_rtl(&self) -> bool {
		self.handle.is_rtl()
	}

	pub fn set_language(&self, code: &str) -> LangChange {
		self.handle.set_lang(code)
	}

	pub fn toggle_language(&self) -> LangChange {
		self.handle.toggle_lang()
	}

	pub fn handle(&self) -> &LocaleHandle {
		&self.handle
	}
}

/// Calls `sync_with_route` whenever the observed route token changes.
#[derive(Debug)]
pub struct RouteSync {
	store: LocaleStore,
	last: Option<String>,
}

impl RouteSync {
	pub fn new(store: LocaleStore) -> Self {
		Self { store, last: None }
	}

	/// Observe the current route token. Returns the store outcome when the
	/// token changed to a present value.
	pub fn update(&mut self, token: Option<&str>) -> Option<LangChange> {
		if self.last.as_deref() == token {
			return None;
		}
		self.last = token.map(str::to_string);
		token.map(|token| self.store.sync_with_route(token))
	}
}
