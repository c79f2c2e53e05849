// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The locale state store.
//!
//! One store per application, constructed explicitly with the environment it
//! reads from and writes to. State only moves through [`LocaleStore::initialize`],
//! [`LocaleStore::set_lang`], [`LocaleStore::toggle_lang`] and
//! [`LocaleStore::sync_with_route`]. Every accepted change is mirrored onto the
//! document before listeners hear about it.

use std::sync::Arc;

use aqlhr_locale_config::LocaleSettings;
use aqlhr_locale_core::{resolve, Lang, LocaleState, Signals};
use parking_lot::{Mutex, ReentrantMutex};
use tracing::{debug, info, warn};

use crate::environment::LocaleEnvironment;
use crate::subscription::{deliver, Listener, ListenerRegistry, Subscription};
use crate::sync::DocumentSynchronizer;

/// Outcome of a language mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LangChange {
	/// The language changed; listeners were notified with this state.
	Applied(LocaleState),
	/// The requested language was already active.
	Unchanged,
	/// The code is not a supported language. Nothing happened.
	Rejected(String),
}

impl LangChange {
	pub fn is_applied(&self) -> bool {
		matches!(self, LangChange::Applied(_))
	}

	pub fn state(&self) -> Option<LocaleState> {
		match self {
			LangChange::Applied(state) => Some(*state),
			_ => None,
		}
	}
}

struct StoreState {
	current: LocaleState,
	initialized: bool,
	/// Bumped on every accepted transition.
	generation: u64,
}

struct StoreInner {
	env: Arc<dyn LocaleEnvironment>,
	settings: LocaleSettings,
	sync: DocumentSynchronizer,
	/// Serializes transitions in call order. Reentrant so listeners may
	/// mutate the store from inside a notification.
	mutation: ReentrantMutex<()>,
	state: Mutex<StoreState>,
	listeners: Arc<ListenerRegistry>,
}

#[derive(Clone)]
pub struct LocaleStore {
	inner: Arc<StoreInner>,
}

impl LocaleStore {
	pub fn new(env: Arc<dyn LocaleEnvironment>, settings: LocaleSettings) -> Self {
		let sync = DocumentSynchronizer::new(&settings);
		Self {
			inner: Arc::new(StoreInner {
				env,
				settings,
				sync,
				mutation: ReentrantMutex::new(()),
				state: Mutex::new(StoreState {
					current: LocaleState::loading(),
					initialized: false,
					generation: 0,
				}),
				listeners: Arc::new(ListenerRegistry::default()),
			}),
		}
	}

	/// Store with default settings.
	pub fn with_defaults(env: Arc<dyn LocaleEnvironment>) -> Self {
		Self::new(env, LocaleSettings::default())
	}

	pub fn settings(&self) -> &LocaleSettings {
		&self.inner.settings
	}

	pub fn is_initialized(&self) -> bool {
		self.inner.state.lock().initialized
	}

	/// Resolve the starting language and leave the loading state.
	///
	/// Consults the URL, then the persisted cookie and storage entry, then the
	/// browser preferences, then the configured default. Only the first call
	/// does anything; later calls return the current state.
	pub fn initialize(&self) -> LocaleState {
		let _serial = self.inner.mutation.lock();

		let (state, generation) = {
			let mut guard = self.inner.state.lock();
			if guard.initialized {
				return guard.current;
			}

			let settings = &self.inner.settings;
			let detection = resolve(&self.signals(), &settings.cookie_name, settings.default_lang);
			let state = LocaleState::ready(detection.lang);
			guard.current = state;
			guard.initialized = true;
			guard.generation += 1;
			self.inner.sync.apply(self.inner.env.as_ref(), &state);

			info!(
				lang = %detection.lang,
				source = detection.source.as_str(),
				"Locale initialized"
			);
			(state, guard.generation)
		};

		self.notify(&state, generation);
		state
	}

	fn signals(&self) -> Signals {
		let env = &self.inner.env;
		Signals {
			path: env.pathname(),
			cookie_header: env.cookie_header(),
			stored: env.storage_get(&self.inner.settings.storage_key),
			browser_languages: env.browser_languages(),
		}
	}

	/// Snapshot of the current state.
	pub fn get_state(&self) -> LocaleState {
		self.inner.state.lock().current
	}

	/// Switch to the language named by `code`. Unsupported codes are ignored.
	pub fn set_lang(&self, code: &str) -> LangChange {
		match code.parse::<Lang>() {
			Ok(lang) => self.set(lang),
			Err(e) => {
				warn!(code, error = %e, "Ignoring unsupported language");
				LangChange::Rejected(code.to_string())
			}
		}
	}

	/// Switch to `lang`. No-op if it is already active.
	pub fn set(&self, lang: Lang) -> LangChange {
		let _serial = self.inner.mutation.lock();
		self.initialize();

		let (state, generation) = {
			let mut guard = self.inner.state.lock();
			let previous = guard.current.lang();
			if previous == lang {
				return LangChange::Unchanged;
			}

			let state = LocaleState::ready(lang);
			guard.current = state;
			guard.generation += 1;
			self.inner.sync.apply(self.inner.env.as_ref(), &state);
			debug!(from = %previous, to = %lang, "Locale changed");
			(state, guard.generation)
		};

		self.notify(&state, generation);
		LangChange::Applied(state)
	}

	/// Fan `state` out to listeners until a transition made by one of them
	/// replaces it. The newer transition notifies everyone itself.
	fn notify(&self, state: &LocaleState, generation: u64) {
		self.inner
			.listeners
			.notify(state, || self.inner.state.lock().generation == generation);
	}

	pub fn toggle_lang(&self) -> LangChange {
		let _serial = self.inner.mutation.lock();
		let current = self.initialize().lang();
		self.set(current.opposite())
	}

	/// Follow the language token of the active route.
	pub fn sync_with_route(&self, token: &str) -> LangChange {
		match token.parse::<Lang>() {
			Ok(lang) => self.set(lang),
			Err(_) => {
				debug!(token, "Route token is not a supported language");
				LangChange::Rejected(token.to_string())
			}
		}
	}

	/// Register `listener`. It is called immediately with the current state
	/// and again after every change.
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&LocaleState) + Send + Sync + 'static,
	{
		let _serial = self.inner.mutation.lock();
		let listener: Listener = Arc::new(listener);
		let id = self.inner.listeners.insert(Arc::clone(&listener));
		deliver(id, &listener, &self.get_state());
		Subscription::new(id, &self.inner.listeners)
	}

	pub fn listener_count(&self) -> usize {
		self.inner.listeners.len()
	}
}

impl std::fmt::Debug for LocaleStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LocaleStore")
			.field("state", &self.get_state())
			.field("listeners", &self.listener_count())
			.finish()
	}
}
