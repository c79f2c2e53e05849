// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale state for the AqlHR interface.
//!
//! This crate provides:
//! - [`LocaleStore`]: the `{lang, is_rtl, is_loading}` state machine with
//!   edge-triggered listeners
//! - [`DocumentSynchronizer`]: mirrors the state onto the document, the
//!   language cookie and local storage
//! - [`LocaleEnvironment`]: the adapter over ambient browser state, with an
//!   in-memory implementation
//! - [`LocaleProvider`] and the `use_*` accessors for component trees
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use aqlhr_locale::{LocaleStore, MemoryEnvironment};
//! use aqlhr_locale_core::Lang;
//!
//! let env = MemoryEnvironment::new().with_path("/ar/dashboard");
//! let store = LocaleStore::with_defaults(Arc::new(env.clone()));
//!
//! let state = store.initialize();
//! assert_eq!(state.lang(), Lang::Ar);
//! assert_eq!(env.document_attribute("dir").as_deref(), Some("rtl"));
//!
//! store.toggle_lang();
//! assert_eq!(env.cookie_value("aqlhr.lang").as_deref(), Some("en"));
//! ```

mod binding;
mod environment;
mod error;
mod store;
mod subscription;
mod sync;

pub use binding::{
	use_language, use_locale, use_simple_language, use_unified_locale, LocaleHandle,
	LocaleProvider, RouteSync, SimpleLanguage,
};
pub use environment::{DocumentSnapshot, LocaleEnvironment, MemoryEnvironment, PersistedCookie};
pub use error::BindingError;
pub use store::{LangChange, LocaleStore};
pub use subscription::{Listener, ListenerId, Subscription};
pub use sync::{lang_class, DocumentSynchronizer};
