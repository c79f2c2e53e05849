// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Listener registry and subscription handles.

use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use aqlhr_locale_core::LocaleState;
use parking_lot::RwLock;
use tracing::{error, trace};

pub type Listener = Arc<dyn Fn(&LocaleState) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Default)]
pub(crate) struct ListenerRegistry {
	next_id: AtomicU64,
	listeners: RwLock<BTreeMap<ListenerId, Listener>>,
}

impl ListenerRegistry {
	pub(crate) fn insert(&self, listener: Listener) -> ListenerId {
		let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
		self.listeners.write().insert(id, listener);
		id
	}

	pub(crate) fn remove(&self, id: ListenerId) -> bool {
		self.listeners.write().remove(&id).is_some()
	}

	pub(crate) fn len(&self) -> usize {
		self.listeners.read().len()
	}

	/// Deliver `state` to every registered listener.
	///
	/// The registry lock is released before any listener runs, so listeners
	/// may subscribe, unsubscribe or mutate the store. A listener removed
	/// during the round is skipped. Once `is_current` reports false a newer
	/// transition has already notified everyone, and the round stops.
	pub(crate) fn notify(&self, state: &LocaleState, is_current: impl Fn() -> bool) {
		let snapshot: Vec<(ListenerId, Listener)> = self
			.listeners
			.read()
			.iter()
			.map(|(id, listener)| (*id, Arc::clone(listener)))
			.collect();

		trace!(listeners = snapshot.len(), "notifying locale listeners");
		for (id, listener) in snapshot {
			if !is_current() {
				trace!(lang = %state.lang(), "superseded by a newer transition");
				return;
			}
			if !self.listeners.read().contains_key(&id) {
				continue;
			}
			deliver(id, &listener, state);
		}
	}
}

/// Invoke one listener, containing any panic it raises.
pub(crate) fn deliver(id: ListenerId, listener: &Listener, state: &LocaleState) {
	if let Err(payload) = catch_unwind(AssertUnwindSafe(|| listener(state))) {
		let message = payload
			.downcast_ref::<&str>()
			.map(|s| s.to_string())
			.or_else(|| payload.downcast_ref::<String>().cloned())
			.unwrap_or_else(|| "non-string panic payload".to_string());
		error!(listener = id.0, panic = %message, "locale listener panicked");
	}
}

/// Handle returned by `LocaleStore::subscribe`.
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[must_use = "the listener stays registered until unsubscribe() is called"]
pub struct Subscription {
	id: ListenerId,
	registry: Weak<ListenerRegistry>,
	active: AtomicBool,
}

impl Subscription {
	pub(crate) fn new(id: ListenerId, registry: &Arc<ListenerRegistry>) -> Self {
		Self {
			id,
			registry: Arc::downgrade(registry),
			active: AtomicBool::new(true),
		}
	}

	pub fn id(&self) -> ListenerId {
		self.id
	}

	pub fn is_active(&self) -> bool {
		self.active.load(Ordering::Acquire)
	}

	/// Remove the listener. Returns `false` if it was already removed.
	pub fn unsubscribe(&self) -> bool {
		if !self.active.swap(false, Ordering::AcqRel) {
			return false;
		}
		match self.registry.upgrade() {
			Some(registry) => registry.remove(self.id),
			None => false,
		}
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription")
			.field("id", &self.id)
			.field("active", &self.is_active())
			.finish()
	}
}
