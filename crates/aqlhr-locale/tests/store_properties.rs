// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use aqlhr_locale::{LocaleStore, MemoryEnvironment};
use aqlhr_locale_core::Lang;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
	SetLang(String),
	Toggle,
	Route(String),
}

fn code() -> impl Strategy<Value = String> {
	prop_oneof![
		Just("en".to_string()),
		Just("ar".to_string()),
		Just("AR".to_string()),
		"[a-z]{0,3}",
		".{0,4}",
	]
}

fn op() -> impl Strategy<Value = Op> {
	prop_oneof![
		code().prop_map(Op::SetLang),
		Just(Op::Toggle),
		code().prop_map(Op::Route),
	]
}

fn apply(store: &LocaleStore, op: &Op) {
	match op {
		Op::SetLang(code) => {
			store.set_lang(code);
		}
		Op::Toggle => {
			store.toggle_lang();
		}
		Op::Route(token) => {
			store.sync_with_route(token);
		}
	}
}

proptest! {
	#[test]
	fn state_and_document_stay_consistent(
		path in prop_oneof![Just("/".to_string()), Just("/ar/x".to_string()), "/[a-z]{0,4}"],
		ops in prop::collection::vec(op(), 0..32),
	) {
		let env = MemoryEnvironment::new().with_path(path);
		let store = LocaleStore::with_defaults(Arc::new(env.clone()));
		store.initialize();

		for op in &ops {
			apply(&store, op);

			let state = store.get_state();
			prop_assert_eq!(state.is_rtl(), state.lang() == Lang::Ar);
			prop_assert!(!state.is_loading());

			let rtl = env.has_class("rtl");
			prop_assert_ne!(rtl, env.has_class("ltr"));
			prop_assert_ne!(env.has_class("arabic"), env.has_class("english"));
			prop_assert_eq!(rtl, state.is_rtl());
			prop_assert_eq!(env.document_attribute("lang"), Some(state.lang().code().to_string()));
			prop_assert_eq!(env.cookie_value("aqlhr.lang"), Some(state.lang().code().to_string()));
		}
	}

	#[test]
	fn double_toggle_is_identity(
		start in prop_oneof![Just(Lang::En), Just(Lang::Ar)],
		ops in prop::collection::vec(op(), 0..8),
	) {
		let env = MemoryEnvironment::new();
		let store = LocaleStore::with_defaults(Arc::new(env));
		store.set(start);
		for op in &ops {
			apply(&store, op);
		}

		let before = store.get_state();
		store.toggle_lang();
		prop_assert_ne!(store.get_state().lang(), before.lang());
		store.toggle_lang();
		prop_assert_eq!(store.get_state(), before);
	}
}
