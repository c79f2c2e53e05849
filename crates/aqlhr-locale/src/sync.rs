// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use aqlhr_locale_config::LocaleSettings;
use aqlhr_locale_core::{Direction, Lang, LocaleState};
use chrono::{DateTime, Duration, Utc};
use tracing::trace;

use crate::environment::{LocaleEnvironment, PersistedCookie};

/// Root class marking the active language.
pub fn lang_class(lang: Lang) -> &'static str {
	match lang {
		Lang::En => "english",
		Lang::Ar => "arabic",
	}
}

/// Mirrors a [`LocaleState`] onto the document and the persisted signals.
///
/// Owns the `lang`/`dir` attributes, the `rtl`/`ltr` and `arabic`/`english`
/// class pairs, the storage entry and the language cookie. Applying the same
/// state twice leaves the environment unchanged apart from the cookie expiry.
#[derive(Debug, Clone)]
pub struct DocumentSynchronizer {
	cookie_name: String,
	cookie_path: String,
	cookie_lifetime: Duration,
	storage_key: String,
}

impl DocumentSynchronizer {
	pub fn new(settings: &LocaleSettings) -> Self {
		Self {
			cookie_name: settings.cookie_name.clone(),
			cookie_path: settings.cookie_path.clone(),
			cookie_lifetime: Duration::days(i64::from(settings.cookie_max_age_days)),
			storage_key: settings.storage_key.clone(),
		}
	}

	pub fn apply(&self, env: &dyn LocaleEnvironment, state: &LocaleState) {
		let lang = state.lang();
		let dir = state.direction();
		trace!(%lang, %dir, "synchronizing document");

		env.set_document_attribute("lang", lang.code());
		env.set_document_attribute("dir", dir.as_str());

		for candidate in [Direction::Rtl, Direction::Ltr] {
			env.set_root_class(candidate.as_str(), candidate == dir);
		}
		for candidate in Lang::ALL {
			env.set_root_class(lang_class(candidate), candidate == lang);
		}

		env.storage_set(&self.storage_key, lang.code());
		env.set_cookie(&PersistedCookie {
			name: self.cookie_name.clone(),
			value: lang.code().to_string(),
			path: self.cookie_path.clone(),
			expires: env
				.now()
				.checked_add_signed(self.cookie_lifetime)
				.unwrap_or(DateTime::<Utc>::MAX_UTC),
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::environment::MemoryEnvironment;
	use chrono::TimeZone;

	#[test]
	fn test_apply_arabic() {
		let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
		let env = MemoryEnvironment::new().with_now(now);
		let sync = DocumentSynchronizer::new(&LocaleSettings::default());

		sync.apply(&env, &LocaleState::ready(Lang::Ar));

		assert_eq!(env.document_attribute("lang").as_deref(), Some("ar"));
		assert_eq!(env.document_attribute("dir").as_deref(), Some("rtl"));
		assert_eq!(env.root_classes(), vec!["arabic", "rtl"]);
		assert_eq!(env.storage_value("aqlhr.locale").as_deref(), Some("ar"));

		let cookie = env.last_set_cookie().unwrap();
		assert_eq!(cookie.value, "ar");
		assert_eq!(cookie.path, "/");
		assert_eq!(cookie.expires, now + Duration::days(365));
	}

	#[test]
	fn test_switching_replaces_class_pairs() {
		let env = MemoryEnvironment::new();
		let sync = DocumentSynchronizer::new(&LocaleSettings::default());

		sync.apply(&env, &LocaleState::ready(Lang::Ar));
		sync.apply(&env, &LocaleState::ready(Lang::En));

		assert_eq!(env.root_classes(), vec!["english", "ltr"]);
		assert_eq!(env.cookie_value("aqlhr.lang").as_deref(), Some("en"));
	}

	#[test]
	fn test_apply_is_idempotent() {
		let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
		let env = MemoryEnvironment::new().with_now(now);
		let sync = DocumentSynchronizer::new(&LocaleSettings::default());

		sync.apply(&env, &LocaleState::ready(Lang::Ar));
		let first = env.snapshot();
		sync.apply(&env, &LocaleState::ready(Lang::Ar));
		assert_eq!(env.snapshot(), first);
	}

	#[test]
	fn test_custom_keys() {
		let settings = LocaleSettings {
			cookie_name: "hr.lang".to_string(),
			cookie_path: "/app".to_string(),
			cookie_max_age_days: 30,
			storage_key: "hr.locale".to_string(),
			..LocaleSettings::default()
		};
		let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
		let env = MemoryEnvironment::new().with_now(now);

		DocumentSynchronizer::new(&settings).apply(&env, &LocaleState::ready(Lang::En));

		assert_eq!(env.storage_value("hr.locale").as_deref(), Some("en"));
		let cookie = env.last_set_cookie().unwrap();
		assert_eq!(cookie.name, "hr.lang");
		assert_eq!(cookie.path, "/app");
		assert_eq!(cookie.expires, now + Duration::days(30));
	}
}
