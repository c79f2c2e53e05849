// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for AqlHR.
//!
//! This crate provides the bilingual (English/Arabic) message catalog and
//! locale-aware formatting used by the interface.
//!
//! # String Naming Convention
//!
//! Translatable strings use a hierarchical dot-notation key whose first
//! segment is the namespace, matching the table in the catalog file:
//!
//! - `common.` shared actions and states (`common.save`)
//! - `nav.` navigation entries
//! - `language.` the language switcher
//!
//! # Example
//!
//! ```
//! use aqlhr_common_i18n::{format_currency, is_rtl, t, t_fmt};
//! use aqlhr_locale_core::Lang;
//!
//! assert_eq!(t(Lang::Ar, "common.save"), "حفظ");
//!
//! let label = t_fmt(Lang::En, "language.switch", &[("language", "العربية")]);
//! assert_eq!(label, "Switch to العربية");
//!
//! assert!(is_rtl("ar"));
//! assert_eq!(format_currency(1234.5, Lang::En), "SAR 1,234.50");
//! ```

mod catalog;
mod format;
mod locale;

pub use catalog::{t, t_fmt, t_ns, Catalog, CatalogError};
pub use format::{format_currency, format_date, format_datetime, format_number, localize_digits};
pub use locale::{available_locales, is_rtl, is_supported, locale_info, LocaleInfo};

pub use locale::{DEFAULT_LOCALE, LOCALES};
