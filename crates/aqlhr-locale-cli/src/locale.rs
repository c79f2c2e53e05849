// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::debug;

/// Operating-system locale tag (e.g. `ar_SA.UTF-8`), if one is reported.
///
/// Passed to the browser detector as-is; its prefix match handles the
/// region and encoding suffixes.
pub fn system_locale_tag() -> Option<String> {
	let tag = sys_locale::get_locale()?;
	debug!(tag = %tag, "detected system locale");
	Some(tag)
}
