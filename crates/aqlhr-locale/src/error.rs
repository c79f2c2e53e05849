// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
	/// A locale accessor ran outside any mounted provider.
	#[error("{accessor} must be used within a LocaleProvider")]
	OutsideProvider { accessor: &'static str },
}
