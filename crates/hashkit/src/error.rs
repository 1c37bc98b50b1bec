// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use thiserror::Error;

/// Algorithm name did not match any enabled hash function
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown hash algorithm: {name:?}")]
pub struct UnknownAlgorithm {
    /// Name as supplied by the caller
    pub name: String,
}
