// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// HMAC error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacError {
    /// Caller-supplied block length differs from the hash function's own
    #[error("{algorithm} has a {expected}-byte block, got block length {got}")]
    BlockLenMismatch {
        /// Name of the hash function
        algorithm: &'static str,
        /// Block length of the hash function
        expected: usize,
        /// Block length the caller supplied
        got: usize,
    },
}
