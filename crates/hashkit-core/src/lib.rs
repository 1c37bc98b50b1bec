// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core trait for hashkit hash functions.
//!
//! Every algorithm is a zero-sized marker type implementing [`HashFunction`].
//! HMAC and the runtime `Algorithm` selector only ever talk to this trait, so
//! the block length travels with the algorithm instead of being passed
//! alongside it.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

use alloc::string::String;
use core::fmt::Debug;

use hashkit_util::{bytes_to_hex, text_to_bytes};

/// One-shot hash function over a fully materialized message.
///
/// Implementations are pure: same input, same digest, no shared mutable state.
pub trait HashFunction {
    /// Algorithm name as published (e.g. `"SHA-256"`)
    const NAME: &'static str;

    /// Input block length in bytes (the HMAC block size)
    const BLOCK_LEN: usize;

    /// Digest length in bytes
    const HASH_LEN: usize;

    /// Raw digest, always `HASH_LEN` bytes
    type Output: AsRef<[u8]> + Copy + Eq + Debug;

    /// Hashes raw message bytes
    fn digest(data: &[u8]) -> Self::Output;

    /// Hashes raw message bytes, returning the lowercase hex digest
    fn hash_raw(data: &[u8]) -> String {
        bytes_to_hex(Self::digest(data).as_ref())
    }

    /// Hashes the UTF-8 encoding of `text`, returning the lowercase hex digest
    fn hash(text: &str) -> String {
        Self::hash_raw(text_to_bytes(text))
    }
}
