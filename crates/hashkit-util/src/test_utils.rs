// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::hex::hex_to_bytes;

/// Decodes a hex literal from a test vector.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
pub fn decode_hex(hex: &str) -> Vec<u8> {
    match hex_to_bytes(hex) {
        Ok(bytes) => bytes,
        Err(e) => panic!("malformed test vector {hex:?}: {e}"),
    }
}
