// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte and word conversion utilities shared by every hashkit algorithm.
//!
//! - Packing byte sequences into 32/64-bit words in either byte order
//! - Serializing word arrays and byte arrays to lowercase hex
//! - Parsing hex back into bytes
//! - Encoding text (UTF-8, or 16-bit code units) into the byte sequence that gets hashed
//! - Wiping key material out of scratch buffers
//!
//! Rotations live here too: `rotate_left32` for the MD4/MD5/SHA-1/SHA-256 family
//! and `rotate_left64` for SHA-512 and Keccak. Both are modulo the word width.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod hex;
mod text;
mod words;
mod zeroize;

#[cfg(any(test, feature = "test-utils"))]
mod test_utils;

pub use error::{EncodingError, HexError};
pub use hex::{HEX_TABLE, bytes_to_hex, hex_to_bytes};
pub use text::{text_to_bytes, utf16_to_bytes};
pub use words::{
    Endian, bytes_to_words32, bytes_to_words64, rotate_left32, rotate_left64, words32_to_hex,
    words64_to_hex,
};
pub use zeroize::zeroize_slice;

#[cfg(any(test, feature = "test-utils"))]
pub use test_utils::decode_hex;
