// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keyed-hash message authentication (HMAC) per RFC 2104.
//!
//! ```text
//! HMAC(K, m) = H((K' ⊕ opad) || H((K' ⊕ ipad) || m))
//! ```
//!
//! `K'` is the key zero-padded to the block length of `H`, or `H(K)` zero-padded
//! when the key is longer than a block. The block length is an associated
//! constant of the hash function, so it cannot disagree with the hash.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//! - RFC 2202: Test Cases for HMAC-MD5 and HMAC-SHA-1
//! - RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224, -256, -384, -512

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod hmac;

pub use error::HmacError;
pub use self::hmac::{
    IPAD, OPAD, hmac, hmac_hex, hmac_md4, hmac_md5, hmac_sha1, hmac_sha3_512, hmac_sha256,
    hmac_sha512, hmac_with_block_len,
};
