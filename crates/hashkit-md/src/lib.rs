// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Merkle–Damgård hash functions over complete messages.
//!
//! Implementations per:
//! - RFC 1320: The MD4 Message-Digest Algorithm
//!   <https://datatracker.ietf.org/doc/html/rfc1320>
//! - RFC 1321: The MD5 Message-Digest Algorithm
//!   <https://datatracker.ietf.org/doc/html/rfc1321>
//! - FIPS 180-4 / RFC 6234: SHA-1, SHA-256, SHA-512
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//!
//! Every algorithm pads the whole message up front, splits it into blocks and
//! folds each block into a fixed-width chaining state. Additions and rotations
//! wrap modulo the word width.
//!
//! MD4, MD5 and SHA-1 are broken for collision resistance. They are here for
//! interoperability with legacy formats.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod md4;
mod md5;
mod padding;
mod sha1;
mod sha256;
mod sha512;
mod word32;
mod word64;

pub use consts::{
    MD4_HASH_LEN, MD5_HASH_LEN, MD_BLOCK_LEN, SHA1_HASH_LEN, SHA256_HASH_LEN, SHA512_BLOCK_LEN,
    SHA512_HASH_LEN,
};
pub use self::md4::{Md4, md4, md4_raw};
pub use self::md5::{Md5, md5, md5_raw};
pub use self::sha1::{Sha1, sha1, sha1_raw};
pub use self::sha256::{Sha256, sha256, sha256_raw};
pub use self::sha512::{Sha512, sha512, sha512_raw};
