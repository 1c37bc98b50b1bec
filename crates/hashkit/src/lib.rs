// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Portable message digests and HMAC for Rust.</em></p>
//!
//! ---
//!
//! Hashkit computes MD4, MD5, SHA-1, SHA-256, SHA-512, SHA3-256 and SHA3-512
//! digests, and HMAC over any of them, from first principles.
//!
//! # Features
//!
//! - **One trait**: every algorithm is a zero-sized type implementing [`HashFunction`]
//! - **Hex or bytes**: `hash(&str)` and `hash_raw(&[u8])` return lowercase hex, `digest` returns a fixed-size array
//! - **Generic HMAC**: the block length comes from the hash function, so it cannot be wrong
//! - **Key hygiene**: HMAC scratch buffers holding key material are wiped with volatile writes
//! - **`no_std` compatible**: only `alloc` is required
//!
//! # Quick Start
//!
//! ```rust
//! use hashkit::{HashFunction, Sha256, hmac_sha256, md5};
//!
//! assert_eq!(md5("abc"), "900150983cd24fb0d6963f7d28e17f72");
//!
//! let digest: [u8; 32] = Sha256::digest(b"abc");
//! assert_eq!(digest[0], 0xba);
//!
//! assert_eq!(
//!     hmac_sha256("key", "The quick brown fox jumps over the lazy dog"),
//!     "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
//! );
//! ```
//!
//! # Choosing the algorithm at runtime
//!
//! ```rust
//! use hashkit::Algorithm;
//!
//! let algorithm: Algorithm = "SHA3-512".parse()?;
//! assert_eq!(algorithm.hash_len(), 64);
//! assert_eq!(algorithm.hmac("key", "message").len(), 128);
//! # Ok::<(), hashkit::UnknownAlgorithm>(())
//! ```
//!
//! # Cargo features
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `md` | MD4, MD5, SHA-1, SHA-256, SHA-512 |
//! | `sha3` | SHA3-256, SHA3-512, Keccak-f\[1600\] |
//! | `hmac` | HMAC (implies `md` and `sha3`) |
//!
//! All features are on by default.
//!
//! # Security
//!
//! MD4, MD5 and SHA-1 are broken for collision resistance. They are provided
//! for interoperability with existing formats only.
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod algorithm;
mod error;

pub use algorithm::Algorithm;
pub use error::UnknownAlgorithm;

pub use hashkit_core::HashFunction;
pub use hashkit_util as util;
pub use hashkit_util::{EncodingError, HexError, bytes_to_hex, hex_to_bytes, utf16_to_bytes};

#[cfg(feature = "md")]
pub use hashkit_md as md;
#[cfg(feature = "md")]
pub use hashkit_md::{
    Md4, Md5, Sha1, Sha256, Sha512, md4, md4_raw, md5, md5_raw, sha1, sha1_raw, sha256,
    sha256_raw, sha512, sha512_raw,
};

#[cfg(feature = "sha3")]
pub use hashkit_sha3 as sha3;
#[cfg(feature = "sha3")]
pub use hashkit_sha3::{
    Sha3_256, Sha3_512, keccak_f1600, sha3_256, sha3_256_raw, sha3_512, sha3_512_raw,
};

#[cfg(feature = "hmac")]
pub use hashkit_hmac as hmac;
#[cfg(feature = "hmac")]
pub use hashkit_hmac::{
    HmacError, hmac, hmac_hex, hmac_md4, hmac_md5, hmac_sha1, hmac_sha3_512, hmac_sha256, hmac_sha512,
    hmac_with_block_len,
};
