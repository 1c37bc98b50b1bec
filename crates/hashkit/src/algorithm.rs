// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime algorithm selection.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use hashkit_core::HashFunction;

use crate::error::UnknownAlgorithm;

/// Hash function chosen at runtime, e.g. from a configuration string.
///
/// Only the variants of enabled Cargo features exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// MD4 (RFC 1320)
    #[cfg(feature = "md")]
    Md4,
    /// MD5 (RFC 1321)
    #[cfg(feature = "md")]
    Md5,
    /// SHA-1 (FIPS 180-4)
    #[cfg(feature = "md")]
    Sha1,
    /// SHA-256 (FIPS 180-4)
    #[cfg(feature = "md")]
    Sha256,
    /// SHA-512 (FIPS 180-4)
    #[cfg(feature = "md")]
    Sha512,
    /// SHA3-256 (FIPS 202)
    #[cfg(feature = "sha3")]
    Sha3_256,
    /// SHA3-512 (FIPS 202)
    #[cfg(feature = "sha3")]
    Sha3_512,
}

/// Binds `$hash` to the marker type of `$algorithm` and evaluates `$body`.
macro_rules! with_hash {
    ($algorithm:expr, $hash:ident => $body:expr) => {
        match $algorithm {
            #[cfg(feature = "md")]
            Algorithm::Md4 => {
                type $hash = hashkit_md::Md4;
                $body
            }
            #[cfg(feature = "md")]
            Algorithm::Md5 => {
                type $hash = hashkit_md::Md5;
                $body
            }
            #[cfg(feature = "md")]
            Algorithm::Sha1 => {
                type $hash = hashkit_md::Sha1;
                $body
            }
            #[cfg(feature = "md")]
            Algorithm::Sha256 => {
                type $hash = hashkit_md::Sha256;
                $body
            }
            #[cfg(feature = "md")]
            Algorithm::Sha512 => {
                type $hash = hashkit_md::Sha512;
                $body
            }
            #[cfg(feature = "sha3")]
            Algorithm::Sha3_256 => {
                type $hash = hashkit_sha3::Sha3_256;
                $body
            }
            #[cfg(feature = "sha3")]
            Algorithm::Sha3_512 => {
                type $hash = hashkit_sha3::Sha3_512;
                $body
            }
        }
    };
}

impl Algorithm {
    /// Every enabled algorithm, in declaration order.
    pub const ALL: &'static [Algorithm] = &[
        #[cfg(feature = "md")]
        Algorithm::Md4,
        #[cfg(feature = "md")]
        Algorithm::Md5,
        #[cfg(feature = "md")]
        Algorithm::Sha1,
        #[cfg(feature = "md")]
        Algorithm::Sha256,
        #[cfg(feature = "md")]
        Algorithm::Sha512,
        #[cfg(feature = "sha3")]
        Algorithm::Sha3_256,
        #[cfg(feature = "sha3")]
        Algorithm::Sha3_512,
    ];

    /// Canonical name, e.g. `"SHA-256"` or `"SHA3-512"`.
    pub const fn name(self) -> &'static str {
        with_hash!(self, H => H::NAME)
    }

    /// Input block length in bytes (the rate for SHA-3).
    pub const fn block_len(self) -> usize {
        with_hash!(self, H => H::BLOCK_LEN)
    }

    /// Digest length in bytes.
    pub const fn hash_len(self) -> usize {
        with_hash!(self, H => H::HASH_LEN)
    }

    /// Digest of raw bytes.
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        with_hash!(self, H => H::digest(data).as_ref().to_vec())
    }

    /// Lowercase hex digest of raw bytes.
    pub fn hash_raw(self, data: &[u8]) -> String {
        with_hash!(self, H => H::hash_raw(data))
    }

    /// Lowercase hex digest of the UTF-8 encoding of `text`.
    ///
    /// # Example
    ///
    /// ```
    /// use hashkit::Algorithm;
    ///
    /// let algorithm: Algorithm = "sha256".parse().unwrap();
    /// assert_eq!(
    ///     algorithm.hash("abc"),
    ///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    /// );
    /// ```
    pub fn hash(self, text: &str) -> String {
        with_hash!(self, H => H::hash(text))
    }

    /// HMAC tag over raw key and message bytes.
    #[cfg(feature = "hmac")]
    pub fn hmac_raw(self, key: &[u8], message: &[u8]) -> Vec<u8> {
        with_hash!(self, H => hashkit_hmac::hmac::<H>(key, message).as_ref().to_vec())
    }

    /// Lowercase hex HMAC tag over UTF-8 text key and message.
    #[cfg(feature = "hmac")]
    pub fn hmac(self, key: &str, message: &str) -> String {
        with_hash!(self, H => hashkit_hmac::hmac_hex::<H>(key, message))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercases and drops `-`, `_` and surrounding whitespace.
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parses a case-insensitive name, with or without dashes.
    ///
    /// `"sha256"`, `"SHA-256"` and `"Sha_256"` all give [`Algorithm::Sha256`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);

        Self::ALL
            .iter()
            .copied()
            .find(|algorithm| normalize(algorithm.name()) == wanted)
            .ok_or_else(|| {
                tracing::debug!(name = s, "unknown hash algorithm");
                UnknownAlgorithm { name: s.into() }
            })
    }
}
