// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA3-256 and SHA3-512 per FIPS 202 Section 6.1

use alloc::string::String;

use hashkit_core::HashFunction;

use super::sponge::{Sponge, pad};

/// SHA3-512 rate in bytes: (1600 - 2 * 512) / 8
pub const SHA3_512_RATE: usize = (1600 - 2 * 512) / 8;

/// SHA3-512 output size in bytes
pub const SHA3_512_HASH_LEN: usize = 64;

/// SHA3-256 rate in bytes: (1600 - 2 * 256) / 8
pub const SHA3_256_RATE: usize = (1600 - 2 * 256) / 8;

/// SHA3-256 output size in bytes
pub const SHA3_256_HASH_LEN: usize = 32;

fn sponge_hash<const N: usize>(data: &[u8], rate: usize) -> [u8; N] {
    let mut sponge = Sponge::new(rate);
    sponge.absorb(&pad(data, rate));

    let mut out = [0u8; N];
    sponge.squeeze(&mut out);
    out
}

/// SHA3-512 (FIPS 202)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha3_512;

impl HashFunction for Sha3_512 {
    const NAME: &'static str = "SHA3-512";
    const BLOCK_LEN: usize = SHA3_512_RATE;
    const HASH_LEN: usize = SHA3_512_HASH_LEN;
    type Output = [u8; SHA3_512_HASH_LEN];

    fn digest(data: &[u8]) -> Self::Output {
        sponge_hash(data, SHA3_512_RATE)
    }
}

/// SHA3-256 (FIPS 202)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha3_256;

impl HashFunction for Sha3_256 {
    const NAME: &'static str = "SHA3-256";
    const BLOCK_LEN: usize = SHA3_256_RATE;
    const HASH_LEN: usize = SHA3_256_HASH_LEN;
    type Output = [u8; SHA3_256_HASH_LEN];

    fn digest(data: &[u8]) -> Self::Output {
        sponge_hash(data, SHA3_256_RATE)
    }
}

/// SHA3-512 of the UTF-8 encoding of `text`, as lowercase hex
pub fn sha3_512(text: &str) -> String {
    Sha3_512::hash(text)
}

/// SHA3-512 of raw bytes, as lowercase hex
pub fn sha3_512_raw(data: &[u8]) -> String {
    Sha3_512::hash_raw(data)
}

/// SHA3-256 of the UTF-8 encoding of `text`, as lowercase hex
pub fn sha3_256(text: &str) -> String {
    Sha3_256::hash(text)
}

/// SHA3-256 of raw bytes, as lowercase hex
pub fn sha3_256_raw(data: &[u8]) -> String {
    Sha3_256::hash_raw(data)
}
