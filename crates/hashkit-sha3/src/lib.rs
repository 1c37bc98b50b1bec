// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-3 hash functions per FIPS 202.
//!
//! Unlike the Merkle–Damgård family there is no small chaining vector: the
//! whole 1600-bit Keccak state (25 lanes of 64 bits) is carried between blocks.
//! Each `rate`-byte block is XORed into the leading lanes and the state is
//! permuted; output is squeezed from the same leading lanes.
//!
//! References:
//! - FIPS 202: SHA-3 Standard: Permutation-Based Hash and Extendable-Output Functions
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod keccak;
mod sha3;
mod sponge;

pub use keccak::{KECCAK_ROUNDS, ROTATION_OFFSETS, ROUND_CONSTANTS, keccak_f1600};
pub use self::sha3::{
    SHA3_256_HASH_LEN, SHA3_256_RATE, SHA3_512_HASH_LEN, SHA3_512_RATE, Sha3_256, Sha3_512,
    sha3_256, sha3_256_raw, sha3_512, sha3_512_raw,
};
