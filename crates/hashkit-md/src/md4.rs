// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MD4 implementation per RFC 1320

use alloc::string::String;

use hashkit_core::HashFunction;
use hashkit_util::{Endian, bytes_to_words32, rotate_left32};

use crate::consts::{MD4_HASH_LEN, MD_BLOCK_LEN};
use crate::padding::{MD_LAYOUT, pad};

/// Initial chaining values A, B, C, D per RFC 1320 Section 3.3
pub(crate) const H0: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Round 2 additive constant: floor(2^30 * sqrt(2))
const K2: u32 = 0x5a827999;

/// Round 3 additive constant: floor(2^30 * sqrt(3))
const K3: u32 = 0x6ed9eba1;

/// Message word order per round
const ORDER: [[usize; 16]; 3] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15],
    [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15],
];

/// Left-rotation amounts per round, cycling every four steps
const SHIFTS: [[u32; 4]; 3] = [[3, 7, 11, 19], [3, 5, 9, 13], [3, 9, 11, 15]];

/// MD4 (RFC 1320)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Md4;

/// F(X,Y,Z) = XY v not(X) Z
#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// G(X,Y,Z) = XY v XZ v YZ
#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

/// H(X,Y,Z) = X xor Y xor Z
#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// One 16-step round: `a = (a + mix(b,c,d) + X[k] + K) <<< s`, rotating roles after each step.
fn round(
    wv: &mut [u32; 4],
    x: &[u32],
    order: &[usize; 16],
    shifts: &[u32; 4],
    mix: fn(u32, u32, u32) -> u32,
    k: u32,
) {
    for (step, &idx) in order.iter().enumerate() {
        let [a, b, c, d] = *wv;
        let t = a
            .wrapping_add(mix(b, c, d))
            .wrapping_add(x[idx])
            .wrapping_add(k);
        *wv = [d, rotate_left32(t, shifts[step % 4]), b, c];
    }
}

/// Process one 16-word block per RFC 1320 Section 3.4
pub(crate) fn compress(state: &mut [u32; 4], block: &[u32]) {
    debug_assert_eq!(block.len(), 16);

    let mut wv = *state;
    round(&mut wv, block, &ORDER[0], &SHIFTS[0], f, 0);
    round(&mut wv, block, &ORDER[1], &SHIFTS[1], g, K2);
    round(&mut wv, block, &ORDER[2], &SHIFTS[2], h, K3);

    for (s, v) in state.iter_mut().zip(wv) {
        *s = s.wrapping_add(v);
    }
}

impl HashFunction for Md4 {
    const NAME: &'static str = "MD4";
    const BLOCK_LEN: usize = MD_BLOCK_LEN;
    const HASH_LEN: usize = MD4_HASH_LEN;
    type Output = [u8; MD4_HASH_LEN];

    fn digest(data: &[u8]) -> Self::Output {
        let words = bytes_to_words32(&pad(data, &MD_LAYOUT), Endian::Little);

        let mut state = H0;
        for block in words.chunks_exact(16) {
            compress(&mut state, block);
        }

        let mut out = [0u8; MD4_HASH_LEN];
        for (bytes, word) in out.chunks_exact_mut(4).zip(state) {
            bytes.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

/// MD4 of the UTF-8 encoding of `text`, as lowercase hex
pub fn md4(text: &str) -> String {
    Md4::hash(text)
}

/// MD4 of raw bytes, as lowercase hex
pub fn md4_raw(data: &[u8]) -> String {
    Md4::hash_raw(data)
}
