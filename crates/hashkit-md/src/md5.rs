// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MD5 implementation per RFC 1321

use alloc::string::String;

use hashkit_core::HashFunction;
use hashkit_util::{Endian, bytes_to_words32, rotate_left32};

use crate::consts::{MD5_HASH_LEN, MD_BLOCK_LEN};
use crate::padding::{MD_LAYOUT, pad};

/// Initial chaining values A, B, C, D per RFC 1321 Section 3.3
pub(crate) const H0: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// T[i] = floor(2^32 * abs(sin(i + 1)))
const T: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left-rotation amounts per round, cycling every four steps
const SHIFTS: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

/// MD5 (RFC 1321)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Md5;

/// Process one 16-word block per RFC 1321 Section 3.4
pub(crate) fn compress(state: &mut [u32; 4], block: &[u32]) {
    debug_assert_eq!(block.len(), 16);

    let mut wv = *state;
    for (i, t) in T.iter().enumerate() {
        let [a, b, c, d] = wv;
        let round = i / 16;

        let (mix, k) = match round {
            0 => ((b & c) | (!b & d), i),
            1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
            2 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };

        let sum = a
            .wrapping_add(mix)
            .wrapping_add(block[k])
            .wrapping_add(*t);
        wv = [
            d,
            b.wrapping_add(rotate_left32(sum, SHIFTS[round][i % 4])),
            b,
            c,
        ];
    }

    for (s, v) in state.iter_mut().zip(wv) {
        *s = s.wrapping_add(v);
    }
}

impl HashFunction for Md5 {
    const NAME: &'static str = "MD5";
    const BLOCK_LEN: usize = MD_BLOCK_LEN;
    const HASH_LEN: usize = MD5_HASH_LEN;
    type Output = [u8; MD5_HASH_LEN];

    fn digest(data: &[u8]) -> Self::Output {
        let words = bytes_to_words32(&pad(data, &MD_LAYOUT), Endian::Little);

        let mut state = H0;
        for block in words.chunks_exact(16) {
            compress(&mut state, block);
        }

        let mut out = [0u8; MD5_HASH_LEN];
        for (bytes, word) in out.chunks_exact_mut(4).zip(state) {
            bytes.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

/// MD5 of the UTF-8 encoding of `text`, as lowercase hex
pub fn md5(text: &str) -> String {
    Md5::hash(text)
}

/// MD5 of raw bytes, as lowercase hex
pub fn md5_raw(data: &[u8]) -> String {
    Md5::hash_raw(data)
}
