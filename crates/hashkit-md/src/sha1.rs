// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 implementation per RFC 6234 Section 6.1

use alloc::string::String;

use hashkit_core::HashFunction;
use hashkit_util::{Endian, bytes_to_words32, rotate_left32};

use crate::consts::{MD_BLOCK_LEN, SHA1_HASH_LEN};
use crate::padding::{SHA_LAYOUT, pad};

/// Initial hash values H(0) per RFC 6234 Section 6.1
pub(crate) const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// SHA-1 (FIPS 180-4)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha1;

/// f(t;B,C,D) and K(t) per RFC 6234 Section 5.1
#[inline(always)]
fn stage(t: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    match t {
        0..=19 => ((b & c) | (!b & d), 0x5a827999),
        20..=39 => (b ^ c ^ d, 0x6ed9eba1),
        40..=59 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
        _ => (b ^ c ^ d, 0xca62c1d6),
    }
}

/// Process one 16-word block per RFC 6234 Section 6.1.2
pub(crate) fn compress(h: &mut [u32; 5], block: &[u32]) {
    debug_assert_eq!(block.len(), 16);

    let mut w = [0u32; 80];
    w[..16].copy_from_slice(block);
    for t in 16..80 {
        w[t] = rotate_left32(w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16], 1);
    }

    let mut wv = *h;
    for (t, wt) in w.iter().enumerate() {
        let [a, b, c, d, e] = wv;
        let (f, k) = stage(t, b, c, d);

        let temp = rotate_left32(a, 5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(*wt);
        wv = [temp, a, rotate_left32(b, 30), c, d];
    }

    for (hi, vi) in h.iter_mut().zip(wv) {
        *hi = hi.wrapping_add(vi);
    }
}

impl HashFunction for Sha1 {
    const NAME: &'static str = "SHA-1";
    const BLOCK_LEN: usize = MD_BLOCK_LEN;
    const HASH_LEN: usize = SHA1_HASH_LEN;
    type Output = [u8; SHA1_HASH_LEN];

    fn digest(data: &[u8]) -> Self::Output {
        let words = bytes_to_words32(&pad(data, &SHA_LAYOUT), Endian::Big);

        let mut h = H0;
        for block in words.chunks_exact(16) {
            compress(&mut h, block);
        }

        let mut out = [0u8; SHA1_HASH_LEN];
        for (bytes, word) in out.chunks_exact_mut(4).zip(h) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

/// SHA-1 of the UTF-8 encoding of `text`, as lowercase hex
pub fn sha1(text: &str) -> String {
    Sha1::hash(text)
}

/// SHA-1 of raw bytes, as lowercase hex
pub fn sha1_raw(data: &[u8]) -> String {
    Sha1::hash_raw(data)
}
