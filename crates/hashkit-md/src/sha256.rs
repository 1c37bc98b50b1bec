// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 implementation per RFC 6234 Section 6.2

use alloc::string::String;

use hashkit_core::HashFunction;
use hashkit_util::{Endian, bytes_to_words32};

use crate::consts::{MD_BLOCK_LEN, SHA256_HASH_LEN};
use crate::padding::{SHA_LAYOUT, pad};
use crate::word32::{bsig0, bsig1, ch, maj, ssig0, ssig1};

/// SHA-256 constants K per RFC 6234 Section 5.1
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash values H(0) per RFC 6234 Section 6.2.1
/// First 32 bits of fractional parts of square roots of first 8 primes
pub(crate) const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-256 (FIPS 180-4)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha256;

/// Compress one block per RFC 6234 Section 6.2.2
///
/// `block` is the 16 big-endian words of a 64-byte block.
pub(crate) fn compress(h: &mut [u32; 8], block: &[u32]) {
    debug_assert_eq!(block.len(), 16);

    // Message schedule W[0..63]
    let mut w = [0u32; 64];
    w[..16].copy_from_slice(block);
    for t in 16..64 {
        w[t] = ssig1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let mut wv = *h;
    for (k, wt) in K256.iter().zip(w.iter()) {
        let [a, b, c, d, e, f, g, hh] = wv;

        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1 = hh
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*wt);

        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        wv = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
    }

    for (hi, vi) in h.iter_mut().zip(wv) {
        *hi = hi.wrapping_add(vi);
    }
}

impl HashFunction for Sha256 {
    const NAME: &'static str = "SHA-256";
    const BLOCK_LEN: usize = MD_BLOCK_LEN;
    const HASH_LEN: usize = SHA256_HASH_LEN;
    type Output = [u8; SHA256_HASH_LEN];

    fn digest(data: &[u8]) -> Self::Output {
        let words = bytes_to_words32(&pad(data, &SHA_LAYOUT), Endian::Big);

        let mut h = H0;
        for block in words.chunks_exact(16) {
            compress(&mut h, block);
        }

        let mut out = [0u8; SHA256_HASH_LEN];
        for (bytes, word) in out.chunks_exact_mut(4).zip(h) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

/// SHA-256 of the UTF-8 encoding of `text`, as lowercase hex
pub fn sha256(text: &str) -> String {
    Sha256::hash(text)
}

/// SHA-256 of raw bytes, as lowercase hex
pub fn sha256_raw(data: &[u8]) -> String {
    Sha256::hash_raw(data)
}
