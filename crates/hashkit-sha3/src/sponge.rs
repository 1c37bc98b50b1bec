// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sponge construction over Keccak-f[1600] per FIPS 202 Section 4.

use alloc::vec::Vec;

use hashkit_util::{Endian, bytes_to_words64};

use super::keccak::keccak_f1600;

/// SHA-3 domain separation suffix `01` followed by the first pad bit
const SHA3_DOMAIN: u8 = 0x06;

/// Final pad bit, set in the last byte of the last block
const PAD_LAST: u8 = 0x80;

/// SHA-3 multi-rate padding: `message || 0x06 || 0x00.. ` with 0x80 XORed into
/// the final byte.
///
/// When only one byte of room is left it carries both bits (0x86).
pub(crate) fn pad(message: &[u8], rate: usize) -> Vec<u8> {
    let padded_len = (message.len() + 1).div_ceil(rate) * rate;

    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(message);
    padded.push(SHA3_DOMAIN);
    padded.resize(padded_len, 0);

    if let Some(last) = padded.last_mut() {
        *last ^= PAD_LAST;
    }
    padded
}

/// Keccak sponge with a byte rate of `rate` (a multiple of 8, at most 200).
pub(crate) struct Sponge {
    state: [u64; 25],
    rate: usize,
}

impl Sponge {
    /// Create a sponge with an all-zero state
    pub fn new(rate: usize) -> Self {
        debug_assert!(rate % 8 == 0 && rate > 0 && rate < 200);
        Self {
            state: [0u64; 25],
            rate,
        }
    }

    /// Absorb an already padded message (length a multiple of `rate`)
    pub fn absorb(&mut self, padded: &[u8]) {
        debug_assert_eq!(padded.len() % self.rate, 0);

        for block in padded.chunks_exact(self.rate) {
            let lanes = bytes_to_words64(block, Endian::Little);
            for (lane, word) in self.state.iter_mut().zip(lanes) {
                *lane ^= word;
            }
            keccak_f1600(&mut self.state);
        }
    }

    /// Squeeze `out.len()` bytes, permuting between rate-sized emissions
    pub fn squeeze(&mut self, out: &mut [u8]) {
        let mut chunks = out.chunks_mut(self.rate).peekable();

        while let Some(chunk) = chunks.next() {
            for (bytes, lane) in chunk.chunks_mut(8).zip(self.state.iter()) {
                let lane_bytes = lane.to_le_bytes();
                bytes.copy_from_slice(&lane_bytes[..bytes.len()]);
            }

            if chunks.peek().is_some() {
                keccak_f1600(&mut self.state);
            }
        }
    }

    /// Current lanes, for tests
    #[cfg(test)]
    pub(crate) fn state(&self) -> &[u64; 25] {
        &self.state
    }
}
