// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keccak-f[1600] permutation per FIPS 202 Section 3.
//!
//! Lane `(x, y)` of the 5×5 state lives at index `x + 5y`.

use hashkit_util::rotate_left64;

/// Number of rounds of Keccak-f[1600]
pub const KECCAK_ROUNDS: usize = 24;

/// Iota round constants RC[i] per FIPS 202 Section 3.2.5
pub const ROUND_CONSTANTS: [u64; KECCAK_ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
    0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// Rho rotation offsets per FIPS 202 Section 3.2.2, indexed `x + 5y`
pub const ROTATION_OFFSETS: [u32; 25] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

/// Theta: XOR each lane with the parities of two neighbouring columns
#[inline(always)]
fn theta(a: &mut [u64; 25]) {
    let mut c = [0u64; 5];
    for (x, parity) in c.iter_mut().enumerate() {
        *parity = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }

    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ rotate_left64(c[(x + 1) % 5], 1);
        for y in 0..5 {
            a[x + 5 * y] ^= d;
        }
    }
}

/// Rho + Pi: rotate every lane, then move `(x, y)` to `(y, 2x + 3y mod 5)`
#[inline(always)]
fn rho_pi(a: &[u64; 25]) -> [u64; 25] {
    let mut b = [0u64; 25];
    for x in 0..5 {
        for y in 0..5 {
            let from = x + 5 * y;
            let to = y + 5 * ((2 * x + 3 * y) % 5);
            b[to] = rotate_left64(a[from], ROTATION_OFFSETS[from]);
        }
    }
    b
}

/// Chi: `a = b ⊕ (¬b[x+1] ∧ b[x+2])` along each row
#[inline(always)]
fn chi(a: &mut [u64; 25], b: &[u64; 25]) {
    for y in 0..5 {
        let row = 5 * y;
        for x in 0..5 {
            a[row + x] = b[row + x] ^ (!b[row + (x + 1) % 5] & b[row + (x + 2) % 5]);
        }
    }
}

/// Iota: XOR the round constant into lane (0, 0)
#[inline(always)]
fn iota(a: &mut [u64; 25], round: usize) {
    a[0] ^= ROUND_CONSTANTS[round];
}

/// Applies the 24-round Keccak-f[1600] permutation in place.
pub fn keccak_f1600(state: &mut [u64; 25]) {
    for round in 0..KECCAK_ROUNDS {
        theta(state);
        let b = rho_pi(state);
        chi(state, &b);
        iota(state, round);
    }
}
