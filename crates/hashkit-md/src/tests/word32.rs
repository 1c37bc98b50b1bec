// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::word32::{bsig0, bsig1, ch, maj, ssig0, ssig1};

const TEST_VALUES: [u32; 5] = [
    0x0000_0000,
    0xFFFF_FFFF,
    0x0123_4567,
    0xFEDC_BA98,
    0x0F0F_0F0F,
];

#[test]
fn ch_matches_reference() {
    // Ch(x, y, z) = (x & y) ^ (!x & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                assert_eq!(
                    ch(x, y, z),
                    (x & y) ^ (!x & z),
                    "Ch mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

#[test]
fn maj_matches_reference() {
    // Maj(x, y, z) = (x & y) ^ (x & z) ^ (y & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                assert_eq!(
                    maj(x, y, z),
                    (x & y) ^ (x & z) ^ (y & z),
                    "Maj mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

#[test]
fn sigmas_match_reference() {
    for &x in &TEST_VALUES {
        assert_eq!(
            bsig0(x),
            x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
        );
        assert_eq!(
            bsig1(x),
            x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
        );
        assert_eq!(ssig0(x), x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3));
        assert_eq!(ssig1(x), x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10));
    }
}

#[test]
fn sigma_of_single_bit() {
    // Bit 0 rotated right by 2, 13, 22 lands on bits 30, 19, 10
    assert_eq!(bsig0(1), (1 << 30) | (1 << 19) | (1 << 10));
    // SHR drops the bit entirely for small sigma
    assert_eq!(ssig0(1), (1 << 25) | (1 << 14));
}
