// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{rotate_left32, rotate_left64};

#[test]
fn test_rotate_left32_wraps_high_bit() {
    assert_eq!(rotate_left32(0x8000_0000, 1), 0x0000_0001);
    assert_eq!(rotate_left32(0x1234_5678, 8), 0x3456_7812);
}

#[test]
fn test_rotate_left32_full_width_is_identity() {
    assert_eq!(rotate_left32(0xdead_beef, 0), 0xdead_beef);
    assert_eq!(rotate_left32(0xdead_beef, 32), 0xdead_beef);
}

#[test]
fn test_rotate_left64_wraps_high_bit() {
    assert_eq!(rotate_left64(0x8000_0000_0000_0000, 1), 1);
    assert_eq!(rotate_left64(0x0123_4567_89ab_cdef, 16), 0x4567_89ab_cdef_0123);
}

#[test]
fn test_rotate_left64_amount_is_mod_64() {
    assert_eq!(rotate_left64(0x0000_0000_0000_0003, 65), 0x0000_0000_0000_0006);
    assert_eq!(rotate_left64(0xdead_beef_0000_0000, 64), 0xdead_beef_0000_0000);
}
