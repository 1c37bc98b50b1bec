// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{Ordering, compiler_fence};

/// Overwrites every byte with zero using volatile writes.
///
/// The writes are not elided even when the buffer is dropped right after.
///
/// # Example
///
/// ```
/// use hashkit_util::zeroize_slice;
///
/// let mut pad = [0x36u8; 64];
/// zeroize_slice(&mut pad);
/// assert!(pad.iter().all(|&b| b == 0));
/// ```
#[inline]
pub fn zeroize_slice(bytes: &mut [u8]) {
    for byte in bytes.iter_mut() {
        // SAFETY: `byte` is a valid, aligned, exclusive reference into the slice
        unsafe { core::ptr::write_volatile(byte, 0) };
    }
    compiler_fence(Ordering::SeqCst);
}
