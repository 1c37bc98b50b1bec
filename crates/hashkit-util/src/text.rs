// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text to message bytes.

use alloc::vec::Vec;

use crate::error::EncodingError;

/// Returns the UTF-8 bytes of `text`.
///
/// `str` is guaranteed UTF-8, so this is a view and never fails. Code points
/// above U+FFFF come out as standard 4-byte sequences.
#[inline(always)]
pub fn text_to_bytes(text: &str) -> &[u8] {
    text.as_bytes()
}

/// Encodes 16-bit code units as UTF-8.
///
/// Units below 0x80 pass through as one byte, units below 0x800 become
/// `110xxxxx 10xxxxxx`, and every other basic-plane unit becomes
/// `1110xxxx 10xxxxxx 10xxxxxx`.
///
/// # Errors
///
/// Surrogate units (0xD800..=0xDFFF) cannot be encoded one unit at a time and
/// are rejected with [`EncodingError::SurrogateCodeUnit`].
///
/// # Example
///
/// ```
/// use hashkit_util::utf16_to_bytes;
///
/// let units: Vec<u16> = "né€".encode_utf16().collect();
/// assert_eq!(utf16_to_bytes(&units).unwrap(), "né€".as_bytes());
/// ```
pub fn utf16_to_bytes(units: &[u16]) -> Result<Vec<u8>, EncodingError> {
    let mut out = Vec::with_capacity(units.len() * 3);

    for (index, &unit) in units.iter().enumerate() {
        match unit {
            0x0000..=0x007f => out.push(unit as u8),
            0x0080..=0x07ff => {
                out.push(0xc0 | (unit >> 6) as u8);
                out.push(0x80 | (unit & 0x3f) as u8);
            }
            0xd800..=0xdfff => {
                tracing::debug!(index, unit, "rejecting surrogate code unit");
                return Err(EncodingError::SurrogateCodeUnit { index, unit });
            }
            _ => {
                out.push(0xe0 | (unit >> 12) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3f) as u8);
                out.push(0x80 | (unit & 0x3f) as u8);
            }
        }
    }

    Ok(out)
}
