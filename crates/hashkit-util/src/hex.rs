// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::HexError;

/// Nibble-to-character table for lowercase hex output.
pub const HEX_TABLE: &[u8; 16] = b"0123456789abcdef";

#[inline(always)]
pub(crate) fn push_hex_byte(out: &mut String, byte: u8) {
    out.push(HEX_TABLE[(byte >> 4) as usize] as char);
    out.push(HEX_TABLE[(byte & 0x0f) as usize] as char);
}

/// Encodes bytes as a lowercase hex string.
///
/// # Example
///
/// ```
/// use hashkit_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        push_hex_byte(&mut out, *byte);
    }
    out
}

fn nibble(index: usize, digit: u8) -> Result<u8, HexError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(HexError::InvalidDigit {
            index,
            digit: digit as char,
        }),
    }
}

/// Parses a hexadecimal string into bytes.
///
/// Accepts upper and lower case digits.
///
/// # Errors
///
/// - [`HexError::OddLength`] if the input has an odd number of characters
/// - [`HexError::InvalidDigit`] on the first character that is not a hex digit
///
/// # Example
///
/// ```
/// use hashkit_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
/// assert!(hex_to_bytes("abc").is_err());
/// ```
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, HexError> {
    let digits = hex.as_bytes();

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength { len: digits.len() });
    }

    digits
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let hi = nibble(2 * i, pair[0])?;
            let lo = nibble(2 * i + 1, pair[1])?;
            Ok((hi << 4) | lo)
        })
        .collect()
}
