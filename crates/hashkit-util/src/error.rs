// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Hex decoding error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// Input has an odd number of characters
    #[error("hex input has odd length {len}")]
    OddLength {
        /// Length of the rejected input
        len: usize,
    },

    /// Input contains a character outside 0-9, a-f, A-F
    #[error("invalid hex digit {digit:?} at index {index}")]
    InvalidDigit {
        /// Byte offset of the offending character
        index: usize,
        /// The offending character
        digit: char,
    },
}

/// Text encoding error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// A UTF-16 surrogate was found where only basic-plane code units are supported
    #[error("surrogate code unit {unit:#06x} at index {index} is outside the basic plane")]
    SurrogateCodeUnit {
        /// Position of the unit in the input
        index: usize,
        /// The offending code unit
        unit: u16,
    },
}
