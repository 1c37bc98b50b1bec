// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word packing, serialization and rotation.

use alloc::string::String;
use alloc::vec::Vec;

use crate::hex::push_hex_byte;

/// Byte order used to pack bytes into words and to serialize words back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Least significant byte first (MD4, MD5, Keccak lanes)
    Little,
    /// Most significant byte first (SHA-1, SHA-2)
    Big,
}

/// Rotates a 32-bit word left by `n` bits (`n` taken modulo 32).
#[inline(always)]
pub const fn rotate_left32(x: u32, n: u32) -> u32 {
    x.rotate_left(n % 32)
}

/// Rotates a 64-bit word left by `n` bits (`n` taken modulo 64).
#[inline(always)]
pub const fn rotate_left64(x: u64, n: u32) -> u64 {
    x.rotate_left(n % 64)
}

/// Generates `bytes_to_words*` and `words*_to_hex` for a word type.
macro_rules! impl_word_conversions {
    ($type:ty, $size:expr, $fn_pack:ident, $fn_hex:ident) => {
        #[doc = concat!("Packs bytes into `", stringify!($type), "` words in the given byte order.")]
        ///
        #[doc = concat!("Each group of ", stringify!($size), " consecutive bytes becomes one word.")]
        /// A trailing partial group is zero-padded in the positions the input
        /// does not cover, so the result always has `ceil(len / size)` words.
        pub fn $fn_pack(bytes: &[u8], endian: Endian) -> Vec<$type> {
            bytes
                .chunks($size)
                .map(|chunk| {
                    let mut word: $type = 0;
                    for (i, byte) in chunk.iter().enumerate() {
                        let shift = match endian {
                            Endian::Little => 8 * i,
                            Endian::Big => 8 * ($size - 1 - i),
                        };
                        word |= (*byte as $type) << shift;
                    }
                    word
                })
                .collect()
        }

        #[doc = concat!("Serializes `", stringify!($type), "` words to lowercase hex in the given byte order.")]
        pub fn $fn_hex(words: &[$type], endian: Endian) -> String {
            let mut out = String::with_capacity(words.len() * $size * 2);
            for word in words {
                for i in 0..$size {
                    let shift = match endian {
                        Endian::Little => 8 * i,
                        Endian::Big => 8 * ($size - 1 - i),
                    };
                    push_hex_byte(&mut out, (*word >> shift) as u8);
                }
            }
            out
        }
    };
}

impl_word_conversions!(u32, 4, bytes_to_words32, words32_to_hex);
impl_word_conversions!(u64, 8, bytes_to_words64, words64_to_hex);
