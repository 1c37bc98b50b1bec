// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Merkle–Damgård message padding.
//!
//! `message || 0x80 || 0x00.. || bit_length`, where the zero run is as short
//! as possible while leaving the length field flush with the end of a block.

use alloc::vec::Vec;

use hashkit_util::Endian;

use crate::consts::{MD_BLOCK_LEN, SHA512_BLOCK_LEN};

/// Block and length-field geometry of one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockLayout {
    /// Block length in bytes
    pub block_len: usize,
    /// Length field width in bytes (8 or 16)
    pub len_field: usize,
    /// Byte order of the length field
    pub len_order: Endian,
}

/// MD4 and MD5: 64-bit little-endian length
pub(crate) const MD_LAYOUT: BlockLayout = BlockLayout {
    block_len: MD_BLOCK_LEN,
    len_field: 8,
    len_order: Endian::Little,
};

/// SHA-1 and SHA-256: 64-bit big-endian length
pub(crate) const SHA_LAYOUT: BlockLayout = BlockLayout {
    block_len: MD_BLOCK_LEN,
    len_field: 8,
    len_order: Endian::Big,
};

/// SHA-512: 128-bit big-endian length
pub(crate) const SHA512_LAYOUT: BlockLayout = BlockLayout {
    block_len: SHA512_BLOCK_LEN,
    len_field: 16,
    len_order: Endian::Big,
};

/// Pads `message` to a whole number of blocks.
///
/// The bit length is taken modulo 2^64; for a 16-byte field the upper
/// 8 bytes are always zero.
pub(crate) fn pad(message: &[u8], layout: &BlockLayout) -> Vec<u8> {
    let bit_len = (message.len() as u64).wrapping_mul(8);
    let padded_len = (message.len() + 1 + layout.len_field).div_ceil(layout.block_len)
        * layout.block_len;

    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(padded_len - 8, 0);

    match layout.len_order {
        Endian::Little => padded.extend_from_slice(&bit_len.to_le_bytes()),
        Endian::Big => padded.extend_from_slice(&bit_len.to_be_bytes()),
    }

    debug_assert_eq!(padded.len() % layout.block_len, 0);
    padded
}
