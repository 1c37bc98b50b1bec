// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Block size in bytes for MD4, MD5, SHA-1 and SHA-256
pub const MD_BLOCK_LEN: usize = 64;

/// SHA-512 block size in bytes
pub const SHA512_BLOCK_LEN: usize = 128;

/// MD4 output size in bytes
pub const MD4_HASH_LEN: usize = 16;

/// MD5 output size in bytes
pub const MD5_HASH_LEN: usize = 16;

/// SHA-1 output size in bytes
pub const SHA1_HASH_LEN: usize = 20;

/// SHA-256 output size in bytes
pub const SHA256_HASH_LEN: usize = 32;

/// SHA-512 output size in bytes
pub const SHA512_HASH_LEN: usize = 64;
