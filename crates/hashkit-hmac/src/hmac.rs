// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use hashkit_core::HashFunction;
use hashkit_md::{Md4, Md5, Sha1, Sha256, Sha512};
use hashkit_sha3::Sha3_512;
use hashkit_util::{bytes_to_hex, text_to_bytes, zeroize_slice};

use crate::error::HmacError;

/// Inner pad byte
pub const IPAD: u8 = 0x36;
/// Outer pad byte
pub const OPAD: u8 = 0x5c;

/// HMAC over `H` per RFC 2104.
///
/// Keys longer than `H::BLOCK_LEN` are hashed first. Every scratch buffer that
/// holds key material is wiped before returning.
///
/// # Example
///
/// ```
/// use hashkit_hmac::hmac;
/// use hashkit_md::Sha256;
/// use hashkit_util::bytes_to_hex;
///
/// let tag = hmac::<Sha256>(b"key", b"The quick brown fox jumps over the lazy dog");
/// assert_eq!(
///     bytes_to_hex(&tag),
///     "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
/// );
/// ```
pub fn hmac<H: HashFunction>(key: &[u8], message: &[u8]) -> H::Output {
    let mut key_block = vec![0u8; H::BLOCK_LEN];

    if key.len() > H::BLOCK_LEN {
        tracing::trace!(
            algorithm = H::NAME,
            key_len = key.len(),
            block_len = H::BLOCK_LEN,
            "hashing oversized HMAC key"
        );
        let hashed_key = H::digest(key);
        key_block[..H::HASH_LEN].copy_from_slice(hashed_key.as_ref());
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    // Inner hash: H(K' ⊕ ipad || message)
    let mut inner_input = Vec::with_capacity(H::BLOCK_LEN + message.len());
    inner_input.extend(key_block.iter().map(|b| b ^ IPAD));
    inner_input.extend_from_slice(message);
    let inner_hash = H::digest(&inner_input);

    // Outer hash: H(K' ⊕ opad || inner)
    let mut outer_input = Vec::with_capacity(H::BLOCK_LEN + H::HASH_LEN);
    outer_input.extend(key_block.iter().map(|b| b ^ OPAD));
    outer_input.extend_from_slice(inner_hash.as_ref());
    let tag = H::digest(&outer_input);

    zeroize_slice(&mut key_block);
    zeroize_slice(&mut inner_input[..H::BLOCK_LEN]);
    zeroize_slice(&mut outer_input);

    tag
}

/// HMAC over `H` with UTF-8 text key and message, as lowercase hex.
pub fn hmac_hex<H: HashFunction>(key: &str, message: &str) -> String {
    bytes_to_hex(hmac::<H>(text_to_bytes(key), text_to_bytes(message)).as_ref())
}

/// [`hmac_hex`] with an explicit block length.
///
/// Kept for callers that pass the block length alongside the hash function.
///
/// # Errors
///
/// Returns [`HmacError::BlockLenMismatch`] when `block_len` is not
/// `H::BLOCK_LEN`. A wrong block length would silently produce a tag no other
/// implementation agrees with.
pub fn hmac_with_block_len<H: HashFunction>(
    key: &str,
    message: &str,
    block_len: usize,
) -> Result<String, HmacError> {
    if block_len != H::BLOCK_LEN {
        tracing::warn!(
            algorithm = H::NAME,
            expected = H::BLOCK_LEN,
            got = block_len,
            "HMAC block length mismatch"
        );
        return Err(HmacError::BlockLenMismatch {
            algorithm: H::NAME,
            expected: H::BLOCK_LEN,
            got: block_len,
        });
    }

    Ok(hmac_hex::<H>(key, message))
}

/// HMAC-MD4 of text, as lowercase hex.
pub fn hmac_md4(key: &str, message: &str) -> String {
    hmac_hex::<Md4>(key, message)
}

/// HMAC-MD5 of text, as lowercase hex.
pub fn hmac_md5(key: &str, message: &str) -> String {
    hmac_hex::<Md5>(key, message)
}

/// HMAC-SHA1 of text, as lowercase hex.
pub fn hmac_sha1(key: &str, message: &str) -> String {
    hmac_hex::<Sha1>(key, message)
}

/// HMAC-SHA256 of text, as lowercase hex.
pub fn hmac_sha256(key: &str, message: &str) -> String {
    hmac_hex::<Sha256>(key, message)
}

/// HMAC-SHA512 of text, as lowercase hex.
pub fn hmac_sha512(key: &str, message: &str) -> String {
    hmac_hex::<Sha512>(key, message)
}

/// HMAC-SHA3-512 of text, as lowercase hex.
pub fn hmac_sha3_512(key: &str, message: &str) -> String {
    hmac_hex::<Sha3_512>(key, message)
}
