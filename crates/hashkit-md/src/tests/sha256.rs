// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Test for sha256 (full SHA-256 with padding)
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS)
//     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
// [2] RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//     https://www.rfc-editor.org/rfc/rfc6234.html#section-8.5

use hashkit_core::HashFunction;
use hashkit_util::decode_hex;

use crate::{Sha256, sha256, sha256_raw};

#[test]
fn test_sha256_abc() {
    let digest = Sha256::digest(b"abc");
    let expected = decode_hex("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");

    assert_eq!(digest.as_slice(), expected.as_slice(), "SHA-256 hash mismatch for 'abc'");
}

#[test]
fn test_sha256_empty() {
    assert_eq!(
        sha256(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_sha256_56_bytes() {
    // Exactly 56 bytes forces a second block with only padding + length
    let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    assert_eq!(msg.len(), 56, "Test vector should be 56 bytes");

    assert_eq!(
        sha256_raw(msg),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn test_sha256_112_bytes() {
    // Two complete blocks (64 + 48 + padding in second block)
    let msg = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
    assert_eq!(msg.len(), 112, "Test vector should be 112 bytes");

    assert_eq!(
        sha256_raw(msg),
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1"
    );
}

#[test]
fn test_sha256_million_a() {
    let msg = vec![b'a'; 1_000_000];
    assert_eq!(
        sha256_raw(&msg),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}
