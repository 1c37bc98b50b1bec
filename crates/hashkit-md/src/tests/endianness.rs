// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// The little-endian (MD4/MD5) and big-endian (SHA-1/SHA-256) serialization
// paths must stay distinct.

use hashkit_core::HashFunction;
use hashkit_util::{Endian, bytes_to_words32, words32_to_hex};

use crate::{Md4, Md5, Sha1, Sha256};

const INPUTS: [&[u8]; 5] = [b"", b"a", b"abc", b"message digest", &[0u8; 64]];

fn reverse_bits(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().map(|b| b.reverse_bits()).collect()
}

fn swap_word_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes
        .chunks(4)
        .flat_map(|w| w.iter().rev().copied())
        .collect()
}

#[test]
fn test_md_family_is_not_a_reordering_of_sha_family() {
    for input in INPUTS {
        let sha1 = Sha1::digest(input);
        let sha256 = Sha256::digest(input);

        for little in [Md4::digest(input), Md5::digest(input)] {
            for candidate in [reverse_bits(&little), swap_word_bytes(&little)] {
                assert_ne!(&candidate[..], &sha1[..16]);
                assert_ne!(&candidate[..], &sha256[..16]);
            }
        }
    }
}

#[test]
fn test_md5_digest_is_little_endian_serialization() {
    let digest = Md5::digest(b"abc");
    let words = bytes_to_words32(&digest, Endian::Little);

    assert_eq!(words32_to_hex(&words, Endian::Little), Md5::hash("abc"));
    assert_ne!(words32_to_hex(&words, Endian::Big), Md5::hash("abc"));
}

#[test]
fn test_sha256_digest_is_big_endian_serialization() {
    let digest = Sha256::digest(b"abc");
    let words = bytes_to_words32(&digest, Endian::Big);

    assert_eq!(words32_to_hex(&words, Endian::Big), Sha256::hash("abc"));
    assert_ne!(words32_to_hex(&words, Endian::Little), Sha256::hash("abc"));
}
