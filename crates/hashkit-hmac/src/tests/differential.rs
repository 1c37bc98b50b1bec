// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cross-checks against the RustCrypto `hmac` crate.

use ::hmac::{Mac, SimpleHmac};
use proptest::prelude::*;

use hashkit_md::{Md5, Sha1, Sha256, Sha512};
use hashkit_sha3::Sha3_512;

use crate::hmac;

fn reference<D>(key: &[u8], message: &[u8]) -> Vec<u8>
where
    D: ::sha2::Digest + ::sha2::digest::core_api::BlockSizeUser,
{
    let mut mac = SimpleHmac::<D>::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

#[test]
fn test_key_length_boundaries() {
    let message = b"boundary message";

    for key_len in [0usize, 1, 20, 63, 64, 65, 71, 72, 73, 127, 128, 129, 200] {
        let key: Vec<u8> = (0..key_len).map(|i| i as u8).collect();

        assert_eq!(
            hmac::<Md5>(&key, message).to_vec(),
            reference::<::md5::Md5>(&key, message),
            "HMAC-MD5 key length {key_len}"
        );
        assert_eq!(
            hmac::<Sha1>(&key, message).to_vec(),
            reference::<::sha1::Sha1>(&key, message),
            "HMAC-SHA1 key length {key_len}"
        );
        assert_eq!(
            hmac::<Sha256>(&key, message).to_vec(),
            reference::<::sha2::Sha256>(&key, message),
            "HMAC-SHA256 key length {key_len}"
        );
        assert_eq!(
            hmac::<Sha512>(&key, message).to_vec(),
            reference::<::sha2::Sha512>(&key, message),
            "HMAC-SHA512 key length {key_len}"
        );
        assert_eq!(
            hmac::<Sha3_512>(&key, message).to_vec(),
            reference::<::sha3::Sha3_512>(&key, message),
            "HMAC-SHA3-512 key length {key_len}"
        );
    }
}

proptest! {
    #[test]
    fn prop_hmac_sha256_matches_reference(
        key in prop::collection::vec(any::<u8>(), 0..200),
        message in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        prop_assert_eq!(
            hmac::<Sha256>(&key, &message).to_vec(),
            reference::<::sha2::Sha256>(&key, &message)
        );
    }

    #[test]
    fn prop_hmac_sha512_matches_reference(
        key in prop::collection::vec(any::<u8>(), 0..300),
        message in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        prop_assert_eq!(
            hmac::<Sha512>(&key, &message).to_vec(),
            reference::<::sha2::Sha512>(&key, &message)
        );
    }

    #[test]
    fn prop_hmac_sha1_matches_reference(
        key in prop::collection::vec(any::<u8>(), 0..200),
        message in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        prop_assert_eq!(
            hmac::<Sha1>(&key, &message).to_vec(),
            reference::<::sha1::Sha1>(&key, &message)
        );
    }

    #[test]
    fn prop_hmac_sha3_512_matches_reference(
        key in prop::collection::vec(any::<u8>(), 0..200),
        message in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        prop_assert_eq!(
            hmac::<Sha3_512>(&key, &message).to_vec(),
            reference::<::sha3::Sha3_512>(&key, &message)
        );
    }
}
