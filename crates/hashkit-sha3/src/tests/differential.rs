// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Differential tests against the RustCrypto sha3 crate
//
// Lengths around the 72- and 136-byte rates exercise the single-byte 0x86 pad
// and the extra padding block.

use proptest::prelude::*;

use hashkit_core::HashFunction;

use crate::{Sha3_256, Sha3_512};

fn reference_512(data: &[u8]) -> Vec<u8> {
    <::sha3::Sha3_512 as ::sha3::Digest>::digest(data).to_vec()
}

fn reference_256(data: &[u8]) -> Vec<u8> {
    <::sha3::Sha3_256 as ::sha3::Digest>::digest(data).to_vec()
}

#[test]
fn test_rate_boundaries_match_reference() {
    for len in [0, 1, 70, 71, 72, 73, 143, 144, 145, 134, 135, 136, 137, 271, 272] {
        let msg: Vec<u8> = (0..len).map(|i| (i * 31 + 5) as u8).collect();

        assert_eq!(Sha3_512::digest(&msg).to_vec(), reference_512(&msg), "SHA3-512 len {len}");
        assert_eq!(Sha3_256::digest(&msg).to_vec(), reference_256(&msg), "SHA3-256 len {len}");
    }
}

proptest! {
    #[test]
    fn sha3_512_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..400)) {
        prop_assert_eq!(Sha3_512::digest(&data).to_vec(), reference_512(&data));
    }

    #[test]
    fn sha3_256_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..400)) {
        prop_assert_eq!(Sha3_256::digest(&data).to_vec(), reference_256(&data));
    }
}
