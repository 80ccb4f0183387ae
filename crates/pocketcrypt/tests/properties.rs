// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod properties_tests {
    use pocketcrypt::rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
    use pocketcrypt::{AesKey, Cipher, Mode, Rng, RngConfig, Sha256, pad, sha256, unpad};
    use pocketcrypt_util::hex_to_array;
    use proptest::prelude::*;

    fn rng_from_seed(seed: u64) -> Rng<MockEntropySource> {
        let source = MockEntropySource::with_seed(seed, MockEntropySourceBehaviour::None);
        Rng::new(source, RngConfig::default()).expect("Failed to Rng::new(..)")
    }

    #[test]
    fn test_known_digest_through_facade() {
        let expected: [u8; 32] =
            hex_to_array("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");

        assert_eq!(sha256(b"abc").into_bytes(), expected);
    }

    proptest! {
        #[test]
        fn prop_hash_is_chunking_independent(
            data in proptest::collection::vec(any::<u8>(), 0..300),
            cut in any::<prop::sample::Index>(),
        ) {
            let split = cut.index(data.len() + 1);

            let mut ctx = Sha256::new();
            ctx.update(&data[..split]);
            ctx.update(&data[split..]);

            prop_assert_eq!(ctx.finalize(), sha256(&data));
        }

        #[test]
        fn prop_cipher_round_trip(
            seed in 1u64..,
            raw_key in proptest::collection::vec(any::<u8>(), 32..=32),
            plaintext in proptest::collection::vec(any::<u8>(), 0..130),
            cfb in any::<bool>(),
        ) {
            let mut rng = rng_from_seed(seed);
            let key = AesKey::new(&raw_key).expect("Failed to AesKey::new(..)");
            let cipher = Cipher::new(&key, if cfb { Mode::Cfb } else { Mode::Cbc });

            let (iv, ciphertext) = cipher.encrypt(&mut rng, &plaintext);
            prop_assert_eq!(ciphertext.len() % 16, 0);
            prop_assert!(ciphertext.len() > plaintext.len());

            let recovered = cipher.decrypt(&iv, &ciphertext).expect("Failed to decrypt(..)");
            prop_assert_eq!(recovered, plaintext);
        }

        #[test]
        fn prop_pad_unpad(msg in proptest::collection::vec(any::<u8>(), 0..70)) {
            let padded = pad(&msg);
            prop_assert_eq!(unpad(&padded).expect("Failed to unpad(..)"), &msg[..]);
        }
    }
}
