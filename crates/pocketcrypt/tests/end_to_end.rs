// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod end_to_end_tests {
    use pocketcrypt::rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
    use pocketcrypt::{
        AesKey, Cipher, Error, HmacSha256, Mode, NoiseEntropySource, Rng, RngConfig, SharedRng,
        SystemEntropySource, hmac_sha256, sha256,
    };

    const MAC_LEN: usize = 32;

    /// Encrypt-then-MAC frame: `iv || ciphertext || tag`.
    fn seal(
        rng: &mut Rng<SystemEntropySource>,
        enc_key: &AesKey,
        mac_key: &[u8],
        msg: &[u8],
    ) -> Vec<u8> {
        let (iv, ciphertext) = Cipher::new(enc_key, Mode::Cbc).encrypt(rng, msg);

        let mut frame = Vec::with_capacity(16 + ciphertext.len() + MAC_LEN);
        frame.extend_from_slice(&iv);
        frame.extend_from_slice(&ciphertext);

        let tag = hmac_sha256(mac_key, &frame);
        frame.extend_from_slice(tag.as_bytes());

        frame
    }

    fn open(enc_key: &AesKey, mac_key: &[u8], frame: &[u8]) -> Option<Result<Vec<u8>, Error>> {
        let (body, tag) = frame.split_at(frame.len().checked_sub(MAC_LEN)?);

        let mut mac = HmacSha256::new(mac_key);
        mac.update(body);
        if !mac.verify(tag) {
            return None;
        }

        let (iv, ciphertext) = body.split_first_chunk::<16>()?;
        Some(
            Cipher::new(enc_key, Mode::Cbc)
                .decrypt(iv, ciphertext)
                .map_err(Error::from),
        )
    }

    #[test]
    fn test_seal_and_open() {
        let mut rng =
            Rng::new(SystemEntropySource, RngConfig::default()).expect("Failed to Rng::new(..)");

        let mut raw_key = [0u8; 16];
        rng.fill(&mut raw_key);
        let enc_key = AesKey::new(&raw_key).expect("Failed to AesKey::new(..)");
        let mac_key = sha256(&raw_key);

        let frame = seal(&mut rng, &enc_key, mac_key.as_bytes(), b"temperature=21.5");
        let opened = open(&enc_key, mac_key.as_bytes(), &frame)
            .expect("Failed to verify frame")
            .expect("Failed to decrypt frame");

        assert_eq!(opened, b"temperature=21.5");
    }

    #[test]
    fn test_tampered_frame_is_rejected_before_decryption() {
        let mut rng =
            Rng::new(SystemEntropySource, RngConfig::default()).expect("Failed to Rng::new(..)");
        let enc_key = AesKey::new(&[0x24; 32]).expect("Failed to AesKey::new(..)");
        let mac_key = [0x42u8; 32];

        let mut frame = seal(&mut rng, &enc_key, &mac_key, b"open the door");
        frame[20] ^= 1;

        assert!(open(&enc_key, &mac_key, &frame).is_none());
    }

    #[test]
    fn test_static_shared_rng_drives_cipher() {
        static RNG: SharedRng<MockEntropySource> = SharedRng::uninit();

        assert!(matches!(RNG.get(), Err(pocketcrypt::EntropyError::NotInitialized)));

        RNG.init(
            MockEntropySource::new(MockEntropySourceBehaviour::None),
            RngConfig::default(),
        )
        .expect("Failed to init(..)");

        let key = AesKey::new(&[1u8; 24]).expect("Failed to AesKey::new(..)");
        let cipher = Cipher::new(&key, Mode::Cfb);

        let (iv, ciphertext) = {
            let mut guard = RNG.lock().expect("Failed to lock()");
            cipher.encrypt(&mut guard, b"interrupt-free context")
        };

        let plaintext = cipher
            .decrypt(&iv, &ciphertext)
            .expect("Failed to decrypt(..)");
        assert_eq!(plaintext, b"interrupt-free context");
    }

    #[test]
    fn test_noise_seeded_rng_generates_distinct_ivs() {
        let mut x = 0x1234_5678u32;
        let adc = NoiseEntropySource::new(move || {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x
        });
        let mut rng = Rng::new(adc, RngConfig::default()).expect("Failed to Rng::new(..)");

        let key = AesKey::new(&[9u8; 16]).expect("Failed to AesKey::new(..)");
        let cipher = Cipher::new(&key, Mode::Cbc);

        let ivs: Vec<[u8; 16]> = (0..32).map(|_| cipher.encrypt(&mut rng, b"x").0).collect();

        for i in 0..ivs.len() {
            for j in (i + 1)..ivs.len() {
                assert_ne!(ivs[i], ivs[j]);
            }
        }
    }

    #[test]
    fn test_dead_entropy_source_is_fatal() {
        let dead = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);

        let err = Error::from(
            Rng::new(dead, RngConfig::default()).expect_err("Rng::new(..) should fail"),
        );

        assert!(err.is_fatal());
    }
}
