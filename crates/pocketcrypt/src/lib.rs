// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # pocketcrypt
//!
//! Minimal cryptographic primitives for microcontroller-class devices:
//!
//! - **Hashing**: SHA-256 and HMAC-SHA256 ([`hash`])
//! - **Encryption**: AES-128/192/256 with PKCS7 padding, CBC or CFB chaining
//!   ([`aes`])
//! - **Randomness**: a byte-granular generator seeded from an entropy source,
//!   usable without a hardware RNG ([`rand`])
//!
//! Everything is `no_std`. Hashing, key expansion and block transforms never
//! allocate; the padded cipher offers `Vec` conveniences next to in-place
//! variants.
//!
//! # Quick Start
//!
//! ```rust
//! use pocketcrypt::{AesKey, Cipher, Mode, Rng, RngConfig, SystemEntropySource, sha256};
//!
//! fn main() -> Result<(), pocketcrypt::Error> {
//!     // Fatal if the entropy source is unavailable.
//!     let mut rng = Rng::new(SystemEntropySource, RngConfig::default())?;
//!
//!     let mut raw_key = [0u8; 32];
//!     rng.fill(&mut raw_key);
//!     let key = AesKey::new(&raw_key)?;
//!
//!     let cipher = Cipher::new(&key, Mode::Cbc);
//!     let (iv, ciphertext) = cipher.encrypt(&mut rng, b"sensor reading: 21.5C");
//!     let plaintext = cipher.decrypt(&iv, &ciphertext)?;
//!
//!     assert_eq!(plaintext, b"sensor reading: 21.5C");
//!     assert_eq!(sha256(&plaintext), sha256(b"sensor reading: 21.5C"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Entropy
//!
//! The generator is only as unpredictable as its seed. On hosted targets use
//! [`SystemEntropySource`]; on bare metal, supply a noisy reading (floating
//! ADC pin, timer jitter) through [`NoiseEntropySource`], or implement
//! [`EntropySource`] for a hardware RNG peripheral. See [`rand`] for the
//! exact construction.
//!
//! # Logging
//!
//! Diagnostic events go through the [`log`](https://docs.rs/log) facade;
//! install any logger to see them. Keys, seeds, IVs, plaintexts and digests
//! are never logged.
//!
//! # Security
//!
//! AES here provides confidentiality only. There is no authentication: pair
//! ciphertexts with [`HmacSha256`] (encrypt-then-MAC) if tampering matters. No
//! side-channel hardening is attempted beyond constant-time comparisons.
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod error;

pub use error::Error;

pub use pocketcrypt_aes as aes;
pub use pocketcrypt_rand as rand;
pub use pocketcrypt_sha256 as hash;

pub use pocketcrypt_aes::{AesError, AesKey, Block, Cipher, Iv, KeySize, Mode, pad, unpad};
pub use pocketcrypt_rand::{
    EntropyError, EntropySource, NoiseConfig, NoiseEntropySource, RandomSource, Rng, RngConfig,
    SharedRng,
};
#[cfg(not(target_os = "none"))]
pub use pocketcrypt_rand::SystemEntropySource;
pub use pocketcrypt_sha256::{Digest, HashError, HmacSha256, Sha256, hmac_sha256, sha256};
