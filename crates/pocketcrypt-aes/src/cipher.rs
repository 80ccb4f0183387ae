// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Padded encryption of arbitrary-length messages.

use alloc::vec::Vec;

use pocketcrypt_rand::RandomSource;
use zeroize::Zeroize;

use crate::consts::{BLOCK_LEN, IV_LEN};
use crate::error::AesError;
use crate::key::AesKey;
use crate::mode::Mode;
use crate::padding::{pad, pad_in_place, unpad};
use crate::types::Iv;

/// AES key bound to a chaining mode.
///
/// Every [`encrypt`](Self::encrypt) draws a fresh IV from the supplied random
/// source. The IV travels with the ciphertext; it is not secret, but the same
/// IV must never be used twice under one key.
///
/// # Example
///
/// ```rust
/// use pocketcrypt_aes::{AesKey, Cipher, Mode};
/// use pocketcrypt_rand::{Rng, RngConfig, SystemEntropySource};
///
/// let key = AesKey::new(&[7u8; 32]).expect("Failed to AesKey::new(..)");
/// let cipher = Cipher::new(&key, Mode::Cbc);
/// let mut rng = Rng::new(SystemEntropySource, RngConfig::default())
///     .expect("Failed to Rng::new(..)");
///
/// let (iv, ciphertext) = cipher.encrypt(&mut rng, b"attack at dawn");
/// let plaintext = cipher.decrypt(&iv, &ciphertext).expect("Failed to decrypt(..)");
///
/// assert_eq!(plaintext, b"attack at dawn");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cipher<'k> {
    key: &'k AesKey,
    mode: Mode,
}

impl<'k> Cipher<'k> {
    /// Binds `key` to `mode`.
    pub fn new(key: &'k AesKey, mode: Mode) -> Self {
        Self { key, mode }
    }

    /// Chaining mode in use.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Pads and encrypts `plaintext` under a fresh IV drawn from `rng`.
    ///
    /// Returns the IV and a ciphertext of `padded_len(plaintext.len())` bytes.
    pub fn encrypt<R>(&self, rng: &mut R, plaintext: &[u8]) -> (Iv, Vec<u8>)
    where
        R: RandomSource + ?Sized,
    {
        let iv = generate_iv(rng);
        let ciphertext = self.encrypt_with_iv(&iv, plaintext);

        (iv, ciphertext)
    }

    /// Pads and encrypts `plaintext` under a caller-chosen IV.
    ///
    /// Meant for known-answer tests and protocols that derive the IV
    /// themselves; uniqueness of `iv` becomes the caller's responsibility.
    pub fn encrypt_with_iv(&self, iv: &Iv, plaintext: &[u8]) -> Vec<u8> {
        let mut buf = pad(plaintext);
        self.mode.encrypt_blocks(self.key, iv, &mut buf);
        buf
    }

    /// Decrypts `ciphertext` and strips its padding.
    ///
    /// # Errors
    ///
    /// - [`AesError::InvalidCiphertextLength`] if the length is not a multiple
    ///   of 16, checked before any decryption happens.
    /// - [`AesError::InvalidPadding`] if the recovered trailer is malformed
    ///   (including an empty ciphertext). No partial plaintext is returned.
    pub fn decrypt(&self, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>, AesError> {
        check_ciphertext_len(ciphertext.len())?;

        let mut buf = ciphertext.to_vec();
        self.mode.decrypt_blocks(self.key, iv, &mut buf);

        match unpad(&buf).map(<[u8]>::len) {
            Ok(plain_len) => {
                buf[plain_len..].zeroize();
                buf.truncate(plain_len);
                Ok(buf)
            }
            Err(err) => {
                buf.as_mut_slice().zeroize();
                Err(err)
            }
        }
    }

    /// Pads the first `msg_len` bytes of `buf` and encrypts them in place
    /// under a fresh IV.
    ///
    /// Returns the IV and the ciphertext length. The buffer must have room for
    /// the padding; the size check happens before the IV is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`AesError::BufferTooSmall`] if `buf` cannot hold
    /// `padded_len(msg_len)` bytes.
    pub fn encrypt_in_place<R>(
        &self,
        rng: &mut R,
        buf: &mut [u8],
        msg_len: usize,
    ) -> Result<(Iv, usize), AesError>
    where
        R: RandomSource + ?Sized,
    {
        let padded = pad_in_place(buf, msg_len)?;
        let iv = generate_iv(rng);

        self.mode.encrypt_blocks(self.key, &iv, &mut buf[..padded]);

        Ok((iv, padded))
    }

    /// Decrypts `buf` in place and returns the plaintext length.
    ///
    /// The plaintext occupies `buf[..len]`; the trailing padding bytes are
    /// left in the buffer.
    ///
    /// # Errors
    ///
    /// Same conditions as [`decrypt`](Self::decrypt). On error `buf` holds the
    /// original ciphertext again.
    pub fn decrypt_in_place(&self, iv: &Iv, buf: &mut [u8]) -> Result<usize, AesError> {
        check_ciphertext_len(buf.len())?;

        self.mode.decrypt_blocks(self.key, iv, buf);

        match unpad(buf).map(<[u8]>::len) {
            Ok(plain_len) => Ok(plain_len),
            Err(err) => {
                self.mode.encrypt_blocks(self.key, iv, buf);
                Err(err)
            }
        }
    }
}

fn check_ciphertext_len(len: usize) -> Result<(), AesError> {
    if len % BLOCK_LEN != 0 {
        return Err(AesError::InvalidCiphertextLength { len });
    }

    Ok(())
}

fn generate_iv<R>(rng: &mut R) -> Iv
where
    R: RandomSource + ?Sized,
{
    let mut iv = [0u8; IV_LEN];
    rng.fill(&mut iv);
    iv
}
