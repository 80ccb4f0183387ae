// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Expanded AES key (FIPS-197 section 5.2).

use core::fmt;

use log::debug;
use pocketcrypt_util::u32_from_be;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{self, sub_word};
use crate::consts::{RCON, SCHEDULE_WORDS};
use crate::error::AesError;
use crate::types::Block;

/// AES variant, selected by the raw key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    /// 16-byte key, 10 rounds
    Aes128,
    /// 24-byte key, 12 rounds
    Aes192,
    /// 32-byte key, 14 rounds
    Aes256,
}

impl KeySize {
    /// Variant for a raw key of `len` bytes, if any.
    pub const fn from_key_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Aes128),
            24 => Some(Self::Aes192),
            32 => Some(Self::Aes256),
            _ => None,
        }
    }

    /// Raw key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Number of rounds (Nr).
    pub const fn rounds(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }

    /// Key length in 32-bit words (Nk).
    const fn words(self) -> usize {
        self.key_len() / 4
    }
}

/// Expanded round-key schedule.
///
/// Derived once from the raw key and immutable afterwards, so a single key can
/// be shared by reference between contexts. The schedule is zeroized on drop
/// and never printed. There is no way to wipe a live key: an `AesKey` always
/// holds a valid schedule.
///
/// # Example
///
/// ```rust
/// use pocketcrypt_aes::{AesKey, KeySize};
///
/// let key = AesKey::new(&[0x2b; 16]).expect("Failed to AesKey::new(..)");
/// assert_eq!(key.key_size(), KeySize::Aes128);
///
/// let block = [0u8; 16];
/// let ct = key.encrypt_block(&block);
/// assert_eq!(key.decrypt_block(&ct), block);
/// ```
#[derive(Clone)]
pub struct AesKey {
    round_keys: [u32; SCHEDULE_WORDS],
    key_size: KeySize,
}

impl AesKey {
    /// Runs the key expansion on `raw_key`.
    ///
    /// # Errors
    ///
    /// Returns [`AesError::InvalidKeyLength`] unless `raw_key` is 16, 24 or 32
    /// bytes long.
    pub fn new(raw_key: &[u8]) -> Result<Self, AesError> {
        let Some(key_size) = KeySize::from_key_len(raw_key.len()) else {
            debug!("aes: rejected key of {} bytes", raw_key.len());
            return Err(AesError::InvalidKeyLength {
                len: raw_key.len(),
            });
        };

        let mut key = Self {
            round_keys: [0; SCHEDULE_WORDS],
            key_size,
        };
        key.expand(raw_key);

        Ok(key)
    }

    fn expand(&mut self, raw_key: &[u8]) {
        let nk = self.key_size.words();
        let total = 4 * (self.key_size.rounds() + 1);
        let mut be_bytes_tmp = [0u8; 4];

        for (word, chunk) in self.round_keys.iter_mut().zip(raw_key.chunks_exact(4)) {
            be_bytes_tmp.copy_from_slice(chunk);
            u32_from_be(word, &mut be_bytes_tmp);
        }

        let mut temp = 0u32;

        for i in nk..total {
            temp = self.round_keys[i - 1];

            if i % nk == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ (u32::from(RCON[i / nk - 1]) << 24);
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }

            self.round_keys[i] = self.round_keys[i - nk] ^ temp;
        }

        temp.zeroize();
    }

    /// Number of rounds (10, 12 or 14).
    pub fn rounds(&self) -> usize {
        self.key_size.rounds()
    }

    /// AES variant of this key.
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        let mut out = *block;
        self.encrypt_block_in_place(&mut out);
        out
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        let mut out = *block;
        self.decrypt_block_in_place(&mut out);
        out
    }

    /// Encrypts `block` in place.
    pub fn encrypt_block_in_place(&self, block: &mut Block) {
        block::encrypt(&self.round_keys, self.rounds(), block);
    }

    /// Decrypts `block` in place.
    pub fn decrypt_block_in_place(&self, block: &mut Block) {
        block::decrypt(&self.round_keys, self.rounds(), block);
    }

    #[cfg(test)]
    pub(crate) fn round_keys(&self) -> &[u32] {
        &self.round_keys[..4 * (self.rounds() + 1)]
    }
}

impl Drop for AesKey {
    fn drop(&mut self) {
        self.round_keys.zeroize();
    }
}

impl ZeroizeOnDrop for AesKey {}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesKey")
            .field("key_size", &self.key_size)
            .finish_non_exhaustive()
    }
}
