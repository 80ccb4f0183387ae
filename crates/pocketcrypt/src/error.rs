// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use pocketcrypt_aes::AesError;
use pocketcrypt_rand::EntropyError;
use pocketcrypt_sha256::HashError;

/// Any error raised by the pocketcrypt primitives
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Hash context lifecycle misuse
    #[error(transparent)]
    Hash(#[from] HashError),

    /// Key, padding or ciphertext rejected by the AES layer
    #[error(transparent)]
    Aes(#[from] AesError),

    /// Random generator could not be seeded or was not initialised
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

impl Error {
    /// Whether the error leaves the system without a usable random source.
    ///
    /// Callers are expected to halt on these rather than retry.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Entropy(EntropyError::EntropySourceUnavailable))
    }
}
