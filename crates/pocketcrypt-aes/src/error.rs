// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// AES engine and padding layer error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesError {
    /// Raw key is not 16, 24 or 32 bytes long
    #[error("invalid key length: {len} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength {
        /// Length of the rejected key
        len: usize,
    },

    /// Malformed PKCS7 trailer
    #[error("invalid padding")]
    InvalidPadding,

    /// Ciphertext is not block-aligned
    #[error("invalid ciphertext length: {len} bytes is not a multiple of 16")]
    InvalidCiphertextLength {
        /// Length of the rejected ciphertext
        len: usize,
    },

    /// Caller buffer cannot hold the padded message
    #[error("buffer too small: {needed} bytes needed, {available} available")]
    BufferTooSmall {
        /// Bytes required after padding
        needed: usize,
        /// Bytes the caller provided
        available: usize,
    },
}
