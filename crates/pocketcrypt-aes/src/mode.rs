// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block chaining modes.
//!
//! In both modes ciphertext block `i` depends on plaintext block `i` and on
//! ciphertext block `i - 1`, with the IV standing in for block `-1`.

use pocketcrypt_util::xor_in_place;
use zeroize::Zeroize;

use crate::block::for_each_block;
use crate::key::AesKey;
use crate::types::{Block, Iv};

/// Chaining mode used by [`Cipher`](crate::Cipher).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Cipher block chaining: `C[i] = E(P[i] ^ C[i-1])`.
    #[default]
    Cbc,
    /// Full-block cipher feedback (CFB-128): `C[i] = P[i] ^ E(C[i-1])`.
    Cfb,
}

impl Mode {
    /// Encrypts every whole block of `buf` in place.
    pub(crate) fn encrypt_blocks(self, key: &AesKey, iv: &Iv, buf: &mut [u8]) {
        let mut chain: Block = *iv;

        match self {
            Mode::Cbc => for_each_block(buf, |block| {
                xor_in_place(block, &chain);
                key.encrypt_block_in_place(block);
                chain = *block;
            }),
            Mode::Cfb => for_each_block(buf, |block| {
                key.encrypt_block_in_place(&mut chain);
                xor_in_place(block, &chain);
                chain = *block;
            }),
        }

        chain.zeroize();
    }

    /// Decrypts every whole block of `buf` in place.
    pub(crate) fn decrypt_blocks(self, key: &AesKey, iv: &Iv, buf: &mut [u8]) {
        let mut chain: Block = *iv;
        let mut scratch: Block = [0; 16];

        match self {
            Mode::Cbc => for_each_block(buf, |block| {
                scratch = *block;
                key.decrypt_block_in_place(block);
                xor_in_place(block, &chain);
                chain = scratch;
            }),
            Mode::Cfb => for_each_block(buf, |block| {
                scratch = *block;
                key.encrypt_block_in_place(&mut chain);
                xor_in_place(block, &chain);
                chain = scratch;
            }),
        }

        chain.zeroize();
        scratch.zeroize();
    }
}
