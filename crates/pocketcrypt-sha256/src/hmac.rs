// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 per RFC 2104

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, DIGEST_LEN};
use crate::digest::Digest;
use crate::error::HashError;
use crate::sha256::{ContextState, Sha256};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Streaming HMAC-SHA256.
///
/// The keyed inner and outer contexts are prepared once in [`new`](Self::new);
/// the key itself is not retained. Like [`Sha256`], the context produces exactly
/// one tag. Both keyed contexts are wiped on drop.
#[derive(Clone)]
pub struct HmacSha256 {
    // SHA256(K ⊕ ipad || message)
    inner: Sha256,
    // SHA256(K ⊕ opad || inner digest)
    outer: Sha256,
}

impl HmacSha256 {
    /// Prepares an HMAC context for `key`. Keys longer than one block are hashed first.
    pub fn new(key: &[u8]) -> Self {
        let mut key_block = [0u8; BLOCK_LEN];

        if key.len() > BLOCK_LEN {
            let hashed = crate::sha256(key);
            key_block[..DIGEST_LEN].copy_from_slice(hashed.as_bytes());
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let mut pad = [0u8; BLOCK_LEN];
        let mut inner = Sha256::new();
        let mut outer = Sha256::new();

        for (p, k) in pad.iter_mut().zip(key_block.iter()) {
            *p = k ^ IPAD;
        }
        inner.update(&pad);

        for (p, k) in pad.iter_mut().zip(key_block.iter()) {
            *p = k ^ OPAD;
        }
        outer.update(&pad);

        pad.zeroize();
        key_block.zeroize();

        Self { inner, outer }
    }

    /// Absorbs message bytes.
    ///
    /// # Panics
    ///
    /// Panics if the tag was already produced.
    pub fn update(&mut self, data: &[u8]) {
        assert!(
            self.inner.state() == ContextState::Ready,
            "HmacSha256::update called after finalize"
        );
        self.inner.update(data);
    }

    /// Absorbs message bytes, or fails with [`HashError::Finalized`].
    pub fn try_update(&mut self, data: &[u8]) -> Result<(), HashError> {
        self.inner.try_update(data)
    }

    /// Produces the authentication tag.
    ///
    /// # Panics
    ///
    /// Panics if called twice.
    pub fn finalize(&mut self) -> Digest {
        assert!(
            self.inner.state() == ContextState::Ready,
            "HmacSha256::finalize called twice"
        );
        self.finish()
    }

    /// Produces the authentication tag, or fails with [`HashError::Finalized`].
    pub fn try_finalize(&mut self) -> Result<Digest, HashError> {
        if self.inner.state() == ContextState::Finalized {
            return Err(HashError::Finalized);
        }

        Ok(self.finish())
    }

    /// Recomputes the tag over everything absorbed so far and compares it with
    /// `expected` in constant time.
    ///
    /// # Panics
    ///
    /// Panics if the tag was already produced.
    pub fn verify(&mut self, expected: &[u8]) -> bool {
        let tag = self.finalize();
        pocketcrypt_util::constant_time_eq(tag.as_bytes(), expected)
    }

    fn finish(&mut self) -> Digest {
        let inner_digest = self.inner.finalize();
        self.outer.update(inner_digest.as_bytes());
        self.outer.finalize()
    }
}

impl ZeroizeOnDrop for HmacSha256 {}

impl core::fmt::Debug for HmacSha256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "HmacSha256([REDACTED])")
    }
}

/// Computes HMAC-SHA256(`key`, `data`) in one call.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Digest {
    let mut mac = HmacSha256::new(key);
    mac.update(data);
    mac.finalize()
}
