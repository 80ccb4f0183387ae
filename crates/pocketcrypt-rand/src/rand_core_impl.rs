// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `rand_core` interop.
//!
//! Lets a seeded [`Rng`] drive ecosystem code that expects
//! [`rand_core::RngCore`]. `CryptoRng` is not implemented: the
//! output is only as strong as the entropy source behind it.

use rand_core::RngCore;

use crate::rng::Rng;
use crate::traits::EntropySource;

impl<S: EntropySource> RngCore for Rng<S> {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        Rng::fill(self, &mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        Rng::fill(self, &mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        Rng::fill(self, dst)
    }
}
