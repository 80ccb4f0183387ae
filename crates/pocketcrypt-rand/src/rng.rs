// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash-based byte generator seeded from an [`EntropySource`].
//!
//! # Entropy model
//!
//! The generator itself adds no entropy. Its output is
//! `SHA-256(0x00 || key || counter)` in 32-byte blocks, and after every block
//! the key is ratcheted to `SHA-256(0x01 || key || counter)`, so a captured
//! key does not reveal earlier output. Seeds are mixed in as
//! `key = SHA-256(0x02 || key || seed)`.
//!
//! Unpredictability is therefore bounded by what the entropy source delivered
//! at seed time: 256 bits from an OS CSPRNG, far less from a noisy ADC pin.
//! The generator refuses to start when the source fails or hands back an
//! obviously stuck seed (all bytes equal) instead of running on a fixed
//! sequence.

use core::fmt;

use log::{debug, error, trace, warn};
use pocketcrypt_sha256::{DIGEST_LEN, Sha256};
use zeroize::Zeroize;

use crate::config::RngConfig;
use crate::error::EntropyError;
use crate::traits::{EntropySource, RandomSource};

const SEED_LEN: usize = 32;
const OUTPUT_LEN: usize = DIGEST_LEN;

const DOMAIN_OUTPUT: u8 = 0x00;
const DOMAIN_RATCHET: u8 = 0x01;
const DOMAIN_SEED: u8 = 0x02;

/// Seeded random byte generator.
///
/// Owns its entropy source. Each call consumes and advances internal state,
/// so a single instance must not be driven from two execution contexts at
/// once; wrap it in a [`SharedRng`](crate::SharedRng) for that.
///
/// # Example
///
/// ```rust
/// use pocketcrypt_rand::{NoiseEntropySource, Rng, RngConfig};
///
/// // Stand-in for reading a floating ADC pin.
/// let mut x = 0x2545_f491u32;
/// let adc = NoiseEntropySource::new(move || {
///     x ^= x << 13;
///     x ^= x >> 17;
///     x ^= x << 5;
///     x
/// });
///
/// let mut rng = Rng::new(adc, RngConfig::default()).expect("Failed to seed rng");
/// let byte = rng.get();
/// let mut iv = [0u8; 16];
/// rng.fill(&mut iv);
/// # let _ = byte;
/// ```
pub struct Rng<S: EntropySource> {
    source: S,
    config: RngConfig,
    key: [u8; DIGEST_LEN],
    counter: u64,
    block: [u8; OUTPUT_LEN],
    cursor: usize,
    blocks_since_reseed: u32,
}

impl<S: EntropySource> Rng<S> {
    /// Seeds a new generator from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropySourceUnavailable`] if the source fails or
    /// yields a stuck seed. Callers should treat this as fatal.
    pub fn new(source: S, config: RngConfig) -> Result<Self, EntropyError> {
        let mut rng = Self {
            source,
            config,
            key: [0u8; DIGEST_LEN],
            counter: 0,
            block: [0u8; OUTPUT_LEN],
            cursor: OUTPUT_LEN,
            blocks_since_reseed: 0,
        };

        if let Err(err) = rng.reseed() {
            error!("rng: entropy source unavailable at start-up");
            return Err(err);
        }

        debug!(
            "rng: seeded (reseed interval: {} blocks)",
            config.reseed_interval
        );

        Ok(rng)
    }

    /// Returns one random byte and advances the state.
    pub fn get(&mut self) -> u8 {
        if self.cursor >= OUTPUT_LEN {
            self.refill();
        }

        let byte = core::mem::take(&mut self.block[self.cursor]);
        self.cursor += 1;

        byte
    }

    /// Fills `dest` with random bytes.
    pub fn fill(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.get();
        }
    }

    /// Mixes fresh seed material from the entropy source into the state.
    ///
    /// Buffered output produced under the previous key is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropySourceUnavailable`] if the source fails or
    /// yields a stuck seed; the current state is left untouched.
    pub fn reseed(&mut self) -> Result<(), EntropyError> {
        let mut seed = [0u8; SEED_LEN];

        let result = match self.source.fill_bytes(&mut seed) {
            Ok(()) if is_stuck(&seed) => Err(EntropyError::EntropySourceUnavailable),
            Ok(()) => Ok(()),
            Err(_) => Err(EntropyError::EntropySourceUnavailable),
        };

        if result.is_ok() {
            let mut ctx = Sha256::new();
            ctx.update(&[DOMAIN_SEED]);
            ctx.update(&self.key);
            ctx.update(&seed);
            self.key = ctx.finalize().into_bytes();

            self.block.zeroize();
            self.cursor = OUTPUT_LEN;
            self.blocks_since_reseed = 0;
        }

        seed.zeroize();
        result
    }

    /// Active configuration.
    pub fn config(&self) -> &RngConfig {
        &self.config
    }

    /// Borrows the entropy source.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn refill(&mut self) {
        let interval = self.config.reseed_interval;

        if interval != 0 && self.blocks_since_reseed >= interval {
            match self.reseed() {
                Ok(()) => trace!("rng: automatic reseed"),
                Err(_) => {
                    // Keep ratcheting the current key; retry after another interval
                    warn!("rng: automatic reseed failed, continuing on current state");
                    self.blocks_since_reseed = 0;
                }
            }
        }

        let counter = self.counter.to_be_bytes();
        let mut ctx = Sha256::new();

        ctx.update(&[DOMAIN_OUTPUT]);
        ctx.update(&self.key);
        ctx.update(&counter);
        self.block = ctx.finalize().into_bytes();

        ctx.reset();
        ctx.update(&[DOMAIN_RATCHET]);
        ctx.update(&self.key);
        ctx.update(&counter);
        self.key = ctx.finalize().into_bytes();

        self.counter = self.counter.wrapping_add(1);
        self.blocks_since_reseed = self.blocks_since_reseed.saturating_add(1);
        self.cursor = 0;
    }
}

fn is_stuck(seed: &[u8]) -> bool {
    seed.iter().all(|&b| b == seed[0])
}

impl<S: EntropySource> RandomSource for Rng<S> {
    fn next_byte(&mut self) -> u8 {
        self.get()
    }

    fn fill(&mut self, dest: &mut [u8]) {
        Rng::fill(self, dest)
    }
}

impl<S: EntropySource> Drop for Rng<S> {
    fn drop(&mut self) {
        self.key.zeroize();
        self.block.zeroize();
        self.counter.zeroize();
    }
}

impl<S: EntropySource> fmt::Debug for Rng<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rng([REDACTED])")
    }
}
