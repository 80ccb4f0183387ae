// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide generator handle.
//!
//! The generator state is the only mutable resource shared between execution
//! contexts. Access goes through a spin lock so at most one writer advances it
//! at a time. The lock is not interrupt-safe: an interrupt handler must not
//! draw bytes while the interrupted code holds the guard, or it will spin
//! forever. Either disable interrupts around the main-loop access or give the
//! handler its own generator.

use log::debug;
use spin::{Mutex, MutexGuard, Once};

use crate::config::RngConfig;
use crate::error::EntropyError;
use crate::rng::Rng;
use crate::traits::{EntropySource, RandomSource};

/// Exclusive access to the shared generator; derefs to [`Rng`].
pub type RngGuard<'a, S> = MutexGuard<'a, Rng<S>>;

/// Lock-protected generator that can live in a `static`.
///
/// # Example
///
/// ```rust
/// use pocketcrypt_rand::{NoiseEntropySource, RngConfig, SharedRng};
///
/// use core::sync::atomic::{AtomicU32, Ordering};
///
/// fn read_adc() -> u32 {
///     // Stand-in for a floating analog pin.
///     static X: AtomicU32 = AtomicU32::new(0x9e37_79b9);
///     let mut x = X.load(Ordering::Relaxed);
///     x ^= x << 13;
///     x ^= x >> 17;
///     x ^= x << 5;
///     X.store(x, Ordering::Relaxed);
///     x
/// }
///
/// static RNG: SharedRng<NoiseEntropySource<fn() -> u32>> = SharedRng::uninit();
///
/// RNG.init(NoiseEntropySource::new(read_adc as fn() -> u32), RngConfig::default())
///     .expect("Failed to init rng");
///
/// let byte = RNG.get().expect("Failed to get()");
/// # let _ = byte;
/// ```
pub struct SharedRng<S: EntropySource> {
    cell: Once<Mutex<Rng<S>>>,
}

impl<S: EntropySource> SharedRng<S> {
    /// An empty handle; call [`init`](Self::init) before drawing bytes.
    pub const fn uninit() -> Self {
        Self { cell: Once::new() }
    }

    /// Wraps an already seeded generator.
    pub fn new(rng: Rng<S>) -> Self {
        Self {
            cell: Once::initialized(Mutex::new(rng)),
        }
    }

    /// Seeds the generator from `source`.
    ///
    /// The first successful initialisation wins; later calls are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropySourceUnavailable`] if the source cannot
    /// seed the generator. The handle then stays uninitialised.
    pub fn init(&self, source: S, config: RngConfig) -> Result<(), EntropyError> {
        if self.cell.is_completed() {
            debug!("rng: shared generator already initialised");
            return Ok(());
        }

        let rng = Rng::new(source, config)?;
        self.cell.call_once(|| Mutex::new(rng));

        Ok(())
    }

    /// Whether [`init`](Self::init) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.cell.is_completed()
    }

    /// Locks the generator for a sequence of draws.
    ///
    /// The guard implements [`RandomSource`], so it can be handed to the
    /// cipher layer for IV generation.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::NotInitialized`] before a successful `init`.
    pub fn lock(&self) -> Result<RngGuard<'_, S>, EntropyError> {
        self.cell
            .get()
            .map(Mutex::lock)
            .ok_or(EntropyError::NotInitialized)
    }

    /// Returns one random byte.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::NotInitialized`] before a successful `init`.
    pub fn get(&self) -> Result<u8, EntropyError> {
        Ok(self.lock()?.get())
    }

    /// Fills `dest` with random bytes under a single lock acquisition.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::NotInitialized`] before a successful `init`.
    pub fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.lock()?.fill(dest);

        Ok(())
    }
}

impl<S: EntropySource> RandomSource for RngGuard<'_, S> {
    fn next_byte(&mut self) -> u8 {
        Rng::<S>::get(self)
    }

    fn fill(&mut self, dest: &mut [u8]) {
        Rng::<S>::fill(self, dest)
    }
}

impl<S: EntropySource> core::fmt::Debug for SharedRng<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedRng")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
