// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Raw entropy supplier used to seed and reseed a [`Rng`](crate::Rng).
///
/// Implementations describe where their unpredictability comes from (OS
/// CSPRNG, floating ADC pin, timer jitter). They are only consulted at seed
/// time, never for every output byte.
pub trait EntropySource {
    /// Fills `dest` with fresh entropy.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropySourceUnavailable`] if the source cannot
    /// produce data.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<T: EntropySource + ?Sized> EntropySource for &mut T {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

/// Byte-granular random stream consumed by IV and nonce generation.
///
/// Once a generator exists it cannot fail; start-up is where entropy problems
/// surface.
pub trait RandomSource {
    /// Returns the next random byte.
    fn next_byte(&mut self) -> u8;

    /// Fills `dest` with random bytes.
    fn fill(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next_byte();
        }
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_byte(&mut self) -> u8 {
        (**self).next_byte()
    }

    fn fill(&mut self, dest: &mut [u8]) {
        (**self).fill(dest)
    }
}
