// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::EntropySource;

const DEFAULT_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Configurable behavior for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Normal operation (deterministic xorshift stream).
    None,
    /// Always fail fill_bytes.
    FailAlways,
    /// Fail fill_bytes on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthFillBytes(usize),
    /// Fill every byte with the given value, like a stuck sensor.
    Constant(u8),
}

/// Mock entropy source for testing.
///
/// Produces a reproducible xorshift64 stream and allows simulating failures
/// via [`MockEntropySourceBehaviour`]. Two mocks built with the same seed
/// yield the same bytes.
#[derive(Debug, Clone)]
pub struct MockEntropySource {
    state: u64,
    behaviour: MockEntropySourceBehaviour,
    fill_bytes_count: usize,
}

impl MockEntropySource {
    /// Creates a new mock entropy source with the specified behavior.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self::with_seed(DEFAULT_SEED, behaviour)
    }

    /// Creates a mock whose stream starts from `seed` (`0` is remapped).
    pub fn with_seed(seed: u64, behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
            behaviour,
            fill_bytes_count: 0,
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the call counter.
    pub fn reset_count(&mut self) {
        self.fill_bytes_count = 0;
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn fill_stream(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let word = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.fill_bytes_count += 1;
        let current = self.fill_bytes_count;

        match self.behaviour {
            MockEntropySourceBehaviour::None => {
                self.fill_stream(dest);
                Ok(())
            }
            MockEntropySourceBehaviour::FailAlways => Err(EntropyError::EntropySourceUnavailable),
            MockEntropySourceBehaviour::FailAtNthFillBytes(n) if current == n => {
                Err(EntropyError::EntropySourceUnavailable)
            }
            MockEntropySourceBehaviour::FailAtNthFillBytes(_) => {
                self.fill_stream(dest);
                Ok(())
            }
            MockEntropySourceBehaviour::Constant(value) => {
                dest.fill(value);
                Ok(())
            }
        }
    }
}
