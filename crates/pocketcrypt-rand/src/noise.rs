// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Entropy harvested from a noisy hardware reading.
//!
//! Intended for boards without an RNG peripheral: the sampler closure reads a
//! floating analog pin, a free-running timer sampled at irregular moments, or
//! any other register whose low bit jitters.
//!
//! # Extraction
//!
//! Only the least significant bit of each reading is used. Pairs of bits are
//! passed through a von Neumann extractor (`01 -> 0`, `10 -> 1`, `00`/`11`
//! discarded), which removes bias but not correlation. The resulting bytes are
//! seed material for [`Rng`](crate::Rng), never used directly.
//!
//! # Health checks
//!
//! A sampler that returns the same raw value `max_repeats` times in a row is
//! considered stuck, and a call that cannot produce enough bits within
//! `sample_budget` readings gives up.
//!
//! The extracted bits are also watched for short periods. For every lag up to
//! 64 bits the source counts how many bits in a row equal the bit that
//! lag positions earlier; once any count reaches `period_cutoff` the stream is
//! periodic. This catches deterministic samplers that never repeat a raw
//! value, such as a timer read from a fixed-latency loop. The history carries
//! over between calls.
//!
//! Every health failure is reported as
//! [`EntropyError::EntropySourceUnavailable`].

use core::fmt;

use crate::config::NoiseConfig;
use crate::error::EntropyError;
use crate::traits::EntropySource;

// Longest bit period the health check detects
const MAX_PERIOD: usize = 64;

/// Entropy source built on a caller-supplied noisy sampler.
pub struct NoiseEntropySource<F>
where
    F: FnMut() -> u32,
{
    sampler: F,
    config: NoiseConfig,
    monitor: PeriodMonitor,
}

// Run lengths of `bit[t] == bit[t - lag]` for lag = 1..=MAX_PERIOD.
struct PeriodMonitor {
    // Newest extracted bit in bit 0
    history: u64,
    seen: usize,
    runs: [u16; MAX_PERIOD],
}

impl PeriodMonitor {
    const fn new() -> Self {
        Self {
            history: 0,
            seen: 0,
            runs: [0; MAX_PERIOD],
        }
    }

    fn push(&mut self, bit: u8, cutoff: u16) -> Result<(), EntropyError> {
        let mut periodic = false;

        for (lag, run) in (1..=MAX_PERIOD).zip(self.runs.iter_mut()) {
            if self.seen < lag {
                break;
            }

            let past = ((self.history >> (lag - 1)) & 1) as u8;
            if past == bit {
                *run = run.saturating_add(1);
                periodic |= cutoff != 0 && *run >= cutoff;
            } else {
                *run = 0;
            }
        }

        self.history = (self.history << 1) | u64::from(bit);
        self.seen = self.seen.saturating_add(1);

        if periodic {
            return Err(EntropyError::EntropySourceUnavailable);
        }

        Ok(())
    }
}

struct SampleWindow {
    budget: u32,
    last: Option<u32>,
    repeats: u16,
}

impl<F> NoiseEntropySource<F>
where
    F: FnMut() -> u32,
{
    /// Wraps `sampler` with the default [`NoiseConfig`].
    pub fn new(sampler: F) -> Self {
        Self::with_config(sampler, NoiseConfig::default())
    }

    /// Wraps `sampler` with explicit health limits.
    pub fn with_config(sampler: F, config: NoiseConfig) -> Self {
        Self {
            sampler,
            config,
            monitor: PeriodMonitor::new(),
        }
    }

    /// Active health limits.
    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    fn sample(&mut self, window: &mut SampleWindow) -> Result<u32, EntropyError> {
        if window.budget == 0 {
            return Err(EntropyError::EntropySourceUnavailable);
        }
        window.budget -= 1;

        let value = (self.sampler)();

        if window.last == Some(value) {
            window.repeats = window.repeats.saturating_add(1);
            if window.repeats >= self.config.max_repeats {
                return Err(EntropyError::EntropySourceUnavailable);
            }
        } else {
            window.last = Some(value);
            window.repeats = 0;
        }

        Ok(value)
    }

    fn next_bit(&mut self, window: &mut SampleWindow) -> Result<u8, EntropyError> {
        loop {
            let first = self.sample(window)? & 1;
            let second = self.sample(window)? & 1;

            if first != second {
                let bit = first as u8;
                self.monitor.push(bit, self.config.period_cutoff)?;
                return Ok(bit);
            }
        }
    }
}

impl<F> EntropySource for NoiseEntropySource<F>
where
    F: FnMut() -> u32,
{
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut window = SampleWindow {
            budget: self.config.sample_budget,
            last: None,
            repeats: 0,
        };

        for byte in dest.iter_mut() {
            let mut acc = 0u8;
            for _ in 0..8 {
                acc = (acc << 1) | self.next_bit(&mut window)?;
            }
            *byte = acc;
        }

        Ok(())
    }
}

impl<F> fmt::Debug for NoiseEntropySource<F>
where
    F: FnMut() -> u32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseEntropySource")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
