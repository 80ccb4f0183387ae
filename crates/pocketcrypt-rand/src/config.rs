// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tunables for the generator and the noise sampler.

/// Generator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngConfig {
    /// Number of 32-byte output blocks between automatic reseeds.
    ///
    /// `0` disables automatic reseeding; [`Rng::reseed`](crate::Rng::reseed)
    /// can still be called explicitly.
    pub reseed_interval: u32,
}

impl RngConfig {
    /// Default automatic reseed interval, in output blocks (32 KiB of output).
    pub const DEFAULT_RESEED_INTERVAL: u32 = 1024;

    /// Configuration with default values.
    pub const fn new() -> Self {
        Self {
            reseed_interval: Self::DEFAULT_RESEED_INTERVAL,
        }
    }

    /// Sets the automatic reseed interval.
    pub const fn with_reseed_interval(mut self, blocks: u32) -> Self {
        self.reseed_interval = blocks;
        self
    }
}

impl Default for RngConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Health limits for [`NoiseEntropySource`](crate::NoiseEntropySource).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseConfig {
    /// Consecutive identical raw readings after which the sampler is declared stuck.
    pub max_repeats: u16,
    /// Maximum raw readings spent on a single `fill_bytes` call.
    pub sample_budget: u32,
    /// Consecutive extracted bits matching an earlier bit at a fixed lag after
    /// which the stream is declared periodic. `0` disables the check.
    pub period_cutoff: u16,
}

impl NoiseConfig {
    /// Default stuck-sampler threshold.
    pub const DEFAULT_MAX_REPEATS: u16 = 64;
    /// Default per-call sample budget.
    pub const DEFAULT_SAMPLE_BUDGET: u32 = 65_536;
    /// Default periodicity threshold, in extracted bits.
    pub const DEFAULT_PERIOD_CUTOFF: u16 = 64;

    /// Configuration with default values.
    pub const fn new() -> Self {
        Self {
            max_repeats: Self::DEFAULT_MAX_REPEATS,
            sample_budget: Self::DEFAULT_SAMPLE_BUDGET,
            period_cutoff: Self::DEFAULT_PERIOD_CUTOFF,
        }
    }

    /// Sets the stuck-sampler threshold.
    pub const fn with_max_repeats(mut self, max_repeats: u16) -> Self {
        self.max_repeats = max_repeats;
        self
    }

    /// Sets the per-call sample budget.
    pub const fn with_sample_budget(mut self, sample_budget: u32) -> Self {
        self.sample_budget = sample_budget;
        self
    }

    /// Sets the periodicity threshold.
    pub const fn with_period_cutoff(mut self, period_cutoff: u16) -> Self {
        self.period_cutoff = period_cutoff;
        self
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self::new()
    }
}
