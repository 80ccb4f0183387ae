// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # pocketcrypt_rand
//!
//! Byte-granular random source for devices that may lack a hardware RNG.
//!
//! A [`Rng`] is seeded once from an [`EntropySource`] and then hands out bytes
//! through [`Rng::get`]. If the source cannot deliver at start-up the
//! generator refuses to exist: [`Rng::new`] returns
//! [`EntropyError::EntropySourceUnavailable`] and the caller should halt
//! rather than fall back to a fixed sequence.
//!
//! ## Core Types
//!
//! - [`Rng`]: SHA-256 based generator with forward-secure key ratcheting
//! - [`SharedRng`]: spin-locked handle that can live in a `static`
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`NoiseEntropySource`]: von Neumann extractor over a noisy reading
//!
//! ## Traits
//!
//! - [`EntropySource`]: seed material supplier, consulted at (re)seed time
//! - [`RandomSource`]: infallible byte stream consumed by the cipher layer
//!
//! ## Example
//!
//! ```rust
//! use pocketcrypt_rand::{Rng, RngConfig, SystemEntropySource};
//!
//! let mut rng = Rng::new(SystemEntropySource, RngConfig::default())
//!     .expect("Failed to seed rng");
//!
//! let mut iv = [0u8; 16];
//! rng.fill(&mut iv);
//! ```
//!
//! ## Features
//!
//! - `rand-core`: implements `rand_core::RngCore` for [`Rng`]
//! - `test-utils`: exposes deterministic mocks under [`test_utils`]

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod error;
mod noise;
#[cfg(feature = "rand-core")]
mod rand_core_impl;
mod rng;
mod shared;
mod support;
#[cfg(not(target_os = "none"))]
mod system;
mod traits;

pub use config::{NoiseConfig, RngConfig};
pub use error::EntropyError;
pub use noise::NoiseEntropySource;
pub use rng::Rng;
pub use shared::{RngGuard, SharedRng};
#[cfg(not(target_os = "none"))]
pub use system::SystemEntropySource;
pub use traits::{EntropySource, RandomSource};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
