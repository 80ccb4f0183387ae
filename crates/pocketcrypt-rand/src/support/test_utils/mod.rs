// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking entropy sources and random streams.
//!
//! Provides deterministic implementations with configurable failure modes so
//! that error paths can be exercised without real hardware.

mod mock_entropy_source;
mod sequence_random_source;

pub use mock_entropy_source::{MockEntropySource, MockEntropySourceBehaviour};
pub use sequence_random_source::SequenceRandomSource;
