// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Random source error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The entropy source could not deliver (usable) seed material
    #[error("entropy source unavailable")]
    EntropySourceUnavailable,

    /// A shared generator was used before it was initialised
    #[error("random generator used before initialisation")]
    NotInitialized,
}
