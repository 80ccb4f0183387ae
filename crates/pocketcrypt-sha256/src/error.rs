// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Hash context lifecycle error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// The context was already finalized and must be reset before reuse
    #[error("hash context already finalized; call reset() before reuse")]
    Finalized,
}
