// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Deterministic entropy and random sources for tests.
///
/// Available only when the `test-utils` feature is enabled or during tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
