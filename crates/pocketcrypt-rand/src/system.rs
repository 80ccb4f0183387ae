// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Operating-system CSPRNG, for hosts and boards running a full OS.
///
/// Uses `getrandom`:
/// - Linux/Android: `getrandom()` syscall
/// - macOS/iOS: `getentropy()`
/// - Windows: `BCryptGenRandom`
/// - WASI: `random_get`
/// - Browser wasm: `crypto.getRandomValues`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource;

impl SystemEntropySource {
    pub(crate) fn fill_bytes_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
        dest: &mut [u8],
    ) -> Result<(), EntropyError> {
        fill_fn(dest).map_err(|_| EntropyError::EntropySourceUnavailable)
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_bytes_with(&getrandom::fill, dest)
    }
}
