// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::traits::RandomSource;

/// Predictable [`RandomSource`] yielding `start, start + 1, ...` (wrapping).
///
/// Handy for pinning IVs in known-answer tests.
#[derive(Debug, Clone)]
pub struct SequenceRandomSource {
    next: u8,
    drawn: usize,
}

impl SequenceRandomSource {
    /// Creates a source whose first byte is `start`.
    pub fn new(start: u8) -> Self {
        Self {
            next: start,
            drawn: 0,
        }
    }

    /// Number of bytes handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl RandomSource for SequenceRandomSource {
    fn next_byte(&mut self) -> u8 {
        let byte = self.next;
        self.next = self.next.wrapping_add(1);
        self.drawn += 1;
        byte
    }
}
