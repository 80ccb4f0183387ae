// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::SequenceRandomSource;
use crate::traits::RandomSource;

#[test]
fn test_sequence_random_source_counts_up() {
    let mut source = SequenceRandomSource::new(0x10);
    let mut buf = [0u8; 4];

    source.fill(&mut buf);

    assert_eq!(buf, [0x10, 0x11, 0x12, 0x13]);
    assert_eq!(source.drawn(), 4);
}

#[test]
fn test_sequence_random_source_wraps() {
    let mut source = SequenceRandomSource::new(0xfe);

    assert_eq!(source.next_byte(), 0xfe);
    assert_eq!(source.next_byte(), 0xff);
    assert_eq!(source.next_byte(), 0x00);
}
