// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand_core::RngCore;

use crate::config::RngConfig;
use crate::rng::Rng;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

fn mock_rng() -> Rng<MockEntropySource> {
    let source = MockEntropySource::with_seed(99, MockEntropySourceBehaviour::None);
    Rng::new(source, RngConfig::default()).expect("Failed to Rng::new(..)")
}

#[test]
fn test_next_u32_is_little_endian_of_stream() {
    let mut a = mock_rng();
    let mut b = mock_rng();

    let mut bytes = [0u8; 4];
    b.fill(&mut bytes);

    assert_eq!(a.next_u32(), u32::from_le_bytes(bytes));
}

#[test]
fn test_next_u64_is_little_endian_of_stream() {
    let mut a = mock_rng();
    let mut b = mock_rng();

    let mut bytes = [0u8; 8];
    b.fill(&mut bytes);

    assert_eq!(a.next_u64(), u64::from_le_bytes(bytes));
}

#[test]
fn test_fill_bytes_matches_fill() {
    let mut a = mock_rng();
    let mut b = mock_rng();

    let mut via_rand_core = [0u8; 37];
    RngCore::fill_bytes(&mut a, &mut via_rand_core);

    let mut via_inherent = [0u8; 37];
    b.fill(&mut via_inherent);

    assert_eq!(via_rand_core, via_inherent);
}
