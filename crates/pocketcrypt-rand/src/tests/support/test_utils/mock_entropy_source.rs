// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_mock_entropy_source_behaviour_none() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(result.is_ok());
    assert_ne!(buf, [0u8; 32]);
}

#[test]
fn test_mock_entropy_source_is_deterministic_per_seed() {
    let mut a = MockEntropySource::with_seed(42, MockEntropySourceBehaviour::None);
    let mut b = MockEntropySource::with_seed(42, MockEntropySourceBehaviour::None);
    let mut c = MockEntropySource::with_seed(43, MockEntropySourceBehaviour::None);

    let mut buf_a = [0u8; 19];
    let mut buf_b = [0u8; 19];
    let mut buf_c = [0u8; 19];

    a.fill_bytes(&mut buf_a).expect("Failed to fill_bytes(..)");
    b.fill_bytes(&mut buf_b).expect("Failed to fill_bytes(..)");
    c.fill_bytes(&mut buf_c).expect("Failed to fill_bytes(..)");

    assert_eq!(buf_a, buf_b);
    assert_ne!(buf_a, buf_c);
}

#[test]
fn test_mock_entropy_source_zero_seed_is_remapped() {
    let mut mock = MockEntropySource::with_seed(0, MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 16];

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");

    assert_ne!(buf, [0u8; 16]);
}

#[test]
fn test_mock_entropy_source_behaviour_fail_always() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(matches!(result, Err(EntropyError::EntropySourceUnavailable)));
}

#[test]
fn test_mock_entropy_source_behaviour_fail_at_nth_first_call() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(1));
    let mut buf = [0u8; 32];

    // First call fails
    let result = mock.fill_bytes(&mut buf);
    assert!(matches!(result, Err(EntropyError::EntropySourceUnavailable)));

    // Second call succeeds
    assert!(mock.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_mock_entropy_source_behaviour_fail_at_nth_third_call() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(3));
    let mut buf = [0u8; 32];

    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_ok());

    let result = mock.fill_bytes(&mut buf);
    assert!(matches!(result, Err(EntropyError::EntropySourceUnavailable)));

    assert!(mock.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_mock_entropy_source_behaviour_constant() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0xaa));
    let mut buf = [0u8; 8];

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");

    assert_eq!(buf, [0xaa; 8]);
}

#[test]
fn test_mock_entropy_source_call_count() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    assert_eq!(mock.call_count(), 0);

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
    assert_eq!(mock.call_count(), 1);

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
    assert_eq!(mock.call_count(), 2);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_mock_entropy_source_change_behaviour() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    assert!(mock.fill_bytes(&mut buf).is_ok());

    mock.change_behaviour(MockEntropySourceBehaviour::FailAlways);
    assert!(mock.fill_bytes(&mut buf).is_err());

    mock.change_behaviour(MockEntropySourceBehaviour::None);
    assert!(mock.fill_bytes(&mut buf).is_ok());
}
