// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod constant_time_eq_tests {
    use pocketcrypt_util::constant_time_eq;

    #[test]
    fn test_equal_slices() {
        assert!(constant_time_eq(b"digest", b"digest"));
    }

    #[test]
    fn test_last_byte_differs() {
        assert!(!constant_time_eq(&[7u8; 32], &{
            let mut other = [7u8; 32];
            other[31] = 8;
            other
        }));
    }

    #[test]
    fn test_different_lengths() {
        assert!(!constant_time_eq(&[1, 2, 3], &[1, 2]));
    }

    #[test]
    fn test_empty_slices() {
        assert!(constant_time_eq(&[], &[]));
    }
}
