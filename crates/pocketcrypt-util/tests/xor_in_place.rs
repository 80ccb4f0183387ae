// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod xor_in_place_tests {
    use pocketcrypt_util::xor_in_place;

    #[test]
    fn test_xor_equal_lengths() {
        let mut dst = [0xf0u8, 0x0f, 0xaa, 0x55];
        xor_in_place(&mut dst, &[0xff, 0xff, 0xaa, 0x00]);
        assert_eq!(dst, [0x0f, 0xf0, 0x00, 0x55]);
    }

    #[test]
    fn test_xor_twice_restores_original() {
        let original = *b"sixteen byte blk";
        let mask = [0x5au8; 16];
        let mut data = original;

        xor_in_place(&mut data, &mask);
        assert_ne!(data, original);

        xor_in_place(&mut data, &mask);
        assert_eq!(data, original);
    }

    #[test]
    fn test_xor_shorter_source_touches_prefix_only() {
        let mut dst = [1u8, 1, 1, 1];
        xor_in_place(&mut dst, &[1, 1]);
        assert_eq!(dst, [0, 0, 1, 1]);
    }
}
