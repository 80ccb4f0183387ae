// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # pocketcrypt_util
//!
//! Small byte/word helpers shared by the pocketcrypt primitives.
//!
//! Everything here works on caller-provided fixed buffers; nothing allocates
//! unless the `test-utils` feature is enabled.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "test-utils")]
extern crate alloc;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Loads a big-endian u32 from `bytes` into `dst`, zeroizing the source bytes.
#[inline(always)]
pub fn u32_from_be(dst: &mut u32, bytes: &mut [u8; 4]) {
    *dst = u32::from_be_bytes(*bytes);
    bytes.zeroize();
}

/// Stores `src` as big-endian bytes into `bytes`, zeroizing `src`.
#[inline(always)]
pub fn u32_to_be(src: &mut u32, bytes: &mut [u8; 4]) {
    *bytes = src.to_be_bytes();
    src.zeroize();
}

/// XORs `src` into `dst` byte by byte.
///
/// Only the common prefix (`min(dst.len(), src.len())`) is touched.
#[inline(always)]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

/// Compares two slices without short-circuiting on the first mismatch.
///
/// Slices of different length compare unequal.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Decodes a hex string into bytes. Test helper; panics on malformed input.
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> alloc::vec::Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");

    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            let hi = hex_nibble(pair[0]);
            let lo = hex_nibble(pair[1]);
            (hi << 4) | lo
        })
        .collect()
}

#[cfg(feature = "test-utils")]
fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex character: {:?}", c as char),
    }
}

/// Decodes a hex string into a fixed-size array. Test helper; panics on
/// malformed input or length mismatch.
#[cfg(feature = "test-utils")]
pub fn hex_to_array<const N: usize>(hex: &str) -> [u8; N] {
    let bytes = hex_to_bytes(hex);
    assert_eq!(bytes.len(), N, "hex string decodes to {} bytes, expected {}", bytes.len(), N);

    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    out
}
