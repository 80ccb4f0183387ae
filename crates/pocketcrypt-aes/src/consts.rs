// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES constants and lookup tables.
//!
//! The S-boxes are derived at compile time from their definition
//! (multiplicative inverse in GF(2^8) followed by the affine map) instead of
//! being typed in as literals.

/// Block size: 128 bits (16 bytes)
pub const BLOCK_LEN: usize = 16;
/// IV size: one block
pub const IV_LEN: usize = BLOCK_LEN;

/// Round-key words for the largest schedule (AES-256, 15 round keys)
pub(crate) const SCHEDULE_WORDS: usize = 60;

/// Round constants, high byte of `Rcon[i]`
pub(crate) const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

pub(crate) static SBOX: [u8; 256] = build_sbox();
pub(crate) static INV_SBOX: [u8; 256] = invert(&build_sbox());

/// Multiplication in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;

    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }

    product
}

/// `x^254`, the multiplicative inverse for `x != 0`; maps 0 to 0.
const fn gf_inv(x: u8) -> u8 {
    let mut result = 1u8;
    let mut base = x;
    let mut exp = 254u8;

    while exp != 0 {
        if exp & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exp >>= 1;
    }

    result
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;

    while i < 256 {
        let b = gf_inv(i as u8);
        table[i] = b
            ^ b.rotate_left(1)
            ^ b.rotate_left(2)
            ^ b.rotate_left(3)
            ^ b.rotate_left(4)
            ^ 0x63;
        i += 1;
    }

    table
}

const fn invert(sbox: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;

    while i < 256 {
        table[sbox[i] as usize] = i as u8;
        i += 1;
    }

    table
}
