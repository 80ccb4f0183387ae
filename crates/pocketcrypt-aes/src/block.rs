// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! FIPS-197 round transforms on the 16-byte state.
//!
//! The state is column-major: byte `4 * c + r` is row `r` of column `c`, the
//! same order as the input block.

use pocketcrypt_util::xor_in_place;
use zeroize::Zeroize;

use crate::consts::{BLOCK_LEN, INV_SBOX, SBOX};
use crate::types::Block;

#[inline(always)]
fn xtime(b: u8) -> u8 {
    (b << 1) ^ (((b >> 7) & 1) * 0x1b)
}

#[inline(always)]
pub(crate) fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(|b| SBOX[b as usize]))
}

#[inline(always)]
fn add_round_key(state: &mut Block, round_key: &[u32]) {
    for (column, word) in state.chunks_exact_mut(4).zip(round_key) {
        xor_in_place(column, &word.to_be_bytes());
    }
}

#[inline(always)]
fn sub_bytes(state: &mut Block) {
    for b in state.iter_mut() {
        *b = SBOX[*b as usize];
    }
}

#[inline(always)]
fn inv_sub_bytes(state: &mut Block) {
    for b in state.iter_mut() {
        *b = INV_SBOX[*b as usize];
    }
}

pub(crate) fn shift_rows(state: &mut Block) {
    let mut old = *state;

    for c in 0..4 {
        for r in 1..4 {
            state[4 * c + r] = old[4 * ((c + r) % 4) + r];
        }
    }

    old.zeroize();
}

pub(crate) fn inv_shift_rows(state: &mut Block) {
    let mut old = *state;

    for c in 0..4 {
        for r in 1..4 {
            state[4 * ((c + r) % 4) + r] = old[4 * c + r];
        }
    }

    old.zeroize();
}

pub(crate) fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (column[0], column[1], column[2], column[3]);
        let t = a0 ^ a1 ^ a2 ^ a3;

        column[0] = a0 ^ t ^ xtime(a0 ^ a1);
        column[1] = a1 ^ t ^ xtime(a1 ^ a2);
        column[2] = a2 ^ t ^ xtime(a2 ^ a3);
        column[3] = a3 ^ t ^ xtime(a3 ^ a0);
    }
}

pub(crate) fn inv_mix_columns(state: &mut Block) {
    // Multiplying by {04}x^2 + {05} first reduces InvMixColumns to MixColumns.
    for column in state.chunks_exact_mut(4) {
        let u = xtime(xtime(column[0] ^ column[2]));
        let v = xtime(xtime(column[1] ^ column[3]));

        column[0] ^= u;
        column[1] ^= v;
        column[2] ^= u;
        column[3] ^= v;
    }

    mix_columns(state);
}

#[inline(always)]
fn round_key(round_keys: &[u32], round: usize) -> &[u32] {
    &round_keys[4 * round..4 * round + 4]
}

/// Cipher (FIPS-197 section 5.1) with `rounds` rounds.
pub(crate) fn encrypt(round_keys: &[u32], rounds: usize, state: &mut Block) {
    add_round_key(state, round_key(round_keys, 0));

    for round in 1..rounds {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, round_key(round_keys, round));
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, round_key(round_keys, rounds));
}

/// InvCipher (FIPS-197 section 5.3) with `rounds` rounds.
pub(crate) fn decrypt(round_keys: &[u32], rounds: usize, state: &mut Block) {
    add_round_key(state, round_key(round_keys, rounds));

    for round in (1..rounds).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, round_key(round_keys, round));
        inv_mix_columns(state);
    }

    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, round_key(round_keys, 0));
}

/// Applies `f` to every complete block of `buf`; a trailing partial block is
/// left alone.
pub(crate) fn for_each_block(buf: &mut [u8], mut f: impl FnMut(&mut Block)) {
    let mut rest = buf;

    while let Some((block, tail)) = core::mem::take(&mut rest).split_first_chunk_mut::<BLOCK_LEN>()
    {
        f(block);
        rest = tail;
    }
}
