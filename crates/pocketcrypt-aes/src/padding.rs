// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PKCS7 padding to the AES block size.
//!
//! Padding is always added: a block-aligned message gains a full block of
//! `0x10` bytes, so unpadding is never ambiguous.

use alloc::vec::Vec;

use crate::consts::BLOCK_LEN;
use crate::error::AesError;

#[inline(always)]
const fn padding_len(msg_len: usize) -> usize {
    BLOCK_LEN - msg_len % BLOCK_LEN
}

/// Length of a `msg_len`-byte message after padding.
///
/// Saturates at `usize::MAX` for messages that cannot be padded.
pub const fn padded_len(msg_len: usize) -> usize {
    msg_len.saturating_add(padding_len(msg_len))
}

/// Returns `plaintext` followed by its PKCS7 trailer.
pub fn pad(plaintext: &[u8]) -> Vec<u8> {
    let pad_len = padding_len(plaintext.len());
    let mut out = Vec::with_capacity(plaintext.len() + pad_len);

    out.extend_from_slice(plaintext);
    out.resize(plaintext.len() + pad_len, pad_len as u8);

    out
}

/// Pads the first `msg_len` bytes of `buf` in place and returns the padded
/// length.
///
/// # Errors
///
/// Returns [`AesError::BufferTooSmall`] if `buf` cannot hold the padded
/// message; `buf` is left untouched.
pub fn pad_in_place(buf: &mut [u8], msg_len: usize) -> Result<usize, AesError> {
    let needed = padded_len(msg_len);

    if buf.len() < needed {
        return Err(AesError::BufferTooSmall {
            needed,
            available: buf.len(),
        });
    }

    let pad_len = padding_len(msg_len);
    buf[msg_len..needed].fill(pad_len as u8);

    Ok(needed)
}

/// Strips the PKCS7 trailer from `buffer`.
///
/// All sixteen bytes of the final block are inspected regardless of the
/// claimed padding length.
///
/// # Errors
///
/// Returns [`AesError::InvalidPadding`] if `buffer` is empty, not a multiple
/// of 16 bytes, ends in `0` or a value above 16, or if any of the claimed
/// padding bytes differs from the padding length.
pub fn unpad(buffer: &[u8]) -> Result<&[u8], AesError> {
    let len = buffer.len();

    if len == 0 || len % BLOCK_LEN != 0 {
        return Err(AesError::InvalidPadding);
    }

    let pad_byte = buffer[len - 1];
    let pad_len = usize::from(pad_byte);

    if pad_len == 0 || pad_len > BLOCK_LEN {
        return Err(AesError::InvalidPadding);
    }

    let last_block = &buffer[len - BLOCK_LEN..];
    let mut mismatch = 0u8;

    for (i, &b) in last_block.iter().enumerate() {
        let in_trailer = u8::from(BLOCK_LEN - i <= pad_len);
        mismatch |= 0u8.wrapping_sub(in_trailer) & (b ^ pad_byte);
    }

    if mismatch != 0 {
        return Err(AesError::InvalidPadding);
    }

    Ok(&buffer[..len - pad_len])
}
