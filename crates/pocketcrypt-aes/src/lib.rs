// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # pocketcrypt_aes
//!
//! AES-128/192/256 (FIPS-197) with PKCS7 padding and block chaining, sized for
//! microcontrollers.
//!
//! ## Layers
//!
//! - [`AesKey`]: key expansion and the raw 16-byte block transform
//! - [`pad`] / [`unpad`]: PKCS7 padding to the block size
//! - [`Cipher`]: padded encryption of arbitrary-length messages in a chosen
//!   [`Mode`] (CBC by default, CFB-128), with a fresh IV per message drawn
//!   from a [`RandomSource`](pocketcrypt_rand::RandomSource)
//!
//! Block transforms and padding never allocate; the `Vec`-returning helpers
//! have allocation-free `*_in_place` counterparts.
//!
//! This is confidentiality only. Ciphertexts are not authenticated; pair them
//! with an HMAC when tampering matters.
//!
//! ## Example
//!
//! ```rust
//! use pocketcrypt_aes::{AesKey, Cipher, Mode};
//! use pocketcrypt_rand::test_utils::SequenceRandomSource;
//!
//! let key = AesKey::new(&[0u8; 16]).expect("Failed to AesKey::new(..)");
//! let cipher = Cipher::new(&key, Mode::default());
//!
//! let mut ivs = SequenceRandomSource::new(0);
//! let (iv, ct) = cipher.encrypt(&mut ivs, b"hello");
//!
//! assert_eq!(ct.len(), 16);
//! assert_eq!(cipher.decrypt(&iv, &ct).expect("Failed to decrypt(..)"), b"hello");
//! ```
//!
//! References:
//! - FIPS 197: Advanced Encryption Standard (AES)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.197-upd1.pdf>
//! - NIST SP 800-38A: Recommendation for Block Cipher Modes of Operation
//!   <https://nvlpubs.nist.gov/nistpubs/Legacy/SP/nistspecialpublication800-38a.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod block;
mod cipher;
mod consts;
mod error;
mod key;
mod mode;
mod padding;
mod types;

pub use cipher::Cipher;
pub use consts::{BLOCK_LEN, IV_LEN};
pub use error::AesError;
pub use key::{AesKey, KeySize};
pub use mode::Mode;
pub use padding::{pad, pad_in_place, padded_len, unpad};
pub use types::{Block, Iv};
