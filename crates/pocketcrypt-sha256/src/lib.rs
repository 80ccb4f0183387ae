// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # pocketcrypt_sha256
//!
//! SHA-256 (FIPS 180-4) and HMAC-SHA256 (RFC 2104) for devices without a heap.
//!
//! The context keeps a fixed 64-byte block buffer and a fixed 64-word message
//! schedule; nothing allocates. Input may be fed in arbitrary chunks and the
//! digest only depends on the concatenated bytes.
//!
//! ## Lifecycle
//!
//! A context is `Ready` until [`Sha256::finalize`] produces the digest, after
//! which it is `Finalized`. Feeding a finalized context is a programming error
//! and panics; the `try_*` variants return [`HashError::Finalized`] instead.
//! [`Sha256::reset`] makes the context reusable.
//!
//! ## Example
//!
//! ```rust
//! use pocketcrypt_sha256::{hmac_sha256, sha256};
//!
//! let digest = sha256(b"abc");
//! assert_eq!(digest.as_bytes()[0], 0xba);
//!
//! let tag = hmac_sha256(b"key", b"message");
//! assert_eq!(tag.as_bytes().len(), 32);
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod digest;
mod error;
mod hmac;
mod sha256;
mod word32;

pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use digest::Digest;
pub use error::HashError;
pub use hmac::{HmacSha256, hmac_sha256};
pub use sha256::{ContextState, Sha256, sha256};
