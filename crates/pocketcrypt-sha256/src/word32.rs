// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word32 - 32-bit working word that must be wiped before it goes away.
//!
//! Every operation mutates in place; the logical SHA-256 functions write
//! their result into `self` instead of returning a fresh value.

use pocketcrypt_util::{u32_from_be, u32_to_be};
use zeroize::Zeroize;

/// 32-bit word wrapper with drop-time zeroization.
///
/// - `#[repr(transparent)]` keeps the layout of a plain u32
/// - Drop asserts (debug builds) that the owner already wiped it, then wipes anyway
#[derive(Default, Clone)]
#[repr(transparent)]
pub(crate) struct Word32(u32);

impl Word32 {
    #[inline(always)]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline(always)]
    pub fn copy_from(&mut self, src: &Word32) {
        self.0 = src.0;
    }

    /// Load from big-endian bytes, zeroizing the source bytes
    #[inline(always)]
    pub fn fill_with_be_bytes(&mut self, bytes: &mut [u8; 4]) {
        u32_from_be(&mut self.0, bytes);
    }

    /// Export as big-endian bytes, zeroizing self
    #[inline(always)]
    pub fn export_as_be_bytes(&mut self, bytes: &mut [u8; 4]) {
        u32_to_be(&mut self.0, bytes);
    }

    #[inline(always)]
    pub fn wrapping_add_assign(&mut self, rhs: &Word32) {
        self.0 = self.0.wrapping_add(rhs.0);
    }

    #[inline(always)]
    pub fn wrapping_add_assign_val(&mut self, rhs: u32) {
        self.0 = self.0.wrapping_add(rhs);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SHA-256 logical functions per FIPS 180-4 Section 4.1.2
    // ═══════════════════════════════════════════════════════════════════════════

    /// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
    #[inline(always)]
    pub fn set_ch(&mut self, x: &Word32, y: &Word32, z: &Word32) {
        self.0 = (x.0 & y.0) ^ (!x.0 & z.0);
    }

    /// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z), as (x ∧ y) ⊕ (z ∧ (x ⊕ y))
    #[inline(always)]
    pub fn set_maj(&mut self, x: &Word32, y: &Word32, z: &Word32) {
        self.0 = (x.0 & y.0) ^ (z.0 & (x.0 ^ y.0));
    }

    /// Σ0(x) = ROTR^2(x) ⊕ ROTR^13(x) ⊕ ROTR^22(x)
    #[inline(always)]
    pub fn set_bsig0(&mut self, x: &Word32) {
        self.0 = x.0.rotate_right(2) ^ x.0.rotate_right(13) ^ x.0.rotate_right(22);
    }

    /// Σ1(x) = ROTR^6(x) ⊕ ROTR^11(x) ⊕ ROTR^25(x)
    #[inline(always)]
    pub fn set_bsig1(&mut self, x: &Word32) {
        self.0 = x.0.rotate_right(6) ^ x.0.rotate_right(11) ^ x.0.rotate_right(25);
    }

    /// σ0(x) = ROTR^7(x) ⊕ ROTR^18(x) ⊕ SHR^3(x)
    #[inline(always)]
    pub fn set_ssig0(&mut self, x: &Word32) {
        self.0 = x.0.rotate_right(7) ^ x.0.rotate_right(18) ^ (x.0 >> 3);
    }

    /// σ1(x) = ROTR^17(x) ⊕ ROTR^19(x) ⊕ SHR^10(x)
    #[inline(always)]
    pub fn set_ssig1(&mut self, x: &Word32) {
        self.0 = x.0.rotate_right(17) ^ x.0.rotate_right(19) ^ (x.0 >> 10);
    }

    #[inline(always)]
    pub fn is_zeroized(&self) -> bool {
        self.0 == 0
    }

    #[cfg(test)]
    pub(crate) fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Zeroize for Word32 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for Word32 {
    fn drop(&mut self) {
        debug_assert!(self.is_zeroized(), "Word32 dropped without zeroization");
        self.zeroize();
    }
}
