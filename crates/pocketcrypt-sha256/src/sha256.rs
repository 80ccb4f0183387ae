// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 per FIPS 180-4 Section 6.2

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, DIGEST_LEN, H0, K256, LENGTH_TRAILER_LEN};
use crate::digest::Digest;
use crate::error::HashError;
use crate::word32::Word32;

/// Lifecycle tag of a hash context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Accepting input.
    Ready,
    /// Digest already produced; the context must be reset before reuse.
    Finalized,
}

/// Message schedule and working variables for one compression.
///
/// Wiped after every block so nothing derived from the input outlives it.
#[derive(Clone, Zeroize)]
pub(crate) struct Schedule {
    // Message schedule W[0..63]
    w: [Word32; 64],
    // Working variables a..h per FIPS 180-4 Section 6.2.2
    wv: [Word32; 8],
    t1: Word32,
    t2: Word32,
    scratch: Word32,
}

impl Schedule {
    fn new() -> Self {
        Self {
            w: core::array::from_fn(|_| Word32::zero()),
            wv: core::array::from_fn(|_| Word32::zero()),
            t1: Word32::zero(),
            t2: Word32::zero(),
            scratch: Word32::zero(),
        }
    }

    /// Folds one 512-bit block into the hash state `h`.
    pub(crate) fn compress(&mut self, h: &mut [Word32; 8], block: &[u8; BLOCK_LEN]) {
        let mut tmp_word = [0u8; 4];

        // W[0..15] from the block, big-endian
        for (wt, chunk) in self.w.iter_mut().zip(block.chunks_exact(4)) {
            tmp_word.copy_from_slice(chunk);
            wt.fill_with_be_bytes(&mut tmp_word);
        }

        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..64 {
            let (head, tail) = self.w.split_at_mut(t);
            let wt = &mut tail[0];

            wt.copy_from(&head[t - 16]);
            wt.wrapping_add_assign(&head[t - 7]);

            self.scratch.set_ssig0(&head[t - 15]);
            wt.wrapping_add_assign(&self.scratch);

            self.scratch.set_ssig1(&head[t - 2]);
            wt.wrapping_add_assign(&self.scratch);
        }

        for (wv, hv) in self.wv.iter_mut().zip(h.iter()) {
            wv.copy_from(hv);
        }

        for (k, wt) in K256.iter().zip(self.w.iter()) {
            // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            self.t1.copy_from(&self.wv[7]);
            self.scratch.set_bsig1(&self.wv[4]);
            self.t1.wrapping_add_assign(&self.scratch);
            self.scratch.set_ch(&self.wv[4], &self.wv[5], &self.wv[6]);
            self.t1.wrapping_add_assign(&self.scratch);
            self.t1.wrapping_add_assign_val(*k);
            self.t1.wrapping_add_assign(wt);

            // T2 = Σ0(a) + Maj(a,b,c)
            self.t2.set_bsig0(&self.wv[0]);
            self.scratch.set_maj(&self.wv[0], &self.wv[1], &self.wv[2]);
            self.t2.wrapping_add_assign(&self.scratch);

            // [a..h] -> [h, a, b, c, d, e, f, g], then a = T1 + T2, e = d + T1
            self.wv.rotate_right(1);
            self.wv[4].wrapping_add_assign(&self.t1);
            self.wv[0].copy_from(&self.t1);
            self.wv[0].wrapping_add_assign(&self.t2);
        }

        for (hv, wv) in h.iter_mut().zip(self.wv.iter()) {
            hv.wrapping_add_assign(wv);
        }

        self.zeroize();
    }
}

/// Streaming SHA-256 context.
///
/// Holds the running state, a partial block of fewer than 64 bytes and the
/// total number of absorbed bytes. Every full block is compressed as soon as
/// it is complete. All buffers are zeroized on drop; the only way to wipe a
/// live context is [`reset`](Self::reset), which re-initialises it.
///
/// # Example
///
/// ```rust
/// use pocketcrypt_sha256::Sha256;
///
/// let mut ctx = Sha256::new();
/// ctx.update(b"ab");
/// ctx.update(b"c");
/// let digest = ctx.finalize();
///
/// assert_eq!(
///     digest.to_string(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
#[derive(Clone)]
pub struct Sha256 {
    // Hash state H(i)
    h: [Word32; 8],
    schedule: Schedule,

    // Input buffering
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u64,

    state: ContextState,
}

impl Sha256 {
    /// Creates a context initialised with H(0).
    pub fn new() -> Self {
        Self {
            h: H0.map(Word32::new),
            schedule: Schedule::new(),
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
            state: ContextState::Ready,
        }
    }

    /// Wipes all state and re-initialises with H(0).
    pub fn reset(&mut self) {
        self.wipe();
        for (hv, init) in self.h.iter_mut().zip(H0) {
            *hv = Word32::new(init);
        }
        self.state = ContextState::Ready;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// Number of bytes absorbed since the last reset.
    pub fn absorbed_len(&self) -> u64 {
        self.total_len
    }

    /// Absorbs `data`.
    ///
    /// # Panics
    ///
    /// Panics if the context has already been finalized. Use
    /// [`try_update`](Self::try_update) for a recoverable signal.
    pub fn update(&mut self, data: &[u8]) {
        assert!(
            self.state == ContextState::Ready,
            "Sha256::update called on a finalized context; call reset() first"
        );
        self.absorb(data);
    }

    /// Absorbs `data`, or fails with [`HashError::Finalized`].
    pub fn try_update(&mut self, data: &[u8]) -> Result<(), HashError> {
        self.ensure_ready()?;
        self.absorb(data);

        Ok(())
    }

    /// Pads the message, compresses the final block(s) and returns the digest.
    ///
    /// # Panics
    ///
    /// Panics if the context has already been finalized.
    pub fn finalize(&mut self) -> Digest {
        assert!(
            self.state == ContextState::Ready,
            "Sha256::finalize called twice; call reset() first"
        );
        self.finish()
    }

    /// Like [`finalize`](Self::finalize), but fails with [`HashError::Finalized`]
    /// instead of panicking.
    pub fn try_finalize(&mut self) -> Result<Digest, HashError> {
        self.ensure_ready()?;

        Ok(self.finish())
    }

    fn ensure_ready(&self) -> Result<(), HashError> {
        match self.state {
            ContextState::Ready => Ok(()),
            ContextState::Finalized => Err(HashError::Finalized),
        }
    }

    fn absorb(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);
        let mut input = data;

        // Top up a partially filled buffer first
        if self.buffer_len > 0 {
            let take = core::cmp::min(BLOCK_LEN - self.buffer_len, input.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&input[..take]);
            self.buffer_len += take;
            input = &input[take..];

            if self.buffer_len < BLOCK_LEN {
                return;
            }

            self.schedule.compress(&mut self.h, &self.buffer);
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        // Full blocks straight from the input
        while let Some((block, rest)) = input.split_first_chunk::<BLOCK_LEN>() {
            self.schedule.compress(&mut self.h, block);
            input = rest;
        }

        self.buffer[..input.len()].copy_from_slice(input);
        self.buffer_len = input.len();
    }

    fn finish(&mut self) -> Digest {
        // Padding per FIPS 180-4 Section 5.1.1
        let bit_len = self.total_len.wrapping_mul(8);

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // No room left for the length trailer: flush and pad a fresh block
        if self.buffer_len > BLOCK_LEN - LENGTH_TRAILER_LEN {
            self.buffer[self.buffer_len..].fill(0);
            self.schedule.compress(&mut self.h, &self.buffer);
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..BLOCK_LEN - LENGTH_TRAILER_LEN].fill(0);
        self.buffer[BLOCK_LEN - LENGTH_TRAILER_LEN..].copy_from_slice(&bit_len.to_be_bytes());
        self.schedule.compress(&mut self.h, &self.buffer);

        let mut out = [0u8; DIGEST_LEN];
        let mut tmp_word = [0u8; 4];
        for (word, chunk) in self.h.iter_mut().zip(out.chunks_exact_mut(4)) {
            word.export_as_be_bytes(&mut tmp_word);
            chunk.copy_from_slice(&tmp_word);
        }
        tmp_word.zeroize();

        self.buffer.zeroize();
        self.buffer_len = 0;
        self.total_len = 0;
        self.state = ContextState::Finalized;

        Digest::new(out)
    }

    /// Zeroizes every buffer and marks the context `Finalized`.
    pub(crate) fn wipe(&mut self) {
        self.h.zeroize();
        self.schedule.zeroize();
        self.buffer.zeroize();
        self.buffer_len.zeroize();
        self.total_len.zeroize();
        self.state = ContextState::Finalized;
    }

    #[cfg(test)]
    pub(crate) fn buffered_len(&self) -> usize {
        self.buffer_len
    }
}

impl Drop for Sha256 {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl ZeroizeOnDrop for Sha256 {}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sha256")
            .field("state", &self.state)
            .field("absorbed_len", &self.total_len)
            .finish_non_exhaustive()
    }
}

/// Computes the SHA-256 digest of `data` in one call.
pub fn sha256(data: &[u8]) -> Digest {
    let mut ctx = Sha256::new();
    ctx.update(data);
    ctx.finalize()
}

/// Applies the compression function to a single block (test hook).
#[cfg(test)]
pub(crate) fn compress_block(h: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let mut state: [Word32; 8] = (*h).map(Word32::new);
    let mut schedule = Schedule::new();

    schedule.compress(&mut state, block);

    for (out, word) in h.iter_mut().zip(state.iter()) {
        *out = word.as_u32();
    }
    state.zeroize();
}
