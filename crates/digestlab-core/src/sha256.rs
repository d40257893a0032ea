// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-256 (update / finalize)

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::compress::{compress, compress_blocks};
use crate::consts::{BLOCK_LEN, H0};
use crate::digest::Digest;
use crate::error::DigestError;
use crate::padding::{TAIL_CAPACITY, split_blocks, write_tail};

/// Incremental SHA-256 state.
///
/// Feeding a message in any number of `update` calls yields the same digest
/// as [`digest`](crate::digest()) over the concatenation. Buffered input and
/// the chaining value are zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha256 {
    // Chaining value H(i)
    state: [u32; 8],

    // Partial block awaiting more input
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,

    // Message length absorbed so far, in bytes. Invariant: total_len * 8 fits in u64.
    total_len: u64,
    blocks: u64,
}

impl Sha256 {
    /// Fresh state initialized with H(0)
    pub const fn new() -> Self {
        Self {
            state: H0,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
            blocks: 0,
        }
    }

    /// Absorb `data`.
    ///
    /// Fails with [`DigestError::InputTooLarge`] if the total message would
    /// exceed 2^64 - 1 bits; the state is left untouched in that case.
    pub fn update(&mut self, data: &[u8]) -> Result<(), DigestError> {
        let total_len = u64::try_from(data.len())
            .ok()
            .and_then(|len| self.total_len.checked_add(len))
            .filter(|len| len.checked_mul(8).is_some())
            .ok_or(DigestError::InputTooLarge)?;

        let mut data = data;

        // Top up a partially filled buffer first
        if self.buffer_len > 0 {
            let take = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len());

            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len == BLOCK_LEN {
                self.state = compress(&self.state, &self.buffer);
                self.blocks += 1;
                self.buffer.zeroize();
                self.buffer_len = 0;
            }
        }

        let (whole, rest) = split_blocks(data);
        self.state = compress_blocks(&self.state, whole);
        self.blocks += (whole.len() / BLOCK_LEN) as u64;

        if !rest.is_empty() {
            self.buffer[..rest.len()].copy_from_slice(rest);
            self.buffer_len = rest.len();
        }

        self.total_len = total_len;

        Ok(())
    }

    /// Pad, compress the final block(s) and return the digest.
    pub fn finalize(mut self) -> Digest {
        self.finish()
    }

    /// Like [`finalize`](Self::finalize), then reset to H(0) for reuse.
    pub fn finalize_reset(&mut self) -> Digest {
        let digest = self.finish();
        self.reset();
        digest
    }

    /// Discard absorbed input and return to H(0)
    pub fn reset(&mut self) {
        self.zeroize();
        self.state = H0;
    }

    /// Bytes absorbed so far
    pub const fn total_len(&self) -> u64 {
        self.total_len
    }

    /// Blocks run through the compression function so far
    pub const fn blocks_compressed(&self) -> u64 {
        self.blocks
    }

    fn finish(&mut self) -> Digest {
        // update() keeps total_len * 8 within u64
        let bit_len = self.total_len * 8;

        let mut tail = [0u8; TAIL_CAPACITY];
        let tail_len = write_tail(&self.buffer[..self.buffer_len], bit_len, &mut tail);

        self.state = compress_blocks(&self.state, &tail[..tail_len]);
        self.blocks += (tail_len / BLOCK_LEN) as u64;
        tail.zeroize();

        Digest::from_state(&self.state)
    }

    /// Pretend `len` bytes were already absorbed.
    #[cfg(test)]
    pub(crate) fn with_total_len(len: u64) -> Self {
        let mut state = Self::new();
        state.total_len = len;
        state
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256")
            .field("total_len", &self.total_len)
            .field("blocks", &self.blocks)
            .finish_non_exhaustive()
    }
}
