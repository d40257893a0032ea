// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per FIPS 180-4 Section 5.1.1
//!
//! `M || 0x80 || 0x00* || len_be64(M)` so that the total length is a multiple
//! of [`BLOCK_LEN`]. The length field counts bits, not bytes.

use alloc::vec::Vec;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN, PAD_MARKER};
use crate::error::DigestError;

/// Room for the last one or two padded blocks.
pub(crate) const TAIL_CAPACITY: usize = 2 * BLOCK_LEN;

/// Message length in bits, as written into the length field.
///
/// Fails with [`DigestError::InputTooLarge`] when the bit count does not fit
/// in 64 bits; the field is never truncated.
pub fn bit_length(len: usize) -> Result<u64, DigestError> {
    u64::try_from(len)
        .ok()
        .and_then(|bytes| bytes.checked_mul(8))
        .ok_or(DigestError::InputTooLarge)
}

/// Number of `0x00` bytes between the marker and the length field.
#[inline(always)]
pub(crate) const fn zero_fill_len(len: usize) -> usize {
    (2 * BLOCK_LEN - LENGTH_FIELD_LEN - 1 - len % BLOCK_LEN) % BLOCK_LEN
}

/// Total padded length for a message of `len` bytes, without allocating.
pub fn padded_len(len: usize) -> Result<usize, DigestError> {
    bit_length(len)?;

    len.checked_add(1 + zero_fill_len(len) + LENGTH_FIELD_LEN)
        .ok_or(DigestError::InputTooLarge)
}

/// Write the final padded block(s) into `out`, returning the bytes written
/// (64 or 128).
///
/// `pending` is the trailing partial block of the message (`< BLOCK_LEN`
/// bytes) and `bit_len` the bit length of the whole message.
pub(crate) fn write_tail(pending: &[u8], bit_len: u64, out: &mut [u8; TAIL_CAPACITY]) -> usize {
    debug_assert!(pending.len() < BLOCK_LEN);

    let marker_at = pending.len();
    let length_at = marker_at + 1 + zero_fill_len(pending.len());

    out[..marker_at].copy_from_slice(pending);
    out[marker_at] = PAD_MARKER;
    out[marker_at + 1..length_at].fill(0);
    out[length_at..length_at + LENGTH_FIELD_LEN].copy_from_slice(&bit_len.to_be_bytes());

    length_at + LENGTH_FIELD_LEN
}

/// Split a message into its whole blocks and the trailing partial block.
#[inline(always)]
pub(crate) fn split_blocks(message: &[u8]) -> (&[u8], &[u8]) {
    message.split_at(message.len() - message.len() % BLOCK_LEN)
}

/// Pad `message` to a whole number of blocks.
///
/// The result is at least `message.len() + 9` bytes and always a positive
/// multiple of [`BLOCK_LEN`].
pub fn pad(message: &[u8]) -> Result<Vec<u8>, DigestError> {
    let bit_len = bit_length(message.len())?;
    let total = padded_len(message.len())?;
    let (whole, pending) = split_blocks(message);

    let mut tail = [0u8; TAIL_CAPACITY];
    let tail_len = write_tail(pending, bit_len, &mut tail);

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(whole);
    out.extend_from_slice(&tail[..tail_len]);

    debug_assert_eq!(out.len(), total);

    Ok(out)
}
