// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot SHA-256 and the [`Digest`] output type

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use digestlab_util::{bytes_to_hex, constant_time_eq, try_hex_to_bytes};

use crate::compress::compress_blocks;
use crate::consts::{H0, HASH_LEN};
use crate::error::{DigestError, ParseDigestError};
use crate::padding::{TAIL_CAPACITY, bit_length, split_blocks, write_tail};

/// 256-bit SHA-256 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; HASH_LEN]);

impl Digest {
    /// Wrap raw digest bytes
    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Serialize a final hash state H0..H7 (big-endian, concatenated)
    pub fn from_state(state: &[u32; 8]) -> Self {
        Self(state_to_bytes(state))
    }

    /// Borrow the digest bytes
    pub const fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Take the digest bytes
    pub const fn into_bytes(self) -> [u8; HASH_LEN] {
        self.0
    }

    /// 64 lowercase hex characters
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Compare without early exit on the first differing byte
    pub fn ct_eq(&self, other: &Digest) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Digest> for [u8; HASH_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

impl FromStr for Digest {
    type Err = ParseDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 * HASH_LEN {
            return Err(ParseDigestError::InvalidLength { len: s.len() });
        }

        let bytes = try_hex_to_bytes(s).ok_or(ParseDigestError::InvalidHex)?;

        let mut out = [0u8; HASH_LEN];
        out.copy_from_slice(&bytes);

        Ok(Self(out))
    }
}

/// H0..H7 as 32 big-endian bytes
pub fn state_to_bytes(state: &[u32; 8]) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];

    for (chunk, word) in out.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    out
}

/// SHA-256 of `message`.
///
/// Fails only when the message bit length overflows the 64-bit length field.
pub fn digest(message: &[u8]) -> Result<Digest, DigestError> {
    let bit_len = bit_length(message.len())?;
    let (whole, pending) = split_blocks(message);

    let state = compress_blocks(&H0, whole);

    let mut tail = [0u8; TAIL_CAPACITY];
    let tail_len = write_tail(pending, bit_len, &mut tail);
    let state = compress_blocks(&state, &tail[..tail_len]);

    Ok(Digest::from_state(&state))
}

/// SHA-256 of `message` as 64 lowercase hex characters.
pub fn digest_hex(message: &[u8]) -> Result<String, DigestError> {
    digest(message).map(|d| d.to_hex())
}
