// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Digest computation error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// Message bit length does not fit the 64-bit length field
    #[error("message bit length exceeds the 64-bit length field (2^64 - 1 bits)")]
    InputTooLarge,
}

/// Error parsing a hex-rendered [`Digest`](crate::Digest)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDigestError {
    /// Input is not exactly 64 hex characters
    #[error("expected 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected input in bytes
        len: usize,
    },

    /// Input contains a non-hex character
    #[error("digest contains a non-hex character")]
    InvalidHex,
}
