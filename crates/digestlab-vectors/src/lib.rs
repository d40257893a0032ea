// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer vectors and runners for SHA-256 backends.
//!
//! Backends are passed in as closures so the same table checks the one-shot
//! path, the streaming path and any future implementation.
//!
//! References:
//! [1] FIPS 180-4: Secure Hash Standard (SHS)
//!     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
//! [2] NIST SHA-256 examples / additional examples
//!     https://csrc.nist.gov/projects/cryptographic-standards-and-guidelines/example-values
//! [3] RFC 6234 Section 8.5 test vectors
//! [4] NIST CAVP SHA256ShortMsg
//!     https://csrc.nist.gov/projects/cryptographic-algorithm-validation-program/secure-hashing

#![warn(missing_docs)]

mod vectors;

pub use vectors::SHA256_VECTORS;

use digestlab_util::{bytes_to_hex, hex_to_bytes};

/// Message of a vector
#[derive(Debug, Clone, Copy)]
pub enum VectorMessage {
    /// Literal bytes
    Bytes(&'static [u8]),
    /// `byte` repeated `count` times
    Repeated {
        /// Repeated byte
        byte: u8,
        /// Number of repetitions
        count: usize,
    },
}

impl VectorMessage {
    /// Materialize the message
    pub fn to_vec(&self) -> Vec<u8> {
        match *self {
            Self::Bytes(bytes) => bytes.to_vec(),
            Self::Repeated { byte, count } => vec![byte; count],
        }
    }

    /// Message length in bytes
    pub fn len(&self) -> usize {
        match *self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Repeated { count, .. } => count,
        }
    }

    /// True for the empty message
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single known-answer vector
#[derive(Debug, Clone, Copy)]
pub struct ShaVector {
    /// Vector name (used in failure messages)
    pub name: &'static str,
    /// Input message
    pub message: VectorMessage,
    /// Expected digest, lowercase hex
    pub expected: &'static str,
}

impl ShaVector {
    /// Expected digest bytes
    pub fn expected_bytes(&self) -> [u8; 32] {
        let bytes = hex_to_bytes(self.expected);
        assert_eq!(bytes.len(), 32, "vector {}: expected digest must be 32 bytes", self.name);

        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        out
    }
}

fn check(vector: &ShaVector, got: &[u8; 32], context: &str) {
    let expected = vector.expected_bytes();

    if *got != expected {
        println!("SHA-256 vector {:?} ({context}):", vector.name);
        println!("  Result:   {}", bytes_to_hex(got));
        println!("  Expected: {}", vector.expected);
    }

    assert_eq!(
        *got, expected,
        "SHA-256 mismatch for vector {:?} ({context})",
        vector.name
    );
}

/// Check a one-shot backend against every vector.
pub fn run_oneshot_vectors<F>(backend: F)
where
    F: Fn(&[u8]) -> [u8; 32],
{
    for vector in SHA256_VECTORS {
        let message = vector.message.to_vec();
        let got = backend(&message);
        check(vector, &got, "one-shot");
    }
}

/// Check a streaming backend against every vector.
///
/// Each message is cut into `chunk`-byte pieces (the last one may be shorter)
/// and handed to `backend` in order.
pub fn run_streaming_vectors<F>(chunk: usize, backend: F)
where
    F: Fn(&[&[u8]]) -> [u8; 32],
{
    assert!(chunk > 0, "chunk size must be non-zero");

    for vector in SHA256_VECTORS {
        let message = vector.message.to_vec();
        let pieces: Vec<&[u8]> = message.chunks(chunk).collect();
        let got = backend(&pieces);
        check(vector, &got, &format!("streaming, chunk={chunk}"));
    }
}
