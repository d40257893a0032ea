// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 digest engine
//!
//! Implementation per FIPS 180-4 (SHA-256), built from its four stages:
//! padding, message schedule expansion, 64-round compression and digest
//! assembly. Each stage is exposed so it can be driven and observed on its own.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod digest;
mod error;
mod padding;
mod schedule;
mod sha256;
pub mod trace;
pub mod word;

pub use compress::{WorkingVars, compress, compress_block, round, temp1, temp2};
pub use consts::{BLOCK_LEN, H0, HASH_LEN, K256, LENGTH_FIELD_LEN, SCHEDULE_LEN};
pub use digest::{Digest, digest, digest_hex, state_to_bytes};
pub use error::{DigestError, ParseDigestError};
pub use padding::{bit_length, pad, padded_len};
pub use schedule::expand;
pub use sha256::Sha256;
