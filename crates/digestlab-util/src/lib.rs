// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Encoding and comparison helpers shared by the digestlab crates.
//!
//! - [`bytes_to_hex`] / [`try_hex_to_bytes`]: lowercase hex rendering and parsing
//! - [`constant_time_eq`]: slice equality without early exit
//! - `hex_to_bytes` (feature `test-utils`): panicking parser for test fixtures

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod ct;
mod hex;

pub use ct::constant_time_eq;
#[cfg(feature = "test-utils")]
pub use hex::hex_to_bytes;
pub use hex::{bytes_to_hex, try_hex_to_bytes};
