// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # digestlab
//!
//! SHA-256 built from scratch, stage by stage, so every intermediate value
//! can be inspected.
//!
//! This is a re-export crate for [`digestlab-core`].
//!
//! ## Quick Start
//!
//! ```rust
//! use digestlab::{Sha256, digest};
//!
//! let d = digest(b"abc").expect("message fits the length field");
//! assert_eq!(
//!     d.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"a").expect("message fits the length field");
//! hasher.update(b"bc").expect("message fits the length field");
//! assert_eq!(hasher.finalize(), d);
//! ```
//!
//! ## Stepping through a block
//!
//! ```rust
//! use digestlab::{H0, K256, WorkingVars, expand, pad, round};
//!
//! let padded = pad(b"abc").expect("message fits the length field");
//! let mut block = [0u8; 64];
//! block.copy_from_slice(&padded[..64]);
//!
//! let w = expand(&block);
//! let mut vars = WorkingVars::from_state(&H0);
//! for t in 0..64 {
//!     vars = round(&vars, K256[t], w[t]);
//! }
//! assert_eq!(vars.add_to_state(&H0)[0], 0xba7816bf);
//! ```
//!
//! For recorded per-round state see [`trace`].
//!
//! ## What's Included
//!
//! - **Stages**: [`pad`], [`expand`], [`round`], [`compress_block`], [`digest`]
//! - **Streaming**: [`Sha256`] (update / finalize, zeroized on drop)
//! - **Observation**: [`trace::trace_block`], [`trace::trace_message`]
//! - **Errors**: [`DigestError`], [`ParseDigestError`]
//!
//! [`digestlab-core`]: https://docs.rs/digestlab-core

#![cfg_attr(not(test), no_std)]

pub use digestlab_core::*;
