// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Round-by-round traces for step-through presentation.
//!
//! Traces are recorded by replaying [`round`] alongside the regular
//! compression path; the digest functions themselves keep no history.

use alloc::vec::Vec;

use crate::compress::{WorkingVars, round, temp1, temp2};
use crate::consts::{BLOCK_LEN, H0, K256, SCHEDULE_LEN};
use crate::error::DigestError;
use crate::padding::pad;
use crate::schedule::expand;

/// State after a single compression round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTrace {
    /// Round index t (0..64)
    pub round: usize,
    /// K[t]
    pub k: u32,
    /// W[t]
    pub w: u32,
    /// T1 computed in this round
    pub t1: u32,
    /// T2 computed in this round
    pub t2: u32,
    /// Working variables after this round
    pub vars: WorkingVars,
}

/// Full record of one block's compression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTrace {
    /// Hash state before the block
    pub input_state: [u32; 8],
    /// Message schedule W[0..64]
    pub schedule: [u32; SCHEDULE_LEN],
    /// One entry per round, in order
    pub rounds: Vec<RoundTrace>,
    /// Hash state after the block (input_state + final working variables)
    pub output_state: [u32; 8],
}

/// Replay the 64 rounds over schedule `w` starting from state `h`.
pub fn trace_rounds(h: &[u32; 8], w: &[u32; SCHEDULE_LEN]) -> Vec<RoundTrace> {
    let mut vars = WorkingVars::from_state(h);
    let mut rounds = Vec::with_capacity(SCHEDULE_LEN);

    for (t, (k, wt)) in K256.iter().zip(w.iter()).enumerate() {
        let t1 = temp1(&vars, *k, *wt);
        let t2 = temp2(&vars);
        vars = round(&vars, *k, *wt);

        rounds.push(RoundTrace {
            round: t,
            k: *k,
            w: *wt,
            t1,
            t2,
            vars,
        });
    }

    rounds
}

/// Trace the compression of one block into state `h`.
pub fn trace_block(h: &[u32; 8], block: &[u8; BLOCK_LEN]) -> BlockTrace {
    let schedule = expand(block);
    let rounds = trace_rounds(h, &schedule);

    let output_state = match rounds.last() {
        Some(last) => last.vars.add_to_state(h),
        None => *h,
    };

    BlockTrace {
        input_state: *h,
        schedule,
        rounds,
        output_state,
    }
}

/// Trace every padded block of `message`, starting from H(0).
pub fn trace_message(message: &[u8]) -> Result<Vec<BlockTrace>, DigestError> {
    let padded = pad(message)?;
    let mut traces = Vec::with_capacity(padded.len() / BLOCK_LEN);
    let mut state = H0;
    let mut block = [0u8; BLOCK_LEN];

    for chunk in padded.chunks_exact(BLOCK_LEN) {
        block.copy_from_slice(chunk);

        let trace = trace_block(&state, &block);
        state = trace.output_state;
        traces.push(trace);
    }

    Ok(traces)
}
