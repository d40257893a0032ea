// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression per FIPS 180-4 Section 6.2.2 steps 2-4

use crate::consts::{BLOCK_LEN, K256, SCHEDULE_LEN};
use crate::schedule::expand;
use crate::word::{big_sigma0, big_sigma1, ch, maj};

/// Working variables a..h
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkingVars {
    /// Working variable a
    pub a: u32,
    /// Working variable b
    pub b: u32,
    /// Working variable c
    pub c: u32,
    /// Working variable d
    pub d: u32,
    /// Working variable e
    pub e: u32,
    /// Working variable f
    pub f: u32,
    /// Working variable g
    pub g: u32,
    /// Working variable h
    pub h: u32,
}

impl WorkingVars {
    /// Load a..h from the hash state H0..H7
    pub const fn from_state(state: &[u32; 8]) -> Self {
        Self {
            a: state[0],
            b: state[1],
            c: state[2],
            d: state[3],
            e: state[4],
            f: state[5],
            g: state[6],
            h: state[7],
        }
    }

    /// a..h as an array, in state order
    pub const fn to_state(&self) -> [u32; 8] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h,
        ]
    }

    /// H'[i] = H[i] + var[i] (mod 2^32)
    pub fn add_to_state(&self, state: &[u32; 8]) -> [u32; 8] {
        let vars = self.to_state();
        core::array::from_fn(|i| state[i].wrapping_add(vars[i]))
    }
}

/// T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
#[inline(always)]
pub fn temp1(vars: &WorkingVars, k: u32, w: u32) -> u32 {
    vars.h
        .wrapping_add(big_sigma1(vars.e))
        .wrapping_add(ch(vars.e, vars.f, vars.g))
        .wrapping_add(k)
        .wrapping_add(w)
}

/// T2 = Σ0(a) + Maj(a,b,c)
#[inline(always)]
pub fn temp2(vars: &WorkingVars) -> u32 {
    big_sigma0(vars.a).wrapping_add(maj(vars.a, vars.b, vars.c))
}

/// One compression round with round constant `k` and schedule word `w`.
///
/// Returns (T1+T2, a, b, c, d+T1, e, f, g).
#[inline(always)]
pub fn round(vars: &WorkingVars, k: u32, w: u32) -> WorkingVars {
    let t1 = temp1(vars, k, w);
    let t2 = temp2(vars);

    WorkingVars {
        a: t1.wrapping_add(t2),
        b: vars.a,
        c: vars.b,
        d: vars.c,
        e: vars.d.wrapping_add(t1),
        f: vars.e,
        g: vars.f,
        h: vars.g,
    }
}

/// Run all 64 rounds over schedule `w` and fold the result into `h`.
pub fn compress_block(h: &[u32; 8], w: &[u32; SCHEDULE_LEN]) -> [u32; 8] {
    let mut vars = WorkingVars::from_state(h);

    for (k, wt) in K256.iter().zip(w.iter()) {
        vars = round(&vars, *k, *wt);
    }

    vars.add_to_state(h)
}

/// Expand `block` and compress it into `h`.
#[inline]
pub fn compress(h: &[u32; 8], block: &[u8; BLOCK_LEN]) -> [u32; 8] {
    compress_block(h, &expand(block))
}

/// Compress every block of `data` (a whole number of blocks) in order.
pub(crate) fn compress_blocks(h: &[u32; 8], data: &[u8]) -> [u32; 8] {
    debug_assert_eq!(data.len() % BLOCK_LEN, 0);

    let mut state = *h;
    let mut block = [0u8; BLOCK_LEN];

    for chunk in data.chunks_exact(BLOCK_LEN) {
        block.copy_from_slice(chunk);
        state = compress(&state, &block);
    }

    state
}
