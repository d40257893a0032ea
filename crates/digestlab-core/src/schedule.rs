// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message schedule per FIPS 180-4 Section 6.2.2 step 1

use crate::consts::{BLOCK_LEN, SCHEDULE_LEN};
use crate::word::{small_sigma0, small_sigma1};

/// Expand one block into the 64-word message schedule W.
///
/// - W[0..16]: big-endian words of the block
/// - W[16..64]: σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
pub fn expand(block: &[u8; BLOCK_LEN]) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];

    for (t, chunk) in block.chunks_exact(4).enumerate() {
        w[t] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for t in 16..SCHEDULE_LEN {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}
