// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Property tests for padding, schedule and streaming invariants

use proptest::prelude::*;

use crate::digest::digest;
use crate::padding::{pad, padded_len};
use crate::schedule::expand;
use crate::sha256::Sha256;

proptest! {
    #[test]
    fn pad_is_whole_blocks(msg in proptest::collection::vec(any::<u8>(), 0..512)) {
        let padded = pad(&msg).expect("Failed to pad(..)");

        prop_assert_eq!(padded.len() % 64, 0);
        prop_assert!(padded.len() >= msg.len() + 9);
        // At most one extra block beyond the minimum
        prop_assert!(padded.len() < msg.len() + 9 + 64);
        prop_assert_eq!(padded.len(), padded_len(msg.len()).expect("Failed to padded_len(..)"));
    }

    #[test]
    fn pad_ends_with_bit_length(msg in proptest::collection::vec(any::<u8>(), 0..512)) {
        let padded = pad(&msg).expect("Failed to pad(..)");
        let tail = &padded[padded.len() - 8..];

        prop_assert_eq!(tail, &((msg.len() as u64) * 8).to_be_bytes()[..]);
        prop_assert_eq!(&padded[..msg.len()], &msg[..]);
        prop_assert_eq!(padded[msg.len()], 0x80);
    }

    #[test]
    fn expand_prefix_is_block_words(block in proptest::array::uniform32(any::<u8>()), tail in proptest::array::uniform32(any::<u8>())) {
        let mut full = [0u8; 64];
        full[..32].copy_from_slice(&block);
        full[32..].copy_from_slice(&tail);

        let w = expand(&full);

        prop_assert_eq!(w.len(), 64);
        for t in 0..16 {
            let expected = u32::from_be_bytes([full[4 * t], full[4 * t + 1], full[4 * t + 2], full[4 * t + 3]]);
            prop_assert_eq!(w[t], expected);
        }
    }

    #[test]
    fn digest_is_deterministic(msg in proptest::collection::vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(digest(&msg), digest(&msg));
    }

    #[test]
    fn streaming_matches_oneshot(
        msg in proptest::collection::vec(any::<u8>(), 0..400),
        cuts in proptest::collection::vec(any::<usize>(), 0..6)
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|c| c % (msg.len() + 1)).collect();
        points.sort_unstable();

        let mut hasher = Sha256::new();
        let mut start = 0;
        for point in points {
            hasher.update(&msg[start..point]).expect("Failed to update(..)");
            start = point;
        }
        hasher.update(&msg[start..]).expect("Failed to update(..)");

        prop_assert_eq!(hasher.finalize(), digest(&msg).expect("Failed to digest(..)"));
    }
}
