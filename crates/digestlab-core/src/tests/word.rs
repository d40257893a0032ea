// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::word::{big_sigma0, big_sigma1, ch, maj, rotr, small_sigma0, small_sigma1};

const TEST_VALUES: [u32; 5] = [
    0x0000_0000,
    0xFFFF_FFFF,
    0x0123_4567,
    0xFEDC_BA98,
    0x0F0F_0F0F,
];

#[test]
fn rotr_wraps_low_bits() {
    assert_eq!(rotr(0x0000_0001, 1), 0x8000_0000);
    assert_eq!(rotr(0x1234_5678, 8), 0x7812_3456);
    assert_eq!(rotr(0xDEAD_BEEF, 0), 0xDEAD_BEEF);
}

#[test]
fn ch_matches_reference() {
    // Ch(x, y, z) = (x & y) ^ (!x & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let expected = (x & y) ^ (!x & z);
                assert_eq!(
                    ch(x, y, z),
                    expected,
                    "Ch mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

#[test]
fn maj_matches_reference() {
    // Maj(x, y, z) = (x & y) ^ (x & z) ^ (y & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let expected = (x & y) ^ (x & z) ^ (y & z);
                assert_eq!(
                    maj(x, y, z),
                    expected,
                    "Maj mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

#[test]
fn bsig0_matches_reference() {
    for &x in &TEST_VALUES {
        let expected = x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22);
        assert_eq!(big_sigma0(x), expected, "BSIG0 mismatch for x={x:#010x}");
    }
}

#[test]
fn bsig1_matches_reference() {
    for &x in &TEST_VALUES {
        let expected = x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25);
        assert_eq!(big_sigma1(x), expected, "BSIG1 mismatch for x={x:#010x}");
    }
}

#[test]
fn ssig0_matches_reference() {
    for &x in &TEST_VALUES {
        let expected = x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3);
        assert_eq!(small_sigma0(x), expected, "SSIG0 mismatch for x={x:#010x}");
    }
}

#[test]
fn ssig1_matches_reference() {
    for &x in &TEST_VALUES {
        let expected = x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10);
        assert_eq!(small_sigma1(x), expected, "SSIG1 mismatch for x={x:#010x}");
    }
}

#[test]
fn ssig1_of_abc_length_word() {
    // W[17] for "abc" reduces to σ1(0x18); NIST worked example gives 0x000f0000
    assert_eq!(small_sigma1(0x0000_0018), 0x000f_0000);
}
