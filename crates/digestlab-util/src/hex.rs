// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Render bytes as lowercase hex (two characters per byte).
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);

    for byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }

    out
}

#[inline(always)]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a hex string (either case) into bytes.
///
/// Returns `None` on odd length or on any non-hex character.
pub fn try_hex_to_bytes(hex: &str) -> Option<Vec<u8>> {
    let raw = hex.as_bytes();

    if raw.len() % 2 != 0 {
        return None;
    }

    raw.chunks_exact(2)
        .map(|pair| Some((nibble(pair[0])? << 4) | nibble(pair[1])?))
        .collect()
}

/// Parse a hex string into bytes, panicking on malformed input.
///
/// Intended for test fixtures and vector tables only.
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    match try_hex_to_bytes(hex) {
        Some(bytes) => bytes,
        None => panic!("invalid hex string: {hex:?}"),
    }
}
