// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod bytes_to_hex_tests {
    use digestlab_util::{bytes_to_hex, try_hex_to_bytes};

    #[test]
    fn test_lowercase_output() {
        assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    }

    #[test]
    fn test_leading_zero_nibbles_kept() {
        assert_eq!(bytes_to_hex(&[0x00, 0x01, 0x0a]), "00010a");
    }

    #[test]
    fn test_empty() {
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn test_parses_back() {
        let bytes: Vec<u8> = (0..=255).collect();
        let hex = bytes_to_hex(&bytes);

        assert_eq!(hex.len(), 512);
        assert_eq!(try_hex_to_bytes(&hex), Some(bytes));
    }
}
