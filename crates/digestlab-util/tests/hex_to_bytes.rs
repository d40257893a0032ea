// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod hex_to_bytes_tests {
    use digestlab_util::{hex_to_bytes, try_hex_to_bytes};

    #[test]
    fn test_basic_hex() {
        assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(hex_to_bytes("ABCDEF"), vec![0xab, 0xcd, 0xef]);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(hex_to_bytes(""), Vec::<u8>::new());
    }

    #[test]
    fn test_try_rejects_odd_length() {
        assert_eq!(try_hex_to_bytes("abc"), None);
    }

    #[test]
    fn test_try_rejects_non_hex() {
        assert_eq!(try_hex_to_bytes("0g"), None);
        assert_eq!(try_hex_to_bytes("  "), None);
    }

    #[test]
    #[should_panic]
    fn test_invalid_hex_char() {
        hex_to_bytes("gg");
    }

    #[test]
    #[should_panic]
    fn test_odd_length() {
        hex_to_bytes("abc");
    }
}
