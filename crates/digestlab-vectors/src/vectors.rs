// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ShaVector, VectorMessage};

/// SHA-256 known-answer vectors.
///
/// The 55/56/112-byte cases exercise the one- vs two-block padding boundary
/// and chaining across blocks.
pub const SHA256_VECTORS: &[ShaVector] = &[
    ShaVector {
        name: "empty",
        message: VectorMessage::Bytes(b""),
        expected: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    ShaVector {
        name: "abc",
        message: VectorMessage::Bytes(b"abc"),
        expected: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    ShaVector {
        name: "one byte 0xbd",
        message: VectorMessage::Bytes(&[0xbd]),
        expected: "68325720aabd7c82f30f554b313d0570c95accbb7dc4b5aae11204c08ffe732b",
    },
    ShaVector {
        name: "four bytes c98c8e55",
        message: VectorMessage::Bytes(&[0xc9, 0x8c, 0x8e, 0x55]),
        expected: "7abc22c0ae5af26ce93dbb94433a0e0b2e119d014f8e7f65bd56c61ccccd9504",
    },
    ShaVector {
        name: "quick brown fox",
        message: VectorMessage::Bytes(b"The quick brown fox jumps over the lazy dog"),
        expected: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    },
    ShaVector {
        name: "448-bit two-block",
        message: VectorMessage::Bytes(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        expected: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    ShaVector {
        name: "896-bit two-block",
        message: VectorMessage::Bytes(
            b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        ),
        expected: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    ShaVector {
        name: "one million a",
        message: VectorMessage::Repeated {
            byte: b'a',
            count: 1_000_000,
        },
        expected: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    },
];
