// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 logical functions per FIPS 180-4 Section 4.1.2.
//!
//! All functions operate on 32-bit words; additions elsewhere use wrapping
//! arithmetic (mod 2^32).

/// ROTR^n(x): 32-bit right rotation
#[inline(always)]
pub const fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

/// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
#[inline(always)]
pub const fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
///
/// Computed as (x & y) ^ (z & (x ^ y)).
#[inline(always)]
pub const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (z & (x ^ y))
}

/// Σ0(x) = ROTR^2(x) ⊕ ROTR^13(x) ⊕ ROTR^22(x)
#[inline(always)]
pub const fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// Σ1(x) = ROTR^6(x) ⊕ ROTR^11(x) ⊕ ROTR^25(x)
#[inline(always)]
pub const fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// σ0(x) = ROTR^7(x) ⊕ ROTR^18(x) ⊕ SHR^3(x)
#[inline(always)]
pub const fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// σ1(x) = ROTR^17(x) ⊕ ROTR^19(x) ⊕ SHR^10(x)
#[inline(always)]
pub const fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}
