//! Word-level arithmetic with explicit carries
//!
//! Borrows are represented as `0` or `u64::MAX` (the high word of a wrapped
//! `u128` subtraction), so they can be used directly as masks.

/// Compute `a + b + carry`, returning the result and the new carry
#[inline(always)]
pub const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Compute `a - (b + borrow)`, returning the result and the new borrow
#[inline(always)]
pub const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (t as u64, (t >> 64) as u64)
}

/// Compute `a + (b * c) + carry`, returning the result and the new carry
#[inline(always)]
pub const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// 256-bit addition; returns the sum and the carry out (0 or 1)
#[inline]
pub const fn add4(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let (r0, c) = adc(a[0], b[0], 0);
    let (r1, c) = adc(a[1], b[1], c);
    let (r2, c) = adc(a[2], b[2], c);
    let (r3, c) = adc(a[3], b[3], c);
    ([r0, r1, r2, r3], c)
}

/// 256-bit subtraction; returns the difference and the borrow mask
#[inline]
pub const fn sub4(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let (r0, bw) = sbb(a[0], b[0], 0);
    let (r1, bw) = sbb(a[1], b[1], bw);
    let (r2, bw) = sbb(a[2], b[2], bw);
    let (r3, bw) = sbb(a[3], b[3], bw);
    ([r0, r1, r2, r3], bw)
}

/// Lexicographic comparison of two 256-bit values: `a < b`
#[inline]
pub const fn lt4(a: &[u64; 4], b: &[u64; 4]) -> bool {
    let (_, borrow) = sub4(a, b);
    borrow != 0
}
