//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Slices of different length compare unequal without inspecting contents.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

/// Constant-time equality of two limb arrays
pub fn ct_eq_limbs<const N: usize>(a: &[u64; N], b: &[u64; N]) -> bool {
    let mut acc = Choice::from(1u8);
    for (x, y) in a.iter().zip(b.iter()) {
        acc &= x.ct_eq(y);
    }
    acc.into()
}

/// Select `b` when `condition` is true, `a` otherwise, limb by limb
pub fn ct_select_limbs<const N: usize>(a: &[u64; N], b: &[u64; N], condition: bool) -> [u64; N] {
    let choice = Choice::from(condition as u8);
    let mut out = [0u64; N];
    for i in 0..N {
        out[i] = u64::conditional_select(&a[i], &b[i], choice);
    }
    out
}
