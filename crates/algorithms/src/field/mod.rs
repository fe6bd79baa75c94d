//! Prime field arithmetic over 256-bit moduli
//!
//! Elements are four little-endian ordered `u64` limbs in Montgomery form
//! (`a·R mod m`, `R = 2^256`). Multiplication is the coarsely integrated
//! operand scanning (CIOS) variant, which stays correct for any modulus below
//! `2^256`. The modulus and its derived constants
//! come from a [`FieldParams`] implementation, see [`params`].

use core::fmt;
use core::marker::PhantomData;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;
use zkdex_internal::arith::{adc, add4, lt4, mac, sub4};
use zkdex_internal::constant_time::{ct_eq_limbs, ct_select_limbs};

use crate::error::{Error, Result};
use crate::types::U256;

pub mod params;

pub use params::{Bn254Fr, JubjubFs};

/// Constants describing a prime field `GF(m)`
///
/// `m - 1 = 2^S · T` with `T` odd; `NON_RESIDUE` is a quadratic non-residue
/// used to seed Tonelli-Shanks.
pub trait FieldParams: 'static + Copy + Send + Sync + fmt::Debug {
    /// Short name used in error messages
    const NAME: &'static str;
    /// The modulus `m`
    const MODULUS: [u64; 4];
    /// `-m^-1 mod 2^64`
    const INV: u64;
    /// `2^256 mod m`
    const R: [u64; 4];
    /// `2^512 mod m`
    const R2: [u64; 4];
    /// Two-adicity of `m - 1`
    const S: u32;
    /// Odd part of `m - 1`
    const T: [u64; 4];
    /// Smallest quadratic non-residue
    const NON_RESIDUE: u64;
}

/// An element of the prime field described by `P`
pub struct Fp<P: FieldParams> {
    limbs: [u64; 4],
    _params: PhantomData<P>,
}

impl<P: FieldParams> Clone for Fp<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FieldParams> Copy for Fp<P> {}

impl<P: FieldParams> PartialEq for Fp<P> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq_limbs(&self.limbs, &other.limbs)
    }
}

impl<P: FieldParams> Eq for Fp<P> {}

impl<P: FieldParams> ConstantTimeEq for Fp<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        Choice::from(ct_eq_limbs(&self.limbs, &other.limbs) as u8)
    }
}

impl<P: FieldParams> ConditionallySelectable for Fp<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::from_mont(ct_select_limbs(&a.limbs, &b.limbs, choice.into()))
    }
}

impl<P: FieldParams> Default for Fp<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: FieldParams> Zeroize for Fp<P> {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl<P: FieldParams> fmt::Debug for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", P::NAME, self.to_uint())
    }
}

impl<P: FieldParams> Fp<P> {
    const fn from_mont(limbs: [u64; 4]) -> Self {
        Self {
            limbs,
            _params: PhantomData,
        }
    }

    /// The additive identity
    pub const fn zero() -> Self {
        Self::from_mont([0; 4])
    }

    /// The multiplicative identity
    pub const fn one() -> Self {
        Self::from_mont(P::R)
    }

    /// Convert a small integer
    pub fn from_u64(v: u64) -> Self {
        Self::from_mont(Self::mont_mul(&[v, 0, 0, 0], &P::R2))
    }

    /// Convert a canonical integer; `None` when it is not below the modulus
    pub fn from_uint(v: &U256) -> Option<Self> {
        if !lt4(v.limbs(), &P::MODULUS) {
            return None;
        }
        Some(Self::from_mont(Self::mont_mul(v.limbs(), &P::R2)))
    }

    /// Reduce any 256-bit integer modulo `m`
    pub fn from_uint_reduced(v: &U256) -> Self {
        // a < 2^256 and R2 < m keep the CIOS output below 2m
        Self::from_mont(Self::mont_mul(v.limbs(), &P::R2))
    }

    /// Decode 32 big-endian bytes; fails when the value is not below `m`
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        Self::from_uint(&U256::from_be_bytes(bytes)).ok_or_else(|| {
            Error::range(P::NAME, "value is not below the field modulus")
        })
    }

    /// Decode 32 big-endian bytes, reducing modulo `m`
    pub fn from_bytes_reduced(bytes: &[u8; 32]) -> Self {
        Self::from_uint_reduced(&U256::from_be_bytes(bytes))
    }

    /// Canonical integer value in `[0, m)`
    pub fn to_uint(&self) -> U256 {
        U256::from_limbs(Self::mont_mul(&self.limbs, &[1, 0, 0, 0]))
    }

    /// Canonical big-endian encoding
    pub fn to_bytes(&self) -> [u8; 32] {
        self.to_uint().to_be_bytes()
    }

    /// Whether this is the zero element
    pub fn is_zero(&self) -> bool {
        ct_eq_limbs(&self.limbs, &[0; 4])
    }

    /// Whether the canonical value is odd
    pub fn is_odd(&self) -> bool {
        self.to_uint().limbs()[0] & 1 == 1
    }

    /// `self + rhs`
    pub fn add(&self, rhs: &Self) -> Self {
        let (sum, carry) = add4(&self.limbs, &rhs.limbs);
        let (reduced, borrow) = sub4(&sum, &P::MODULUS);
        // sum < 2m, so one subtraction is enough
        let use_reduced = carry != 0 || borrow == 0;
        Self::from_mont(ct_select_limbs(&sum, &reduced, use_reduced))
    }

    /// `self - rhs`
    pub fn sub(&self, rhs: &Self) -> Self {
        let (diff, borrow) = sub4(&self.limbs, &rhs.limbs);
        let (wrapped, _) = add4(&diff, &P::MODULUS);
        Self::from_mont(ct_select_limbs(&diff, &wrapped, borrow != 0))
    }

    /// `-self`
    pub fn neg(&self) -> Self {
        Self::zero().sub(self)
    }

    /// `2 · self`
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// `self · rhs`
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::from_mont(Self::mont_mul(&self.limbs, &rhs.limbs))
    }

    /// `self²`
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// `self^exp` by left-to-right square and multiply
    ///
    /// The exponent is public in every caller.
    pub fn pow(&self, exp: &[u64; 4]) -> Self {
        let mut acc = Self::one();
        for limb in exp.iter().rev() {
            for bit in (0..64).rev() {
                acc = acc.square();
                if (limb >> bit) & 1 == 1 {
                    acc = acc.mul(self);
                }
            }
        }
        acc
    }

    /// Multiplicative inverse by Fermat's little theorem; `None` for zero
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let (exp, _) = sub4(&P::MODULUS, &[2, 0, 0, 0]);
        Some(self.pow(&exp))
    }

    /// A square root, if one exists (Tonelli-Shanks)
    ///
    /// Which of the two roots is returned is unspecified; callers pick the
    /// one with the parity they need.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::zero());
        }

        let t_plus_one_half = U256::from_limbs(P::T)
            .checked_add(&U256::ONE)
            .map(|v| v.shr1())?;

        let mut m = P::S;
        let mut c = Self::from_u64(P::NON_RESIDUE).pow(&P::T);
        let mut t = self.pow(&P::T);
        let mut r = self.pow(t_plus_one_half.limbs());

        while t != Self::one() {
            // least i with t^(2^i) == 1
            let mut i = 0;
            let mut acc = t;
            while acc != Self::one() {
                acc = acc.square();
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }
            m = i;
            c = b.square();
            t = t.mul(&c);
            r = r.mul(&b);
        }

        if r.square() == *self {
            Some(r)
        } else {
            None
        }
    }

    /// Montgomery product `a · b · R^-1 mod m`
    fn mont_mul(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
        let m = &P::MODULUS;
        let mut t = [0u64; 6];

        for i in 0..4 {
            let mut carry = 0;
            for j in 0..4 {
                let (lo, hi) = mac(t[j], a[j], b[i], carry);
                t[j] = lo;
                carry = hi;
            }
            let (lo, hi) = adc(t[4], carry, 0);
            t[4] = lo;
            t[5] = hi;

            let k = t[0].wrapping_mul(P::INV);
            let (_, mut carry) = mac(t[0], k, m[0], 0);
            for j in 1..4 {
                let (lo, hi) = mac(t[j], k, m[j], carry);
                t[j - 1] = lo;
                carry = hi;
            }
            let (lo, hi) = adc(t[4], carry, 0);
            t[3] = lo;
            t[4] = t[5] + hi;
        }

        let r = [t[0], t[1], t[2], t[3]];
        let (reduced, borrow) = sub4(&r, m);
        ct_select_limbs(&r, &reduced, t[4] != 0 || borrow == 0)
    }
}
