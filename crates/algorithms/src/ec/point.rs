//! Twisted Edwards point arithmetic, generic over the curve

use core::fmt;

use subtle::{Choice, ConditionallySelectable};

use super::CurveSpec;
use crate::error::{validate, Error, Result};
use crate::field::Fp;
use crate::types::U256;

/// A point on the curve `C` in affine coordinates
///
/// The identity is `(0, 1)`; there is no point at infinity.
pub struct AffinePoint<C: CurveSpec> {
    pub(crate) x: Fp<C::Base>,
    pub(crate) y: Fp<C::Base>,
}

/// A point in extended coordinates (X:Y:Z:T), with x = X/Z, y = Y/Z and
/// T = X·Y/Z
pub struct ProjectivePoint<C: CurveSpec> {
    x: Fp<C::Base>,
    y: Fp<C::Base>,
    z: Fp<C::Base>,
    t: Fp<C::Base>,
}

impl<C: CurveSpec> Clone for AffinePoint<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: CurveSpec> Copy for AffinePoint<C> {}

impl<C: CurveSpec> Clone for ProjectivePoint<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: CurveSpec> Copy for ProjectivePoint<C> {}

impl<C: CurveSpec> fmt::Debug for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            write!(f, "{}Point(identity)", C::NAME)
        } else {
            write!(f, "{}Point({:?}, {:?})", C::NAME, self.x, self.y)
        }
    }
}

impl<C: CurveSpec> fmt::Debug for ProjectivePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_affine(), f)
    }
}

impl<C: CurveSpec> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<C: CurveSpec> Eq for AffinePoint<C> {}

impl<C: CurveSpec> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        // X1·Z2 == X2·Z1 and Y1·Z2 == Y2·Z1
        self.x.mul(&other.z) == other.x.mul(&self.z)
            && self.y.mul(&other.z) == other.y.mul(&self.z)
    }
}

impl<C: CurveSpec> AffinePoint<C> {
    /// Create a point from field coordinates.
    ///
    /// Returns an error if the coordinates don't satisfy the curve equation.
    pub fn new(x: Fp<C::Base>, y: Fp<C::Base>) -> Result<Self> {
        validate::on_curve(Self::is_on_curve(&x, &y), C::NAME)?;
        Ok(Self { x, y })
    }

    /// Create a point from big-endian coordinates.
    ///
    /// Coordinates at or above the field modulus are a range error; a pair
    /// off the curve is an invalid point.
    pub fn from_coordinates(x: &[u8; 32], y: &[u8; 32]) -> Result<Self> {
        let x = Fp::from_bytes(x)?;
        let y = Fp::from_bytes(y)?;
        Self::new(x, y)
    }

    /// The neutral element `(0, 1)`
    pub fn identity() -> Self {
        Self {
            x: Fp::zero(),
            y: Fp::one(),
        }
    }

    /// The generator of the prime-order subgroup
    pub fn generator() -> Result<Self> {
        Self::from_coordinates(&C::PARAMS.g_x, &C::PARAMS.g_y)
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == Fp::one()
    }

    /// Whether `(x, y)` satisfies `a·x² + y² = 1 + d·x²·y²`
    pub fn is_on_curve(x: &Fp<C::Base>, y: &Fp<C::Base>) -> bool {
        let xx = x.square();
        let yy = y.square();
        C::a().mul(&xx).add(&yy) == Fp::one().add(&C::d().mul(&xx).mul(&yy))
    }

    /// Check if this point is valid (on the curve).
    pub fn is_valid(&self) -> bool {
        Self::is_on_curve(&self.x, &self.y)
    }

    /// Whether the point lies in the subgroup generated by the generator
    pub fn is_in_subgroup(&self) -> bool {
        let n = U256::from_be_bytes(&C::PARAMS.n);
        self.to_projective().mul_uint(&n).is_identity()
    }

    /// Recover the point with ordinate `y` whose abscissa has the given parity
    ///
    /// `x² = (1 - y²) / (a - d·y²)`.
    pub fn decompress(y: &Fp<C::Base>, x_is_odd: bool) -> Result<Self> {
        let yy = y.square();
        let num = Fp::one().sub(&yy);
        let den = C::a().sub(&C::d().mul(&yy));
        let x = den
            .invert()
            .map(|inv| num.mul(&inv))
            .and_then(|xx| xx.sqrt())
            .ok_or(Error::InvalidPoint {
                context: C::NAME,
                reason: "y is not the ordinate of a curve point",
            })?;
        let x = if x.is_odd() == x_is_odd { x } else { x.neg() };
        Self::new(x, *y)
    }

    /// The x-coordinate
    pub fn x(&self) -> &Fp<C::Base> {
        &self.x
    }

    /// The y-coordinate
    pub fn y(&self) -> &Fp<C::Base> {
        &self.y
    }

    /// Get the x-coordinate of this point as bytes.
    pub fn x_coordinate_bytes(&self) -> [u8; 32] {
        self.x.to_bytes()
    }

    /// Get the y-coordinate of this point as bytes.
    pub fn y_coordinate_bytes(&self) -> [u8; 32] {
        self.y.to_bytes()
    }

    /// `-self`, which is `(-x, y)`
    pub fn neg(&self) -> Self {
        Self {
            x: self.x.neg(),
            y: self.y,
        }
    }

    /// Lift to extended coordinates
    pub fn to_projective(&self) -> ProjectivePoint<C> {
        ProjectivePoint {
            x: self.x,
            y: self.y,
            z: Fp::one(),
            t: self.x.mul(&self.y),
        }
    }

    /// `k · self`
    pub fn mul(&self, k: &Fp<C::Scalar>) -> Self {
        self.to_projective().mul(k).to_affine()
    }

    /// `self + other`
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }
}

impl<C: CurveSpec> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
            t: Fp::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl<C: CurveSpec> ProjectivePoint<C> {
    /// The neutral element (0:1:1:0)
    pub fn identity() -> Self {
        Self {
            x: Fp::zero(),
            y: Fp::one(),
            z: Fp::one(),
            t: Fp::zero(),
        }
    }

    /// Whether this is the neutral element
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == self.z
    }

    /// Convert back to affine coordinates
    pub fn to_affine(&self) -> AffinePoint<C> {
        // Z never vanishes: the addition law is complete
        let zinv = match self.z.invert() {
            Some(zinv) => zinv,
            None => return AffinePoint::identity(),
        };
        AffinePoint {
            x: self.x.mul(&zinv),
            y: self.y.mul(&zinv),
        }
    }

    /// `self + other` (add-2008-hwcd)
    ///
    /// Complete when `a` is a square and `d` is not, so doubling and the
    /// identity need no special cases.
    pub fn add(&self, other: &Self) -> Self {
        let a = self.x.mul(&other.x);
        let b = self.y.mul(&other.y);
        let c = C::d().mul(&self.t).mul(&other.t);
        let d = self.z.mul(&other.z);
        let e = self
            .x
            .add(&self.y)
            .mul(&other.x.add(&other.y))
            .sub(&a)
            .sub(&b);
        let f = d.sub(&c);
        let g = d.add(&c);
        let h = b.sub(&C::a().mul(&a));

        Self {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t: e.mul(&h),
        }
    }

    /// `2 · self`
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// `-self`
    pub fn neg(&self) -> Self {
        Self {
            x: self.x.neg(),
            y: self.y,
            z: self.z,
            t: self.t.neg(),
        }
    }

    /// `self - other`
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// `k · self` for any 256-bit integer `k`
    ///
    /// Double-and-add over all 256 bits with the addition always computed and
    /// conditionally selected.
    pub fn mul_uint(&self, k: &U256) -> Self {
        let mut acc = Self::identity();
        for i in (0..256).rev() {
            acc = acc.double();
            let sum = acc.add(self);
            acc = Self::conditional_select(&acc, &sum, Choice::from(k.bit(i) as u8));
        }
        acc
    }

    /// `k · self` for a scalar of the prime-order subgroup
    pub fn mul(&self, k: &Fp<C::Scalar>) -> Self {
        self.mul_uint(&k.to_uint())
    }
}
