//! Baby Jubjub
//!
//! The twisted Edwards curve `-x² + y² = 1 + d·x²·y²` over the BN254 scalar
//! field, with a prime-order subgroup of order
//! n = 0x060c89ce5c263405370a08b6d0302b0bab3eedb83920ee0a677297dc392126f1
//! and cofactor 8.
//!
//! Public keys travel in a 32-byte packed form: the y-coordinate with bit 255
//! set iff x is odd. Since p < 2^254, bit 255 of a canonical y is always free.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;
use zkdex_params::curves::babyjubjub::{BABYJUBJUB_FIELD_ELEMENT_SIZE, PACKED_SIGN_BIT};
use zkdex_params::BABYJUBJUB;

use super::{AffinePoint, CurveSpec, ProjectivePoint};
use crate::error::{Error, Result};
use crate::field::{self, Fp};
use crate::types::U256;

/// The Baby Jubjub curve marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jubjub;

impl CurveSpec for Jubjub {
    type Base = field::Bn254Fr;
    type Scalar = field::JubjubFs;
    const NAME: &'static str = "Jubjub";
    const PARAMS: zkdex_params::CurveParams = BABYJUBJUB;
}

/// Base field element of the curve, also the Poseidon word type
pub type FieldElement = Fp<field::Bn254Fr>;

/// Scalar modulo the subgroup order
pub type Scalar = Fp<field::JubjubFs>;

/// Affine Baby Jubjub point
pub type Point = AffinePoint<Jubjub>;

/// Extended-coordinate Baby Jubjub point
pub type Projective = ProjectivePoint<Jubjub>;

/// Size of the packed public-key encoding
pub const PACKED_POINT_SIZE: usize = BABYJUBJUB_FIELD_ELEMENT_SIZE;

const SIGN_FLAG: u8 = 0x80;

/// Get the standard base point G of the subgroup
pub fn base_point_g() -> Result<Point> {
    Point::generator()
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<Point> {
    Ok(base_point_g()?.mul(scalar))
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    point.mul(scalar)
}

/// Draw a uniformly random scalar in [1, n-1] by rejection sampling
pub fn random_nonzero_scalar<R: CryptoRng + RngCore>(rng: &mut R) -> Scalar {
    let mut bytes = [0u8; 32];
    loop {
        rng.fill_bytes(&mut bytes);
        // n < 2^251: keep the draw inside [0, 2^251) so rejection stays rare
        bytes[0] &= 0x07;
        if let Ok(k) = Scalar::from_bytes(&bytes) {
            if !k.is_zero() {
                bytes.zeroize();
                return k;
            }
        }
    }
}

/// Generate a random key pair
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let private_key = random_nonzero_scalar(rng);
    let public_key = scalar_mult_base_g(&private_key)?;
    Ok((private_key, public_key))
}

/// Encode a point as y with the parity of x in bit 255
pub fn pack(point: &Point) -> [u8; PACKED_POINT_SIZE] {
    let mut out = point.y_coordinate_bytes();
    if point.x().is_odd() {
        out[0] |= SIGN_FLAG;
    }
    out
}

/// Decode a packed point, recovering x from the curve equation
///
/// A y at or above p is a range error; a y with no point on the curve is
/// an invalid point.
pub fn unpack(bytes: &[u8; PACKED_POINT_SIZE]) -> Result<Point> {
    let x_is_odd = bytes[0] & SIGN_FLAG != 0;
    let mut y_bytes = *bytes;
    y_bytes[0] &= !SIGN_FLAG;
    let y = FieldElement::from_bytes(&y_bytes)?;
    Point::decompress(&y, x_is_odd)
}

/// Decode a packed point that must also be a usable public key
///
/// Rejects the identity and points outside the prime-order subgroup.
pub fn unpack_public_key(bytes: &[u8; PACKED_POINT_SIZE]) -> Result<Point> {
    let point = unpack(bytes)?;
    if point.is_identity() || !point.is_in_subgroup() {
        return Err(Error::InvalidPoint {
            context: "public key",
            reason: "point is not a generator multiple",
        });
    }
    Ok(point)
}

/// Reduce a base-field value into the scalar field (`x mod n`)
pub fn field_to_scalar(x: &FieldElement) -> Scalar {
    Scalar::from_uint_reduced(&x.to_uint())
}

/// `u1·G + u2·Q` with a single final normalisation
pub fn double_scalar_mult_base(u1: &Scalar, u2: &Scalar, q: &Point) -> Result<Projective> {
    let g = base_point_g()?.to_projective();
    Ok(g.mul(u1).add(&q.to_projective().mul(u2)))
}

/// Whether a packed key and an x-coordinate describe one curve point
///
/// The ordinate is the packed value without its sign bit; the equation must
/// hold for `(x, y)` and the parity of `x` must match the sign bit. Values
/// at or above p are simply not on the curve.
pub fn is_on_curve(packed: &U256, x: &U256) -> bool {
    let x_is_odd = packed.bit(PACKED_SIGN_BIT);
    let mut y_bytes = packed.to_be_bytes();
    y_bytes[0] &= !SIGN_FLAG;
    let y = U256::from_be_bytes(&y_bytes);
    match (FieldElement::from_uint(x), FieldElement::from_uint(&y)) {
        (Some(x), Some(y)) => x.is_odd() == x_is_odd && Point::is_on_curve(&x, &y),
        _ => false,
    }
}
