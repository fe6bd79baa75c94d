//! Elliptic Curve Primitives
//!
//! Generic twisted Edwards arithmetic (affine and extended points) with one
//! instance: Baby Jubjub, the curve all L2 keys and signatures live on. Its
//! base field is the Poseidon field, so coordinates hash as single words.

pub mod jubjub;
pub mod point;

use core::fmt;

use zkdex_params::CurveParams;

use crate::field::{FieldParams, Fp};

pub use point::{AffinePoint, ProjectivePoint};

/// A curve `a·x² + y² = 1 + d·x²·y²` together with its base and scalar fields
pub trait CurveSpec: 'static + Copy + Send + Sync + fmt::Debug {
    /// Field the coordinates live in
    type Base: FieldParams;
    /// Field of integers modulo the prime subgroup order
    type Scalar: FieldParams;
    /// Short display name
    const NAME: &'static str;
    /// Domain parameters
    const PARAMS: CurveParams;

    /// Coefficient `a`
    fn a() -> Fp<Self::Base> {
        Fp::from_bytes_reduced(&Self::PARAMS.a)
    }

    /// Coefficient `d`
    fn d() -> Fp<Self::Base> {
        Fp::from_bytes_reduced(&Self::PARAMS.d)
    }
}

pub use jubjub::{Jubjub, Point as JubjubPoint};
