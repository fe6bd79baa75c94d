//! Twisted Edwards curve domain parameters
//!
//! All values are big-endian 32-byte words.

pub mod babyjubjub;

/// Domain parameters of a curve `a·x² + y² = 1 + d·x²·y²` over `GF(p)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Base field modulus
    pub p: [u8; 32],
    /// Coefficient `a`, reduced modulo `p`
    pub a: [u8; 32],
    /// Coefficient `d`
    pub d: [u8; 32],
    /// Generator x-coordinate
    pub g_x: [u8; 32],
    /// Generator y-coordinate
    pub g_y: [u8; 32],
    /// Order of the generator
    pub n: [u8; 32],
    /// Cofactor
    pub h: u32,
}
