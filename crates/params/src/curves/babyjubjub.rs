//! Baby Jubjub curve parameters
//!
//! The curve is `a·x² + y² = 1 + d·x²·y²` with `a = -1` over the scalar field
//! of BN254, so its coordinates are native Poseidon words. `d` is a
//! non-square and `a` a square, which makes the extended-coordinate addition
//! law complete. The generator spans the prime-order subgroup of order `n`.

use super::CurveParams;

/// Size of a Baby Jubjub coordinate or scalar in bytes
pub const BABYJUBJUB_FIELD_ELEMENT_SIZE: usize = 32;

/// Bit length of the base field modulus
pub const BABYJUBJUB_FIELD_BITS: u32 = 254;

/// Bit of a packed public key carrying the parity of x
pub const PACKED_SIGN_BIT: u32 = 255;

/// Baby Jubjub domain parameters
pub const BABYJUBJUB: CurveParams = CurveParams {
    p: [
        0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
        0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
    ],
    a: [
        0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
        0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x00,
    ],
    d: [
        0x1a, 0xee, 0x90, 0xf1, 0x5f, 0x21, 0x89, 0x69, 0x3d, 0xf0, 0x72, 0xd7, 0x99, 0xfd, 0x11, 0xfc,
        0x03, 0x9b, 0x29, 0x59, 0xeb, 0xb7, 0xc8, 0x67, 0xd0, 0x75, 0xca, 0x8c, 0xf4, 0xd7, 0xeb, 0x8e,
    ],
    g_x: [
        0x2e, 0xf3, 0xf9, 0xb4, 0x23, 0xa2, 0xc8, 0xc7, 0x4e, 0x98, 0x03, 0x95, 0x8f, 0x6c, 0x32, 0x0e,
        0x85, 0x4a, 0x1c, 0x1c, 0x06, 0xcd, 0x5c, 0xc8, 0xfd, 0x22, 0x1d, 0xc0, 0x52, 0xd7, 0x6d, 0xf7,
    ],
    g_y: [
        0x05, 0xa0, 0x11, 0x67, 0xea, 0x78, 0x5d, 0x3f, 0x78, 0x42, 0x24, 0x64, 0x4a, 0x68, 0xe4, 0x06,
        0x75, 0x32, 0xc8, 0x15, 0xf5, 0xf6, 0xd5, 0x7d, 0x98, 0x4b, 0x5c, 0x0e, 0x9c, 0x6c, 0x94, 0xb7,
    ],
    n: [
        0x06, 0x0c, 0x89, 0xce, 0x5c, 0x26, 0x34, 0x05, 0x37, 0x0a, 0x08, 0xb6, 0xd0, 0x30, 0x2b, 0x0b,
        0xab, 0x3e, 0xed, 0xb8, 0x39, 0x20, 0xee, 0x0a, 0x67, 0x72, 0x97, 0xdc, 0x39, 0x21, 0x26, 0xf1,
    ],
    h: 8,
};
