//! Field parameter sets
//!
//! Limbs are little-endian ordered. Each set is checked against its modulus
//! in the field tests (`R`, `R2` and `INV` are recomputed there from scratch).

use super::FieldParams;

/// BN254 scalar field, the base field of Baby Jubjub and the Poseidon field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bn254Fr;

impl FieldParams for Bn254Fr {
    const NAME: &'static str = "field element";
    const MODULUS: [u64; 4] = [
        0x43e1f593f0000001,
        0x2833e84879b97091,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ];
    const INV: u64 = 0xc2e1f593efffffff;
    const R: [u64; 4] = [
        0xac96341c4ffffffb,
        0x36fc76959f60cd29,
        0x666ea36f7879462e,
        0x0e0a77c19a07df2f,
    ];
    const R2: [u64; 4] = [
        0x1bb8e645ae216da7,
        0x53fe3ab1e35c59e3,
        0x8c49833d53bb8085,
        0x0216d0b17f4e44a5,
    ];
    const S: u32 = 28;
    const T: [u64; 4] = [
        0x9b9709143e1f593f,
        0x181585d2833e8487,
        0x131a029b85045b68,
        0x000000030644e72e,
    ];
    const NON_RESIDUE: u64 = 5;
}

/// Scalar field of the Baby Jubjub prime-order subgroup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JubjubFs;

impl FieldParams for JubjubFs {
    const NAME: &'static str = "jubjub scalar";
    const MODULUS: [u64; 4] = [
        0x677297dc392126f1,
        0xab3eedb83920ee0a,
        0x370a08b6d0302b0b,
        0x060c89ce5c263405,
    ];
    const INV: u64 = 0x532ce5aebc48f5ef;
    const R: [u64; 4] = [
        0x073315dea08f9c76,
        0xe7acffc6a098f24b,
        0xf85a9201d818f015,
        0x01f16424e1bb7724,
    ];
    const R2: [u64; 4] = [
        0x35e44abee7ecb21e,
        0x74646cacf5f84ec4,
        0xe472df203faa158f,
        0x0445b524f1ba50a8,
    ];
    const S: u32 = 4;
    const T: [u64; 4] = [
        0xa677297dc392126f,
        0xbab3eedb83920ee0,
        0x5370a08b6d0302b0,
        0x0060c89ce5c26340,
    ];
    const NON_RESIDUE: u64 = 19;
}
