//! Constant values for zkdex cryptographic operations
//!
//! Baby Jubjub domain parameters, the Poseidon permutation parameters, schema
//! range bounds and the message type tags folded into every canonical digest.

#![no_std]

pub mod bounds;
pub mod curves;
pub mod poseidon;
pub mod tags;
pub mod utils;

pub use curves::{babyjubjub::BABYJUBJUB, CurveParams};
