//! Field, curve and hashing primitives for zkdex
//!
//! This crate provides the arithmetic the rest of the workspace is built on:
//!
//! - [`field`]: Montgomery prime-field elements generic over their modulus
//! - [`ec`]: twisted Edwards points, instantiated for Baby Jubjub
//! - [`hash`]: the Poseidon sponge and the canonical message word layout
//! - [`types`]: 256-bit integers and their textual encodings

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

pub mod ec;
pub mod field;
pub mod hash;
pub mod types;

pub use ec::jubjub::{FieldElement, Point as JubjubPoint, Scalar as JubjubScalar};
pub use hash::{CanonicalHasher, FieldList, Packed, Poseidon};
pub use types::{SignedAmount, U256};
