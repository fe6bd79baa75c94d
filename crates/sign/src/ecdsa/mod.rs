//! ECDSA over Baby Jubjub
//!
//! The signer takes a digest that is already a field element; it is the one
//! every L2 message goes through. The Ethereum co-signature of the key bridge
//! is produced with `k256` in [`crate::bridge::ethereum`].

pub mod jubjub;

pub use jubjub::{EcdsaJubjub, JubjubSignature};
