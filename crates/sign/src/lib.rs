//! Signatures, key derivation and the Ethereum key bridge
//!
//! - [`keys`]: Baby Jubjub key pairs, seed derivation and the packed key form
//! - [`ecdsa`]: ECDSA over the Baby Jubjub subgroup
//! - [`bridge`]: the Schnorr ownership proof and the secp256k1 co-signature

#![forbid(unsafe_code)]

pub mod bridge;
pub mod ecdsa;
pub mod error;
pub mod keys;

pub use bridge::EthSecretKey;
pub use ecdsa::{EcdsaJubjub, JubjubSignature};
pub use error::{Error, Result};
pub use keys::{PrivateKey, PublicKey};
