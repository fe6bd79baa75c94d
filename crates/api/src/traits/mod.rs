//! Traits shared across the zkdex crates

pub mod serialize;
pub mod signature;

pub use serialize::Serialize;
pub use signature::SignatureScheme;
