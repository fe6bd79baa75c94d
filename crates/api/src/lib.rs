//! Public API traits and types for the zkdex library
//!
//! This crate provides the public API surface of the zkdex workspace: the
//! error type every operation reports, the signature-scheme trait the
//! Baby Jubjub signer implements, and the JSON output shapes.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::*;

pub use traits::{Serialize, SignatureScheme};
