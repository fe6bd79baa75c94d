//! Fixed-width byte serialization of public values

use crate::Result;

/// A public type with a canonical fixed-width byte encoding
pub trait Serialize: Sized {
    /// Encoded size in bytes
    const SIZE: usize;

    /// Creates an object from a byte slice of exactly `SIZE` bytes
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Converts the object to its canonical encoding
    fn to_bytes(&self) -> Vec<u8>;
}
