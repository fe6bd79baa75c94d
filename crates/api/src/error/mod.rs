//! Error handling for the zkdex public API

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, Result};

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0,
            actual: 0,
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Self::Format {
            context: "hex decoding",
            message: e.to_string(),
        }
    }
}
