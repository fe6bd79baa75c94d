//! Error types for the signature crate

use core::fmt;

use zkdex_algorithms::error::Error as AlgoError;

/// Errors that can occur during key derivation, signing and bridging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure in the underlying field, curve or hash primitives
    Primitive(AlgoError),

    /// Key outside its valid range or not a usable curve point
    InvalidKey {
        context: &'static str,
        details: String,
    },

    /// Seed shorter than the configured minimum
    SeedTooShort { min: usize, actual: usize },

    /// Empty seed
    EmptySeed,

    /// Signature generation failed
    SignatureGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// Malformed signature or address encoding
    Encoding(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "{}", e),
            Error::InvalidKey { context, details } => {
                write!(f, "Invalid key ({}): {}", context, details)
            }
            Error::SeedTooShort { min, actual } => {
                write!(f, "Seed too short: need at least {} bytes, got {}", min, actual)
            }
            Error::EmptySeed => write!(f, "Seed is empty"),
            Error::SignatureGeneration { algorithm, details } => {
                write!(f, "{} signature generation failed: {}", algorithm, details)
            }
            Error::Encoding(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for zkdex_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey { context, details } => zkdex_api::Error::Range {
                field: context.to_string(),
                message: details,
            },
            Error::SeedTooShort { min, actual } => zkdex_api::Error::Format {
                context: "seed",
                message: format!("need at least {} bytes, got {}", min, actual),
            },
            Error::EmptySeed => zkdex_api::Error::NullInput { context: "seed" },
            Error::SignatureGeneration { algorithm, details } => zkdex_api::Error::Signature {
                context: algorithm,
                message: details,
            },
            Error::Encoding(message) => zkdex_api::Error::Format {
                context: "encoding",
                message,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
