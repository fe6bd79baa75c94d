//! Error handling for the arithmetic and hashing primitives

use std::borrow::Cow;
use std::fmt;

use zkdex_api::{Error as CoreError, Result as CoreResult};

/// The error type for arithmetic and hashing primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A message field required by the schema was not supplied
    MissingField {
        /// Request-level name of the field
        field: Cow<'static, str>,
    },

    /// A value is at or above its schema bound or the field modulus
    Range {
        /// Name of the offending field or operand
        field: Cow<'static, str>,
        /// Which bound was violated
        reason: Cow<'static, str>,
    },

    /// Coordinates that do not satisfy the curve equation
    InvalidPoint {
        /// Operation that rejected the point
        context: &'static str,
        /// Additional details
        reason: &'static str,
    },

    /// Malformed textual or byte encoding
    Format {
        /// What was being decoded
        context: &'static str,
        /// Why it was rejected
        reason: Cow<'static, str>,
    },

    /// Empty input where a value is required
    NullInput {
        /// What was empty
        context: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Range error
    pub fn range<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        field: N,
        reason: R,
    ) -> Self {
        Error::Range {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Format error
    pub fn format<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Format {
            context,
            reason: reason.into(),
        }
    }
}

/// Result type for arithmetic and hashing primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::MissingField { field } => write!(f, "Missing field '{}'", field),
            Error::Range { field, reason } => {
                write!(f, "Value of '{}' out of range: {}", field, reason)
            }
            Error::InvalidPoint { context, reason } => {
                write!(f, "Invalid point in {}: {}", context, reason)
            }
            Error::Format { context, reason } => {
                write!(f, "Malformed {}: {}", context, reason)
            }
            Error::NullInput { context } => write!(f, "Empty input for {}", context),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::MissingField { field } => CoreError::MissingField {
                field: field.into_owned(),
            },
            Error::Range { field, reason } => CoreError::Range {
                field: field.into_owned(),
                message: reason.into_owned(),
            },
            Error::InvalidPoint { context, reason } => CoreError::Curve {
                context,
                message: reason.to_string(),
            },
            Error::Format { context, reason } => CoreError::Format {
                context,
                message: reason.into_owned(),
            },
            Error::NullInput { context } => CoreError::NullInput { context },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.with_context(ctx)
}

// Re-export core error handling traits for convenience
pub use zkdex_api::error::ResultExt;

pub mod validate;
