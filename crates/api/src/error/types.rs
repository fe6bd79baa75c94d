//! Error type definitions for zkdex operations

/// Primary error type for zkdex operations
///
/// Hashing and key derivation report every failure through this type;
/// verification reports structurally valid but non-matching input as
/// `Ok(false)` and keeps the error path for malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input could not be parsed into the expected shape
    #[error("parse error: {context}: {message}")]
    Parse {
        context: &'static str,
        message: String,
    },

    /// A required request field is absent; a specialisation of `Parse`
    #[error("missing field: {field}")]
    MissingField { field: String },

    /// A value is at or above the field modulus or its schema bound
    #[error("value out of range: {field}: {message}")]
    Range { field: String, message: String },

    /// Coordinates are not a point of the curve, or x has no matching y
    #[error("curve error: {context}: {message}")]
    Curve {
        context: &'static str,
        message: String,
    },

    /// Malformed encoding: bad charset, too many digits, short seed
    #[error("format error: {context}: {message}")]
    Format {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Empty or null input where a value is required
    #[error("null input: {context}")]
    NullInput { context: &'static str },

    /// Signing could not complete
    #[error("signature error: {context}: {message}")]
    Signature {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for zkdex operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// A required field named `field` is absent
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// The value of `field` is out of its range
    pub fn range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Range {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error belongs to the parse family (`Parse`, `MissingField`)
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::MissingField { .. })
    }

    /// Field name carried by `MissingField` and `Range`
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } | Self::Range { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Replace the static context of an error, keeping its kind and message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Parse { message, .. } => Self::Parse { context, message },
            Self::Curve { message, .. } => Self::Curve { context, message },
            Self::Format { message, .. } => Self::Format { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::NullInput { .. } => Self::NullInput { context },
            Self::Signature { message, .. } => Self::Signature { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
            // field-named errors already carry the request's own name
            named @ (Self::MissingField { .. } | Self::Range { .. }) => named,
        }
    }
}
