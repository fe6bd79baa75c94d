//! Errors raised while running vectors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("engine error: {0}")]
    Engine(#[from] zkdex_api::Error),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("mismatch in {field} - expected: {expected}, got: {actual}")]
    Mismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("unsupported operation: {0}")]
    UnknownOperation(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, VectorError>;
