//! Field values as they arrive in requests
//!
//! Integral fields accept decimal strings, `0x`-hex, bare hex and native JSON
//! integers. A string of decimal digits only is decimal; a `0x` prefix or any
//! hex letter makes it hex. Keys, hashes and asset ids are always hex,
//! whatever digits they contain.

use serde::{Deserialize, Serialize};
use zkdex_algorithms::error::{Error, Result};
use zkdex_algorithms::hash::required;
use zkdex_algorithms::{SignedAmount, U256};

/// A numeric or hex field value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    /// Native non-negative JSON integer
    Int(u64),
    /// Native negative JSON integer
    Neg(i64),
    /// Decimal or hex string
    Text(String),
}

impl From<&str> for Numeric {
    fn from(s: &str) -> Self {
        Numeric::Text(s.to_string())
    }
}

impl From<u64> for Numeric {
    fn from(v: u64) -> Self {
        Numeric::Int(v)
    }
}

/// Attach the request field name to a parse or range error
fn label(field: &'static str) -> impl FnOnce(Error) -> Error {
    move |e| match e {
        Error::Range { reason, .. } => Error::Range {
            field: field.into(),
            reason,
        },
        Error::Format { reason, .. } => Error::Format {
            context: field,
            reason,
        },
        Error::NullInput { .. } => Error::NullInput { context: field },
        other => other,
    }
}

impl Numeric {
    /// Non-negative integer value
    pub fn to_uint(&self, field: &'static str) -> Result<U256> {
        match self {
            Numeric::Int(v) => Ok(U256::from_u64(*v)),
            Numeric::Neg(_) => Err(Error::range(field, "must not be negative")),
            Numeric::Text(s) => U256::parse_numeric(s).map_err(label(field)),
        }
    }

    /// Signed amount, `-` prefix allowed
    pub fn to_signed(&self, field: &'static str) -> Result<SignedAmount> {
        match self {
            Numeric::Int(v) => Ok(SignedAmount {
                magnitude: U256::from_u64(*v),
                negative: false,
            }),
            Numeric::Neg(v) => Ok(SignedAmount::from_i64(*v)),
            Numeric::Text(s) => SignedAmount::parse(s).map_err(label(field)),
        }
    }

    /// Hex value of at most 64 digits
    pub fn to_hash(&self, field: &'static str) -> Result<U256> {
        match self {
            Numeric::Text(s) => U256::parse_hex(s.trim()).map_err(label(field)),
            _ => Err(Error::format(field, "expected a hex string")),
        }
    }

    /// Packed public key or Ethereum address
    pub fn to_key(&self, field: &'static str) -> Result<U256> {
        self.to_hash(field)
    }
}

pub(crate) fn uint(value: &Option<Numeric>, field: &'static str) -> Result<U256> {
    required(value.as_ref(), field)?.to_uint(field)
}

pub(crate) fn uint_or_zero(value: &Option<Numeric>, field: &'static str) -> Result<U256> {
    value.as_ref().map_or(Ok(U256::ZERO), |v| v.to_uint(field))
}

pub(crate) fn signed(value: &Option<Numeric>, field: &'static str) -> Result<SignedAmount> {
    required(value.as_ref(), field)?.to_signed(field)
}

pub(crate) fn hash(value: &Option<Numeric>, field: &'static str) -> Result<U256> {
    required(value.as_ref(), field)?.to_hash(field)
}

pub(crate) fn key(value: &Option<Numeric>, field: &'static str) -> Result<U256> {
    required(value.as_ref(), field)?.to_key(field)
}

/// Asset and synthetic ids: hex strings with or without `0x`, or native integers
pub(crate) fn asset(value: &Option<Numeric>, field: &'static str) -> Result<U256> {
    match required(value.as_ref(), field)? {
        Numeric::Int(v) => Ok(U256::from_u64(*v)),
        other => other.to_hash(field),
    }
}
