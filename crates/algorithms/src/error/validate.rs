//! Checks shared by the curve and encoding code

use super::{Error, Result};

/// Byte string of exactly `expected` bytes
#[inline]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected,
            actual,
        })
    }
}

/// Coordinates that satisfy the curve equation
#[inline]
pub fn on_curve(is_valid: bool, context: &'static str) -> Result<()> {
    if is_valid {
        Ok(())
    } else {
        Err(Error::InvalidPoint {
            context,
            reason: "point is not on the curve",
        })
    }
}
