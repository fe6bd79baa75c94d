//! Error handling traits

use super::types::{Error, Result};

/// Extension trait for results whose error converts into [`Error`]
pub trait ResultExt<T> {
    /// Convert the error and name the input it concerns
    fn with_context(self, context: &'static str) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}
