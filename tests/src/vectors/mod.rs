//! Golden-vector harness
//!
//! Vectors live as JSON suites under `json/`. A suite holds groups, a group
//! names one engine operation, and each case carries that operation's
//! inputs plus the outputs it must produce.

pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod model;
pub mod runner;

pub use error::*;
pub use loader::*;
pub use model::*;
pub use runner::*;
