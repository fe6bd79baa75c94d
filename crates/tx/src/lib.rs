//! Exchange messages, composite trades and the request engine
//!
//! Every message kind is a typed struct deserialized from its JSON request
//! and implementing [`Canonical`], which orders and bounds its fields for the
//! canonical hash. [`Engine`] wraps the hasher and the signers behind a
//! JSON-in, hex-out interface.
//!
//! - [`perpetual`]: withdraw, transfer, conditional transfer, limit order,
//!   liquidate, signed oracle price
//! - [`spot`]: spot withdrawal, transfer and limit order
//! - [`unified`]: the unified-account messages
//! - [`trade`]: two-party spot and perpetual trades
//! - [`request`]: unified requests dispatched on `"type"`

#![forbid(unsafe_code)]

pub mod canonical;
pub mod config;
pub mod engine;
pub mod input;
pub mod perpetual;
pub mod request;
pub mod spot;
pub mod trade;
pub mod unified;

pub use canonical::Canonical;
pub use config::EngineConfig;
pub use engine::Engine;
pub use input::Numeric;
pub use request::UnifiedRequest;
pub use trade::{Party, PerpetualTrade, SpotTrade, Trade};
