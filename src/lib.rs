//! # zkdex
//!
//! Message authorization for a decentralized exchange clearing layer.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! zkdex = "0.3"
//! ```
//!
//! Build one [`Engine`](tx::Engine) and share it:
//!
//! ```no_run
//! use zkdex::prelude::*;
//!
//! let engine = Engine::new()?;
//! let digest = engine.hash_transfer(r#"{"nonce":"0","public_key":"0x1","expiration_timestamp":"0",
//!     "sender_position_id":"0","receiver_public_key":"0x0","receiver_position_id":"0",
//!     "amount":"0","asset_id":"0xa"}"#)?;
//! let key = engine.private_key_from_seed(b"a seed of at least thirty-two bytes")?;
//! let signature = engine.sign(&key, &digest)?;
//! # Ok::<(), zkdex::prelude::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`zkdex-api`]: error type, output shapes and the signature-scheme trait
//! - [`zkdex-params`]: Baby Jubjub and Poseidon constants, range bounds and message type tags
//! - [`zkdex-algorithms`]: field and curve arithmetic, the Poseidon sponge, packed field lists
//! - [`zkdex-sign`]: ECDSA over Baby Jubjub, the Ethereum key bridge on `k256`
//! - [`zkdex-tx`]: message canonicalizers, trades and the request engine

pub use zkdex_algorithms as algorithms;
pub use zkdex_api as api;
pub use zkdex_internal as internal;
pub use zkdex_params as params;
pub use zkdex_sign as sign;
pub use zkdex_tx as tx;

pub use rand;
pub use zeroize;

/// Common imports for zkdex users
pub mod prelude {
    // Errors
    pub use crate::api::{Error, Result};

    // Output shapes
    pub use crate::api::{
        ComposeHash, ComposeSig, EthAddressSignature, EthCoSignature, HexStyle, PublicKeyXy,
        SignatureOutput,
    };

    // Core traits
    pub use crate::api::SignatureScheme;
    pub use crate::tx::{Canonical, Trade};

    // The engine and its inputs
    pub use crate::tx::{
        Engine, EngineConfig, Numeric, Party, PerpetualTrade, SpotTrade, UnifiedRequest,
    };

    // Keys
    pub use crate::sign::{PrivateKey, PublicKey};
}
