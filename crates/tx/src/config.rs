//! Engine configuration

use serde::{Deserialize, Serialize};
use zkdex_api::HexStyle;
use zkdex_params::utils::keys::MIN_SEED_LENGTH;

/// Settings fixed when an [`Engine`](crate::Engine) is built
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Shortest seed `private_key_from_seed` accepts; values below 32 are
    /// raised to 32
    pub min_seed_length: usize,
    /// Rendering of digests and derived private keys
    pub digest_hex: HexStyle,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_seed_length: MIN_SEED_LENGTH,
            digest_hex: HexStyle::Prefixed,
        }
    }
}

impl EngineConfig {
    /// Same configuration with another seed minimum
    pub fn with_min_seed_length(mut self, min_seed_length: usize) -> Self {
        self.min_seed_length = min_seed_length;
        self
    }

    /// Same configuration with another digest rendering
    pub fn with_digest_hex(mut self, digest_hex: HexStyle) -> Self {
        self.digest_hex = digest_hex;
        self
    }
}
