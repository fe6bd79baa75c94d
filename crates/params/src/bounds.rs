//! Schema range bounds
//!
//! Each bound is expressed as a bit width: a value is in range when it is
//! strictly below `2^bits`. Values that become hash words on their own must
//! additionally be below the BN254 scalar field modulus.

/// Amounts and fees of perpetual messages
pub const AMOUNT_BITS: u32 = 64;

/// Amounts and fees of spot messages
pub const SPOT_AMOUNT_BITS: u32 = 128;

/// Nonces
pub const NONCE_BITS: u32 = 32;

/// Expiration and oracle timestamps, in hours or seconds per message kind
pub const TIMESTAMP_BITS: u32 = 32;

/// Perpetual position ids
pub const POSITION_ID_BITS: u32 = 64;

/// Position, asset and chain ids of spot and unified messages
pub const ID32_BITS: u32 = 32;

/// Collateral asset ids (and the perpetual withdraw/transfer asset id)
pub const COLLATERAL_ASSET_ID_BITS: u32 = 250;

/// Synthetic asset ids
pub const SYNTHETIC_ASSET_ID_BITS: u32 = 120;

/// Oracle external prices
pub const EXTERNAL_PRICE_BITS: u32 = 128;

/// Magnitude of the signed fees carried by trade sides
pub const SIGNED_FEE_MAGNITUDE_BITS: u32 = 64;

/// Selectors and booleans: margin type, party index, `is_buying_synthetic`
pub const SELECTOR_BITS: u32 = 1;

/// Keys below this width are Ethereum addresses and hash as plain values
pub const ADDRESS_KEY_BITS: u32 = 160;

/// Widest packed hash word: one bit below the field modulus
pub const PACKED_WORD_BITS: u32 = 253;
