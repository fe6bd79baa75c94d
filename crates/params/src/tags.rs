//! Message type tags
//!
//! A tag heads the packed word of a message, so two messages with identical
//! field values but different tags never share a digest. Perpetual tags occupy the low range, spot tags `0x1xx`,
//! unified tags `0x2xx` and bridge tags `0x3xx`.

/// Perpetual limit order
pub const LIMIT_ORDER: u32 = 3;
/// Perpetual transfer
pub const TRANSFER: u32 = 4;
/// Perpetual transfer gated on an L1 fact
pub const CONDITIONAL_TRANSFER: u32 = 5;
/// Perpetual withdrawal to the Ethereum address that owns the L2 key
pub const WITHDRAWAL: u32 = 6;
/// Perpetual withdrawal to an Ethereum address distinct from the L2 key
pub const WITHDRAWAL_TO_ADDRESS: u32 = 7;
/// Perpetual liquidation
pub const LIQUIDATE: u32 = 8;
/// Signed oracle price (the perpetual oracle word carries no tag)
pub const ORACLE_PRICE: u32 = 9;

/// Spot limit order
pub const SPOT_LIMIT_ORDER: u32 = 0x103;
/// Spot transfer
pub const SPOT_TRANSFER: u32 = 0x104;
/// Spot withdrawal to the owner address
pub const SPOT_WITHDRAWAL: u32 = 0x106;
/// Spot withdrawal to a distinct address
pub const SPOT_WITHDRAWAL_TO_ADDRESS: u32 = 0x107;

/// Unified perpetual limit order
pub const UNIFIED_PERP_LIMIT_ORDER: u32 = 0x203;
/// Unified transfer
pub const UNIFIED_TRANSFER: u32 = 0x204;
/// Unified withdrawal to the owner address
pub const UNIFIED_WITHDRAWAL: u32 = 0x206;
/// Unified withdrawal to a distinct address
pub const UNIFIED_WITHDRAWAL_TO_ADDRESS: u32 = 0x207;
/// Unified liquidation
pub const UNIFIED_LIQUIDATE: u32 = 0x208;
/// Unified oracle price
pub const UNIFIED_ORACLE_PRICE: u32 = 0x209;
/// One side of a unified spot trade
pub const UNIFIED_SPOT_TRADE: u32 = 0x20A;
/// One side of a unified perpetual trade
pub const UNIFIED_PERP_TRADE: u32 = 0x20B;
/// Unified spot limit order
pub const UNIFIED_SPOT_LIMIT_ORDER: u32 = 0x213;

/// Ethereum address to L2 key registration
pub const ETH_REGISTRATION: u32 = 0x301;
