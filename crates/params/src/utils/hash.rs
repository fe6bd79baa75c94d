//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of Keccak-256 in bytes
pub const KECCAK256_OUTPUT_SIZE: usize = 32;

/// Size of an Ethereum address: the last 20 bytes of a Keccak-256 digest
pub const ETH_ADDRESS_SIZE: usize = 20;

/// Number of hex digits in a rendered digest, without prefix
pub const DIGEST_HEX_DIGITS: usize = 64;
