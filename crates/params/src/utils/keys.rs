//! Constants for key derivation

/// Shortest seed accepted by `private_key_from_seed`, in bytes
///
/// This is also the floor: a configuration may raise it, never lower it.
pub const MIN_SEED_LENGTH: usize = 32;

/// Size of a packed public key: y with the parity of x in bit 255
pub const COMPACT_PUBLIC_KEY_SIZE: usize = 32;

/// Recovery id offset used by Ethereum signatures (`v ∈ {27, 28}`)
pub const ETH_RECOVERY_OFFSET: u8 = 27;
