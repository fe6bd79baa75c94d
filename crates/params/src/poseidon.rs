//! Poseidon permutation parameters
//!
//! Round constants and the Cauchy MDS matrix are not tabulated here: they are
//! drawn from the Grain LFSR seeded with these values, so the parameters
//! below fully determine the permutation.

/// Width of the permutation state
pub const WIDTH: usize = 9;

/// Number of words absorbed per permutation
pub const RATE: usize = 8;

/// Number of full rounds, split evenly before and after the partial rounds
pub const FULL_ROUNDS: usize = 8;

/// Number of partial rounds
pub const PARTIAL_ROUNDS: usize = 63;

/// Bit length of the field the constants are sampled in
pub const FIELD_BITS: u32 = 254;

/// S-box exponent
pub const SBOX_DEGREE: u64 = 5;

/// Capacity word of a fresh sponge, as a power of two
pub const CAPACITY_INIT_LOG2: u32 = 64;

/// Grain LFSR field selector for a prime field
pub const GRAIN_FIELD_PRIME: u8 = 1;

/// Grain LFSR S-box selector for `x^alpha`
pub const GRAIN_SBOX_POW: u8 = 0;

/// Bits discarded after seeding the Grain LFSR
pub const GRAIN_WARMUP_BITS: usize = 160;
