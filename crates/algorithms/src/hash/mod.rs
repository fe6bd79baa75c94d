//! Hashing onto the BN254 scalar field
//!
//! [`poseidon`] is the permutation and its sponge; [`canonical`] lays a
//! message's typed fields out as the word list the sponge absorbs.

pub mod canonical;
pub mod poseidon;

pub use canonical::{key_word, required, Bound, CanonicalHasher, Element, FieldList, Packed};
pub use poseidon::{Poseidon, Sponge};
