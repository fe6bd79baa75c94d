//! Sizes shared by the hashing and key-derivation code

pub mod hash;
pub mod keys;
