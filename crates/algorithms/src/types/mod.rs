//! Integer types shared by the field and hashing code

pub mod uint;

pub use uint::{strip_hex_prefix, SignedAmount, U256};
