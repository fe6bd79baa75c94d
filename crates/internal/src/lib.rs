//! Internal helpers shared by the zkdex crates
//!
//! Nothing in here is part of the public API surface. The modules cover
//! constant-time comparison, byte/limb conversion and the carry-propagating
//! word arithmetic the field code is built on.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod arith;
pub mod constant_time;
pub mod endian;
