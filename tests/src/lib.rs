//! Golden vectors and shared fixtures for the zkdex library
pub mod fixtures;
pub mod vectors;
