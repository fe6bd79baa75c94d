//! Cross-curve key bridge
//!
//! Two directions tie an Ethereum identity to an L2 Baby Jubjub key:
//!
//! - [`schnorr`]: the L2 key proves ownership by a Schnorr signature whose
//!   challenge is Keccak-256 of the nonce point, the key and the digest
//! - [`ethereum`]: the secp256k1 key co-signs the registration digest with a
//!   recoverable ECDSA signature, checked by recovering the signer address

pub mod ethereum;
pub mod schnorr;

pub use ethereum::{
    address_key, eth_address, eth_co_sign, eth_co_verify, parse_eth_address,
    registration_digest, to_checksum_address, EthAddress, EthSecretKey,
};
pub use schnorr::{eth_sign, l2_verify, verify_proof, OwnershipProof};
