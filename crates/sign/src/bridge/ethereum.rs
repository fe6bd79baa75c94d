//! Ethereum addresses and the secp256k1 co-signature
//!
//! The Ethereum side runs on `k256`: deterministic (RFC 6979) recoverable
//! ECDSA over a Keccak-256 prehash, low-s normalised.

use core::fmt;

use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use k256::SecretKey;
use sha3::{Digest, Keccak256};
use zkdex_algorithms::hash::{Bound, CanonicalHasher, FieldList, Packed};
use zkdex_algorithms::{FieldElement, U256};
use zkdex_api::{EthCoSignature, HexStyle};
use zkdex_internal::constant_time::ct_eq;
use zkdex_params::tags;
use zkdex_params::utils::hash::ETH_ADDRESS_SIZE;
use zkdex_params::utils::keys::ETH_RECOVERY_OFFSET;

use crate::error::{Error, Result};
use crate::keys::PublicKey;

/// A 20-byte Ethereum address
pub type EthAddress = [u8; ETH_ADDRESS_SIZE];

/// A secp256k1 private key, zeroized on drop
#[derive(Clone)]
pub struct EthSecretKey(SigningKey);

impl fmt::Debug for EthSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EthSecretKey[REDACTED]")
    }
}

impl EthSecretKey {
    /// Parse 32 big-endian bytes; zero and values of at least n are rejected
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let secret = SecretKey::from_slice(bytes).map_err(|e| Error::InvalidKey {
            context: "ethereum private key",
            details: e.to_string(),
        })?;
        Ok(Self(SigningKey::from(secret)))
    }

    /// Parse an integer key
    pub fn from_uint(value: &U256) -> Result<Self> {
        Self::from_bytes(&value.to_be_bytes())
    }

    /// The matching public key
    pub fn verifying_key(&self) -> &VerifyingKey {
        self.0.verifying_key()
    }

    /// Address of the matching public key
    pub fn address(&self) -> EthAddress {
        eth_address(self.verifying_key())
    }
}

fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Address of a secp256k1 key: the last 20 bytes of Keccak-256(X || Y)
pub fn eth_address(public_key: &VerifyingKey) -> EthAddress {
    let point = public_key.to_encoded_point(false);
    // skip the 0x04 tag of the uncompressed encoding
    let hash = keccak256(&point.as_bytes()[1..]);
    let mut out = [0u8; ETH_ADDRESS_SIZE];
    out.copy_from_slice(&hash[32 - ETH_ADDRESS_SIZE..]);
    out
}

/// Mixed-case checksummed rendering
pub fn to_checksum_address(address: &EthAddress) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());
    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = (hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Parse a 40-digit address, with or without `0x`, in any letter case
pub fn parse_eth_address(s: &str) -> Result<EthAddress> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    if digits.len() != 2 * ETH_ADDRESS_SIZE {
        return Err(Error::Encoding(format!(
            "eth address needs {} hex digits, got {}",
            2 * ETH_ADDRESS_SIZE,
            digits.len()
        )));
    }
    let mut out = [0u8; ETH_ADDRESS_SIZE];
    hex::decode_to_slice(digits, &mut out).map_err(|e| Error::Encoding(e.to_string()))?;
    Ok(out)
}

/// The address as a key value, right-aligned in 32 bytes
pub fn address_key(address: &EthAddress) -> U256 {
    let mut key = [0u8; 32];
    key[32 - ETH_ADDRESS_SIZE..].copy_from_slice(address);
    U256::from_be_bytes(&key)
}

/// Digest binding an Ethereum address to an L2 key
///
/// Words: the address, the key's x and y coordinates, then the tag.
pub fn registration_digest(
    hasher: &CanonicalHasher,
    address: &EthAddress,
    l2_public_key: &PublicKey,
) -> Result<FieldElement> {
    let fields = FieldList::new(tags::ETH_REGISTRATION)
        .key("eth_address", address_key(address))
        .uint("pk_x", l2_public_key.x().to_uint(), Bound::Modulus)
        .uint("pk_y", l2_public_key.y().to_uint(), Bound::Modulus)
        .packed("tag", Packed::tagged(tags::ETH_REGISTRATION));
    Ok(hasher.hash(&fields)?)
}

/// Co-sign a registration digest with the Ethereum key
///
/// The signed hash is Keccak-256 of the 32-byte digest. The nonce is derived
/// per RFC 6979, so the same key and digest always give the same signature.
pub fn eth_co_sign(secret_key: &EthSecretKey, digest: &FieldElement) -> Result<EthCoSignature> {
    let hash = keccak256(&digest.to_bytes());
    let (signature, recovery_id) =
        secret_key
            .0
            .sign_prehash_recoverable(&hash)
            .map_err(|e| Error::SignatureGeneration {
                algorithm: "ECDSA-secp256k1",
                details: e.to_string(),
            })?;
    let bytes = signature.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    s.copy_from_slice(&bytes[32..]);
    tracing::trace!("registration digest co-signed");
    Ok(EthCoSignature {
        r: HexStyle::Prefixed.render(&r),
        s: HexStyle::Prefixed.render(&s),
        v: ETH_RECOVERY_OFFSET + recovery_id.to_byte(),
    })
}

/// Check that `address` co-signed `digest`
///
/// `v` is 27 or 28 (0 or 1 is accepted too); anything else is malformed.
/// Components out of range, or a signature recovering another signer, give
/// `false`.
pub fn eth_co_verify(
    address: &EthAddress,
    digest: &FieldElement,
    r: &U256,
    s: &U256,
    v: u8,
) -> Result<bool> {
    let is_y_odd = match v {
        0 | 1 => v == 1,
        27 | 28 => v == 28,
        _ => return Err(Error::Encoding(format!("recovery byte {} is not 27 or 28", v))),
    };
    let recovery_id = RecoveryId::new(is_y_odd, false);

    let mut bytes = [0u8; 64];
    bytes[..32].copy_from_slice(&r.to_be_bytes());
    bytes[32..].copy_from_slice(&s.to_be_bytes());
    let Ok(signature) = Signature::from_slice(&bytes) else {
        tracing::debug!("co-signature component out of range");
        return Ok(false);
    };

    let hash = keccak256(&digest.to_bytes());
    let Ok(signer) = VerifyingKey::recover_from_prehash(&hash, &signature, recovery_id) else {
        return Ok(false);
    };
    let valid = ct_eq(eth_address(&signer), *address);
    tracing::debug!(valid, "co-signature verified");
    Ok(valid)
}
