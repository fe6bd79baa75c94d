//! Digital signature traits for zkdex
//!
//! Signers in the workspace sign a 32-byte digest rather than an arbitrary
//! message: the Baby Jubjub signer signs canonical message digests.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digest signature schemes
///
/// Secret keys are opaque types that cannot be directly manipulated as bytes.
/// Signing takes the nonce source explicitly so callers control it: the OS
/// generator in production, a seeded generator in tests.
pub trait SignatureScheme {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a digest with the given secret key, drawing the nonce from `rng`
    fn sign<R: CryptoRng + RngCore>(
        digest: &[u8; 32],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a digest and public key
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not match.
    fn verify(
        digest: &[u8; 32],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;
}
