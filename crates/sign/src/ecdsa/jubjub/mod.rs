//! ECDSA over the Baby Jubjub subgroup
//!
//! Signing draws a fresh ephemeral scalar from the caller's generator:
//!
//! 1. k ∈ [1, n-1] uniformly at random
//! 2. R = k·G, r = R.x mod n; if r = 0, draw again
//! 3. s = k⁻¹·(z + r·d) mod n with z = digest mod n; if s = 0, draw again
//!
//! Verification computes P = (z·s⁻¹)·G + (r·s⁻¹)·Q and accepts iff P is not
//! the identity and P.x mod n equals r. Anything structurally wrong with the
//! inputs (r or s out of range, Q off the curve or outside the subgroup,
//! digest ≥ p) is a rejection, not an error.

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;
use zkdex_algorithms::ec::jubjub::{self as ec, FieldElement, Scalar};
use zkdex_algorithms::U256;
use zkdex_api::{HexStyle, Serialize, SignatureOutput, SignatureScheme};

use crate::error::{Error, Result};
use crate::keys::{self, PrivateKey, PublicKey};

/// Size of an encoded signature: r || s
pub const SIGNATURE_SIZE: usize = 64;

/// ECDSA signature scheme over Baby Jubjub
pub struct EcdsaJubjub;

/// A Baby Jubjub ECDSA signature `(r, s)`, both in `[1, n-1]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JubjubSignature {
    r: Scalar,
    s: Scalar,
}

impl JubjubSignature {
    /// Build from scalars, rejecting zero components
    pub fn new(r: Scalar, s: Scalar) -> Option<Self> {
        if r.is_zero() || s.is_zero() {
            return None;
        }
        Some(Self { r, s })
    }

    /// Build from integers, rejecting components outside `[1, n-1]`
    pub fn from_uints(r: &U256, s: &U256) -> Option<Self> {
        Self::new(Scalar::from_uint(r)?, Scalar::from_uint(s)?)
    }

    /// The r component
    pub fn r(&self) -> &Scalar {
        &self.r
    }

    /// The s component
    pub fn s(&self) -> &Scalar {
        &self.s
    }

    /// `{"r": "0x…", "s": "0x…"}`
    pub fn to_output(&self) -> SignatureOutput {
        SignatureOutput {
            r: HexStyle::Prefixed.render(&self.r.to_bytes()),
            s: HexStyle::Prefixed.render(&self.s.to_bytes()),
        }
    }
}

impl Serialize for JubjubSignature {
    const SIZE: usize = SIGNATURE_SIZE;

    fn from_bytes(bytes: &[u8]) -> zkdex_api::Result<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(zkdex_api::Error::InvalidLength {
                context: "Jubjub signature",
                expected: SIGNATURE_SIZE,
                actual: bytes.len(),
            });
        }
        let r: [u8; 32] = bytes[..32].try_into()?;
        let s: [u8; 32] = bytes[32..].try_into()?;
        Self::from_uints(&U256::from_be_bytes(&r), &U256::from_be_bytes(&s)).ok_or_else(|| {
            zkdex_api::Error::Range {
                field: "signature".into(),
                message: "r and s must be in [1, n-1]".into(),
            }
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SIGNATURE_SIZE);
        out.extend_from_slice(&self.r.to_bytes());
        out.extend_from_slice(&self.s.to_bytes());
        out
    }
}

/// Sign a digest with `private_key`, drawing the nonce from `rng`
pub fn sign<R: CryptoRng + RngCore>(
    private_key: &PrivateKey,
    digest: &FieldElement,
    rng: &mut R,
) -> Result<JubjubSignature> {
    let z = ec::field_to_scalar(digest);
    let d = private_key.scalar();

    loop {
        let mut k = ec::random_nonzero_scalar(rng);
        let point = ec::scalar_mult_base_g(&k)?;
        let r = ec::field_to_scalar(point.x());
        if r.is_zero() {
            k.zeroize();
            continue;
        }

        let mut k_inv = k.invert().ok_or_else(|| Error::SignatureGeneration {
            algorithm: "ECDSA-JUBJUB",
            details: "nonce has no inverse".into(),
        })?;
        let s = k_inv.mul(&z.add(&r.mul(d)));
        k.zeroize();
        k_inv.zeroize();

        if let Some(signature) = JubjubSignature::new(r, s) {
            tracing::trace!("digest signed");
            return Ok(signature);
        }
    }
}

/// Sign a big-endian digest; a digest at or above p is a range error
pub fn sign_digest<R: CryptoRng + RngCore>(
    private_key: &PrivateKey,
    digest: &[u8; 32],
    rng: &mut R,
) -> Result<JubjubSignature> {
    let digest = FieldElement::from_bytes(digest)?;
    sign(private_key, &digest, rng)
}

/// Verify a signature over a digest
pub fn verify_digest(digest: &FieldElement, signature: &JubjubSignature, public_key: &PublicKey) -> bool {
    let w = match signature.s.invert() {
        Some(w) => w,
        None => return false,
    };
    let z = ec::field_to_scalar(digest);
    let u1 = z.mul(&w);
    let u2 = signature.r.mul(&w);

    let point = match ec::double_scalar_mult_base(&u1, &u2, public_key.point()) {
        Ok(point) => point,
        Err(_) => return false,
    };
    if point.is_identity() {
        return false;
    }
    let v = ec::field_to_scalar(point.to_affine().x());
    v.ct_eq(&signature.r).into()
}

/// Verify `(r, s)` against the public key pair `(pk_x, pk_y)` and a digest
///
/// The pair is the `{x, y}` output of key derivation: the packed key and the
/// x-coordinate. Components outside `[1, n-1]`, a pair that is not a subgroup
/// key or a digest at or above p all yield `false`.
pub fn verify(r: &U256, s: &U256, pk_x: &U256, pk_y: &U256, digest: &U256) -> bool {
    let Some(signature) = JubjubSignature::from_uints(r, s) else {
        tracing::debug!("signature component out of range");
        return false;
    };
    let Ok(public_key) = PublicKey::from_xy(pk_x, pk_y) else {
        tracing::debug!("public key is not a subgroup point");
        return false;
    };
    let Some(digest) = FieldElement::from_uint(digest) else {
        tracing::debug!("digest is not below p");
        return false;
    };
    let valid = verify_digest(&digest, &signature, &public_key);
    tracing::debug!(valid, "Jubjub signature verified");
    valid
}

impl SignatureScheme for EcdsaJubjub {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type SignatureData = JubjubSignature;
    type KeyPair = (PublicKey, PrivateKey);

    fn name() -> &'static str {
        "ECDSA-JUBJUB"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> zkdex_api::Result<Self::KeyPair> {
        let (private_key, public_key) = keys::generate_keypair(rng)?;
        Ok((public_key, private_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        digest: &[u8; 32],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> zkdex_api::Result<Self::SignatureData> {
        Ok(sign_digest(secret_key, digest, rng)?)
    }

    fn verify(
        digest: &[u8; 32],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> zkdex_api::Result<bool> {
        Ok(match FieldElement::from_bytes(digest) {
            Ok(digest) => verify_digest(&digest, signature, public_key),
            Err(_) => false,
        })
    }
}
