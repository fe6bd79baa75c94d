//! Schnorr proof of L2 key ownership
//!
//! ```text
//! R = k·G
//! e = Keccak-256(R.x || R.y || pk.x || pk.y || digest) mod n
//! s = k + e·d mod n
//! ```
//!
//! The proof verifies iff `s·G − e·PK == R`. All points are Baby Jubjub
//! subgroup points; both `R` and the key travel as `{packed, x}` pairs.

use rand::{CryptoRng, RngCore};
use sha3::{Digest, Keccak256};
use zeroize::Zeroize;
use zkdex_algorithms::ec::jubjub::{self as ec, Point, Scalar};
use zkdex_algorithms::U256;
use zkdex_api::{EthAddressSignature, HexStyle};

use crate::error::Result;
use crate::keys::{PrivateKey, PublicKey};

/// A proof that the holder of `public_key` signed a digest
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnershipProof {
    /// Nonce point
    pub r: Point,
    /// Response
    pub s: Scalar,
    /// Signer key
    pub public_key: PublicKey,
}

impl OwnershipProof {
    /// `{x, y, s, pk_x, pk_y}` output, points as `{packed, x}` pairs
    pub fn to_output(&self) -> EthAddressSignature {
        let render = |bytes: [u8; 32]| HexStyle::Prefixed.render(&bytes);
        EthAddressSignature {
            x: render(ec::pack(&self.r)),
            y: render(self.r.x_coordinate_bytes()),
            s: render(self.s.to_bytes()),
            pk_x: render(self.public_key.to_packed()),
            pk_y: render(self.public_key.x().to_bytes()),
        }
    }
}

fn challenge(r: &Point, public_key: &PublicKey, digest: &[u8; 32]) -> Scalar {
    let mut hasher = Keccak256::new();
    hasher.update(r.x_coordinate_bytes());
    hasher.update(r.y_coordinate_bytes());
    hasher.update(public_key.x().to_bytes());
    hasher.update(public_key.y().to_bytes());
    hasher.update(digest);
    let e: [u8; 32] = hasher.finalize().into();
    Scalar::from_bytes_reduced(&e)
}

/// Prove ownership of `private_key` over `digest`
pub fn eth_sign<R: CryptoRng + RngCore>(
    private_key: &PrivateKey,
    digest: &[u8; 32],
    rng: &mut R,
) -> Result<OwnershipProof> {
    let public_key = private_key.public_key()?;
    loop {
        let mut k = ec::random_nonzero_scalar(rng);
        let r = ec::scalar_mult_base_g(&k)?;
        let e = challenge(&r, &public_key, digest);
        let s = k.add(&e.mul(private_key.scalar()));
        k.zeroize();
        if s.is_zero() {
            continue;
        }
        tracing::trace!("ownership proof produced");
        return Ok(OwnershipProof { r, s, public_key });
    }
}

/// Check a proof over `digest`
pub fn verify_proof(proof: &OwnershipProof, digest: &[u8; 32]) -> bool {
    if proof.s.is_zero() || proof.r.is_identity() || !proof.r.is_valid() || !proof.r.is_in_subgroup()
    {
        return false;
    }
    let e = challenge(&proof.r, &proof.public_key, digest);
    let g = match ec::base_point_g() {
        Ok(g) => g.to_projective(),
        Err(_) => return false,
    };
    let lhs = g
        .mul(&proof.s)
        .sub(&proof.public_key.point().to_projective().mul(&e));
    lhs.to_affine() == proof.r
}

/// Verify a proof given as integers
///
/// A nonce point or key that is not a subgroup point, or `s` outside
/// `[1, n-1]`, is a rejection.
pub fn l2_verify(x: &U256, y: &U256, s: &U256, pk_x: &U256, pk_y: &U256, digest: &[u8; 32]) -> bool {
    let Ok(r) = PublicKey::from_xy(x, y) else {
        return false;
    };
    let Ok(public_key) = PublicKey::from_xy(pk_x, pk_y) else {
        return false;
    };
    let Some(s) = Scalar::from_uint(s) else {
        return false;
    };
    let proof = OwnershipProof {
        r: *r.point(),
        s,
        public_key,
    };
    let valid = verify_proof(&proof, digest);
    tracing::debug!(valid, "ownership proof verified");
    valid
}
