//! Baby Jubjub key pairs and their encodings
//!
//! Private keys are scalars in `[1, n-1]`, zeroized on drop. Public keys are
//! always points of the prime-order subgroup other than the identity. They
//! travel in the 32-byte packed form (y with the parity of x in bit 255), and
//! as the `{x, y}` pair `{packed key, x-coordinate}`.

use core::fmt;

use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};
use zkdex_algorithms::ec::jubjub::{self as ec, FieldElement, Point, Scalar, PACKED_POINT_SIZE};
use zkdex_algorithms::U256;
use zkdex_api::{HexStyle, PublicKeyXy, SecretBytes, Serialize};
use zkdex_params::utils::keys::MIN_SEED_LENGTH;

use crate::error::{Error, Result};

/// A Baby Jubjub private key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(Scalar);

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey[REDACTED]")
    }
}

impl PrivateKey {
    /// Wrap a scalar, rejecting zero
    pub fn from_scalar(scalar: Scalar) -> Result<Self> {
        if scalar.is_zero() {
            return Err(Error::InvalidKey {
                context: "private_key",
                details: "must be in [1, n-1]".into(),
            });
        }
        Ok(Self(scalar))
    }

    /// Parse a big-endian key; values of zero or at least n are rejected
    pub fn from_uint(value: &U256) -> Result<Self> {
        let scalar = Scalar::from_uint(value).ok_or_else(|| Error::InvalidKey {
            context: "private_key",
            details: "must be in [1, n-1]".into(),
        })?;
        Self::from_scalar(scalar)
    }

    /// The key as a scalar
    pub fn scalar(&self) -> &Scalar {
        &self.0
    }

    /// Big-endian key bytes
    pub fn to_bytes(&self) -> SecretBytes<32> {
        SecretBytes::new(self.0.to_bytes())
    }

    /// Render the key as 64 hex digits
    pub fn to_hex(&self, style: HexStyle) -> String {
        style.render(&self.to_bytes())
    }

    /// The matching public key, `self · G`
    pub fn public_key(&self) -> Result<PublicKey> {
        PublicKey::from_point(ec::scalar_mult_base_g(&self.0)?)
    }
}

/// A Baby Jubjub public key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Wrap a point; the identity and points outside the subgroup are rejected
    pub fn from_point(point: Point) -> Result<Self> {
        if point.is_identity() || !point.is_valid() || !point.is_in_subgroup() {
            return Err(Error::InvalidKey {
                context: "public_key",
                details: "not a point of the prime-order subgroup".into(),
            });
        }
        Ok(Self(point))
    }

    /// Build from the `{x, y}` pair: the packed key and the x-coordinate
    ///
    /// A packed ordinate or an x at or above p is a range error; a pair that
    /// misses the curve, or whose x disagrees with the packed key, is an
    /// invalid point.
    pub fn from_xy(packed: &U256, x: &U256) -> Result<Self> {
        let x = FieldElement::from_bytes(&x.to_be_bytes())?;
        let key = Self::from_packed(&packed.to_be_bytes())?;
        if *key.x() != x {
            return Err(zkdex_algorithms::Error::InvalidPoint {
                context: "public_key",
                reason: "x-coordinate does not match the packed key",
            }
            .into());
        }
        Ok(key)
    }

    /// Decode the packed form, recovering x
    pub fn from_packed(bytes: &[u8; PACKED_POINT_SIZE]) -> Result<Self> {
        Self::from_point(ec::unpack(bytes)?)
    }

    /// The underlying point
    pub fn point(&self) -> &Point {
        &self.0
    }

    /// The x-coordinate
    pub fn x(&self) -> &FieldElement {
        self.0.x()
    }

    /// The y-coordinate
    pub fn y(&self) -> &FieldElement {
        self.0.y()
    }

    /// y with the parity of x in bit 255
    pub fn to_packed(&self) -> [u8; PACKED_POINT_SIZE] {
        ec::pack(&self.0)
    }

    /// The packed key as an integer, the form messages carry it in
    pub fn to_uint(&self) -> U256 {
        U256::from_be_bytes(&self.to_packed())
    }

    /// `{x: packed key, y: x-coordinate}` rendered in `style`
    pub fn to_xy(&self, style: HexStyle) -> PublicKeyXy {
        PublicKeyXy {
            x: style.render(&self.to_packed()),
            y: style.render(&self.0.x_coordinate_bytes()),
        }
    }
}

impl Serialize for PublicKey {
    const SIZE: usize = PACKED_POINT_SIZE;

    fn from_bytes(bytes: &[u8]) -> zkdex_api::Result<Self> {
        let packed: [u8; PACKED_POINT_SIZE] = bytes.try_into().map_err(|_| {
            zkdex_api::Error::InvalidLength {
                context: "packed public key",
                expected: PACKED_POINT_SIZE,
                actual: bytes.len(),
            }
        })?;
        Ok(Self::from_packed(&packed)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_packed().to_vec()
    }
}

/// Derive a private key from a seed by hashing to a scalar
///
/// `e = SHA-256(seed)`, then repeatedly `raw = SHA-256(e)` until
/// `0 < raw < n`, feeding each rejected `raw` back in as the next `e`.
/// Seeds shorter than `min_length` (never less than 32 bytes) are refused.
pub fn private_key_from_seed(seed: &[u8], min_length: usize) -> Result<PrivateKey> {
    if seed.is_empty() {
        return Err(Error::EmptySeed);
    }
    let min = min_length.max(MIN_SEED_LENGTH);
    if seed.len() < min {
        return Err(Error::SeedTooShort {
            min,
            actual: seed.len(),
        });
    }

    let mut e: [u8; 32] = Sha256::digest(seed).into();
    loop {
        let mut raw: [u8; 32] = Sha256::digest(e).into();
        if let Ok(scalar) = Scalar::from_bytes(&raw) {
            if !scalar.is_zero() {
                e.zeroize();
                raw.zeroize();
                tracing::trace!("seed accepted");
                return Ok(PrivateKey(scalar));
            }
        }
        tracing::trace!("seed candidate rejected, rehashing");
        e = raw;
        raw.zeroize();
    }
}

/// Public key of `private_key`
pub fn private_key_to_public_key(private_key: &PrivateKey) -> Result<PublicKey> {
    private_key.public_key()
}

/// Recover the full public key from its packed form
///
/// Bit 255 of `packed` selects the parity of x; a bare y selects the even
/// root.
pub fn public_key_to_xy(packed: &[u8; PACKED_POINT_SIZE]) -> Result<PublicKey> {
    PublicKey::from_packed(packed)
}

/// Packed form of the `{x, y}` pair, checking that both halves agree
pub fn compress_public_key(packed: &U256, x: &U256) -> Result<[u8; PACKED_POINT_SIZE]> {
    Ok(PublicKey::from_xy(packed, x)?.to_packed())
}

/// Generate a random key pair
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(PrivateKey, PublicKey)> {
    let (scalar, point) = ec::generate_keypair(rng)?;
    Ok((PrivateKey(scalar), PublicKey::from_point(point)?))
}
