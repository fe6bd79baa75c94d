//! Core value types of the public API
//!
//! Secret byte storage with zeroize-on-drop, and the JSON output shapes every
//! operation returns. Output values are hex strings; their exact rendering is
//! chosen by [`HexStyle`].

use core::fmt;
use core::ops::Deref;
use zeroize::{Zeroize, ZeroizeOnDrop};
use zkdex_internal::constant_time::ct_eq;

use crate::{Error, Result, Serialize};

/// A fixed-size array of bytes that is securely zeroed when dropped
///
/// This type provides:
/// - Compile-time size guarantees via const generics
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - Debug implementation that hides the actual bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Create a new instance from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != N {
            return Err(Error::InvalidLength {
                context: "SecretBytes::from_slice",
                expected: N,
                actual: slice.len(),
            });
        }

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Create an instance filled with zeros
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for SecretBytes<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}

impl<const N: usize> Serialize for SecretBytes<N> {
    const SIZE: usize = N;

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.data.to_vec()
    }
}

/// How a 32-byte value is rendered as hex
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexStyle {
    /// `0x` followed by 64 lowercase digits
    #[default]
    Prefixed,
    /// 64 lowercase digits
    Bare,
}

impl HexStyle {
    /// Render `bytes` as fixed-width lowercase hex
    pub fn render(self, bytes: &[u8; 32]) -> String {
        let digits = hex::encode(bytes);
        match self {
            Self::Prefixed => format!("0x{digits}"),
            Self::Bare => digits,
        }
    }
}

/// ECDSA signature output `{"r": "0x…", "s": "0x…"}`
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SignatureOutput {
    pub r: String,
    pub s: String,
}

/// A public key as its two affine coordinates
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PublicKeyXy {
    pub x: String,
    pub y: String,
}

/// The two signatures of a composite trade
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComposeSig {
    pub signature_a: SignatureOutput,
    pub signature_b: SignatureOutput,
}

/// The two per-party digests of a composite trade
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComposeHash {
    pub hash_a: String,
    pub hash_b: String,
}

/// L2 proof of key ownership: nonce point `(x, y)`, response `s` and the
/// signer's public key
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EthAddressSignature {
    pub x: String,
    pub y: String,
    pub s: String,
    pub pk_x: String,
    pub pk_y: String,
}

/// secp256k1 co-signature with its Ethereum recovery byte
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EthCoSignature {
    pub r: String,
    pub s: String,
    pub v: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_style() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0xab;
        let prefixed = HexStyle::Prefixed.render(&bytes);
        assert_eq!(prefixed.len(), 66);
        assert!(prefixed.ends_with("00ab"));
        assert_eq!(HexStyle::Bare.render(&bytes), prefixed[2..]);
        assert_eq!(HexStyle::default(), HexStyle::Prefixed);
    }

    #[test]
    fn test_secret_bytes() {
        let a = SecretBytes::<4>::new([1, 2, 3, 4]);
        assert_eq!(a, SecretBytes::from_slice(&[1, 2, 3, 4]).unwrap());
        assert_ne!(a, SecretBytes::zeroed());
        assert!(SecretBytes::<4>::from_slice(&[1, 2, 3]).is_err());
        assert_eq!(format!("{a:?}"), "SecretBytes<4>[REDACTED]");
    }

    #[test]
    fn test_output_shapes() {
        let sig = EthAddressSignature {
            x: "0x1".into(),
            y: "0x2".into(),
            s: "0x3".into(),
            pk_x: "0x4".into(),
            pk_y: "0x5".into(),
        };
        let json = serde_json::to_value(&sig).unwrap();
        assert_eq!(json["pk_x"], "0x4");
        assert_eq!(json["pk_y"], "0x5");

        let co = EthCoSignature {
            r: "0x1".into(),
            s: "0x2".into(),
            v: 27,
        };
        let json = serde_json::to_string(&co).unwrap();
        assert_eq!(json, r#"{"r":"0x1","s":"0x2","v":27}"#);
    }
}
