//! Unsigned 256-bit integers and their textual encodings
//!
//! Request fields arrive as decimal strings, `0x`-hex, bare hex or native JSON
//! integers. [`U256::parse_numeric`] applies the disambiguation rule: a string
//! made only of decimal digits is decimal, one with a `0x` prefix or any hex
//! letter is hex. Hash and key fields go through [`U256::parse_hex`] instead.

use core::cmp::Ordering;
use core::fmt;

use zkdex_internal::arith::{add4, lt4, mac};
use zkdex_internal::endian::{limbs_from_be_bytes, limbs_to_be_bytes};

use crate::error::{Error, Result};

/// Maximum number of hex digits in a 256-bit value
pub const MAX_HEX_DIGITS: usize = 64;

/// An unsigned 256-bit integer stored as four little-endian ordered limbs
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U256([u64; 4]);

impl U256 {
    /// Zero
    pub const ZERO: Self = Self([0; 4]);

    /// One
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// Create from little-endian ordered limbs
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(limbs)
    }

    /// Little-endian ordered limbs
    pub const fn limbs(&self) -> &[u64; 4] {
        &self.0
    }

    /// Create from a native integer
    pub const fn from_u64(v: u64) -> Self {
        Self([v, 0, 0, 0])
    }

    /// Create from a native 128-bit integer
    pub const fn from_u128(v: u128) -> Self {
        Self([v as u64, (v >> 64) as u64, 0, 0])
    }

    /// Decode 32 big-endian bytes
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        Self(limbs_from_be_bytes(bytes))
    }

    /// Encode as 32 big-endian bytes
    pub fn to_be_bytes(&self) -> [u8; 32] {
        limbs_to_be_bytes(&self.0)
    }

    /// Whether the value is zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 4]
    }

    /// Number of significant bits; zero has none
    pub fn bits(&self) -> u32 {
        for i in (0..4).rev() {
            if self.0[i] != 0 {
                return (i as u32) * 64 + (64 - self.0[i].leading_zeros());
            }
        }
        0
    }

    /// Whether the value is strictly below `2^bits`
    pub fn fits_bits(&self, bits: u32) -> bool {
        self.bits() <= bits
    }

    /// Bit `i`, counting from the least significant
    pub fn bit(&self, i: u32) -> bool {
        if i >= 256 {
            return false;
        }
        (self.0[(i / 64) as usize] >> (i % 64)) & 1 == 1
    }

    /// Logical left shift; bits shifted past 255 are dropped
    pub fn shl(&self, n: u32) -> Self {
        if n >= 256 {
            return Self::ZERO;
        }
        let limbs = (n / 64) as usize;
        let bits = n % 64;
        let mut out = [0u64; 4];
        for i in (limbs..4).rev() {
            out[i] = self.0[i - limbs] << bits;
            if bits > 0 && i > limbs {
                out[i] |= self.0[i - limbs - 1] >> (64 - bits);
            }
        }
        Self(out)
    }

    /// Bitwise or
    pub fn or(&self, other: &Self) -> Self {
        let mut out = self.0;
        for (o, v) in out.iter_mut().zip(other.0.iter()) {
            *o |= v;
        }
        Self(out)
    }

    /// Keep the low `n` bits
    pub fn low_bits(&self, n: u32) -> Self {
        let mut out = self.0;
        for (i, limb) in out.iter_mut().enumerate() {
            let start = (i as u32) * 64;
            if n <= start {
                *limb = 0;
            } else if n < start + 64 {
                *limb &= (1u64 << (n - start)) - 1;
            }
        }
        Self(out)
    }

    /// Logical right shift by one bit
    pub fn shr1(&self) -> Self {
        let mut out = [0u64; 4];
        for i in 0..4 {
            out[i] = self.0[i] >> 1;
            if i < 3 {
                out[i] |= self.0[i + 1] << 63;
            }
        }
        Self(out)
    }

    /// Addition; `None` on overflow
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        let (sum, carry) = add4(&self.0, &other.0);
        if carry != 0 {
            None
        } else {
            Some(Self(sum))
        }
    }

    /// `self * 10 + digit`; `None` on overflow
    fn mul10_add(&self, digit: u64) -> Option<Self> {
        let mut out = [0u64; 4];
        let mut carry = digit;
        for i in 0..4 {
            let (lo, hi) = mac(0, self.0[i], 10, carry);
            out[i] = lo;
            carry = hi;
        }
        if carry != 0 {
            None
        } else {
            Some(Self(out))
        }
    }

    /// Parse a decimal string of ASCII digits
    pub fn parse_decimal(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::NullInput {
                context: "decimal integer",
            });
        }
        let mut acc = Self::ZERO;
        for c in s.bytes() {
            if !c.is_ascii_digit() {
                return Err(Error::format("decimal integer", "non-decimal character"));
            }
            acc = acc
                .mul10_add((c - b'0') as u64)
                .ok_or_else(|| Error::range("decimal integer", "value exceeds 2^256"))?;
        }
        Ok(acc)
    }

    /// Parse a hex string, with or without `0x`, of at most 64 digits
    pub fn parse_hex(s: &str) -> Result<Self> {
        let digits = strip_hex_prefix(s);
        if digits.is_empty() {
            return Err(Error::NullInput {
                context: "hex integer",
            });
        }
        if digits.len() > MAX_HEX_DIGITS {
            return Err(Error::format("hex integer", "more than 64 hex digits"));
        }
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::format("hex integer", "non-hex character"));
        }

        // hex::decode wants an even number of digits
        let mut padded = [b'0'; MAX_HEX_DIGITS];
        padded[MAX_HEX_DIGITS - digits.len()..].copy_from_slice(digits.as_bytes());
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(padded, &mut bytes)
            .map_err(|e| Error::format("hex integer", e.to_string()))?;
        Ok(Self::from_be_bytes(&bytes))
    }

    /// Parse an integer field value in any accepted encoding
    pub fn parse_numeric(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::NullInput { context: "integer" });
        }
        if s.starts_with("0x") || s.starts_with("0X") {
            return Self::parse_hex(s);
        }
        if s.bytes().all(|c| c.is_ascii_digit()) {
            return Self::parse_decimal(s);
        }
        if s.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Self::parse_hex(s);
        }
        Err(Error::format("integer", "neither decimal nor hex"))
    }

    /// Render as `0x` followed by 64 lowercase hex digits
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", hex::encode(self.to_be_bytes()))
    }
}

/// Strip an optional `0x`/`0X` prefix
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if lt4(&self.0, &other.0) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for U256 {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({})", self.to_hex_prefixed())
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_prefixed())
    }
}

/// A signed amount: a magnitude plus a sign
///
/// Folded into the hash field as `p - |v|` when negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignedAmount {
    /// Absolute value
    pub magnitude: U256,
    /// Whether the amount is below zero
    pub negative: bool,
}

impl SignedAmount {
    /// Create from a native integer
    pub fn from_i64(v: i64) -> Self {
        Self {
            magnitude: U256::from_u64(v.unsigned_abs()),
            negative: v < 0,
        }
    }

    /// Parse an optionally `-`-prefixed decimal or hex amount
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.strip_prefix('-') {
            Some(rest) => Ok(Self {
                magnitude: U256::parse_numeric(rest)?,
                negative: true,
            }),
            None => Ok(Self {
                magnitude: U256::parse_numeric(s.strip_prefix('+').unwrap_or(s))?,
                negative: false,
            }),
        }
    }
}
