//! Canonical word lists over typed message fields
//!
//! A message is laid out as an ordered list of hash words and run through
//! one Poseidon sponge. Wide values (asset ids, keys, nested digests, signed
//! fees) take a word each; narrow ones are packed together:
//!
//! ```text
//! word = ((head << b_1 | v_1) << b_2 | v_2) ... << pad
//! ```
//!
//! where `head` is the message tag (or zero) and every `v_i` is below
//! `2^b_i`. A packed word never exceeds 253 bits. Every value is checked
//! against its bound before the sponge starts, so a range failure never
//! leaves a partial digest behind.

use std::borrow::Cow;

use zkdex_params::bounds::{ADDRESS_KEY_BITS, PACKED_WORD_BITS};

use crate::ec::jubjub::FieldElement;
use crate::error::{Error, Result};
use crate::hash::poseidon::Poseidon;
use crate::types::{SignedAmount, U256};

/// Upper bound on a field value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Strictly below `2^bits`
    Bits(u32),
    /// Strictly below the field modulus
    Modulus,
}

/// Narrow values sharing one hash word
#[derive(Clone, Debug, PartialEq)]
pub struct Packed {
    head: u32,
    slots: Vec<(Cow<'static, str>, U256, u32)>,
    pad: u32,
}

impl Packed {
    /// An untagged packed word
    pub fn new() -> Self {
        Self::tagged(0)
    }

    /// A packed word headed by a message tag
    pub fn tagged(tag: u32) -> Self {
        Self {
            head: tag,
            slots: Vec::new(),
            pad: 0,
        }
    }

    /// Append a value below `2^bits`
    pub fn slot(mut self, name: impl Into<Cow<'static, str>>, value: U256, bits: u32) -> Self {
        self.slots.push((name.into(), value, bits));
        self
    }

    /// Append a small enum or boolean selector
    pub fn selector(self, name: impl Into<Cow<'static, str>>, value: u8, bits: u32) -> Self {
        self.slot(name, U256::from_u64(value as u64), bits)
    }

    /// Shift the finished word left by `bits` zero bits
    pub fn pad(mut self, bits: u32) -> Self {
        self.pad = bits;
        self
    }

    /// Total width of the packed word in bits
    pub fn width(&self) -> u32 {
        let head = U256::from_u64(self.head as u64).bits();
        head + self.slots.iter().map(|(_, _, bits)| bits).sum::<u32>() + self.pad
    }

    /// Validate every slot and assemble the word
    pub fn word(&self, name: &Cow<'static, str>) -> Result<FieldElement> {
        if self.width() > PACKED_WORD_BITS {
            return Err(Error::range(
                name.clone(),
                format!("packed word is wider than {} bits", PACKED_WORD_BITS),
            ));
        }
        let mut acc = U256::from_u64(self.head as u64);
        for (slot, value, bits) in &self.slots {
            if !value.fits_bits(*bits) {
                return Err(Error::range(slot.clone(), format!("must be below 2^{}", bits)));
            }
            acc = acc.shl(*bits).or(value);
        }
        // below 2^253, hence below the modulus
        bounded(name, &acc.shl(self.pad), Bound::Modulus)
    }
}

impl Default for Packed {
    fn default() -> Self {
        Self::new()
    }
}

/// One typed hash word
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Bounded unsigned integer
    Uint(U256, Bound),
    /// Signed amount whose magnitude is below `2^bits`, folded as `v mod p`
    Signed(SignedAmount, u32),
    /// Public key or Ethereum address
    Key(U256),
    /// Digest of a nested message
    Digest(FieldElement),
    /// Several narrow values in one word
    Packed(Packed),
}

/// A tagged, ordered list of named hash words
#[derive(Clone, Debug)]
pub struct FieldList {
    tag: u32,
    entries: Vec<(Cow<'static, str>, Element)>,
}

/// Unwrap a required field or report it missing by name
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingField {
        field: Cow::Borrowed(field),
    })
}

/// The hash word of a public key or Ethereum address
///
/// A nonzero value below `2^160` is an address and hashes as is. Anything
/// else is a packed public key whose sign bit 255 is dropped; what remains
/// must be below the field modulus.
pub fn key_word(name: &Cow<'static, str>, key: &U256) -> Result<FieldElement> {
    if !key.is_zero() && key.fits_bits(ADDRESS_KEY_BITS) {
        return bounded(name, key, Bound::Modulus);
    }
    bounded(name, &key.low_bits(255), Bound::Modulus)
}

impl FieldList {
    /// Start a list for a message tagged `tag`
    pub fn new(tag: u32) -> Self {
        Self {
            tag,
            entries: Vec::new(),
        }
    }

    /// Type tag of the message
    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// Number of hash words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no word has been pushed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append any element
    pub fn push(mut self, name: impl Into<Cow<'static, str>>, element: Element) -> Self {
        self.entries.push((name.into(), element));
        self
    }

    /// Append a bounded integer
    pub fn uint(self, name: impl Into<Cow<'static, str>>, value: U256, bound: Bound) -> Self {
        self.push(name, Element::Uint(value, bound))
    }

    /// Append an integer below `2^bits`
    pub fn bits(self, name: impl Into<Cow<'static, str>>, value: U256, bits: u32) -> Self {
        self.uint(name, value, Bound::Bits(bits))
    }

    /// Append a signed amount whose magnitude is below `2^bits`
    pub fn signed(
        self,
        name: impl Into<Cow<'static, str>>,
        value: SignedAmount,
        bits: u32,
    ) -> Self {
        self.push(name, Element::Signed(value, bits))
    }

    /// Append a public key or address
    pub fn key(self, name: impl Into<Cow<'static, str>>, key: U256) -> Self {
        self.push(name, Element::Key(key))
    }

    /// Append a nested digest
    pub fn digest(self, name: impl Into<Cow<'static, str>>, digest: FieldElement) -> Self {
        self.push(name, Element::Digest(digest))
    }

    /// Append a packed word
    pub fn packed(self, name: impl Into<Cow<'static, str>>, packed: Packed) -> Self {
        self.push(name, Element::Packed(packed))
    }

    /// Validate every value and lay the list out as hash words
    pub fn elements(&self) -> Result<Vec<FieldElement>> {
        self.entries
            .iter()
            .map(|(name, element)| match element {
                Element::Uint(value, bound) => bounded(name, value, *bound),
                Element::Signed(value, bits) => {
                    let magnitude = bounded(name, &value.magnitude, Bound::Bits(*bits))?;
                    Ok(if value.negative {
                        magnitude.neg()
                    } else {
                        magnitude
                    })
                }
                Element::Key(key) => key_word(name, key),
                Element::Digest(digest) => Ok(*digest),
                Element::Packed(packed) => packed.word(name),
            })
            .collect()
    }
}

fn bounded(name: &Cow<'static, str>, value: &U256, bound: Bound) -> Result<FieldElement> {
    if let Bound::Bits(bits) = bound {
        if !value.fits_bits(bits) {
            return Err(Error::range(name.clone(), format!("must be below 2^{}", bits)));
        }
    }
    FieldElement::from_uint(value)
        .ok_or_else(|| Error::range(name.clone(), "must be below the field modulus"))
}

/// The canonical message hasher
#[derive(Clone, Debug)]
pub struct CanonicalHasher {
    poseidon: Poseidon,
}

impl CanonicalHasher {
    /// Build the hasher and derive the Poseidon constants
    pub fn new() -> Result<Self> {
        Ok(Self {
            poseidon: Poseidon::new()?,
        })
    }

    /// The underlying permutation
    pub fn poseidon(&self) -> &Poseidon {
        &self.poseidon
    }

    /// Absorb already-validated words
    pub fn sponge(&self, words: &[FieldElement]) -> FieldElement {
        self.poseidon.hash(words)
    }

    /// Validate and hash a field list
    pub fn hash(&self, fields: &FieldList) -> Result<FieldElement> {
        let words = fields.elements()?;
        Ok(self.sponge(&words))
    }
}
