//! The canonical-form trait every message kind implements

use zkdex_algorithms::error::Result;
use zkdex_algorithms::{CanonicalHasher, FieldElement, FieldList};

/// A message with a canonical field list
///
/// `fields` validates every required value first: a missing field is a
/// `MissingField` error and an out-of-bound one a `Range` error, both named
/// after the request field, and neither leaves a partial digest behind.
pub trait Canonical {
    /// Short message kind, for logs
    const KIND: &'static str;

    /// Domain separation tag
    fn type_tag(&self) -> Result<u32>;

    /// Ordered, bounded field values under [`Canonical::type_tag`]
    ///
    /// Messages that embed another message fold in its digest, hence the
    /// hasher.
    fn fields(&self, hasher: &CanonicalHasher) -> Result<FieldList>;

    /// Canonical digest
    fn digest(&self, hasher: &CanonicalHasher) -> Result<FieldElement> {
        hasher.hash(&self.fields(hasher)?)
    }
}

/// Range-check values that bound a message without entering its digest
pub(crate) fn check(fields: FieldList) -> Result<()> {
    fields.elements().map(|_| ())
}
