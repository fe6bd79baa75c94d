//! Two-party trades
//!
//! Each side of a trade is hashed separately: the side's own order digest,
//! both signed fees, then the settlement amounts and the party index packed
//! under the trade tag. Both sides fold in every settlement value, so
//! changing any amount or fee changes both hashes, and each party signs only
//! the hash that names its order.

use serde::{Deserialize, Serialize};
use zkdex_algorithms::error::Result;
use zkdex_algorithms::hash::required;
use zkdex_algorithms::{CanonicalHasher, FieldElement, FieldList, Packed, SignedAmount, U256};
use zkdex_params::bounds::{AMOUNT_BITS, SELECTOR_BITS, SIGNED_FEE_MAGNITUDE_BITS};
use zkdex_params::tags;

use crate::canonical::Canonical;
use crate::input::{self, Numeric};
use crate::unified::{UnifiedPerpLimitOrder, UnifiedSpotLimitOrder};

/// Side of a trade
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Party {
    A,
    B,
}

impl Party {
    /// Index folded into the side hash
    pub fn index(self) -> u8 {
        match self {
            Party::A => 0,
            Party::B => 1,
        }
    }
}

/// A trade carrying one order per party
pub trait Trade {
    /// Short trade kind, for logs
    const KIND: &'static str;

    /// Field list of one side
    fn side(&self, party: Party, hasher: &CanonicalHasher) -> Result<FieldList>;

    /// Hashes of side A and side B
    ///
    /// Both sides are built before either is hashed.
    fn hashes(&self, hasher: &CanonicalHasher) -> Result<(FieldElement, FieldElement)> {
        let a = self.side(Party::A, hasher)?;
        let b = self.side(Party::B, hasher)?;
        Ok((hasher.hash(&a)?, hasher.hash(&b)?))
    }
}

struct Fees {
    a: SignedAmount,
    b: SignedAmount,
}

impl Fees {
    fn parse(a: &Option<Numeric>, b: &Option<Numeric>) -> Result<Self> {
        Ok(Self {
            a: input::signed(a, "actual_a_fee")?,
            b: input::signed(b, "actual_b_fee")?,
        })
    }
}

fn side_list(
    tag: u32,
    party: Party,
    order: FieldElement,
    settlement: [(&'static str, U256); 2],
    fees: Fees,
) -> FieldList {
    let [first, second] = settlement;
    FieldList::new(tag)
        .digest("party_order", order)
        .signed("actual_a_fee", fees.a, SIGNED_FEE_MAGNITUDE_BITS)
        .signed("actual_b_fee", fees.b, SIGNED_FEE_MAGNITUDE_BITS)
        .packed(
            "settlement",
            Packed::tagged(tag)
                .slot(first.0, first.1, AMOUNT_BITS)
                .slot(second.0, second.1, AMOUNT_BITS)
                .selector("party", party.index(), SELECTOR_BITS),
        )
}

/// Spot trade between two unified spot orders
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotTrade {
    pub party_a_order: Option<UnifiedSpotLimitOrder>,
    pub party_b_order: Option<UnifiedSpotLimitOrder>,
    pub actual_a_sold: Option<Numeric>,
    pub actual_b_sold: Option<Numeric>,
    pub actual_a_fee: Option<Numeric>,
    pub actual_b_fee: Option<Numeric>,
}

impl Trade for SpotTrade {
    const KIND: &'static str = "spot_trade";

    fn side(&self, party: Party, hasher: &CanonicalHasher) -> Result<FieldList> {
        let order = match party {
            Party::A => required(self.party_a_order.as_ref(), "party_a_order")?,
            Party::B => required(self.party_b_order.as_ref(), "party_b_order")?,
        };
        let a_sold = input::uint(&self.actual_a_sold, "actual_a_sold")?;
        let b_sold = input::uint(&self.actual_b_sold, "actual_b_sold")?;
        let fees = Fees::parse(&self.actual_a_fee, &self.actual_b_fee)?;

        Ok(side_list(
            tags::UNIFIED_SPOT_TRADE,
            party,
            order.digest(hasher)?,
            [("actual_a_sold", a_sold), ("actual_b_sold", b_sold)],
            fees,
        ))
    }
}

/// Perpetual trade between two unified perpetual orders
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerpetualTrade {
    pub party_a_order: Option<UnifiedPerpLimitOrder>,
    pub party_b_order: Option<UnifiedPerpLimitOrder>,
    pub actual_collateral: Option<Numeric>,
    pub actual_synthetic: Option<Numeric>,
    pub actual_a_fee: Option<Numeric>,
    pub actual_b_fee: Option<Numeric>,
}

impl Trade for PerpetualTrade {
    const KIND: &'static str = "perpetual_trade";

    fn side(&self, party: Party, hasher: &CanonicalHasher) -> Result<FieldList> {
        let order = match party {
            Party::A => required(self.party_a_order.as_ref(), "party_a_order")?,
            Party::B => required(self.party_b_order.as_ref(), "party_b_order")?,
        };
        let collateral = input::uint(&self.actual_collateral, "actual_collateral")?;
        let synthetic = input::uint(&self.actual_synthetic, "actual_synthetic")?;
        let fees = Fees::parse(&self.actual_a_fee, &self.actual_b_fee)?;

        Ok(side_list(
            tags::UNIFIED_PERP_TRADE,
            party,
            order.digest(hasher)?,
            [("actual_collateral", collateral), ("actual_synthetic", synthetic)],
            fees,
        ))
    }
}
