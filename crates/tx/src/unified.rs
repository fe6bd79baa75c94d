//! Unified-market messages
//!
//! One account model for spot and perpetual trading. Ids and positions are
//! 32-bit and amounts 64-bit. Several bodies share their shape with a spot
//! or perpetual message and differ only in tag and widths. Unlike its
//! perpetual counterpart, the unified liquidation hashes its settlement and
//! the unified oracle word carries its tag.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use zkdex_algorithms::error::Result;
use zkdex_algorithms::hash::required;
use zkdex_algorithms::{CanonicalHasher, FieldList, Packed};
use zkdex_params::bounds::{AMOUNT_BITS, ID32_BITS};
use zkdex_params::tags;

use crate::canonical::Canonical;
use crate::input::{self, Numeric};
use crate::perpetual::{withdrawal_tag, LimitOrder, OrderWidths, SignedOraclePrice};
use crate::spot::{SpotLimitOrder, SpotTransfer, SpotWithdrawal};

/// Margin mode of a perpetual position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarginType {
    #[default]
    #[serde(rename = "PERP_CROSS")]
    Cross,
    #[serde(rename = "PERP_ISO")]
    Isolated,
}

impl MarginType {
    /// Value folded into the digest
    pub fn selector(self) -> u8 {
        match self {
            MarginType::Cross => 0,
            MarginType::Isolated => 1,
        }
    }
}

/// Unified withdrawal; same body as [`SpotWithdrawal`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnifiedWithdrawal(pub SpotWithdrawal);

impl Canonical for UnifiedWithdrawal {
    const KIND: &'static str = "unified_withdrawal";

    fn type_tag(&self) -> Result<u32> {
        Ok(withdrawal_tag(
            &self.0.base.public_key()?,
            &input::key(&self.0.eth_address, "eth_address")?,
            tags::UNIFIED_WITHDRAWAL,
            tags::UNIFIED_WITHDRAWAL_TO_ADDRESS,
        ))
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        self.0.field_list(
            tags::UNIFIED_WITHDRAWAL,
            tags::UNIFIED_WITHDRAWAL_TO_ADDRESS,
            AMOUNT_BITS,
        )
    }
}

/// Unified transfer, naming the synthetic market the position trades in
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedTransfer {
    #[serde(flatten)]
    pub transfer: SpotTransfer,
    pub synthetic_id: Option<Numeric>,
}

impl Canonical for UnifiedTransfer {
    const KIND: &'static str = "unified_transfer";

    fn type_tag(&self) -> Result<u32> {
        Ok(tags::UNIFIED_TRANSFER)
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        let synthetic_id = input::asset(&self.synthetic_id, "synthetic_id")?;
        self.transfer
            .field_list(tags::UNIFIED_TRANSFER, AMOUNT_BITS, Some(synthetic_id))
    }
}

/// Unified perpetual limit order
///
/// The margin mode travels as `"type"`. Requests dispatched on `"type"`
/// consume it, and the dispatcher sets `margin_type` from the variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedPerpLimitOrder {
    #[serde(flatten)]
    pub order: LimitOrder,
    #[serde(rename = "type")]
    pub margin_type: Option<MarginType>,
}

impl Canonical for UnifiedPerpLimitOrder {
    const KIND: &'static str = "unified_perp_limit_order";

    fn type_tag(&self) -> Result<u32> {
        Ok(tags::UNIFIED_PERP_LIMIT_ORDER)
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        let margin = required(self.margin_type, "type")?;
        let widths = OrderWidths {
            synthetic: ID32_BITS,
            collateral: ID32_BITS,
            position: ID32_BITS,
        };
        self.order
            .field_list(tags::UNIFIED_PERP_LIMIT_ORDER, &widths, Some(margin.selector()))
    }
}

/// Unified spot limit order; same body as [`SpotLimitOrder`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnifiedSpotLimitOrder(pub SpotLimitOrder);

impl Canonical for UnifiedSpotLimitOrder {
    const KIND: &'static str = "unified_spot_limit_order";

    fn type_tag(&self) -> Result<u32> {
        Ok(tags::UNIFIED_SPOT_LIMIT_ORDER)
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        self.0.field_list(tags::UNIFIED_SPOT_LIMIT_ORDER, AMOUNT_BITS)
    }
}

/// Unified liquidation against a perpetual order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedLiquidate {
    pub liquidator_order: Option<UnifiedPerpLimitOrder>,
    pub liquidated_position_id: Option<Numeric>,
    pub actual_collateral: Option<Numeric>,
    pub actual_synthetic: Option<Numeric>,
    pub actual_liquidator_fee: Option<Numeric>,
}

impl Canonical for UnifiedLiquidate {
    const KIND: &'static str = "unified_liquidate";

    fn type_tag(&self) -> Result<u32> {
        Ok(tags::UNIFIED_LIQUIDATE)
    }

    fn fields(&self, hasher: &CanonicalHasher) -> Result<FieldList> {
        let order = required(self.liquidator_order.as_ref(), "liquidator_order")?;
        let position = input::uint(&self.liquidated_position_id, "liquidated_position_id")?;
        let collateral = input::uint(&self.actual_collateral, "actual_collateral")?;
        let synthetic = input::uint(&self.actual_synthetic, "actual_synthetic")?;
        let fee = input::uint(&self.actual_liquidator_fee, "actual_liquidator_fee")?;

        let settlement = Packed::tagged(tags::UNIFIED_LIQUIDATE)
            .slot("liquidated_position_id", position, ID32_BITS)
            .slot("actual_collateral", collateral, AMOUNT_BITS)
            .slot("actual_synthetic", synthetic, AMOUNT_BITS)
            .slot("actual_liquidator_fee", fee, AMOUNT_BITS);
        // settlement bounds fail before the nested order is hashed
        settlement.word(&Cow::Borrowed("settlement"))?;

        Ok(FieldList::new(tags::UNIFIED_LIQUIDATE)
            .digest("liquidator_order", order.digest(hasher)?)
            .packed("settlement", settlement))
    }
}

/// Unified oracle price; same body as [`SignedOraclePrice`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnifiedOraclePrice(pub SignedOraclePrice);

impl Canonical for UnifiedOraclePrice {
    const KIND: &'static str = "unified_oracle_price";

    fn type_tag(&self) -> Result<u32> {
        Ok(tags::UNIFIED_ORACLE_PRICE)
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        self.0
            .field_list(tags::UNIFIED_ORACLE_PRICE, tags::UNIFIED_ORACLE_PRICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkdex_algorithms::error::Error;
    use zkdex_algorithms::FieldElement;

    const PERP_ORDER: &str = r#"{
        "type":"PERP_CROSS",
        "amount_collateral":"15334874",
        "amount_fee":"1767749",
        "amount_synthetic":"15460142",
        "asset_id_collateral":"0x57d05d",
        "asset_id_synthetic":"0x2",
        "expiration_timestamp":"3608164305",
        "is_buying_synthetic":true,
        "nonce":"1210484339",
        "order_type":"LIMIT_ORDER_WITH_FEES",
        "position_id":"4805234",
        "public_key":"0x6b974202431eb8c0692c9c8111528d947bc7e70f7ffefaffbab7455dfa5d4f7"
    }"#;

    fn hasher() -> CanonicalHasher {
        CanonicalHasher::new().unwrap()
    }

    fn perp_order() -> UnifiedPerpLimitOrder {
        serde_json::from_str(PERP_ORDER).unwrap()
    }

    fn hex(d: FieldElement) -> String {
        zkdex_api::HexStyle::Prefixed.render(&d.to_bytes())
    }

    #[test]
    fn test_perp_order_margin() {
        let h = hasher();
        let cross = perp_order();
        assert_eq!(cross.margin_type, Some(MarginType::Cross));
        assert_eq!(
            hex(cross.digest(&h).unwrap()),
            "0x207071e78b4e7247c0bfd7ed66e25257e5d49017d18570f567144008c7f4caab"
        );
        // buying synthetic: collateral is sold, and pays the fee
        let elements = cross.fields(&h).unwrap().elements().unwrap();
        assert_eq!(elements.len(), 5);
        assert_eq!(elements[0], FieldElement::from_u64(0x57d05d));
        assert_eq!(elements[1], FieldElement::from_u64(0x2));
        assert_eq!(elements[2], FieldElement::from_u64(0x57d05d));

        let iso = UnifiedPerpLimitOrder {
            margin_type: Some(MarginType::Isolated),
            ..cross.clone()
        };
        assert_ne!(cross.digest(&h).unwrap(), iso.digest(&h).unwrap());

        let untyped = UnifiedPerpLimitOrder {
            margin_type: None,
            ..cross.clone()
        };
        match untyped.digest(&h).unwrap_err() {
            Error::MissingField { field } => assert_eq!(field, "type"),
            other => panic!("unexpected {other:?}"),
        }

        // same order fields, perpetual tag and widths
        assert_ne!(cross.digest(&h).unwrap(), cross.order.digest(&h).unwrap());
    }

    #[test]
    fn test_perp_order_ids_are_32_bit() {
        let h = hasher();
        let mut order = perp_order();
        order.order.position_id = Some("4294967296".into());
        match order.digest(&h).unwrap_err() {
            Error::Range { field, .. } => assert_eq!(field, "position_id"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_transfer_includes_synthetic_id() {
        let h = hasher();
        let transfer: UnifiedTransfer = serde_json::from_str(
            r#"{
                "amount": "7758176404715800194",
                "asset_id": "0x1234",
                "synthetic_id" : "0x0",
                "expiration_timestamp": "2404381470",
                "nonce": "2195908194",
                "receiver_position_id": "609106",
                "receiver_public_key": "0x259f432e6f4590b9a164106cf6a659eb4862b21fb97d43588561712e8e5216b",
                "sender_position_id": "93098",
                "sender_public_key": "0x28e4d45cd0538ffa6fdc09e70f0fea4e56c47fda87a2a969c22b4fdfe997f60"
            }"#,
        )
        .unwrap();
        let fields = transfer.fields(&h).unwrap();
        assert_eq!(fields.tag(), tags::UNIFIED_TRANSFER);
        assert_eq!(fields.len(), 3);
        assert_eq!(
            hex(transfer.digest(&h).unwrap()),
            "0x1d22824616a3c915ddd450f59cba44a5ebb4820b2fe9eab77f67384b498f9b2a"
        );

        let other = UnifiedTransfer {
            synthetic_id: Some("0x1".into()),
            ..transfer.clone()
        };
        assert_ne!(transfer.digest(&h).unwrap(), other.digest(&h).unwrap());

        let missing = UnifiedTransfer {
            synthetic_id: None,
            ..transfer
        };
        assert!(matches!(
            missing.digest(&h),
            Err(Error::MissingField { .. })
        ));
    }

    #[test]
    fn test_withdrawal_amounts_are_64_bit() {
        let h = hasher();
        let w: UnifiedWithdrawal = serde_json::from_str(
            r#"{
                "amount": "1682637359498011204",
                "eth_address": "0xB6aD5EfBd6aDfa29dEfad5BC0f8cE0ad57d4c5Fb",
                "expiration_timestamp": "2101470722",
                "asset_id": "0x11111",
                "nonce": "4265854110",
                "position_id": "775817640",
                "fee": "0",
                "public_key": "0x0d4a693a09887aabea49f49a7a0968929f17b65134ab3b26201e49a43cbe7c2a",
                "chain_id": "123"
            }"#,
        )
        .unwrap();
        assert_eq!(w.type_tag().unwrap(), tags::UNIFIED_WITHDRAWAL_TO_ADDRESS);
        assert_eq!(
            hex(w.digest(&h).unwrap()),
            "0x1e52610d16166590e3e79044c7bba6781f428a6dfe89ce4633bf7274756af719"
        );
        assert_ne!(w.digest(&h).unwrap(), w.0.digest(&h).unwrap());

        let wide = UnifiedWithdrawal(SpotWithdrawal {
            fee: Some("18446744073709551616".into()),
            ..w.0.clone()
        });
        match wide.digest(&h).unwrap_err() {
            Error::Range { field, .. } => assert_eq!(field, "fee"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_spot_order_and_oracle_tags() {
        let h = hasher();
        let spot = SpotLimitOrder {
            base: crate::perpetual::OrderBase {
                nonce: Some(Numeric::Int(1)),
                public_key: Some("0x1".into()),
                expiration_timestamp: Some(Numeric::Int(2)),
            },
            asset_sell: Some(Numeric::Int(3)),
            asset_buy: Some(Numeric::Int(4)),
            amount_sell: Some(Numeric::Int(5)),
            amount_buy: Some(Numeric::Int(6)),
            amount_fee: Some(Numeric::Int(7)),
            position_id: Some(Numeric::Int(8)),
        };
        let unified = UnifiedSpotLimitOrder(spot.clone());
        assert_ne!(unified.digest(&h).unwrap(), spot.digest(&h).unwrap());

        let wide = UnifiedSpotLimitOrder(SpotLimitOrder {
            amount_fee: Some("18446744073709551616".into()),
            ..spot
        });
        match wide.digest(&h).unwrap_err() {
            Error::Range { field, .. } => assert_eq!(field, "amount_fee"),
            other => panic!("unexpected {other:?}"),
        }

        let price = SignedOraclePrice {
            signer_key: Some("0x1".into()),
            external_price: Some(Numeric::Int(100)),
            timestamp: Some(Numeric::Int(1)),
            signed_asset_id: Some("0xabc".into()),
        };
        let unified = UnifiedOraclePrice(price.clone());
        assert_eq!(unified.fields(&h).unwrap().tag(), tags::UNIFIED_ORACLE_PRICE);
        assert_ne!(unified.digest(&h).unwrap(), price.digest(&h).unwrap());

        let published = UnifiedOraclePrice(SignedOraclePrice {
            external_price: Some("1".into()),
            timestamp: Some("2".into()),
            signed_asset_id: Some("0x3".into()),
            ..price
        });
        assert_eq!(
            hex(published.digest(&h).unwrap()),
            "0x19ad806db8ae4c453d4f52f251abe2d7902700884931feeb1d66ed3b1187907a"
        );
    }

    #[test]
    fn test_liquidate() {
        let h = hasher();
        let json = format!(
            r#"{{
                "actual_collateral":"7758176404715800194",
                "actual_liquidator_fee":"8791662011684601223",
                "actual_synthetic":"15308084094301570617",
                "liquidated_position_id":"1541968236",
                "liquidated_type":"PERP_CROSS",
                "liquidator_order":{PERP_ORDER}
            }}"#
        );
        let liquidate: UnifiedLiquidate = serde_json::from_str(&json).unwrap();
        let elements = liquidate.fields(&h).unwrap().elements().unwrap();
        assert_eq!(elements[0], perp_order().digest(&h).unwrap());
        assert_eq!(elements.len(), 2);
        assert_eq!(
            hex(liquidate.digest(&h).unwrap()),
            "0x2b78e361cb4a5670425f2980f577cf642648fbb1c0a5179019ed00a6bf689940"
        );

        let wide = UnifiedLiquidate {
            liquidated_position_id: Some("4294967296".into()),
            ..liquidate
        };
        match wide.digest(&h).unwrap_err() {
            Error::Range { field, .. } => assert_eq!(field, "liquidated_position_id"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
