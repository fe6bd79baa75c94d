//! Perpetual-market messages
//!
//! Withdraw, Transfer, ConditionalTransfer, LimitOrder, Liquidate and
//! SignedOraclePrice. Amounts are 64-bit, positions 64-bit, collateral asset
//! ids 250-bit and synthetic asset ids 120-bit.
//!
//! Asset ids, keys and conditions take a hash word each. Everything else is
//! packed, the message tag heading the last word:
//!
//! ```text
//! transfer   [asset, receiver, (condition), pos|pos|fee_pos|nonce, tag|amount|max_fee|exp]
//! withdraw   [asset, (eth_address), tag|pos|nonce|amount|exp]
//! limit      [sell, buy, fee_asset, amount_sell|amount_buy|fee|nonce, tag|pos|pos|pos|exp]
//! oracle     [asset, price|timestamp]
//! ```

use serde::{Deserialize, Serialize};
use zkdex_algorithms::error::Result;
use zkdex_algorithms::hash::{required, Bound};
use zkdex_algorithms::{CanonicalHasher, FieldList, Packed, U256};
use zkdex_params::bounds::{
    AMOUNT_BITS, COLLATERAL_ASSET_ID_BITS, EXTERNAL_PRICE_BITS, NONCE_BITS, POSITION_ID_BITS,
    SELECTOR_BITS, SYNTHETIC_ASSET_ID_BITS, TIMESTAMP_BITS,
};
use zkdex_params::tags;

use crate::canonical::{check, Canonical};
use crate::input::{self, Numeric};

const TRANSFER_PAD: u32 = 81;
const WITHDRAWAL_PAD: u32 = 49;
const LIMIT_ORDER_PAD: u32 = 17;

/// Fields shared by every signed order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBase {
    pub nonce: Option<Numeric>,
    /// Transfers may spell it `sender_public_key`
    #[serde(alias = "sender_public_key")]
    pub public_key: Option<Numeric>,
    pub expiration_timestamp: Option<Numeric>,
}

impl OrderBase {
    pub(crate) fn nonce(&self) -> Result<U256> {
        input::uint(&self.nonce, "nonce")
    }

    pub(crate) fn public_key(&self) -> Result<U256> {
        input::key(&self.public_key, "public_key")
    }

    pub(crate) fn expiration_timestamp(&self) -> Result<U256> {
        input::uint(&self.expiration_timestamp, "expiration_timestamp")
    }
}

/// Withdrawal whose asset id travels outside the JSON body
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawV1 {
    #[serde(flatten)]
    pub base: OrderBase,
    pub position_id: Option<Numeric>,
    pub amount: Option<Numeric>,
    pub eth_address: Option<Numeric>,
}

impl WithdrawV1 {
    /// Attach the asset id, giving the embedded form
    pub fn with_asset_id(self, asset_id: Numeric) -> WithdrawV2 {
        WithdrawV2 {
            base: self.base,
            position_id: self.position_id,
            amount: self.amount,
            eth_address: self.eth_address,
            asset_id: Some(asset_id),
        }
    }
}

/// Withdrawal with the asset id embedded
///
/// Tagged `WITHDRAWAL` when the destination is the key owner's own address
/// (`eth_address == public_key`), `WITHDRAWAL_TO_ADDRESS` otherwise. Only
/// the second form hashes the destination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawV2 {
    #[serde(flatten)]
    pub base: OrderBase,
    pub position_id: Option<Numeric>,
    pub amount: Option<Numeric>,
    pub eth_address: Option<Numeric>,
    pub asset_id: Option<Numeric>,
}

pub(crate) fn withdrawal_tag(public_key: &U256, eth_address: &U256, own: u32, to_address: u32) -> u32 {
    if public_key == eth_address {
        own
    } else {
        to_address
    }
}

impl Canonical for WithdrawV2 {
    const KIND: &'static str = "withdraw";

    fn type_tag(&self) -> Result<u32> {
        Ok(withdrawal_tag(
            &self.base.public_key()?,
            &input::key(&self.eth_address, "eth_address")?,
            tags::WITHDRAWAL,
            tags::WITHDRAWAL_TO_ADDRESS,
        ))
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        let asset_id = input::asset(&self.asset_id, "asset_id")?;
        let eth_address = input::key(&self.eth_address, "eth_address")?;
        let tag = self.type_tag()?;

        let mut fields = FieldList::new(tag).bits("asset_id", asset_id, COLLATERAL_ASSET_ID_BITS);
        if tag == tags::WITHDRAWAL_TO_ADDRESS {
            fields = fields.key("eth_address", eth_address);
        }
        Ok(fields.packed(
            "withdrawal",
            Packed::tagged(tag)
                .slot("position_id", input::uint(&self.position_id, "position_id")?, POSITION_ID_BITS)
                .slot("nonce", self.base.nonce()?, NONCE_BITS)
                .slot("amount", input::uint(&self.amount, "amount")?, AMOUNT_BITS)
                .slot("expiration_timestamp", self.base.expiration_timestamp()?, TIMESTAMP_BITS)
                .pad(WITHDRAWAL_PAD),
        ))
    }
}

/// Transfer between positions
///
/// The sender key signs the transfer and is not part of its digest. Fees are
/// paid from the sender position and capped at zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    #[serde(flatten)]
    pub base: OrderBase,
    pub sender_position_id: Option<Numeric>,
    pub receiver_public_key: Option<Numeric>,
    pub receiver_position_id: Option<Numeric>,
    pub amount: Option<Numeric>,
    pub asset_id: Option<Numeric>,
}

impl Transfer {
    fn field_list(&self, tag: u32, condition: Option<U256>) -> Result<FieldList> {
        self.base.public_key()?;
        let sender = input::uint(&self.sender_position_id, "sender_position_id")?;
        let receiver = input::uint(&self.receiver_position_id, "receiver_position_id")?;

        let mut fields = FieldList::new(tag)
            .bits("asset_id", input::asset(&self.asset_id, "asset_id")?, COLLATERAL_ASSET_ID_BITS)
            .key(
                "receiver_public_key",
                input::key(&self.receiver_public_key, "receiver_public_key")?,
            );
        if let Some(condition) = condition {
            fields = fields.uint("condition", condition, Bound::Modulus);
        }
        Ok(fields
            .packed(
                "positions",
                Packed::new()
                    .slot("sender_position_id", sender, POSITION_ID_BITS)
                    .slot("receiver_position_id", receiver, POSITION_ID_BITS)
                    .slot("fee_position_id", sender, POSITION_ID_BITS)
                    .slot("nonce", self.base.nonce()?, NONCE_BITS),
            )
            .packed(
                "transfer",
                Packed::tagged(tag)
                    .slot("amount", input::uint(&self.amount, "amount")?, AMOUNT_BITS)
                    .slot("max_amount_fee", U256::ZERO, AMOUNT_BITS)
                    .slot("expiration_timestamp", self.base.expiration_timestamp()?, TIMESTAMP_BITS)
                    .pad(TRANSFER_PAD),
            ))
    }
}

impl Canonical for Transfer {
    const KIND: &'static str = "transfer";

    fn type_tag(&self) -> Result<u32> {
        Ok(tags::TRANSFER)
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        self.field_list(tags::TRANSFER, None)
    }
}

/// Transfer that only settles once an L1 fact is registered
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalTransfer {
    #[serde(flatten)]
    pub transfer: Transfer,
    pub condition: Option<Numeric>,
}

impl Canonical for ConditionalTransfer {
    const KIND: &'static str = "conditional_transfer";

    fn type_tag(&self) -> Result<u32> {
        Ok(tags::CONDITIONAL_TRANSFER)
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        let condition = input::hash(&self.condition, "condition")?;
        self.transfer
            .field_list(tags::CONDITIONAL_TRANSFER, Some(condition))
    }
}

/// Perpetual limit order
///
/// `is_buying_synthetic` decides the direction: a buyer of synthetic sells
/// collateral, a seller of synthetic buys it. Fees are paid in collateral.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrder {
    #[serde(flatten)]
    pub base: OrderBase,
    pub amount_synthetic: Option<Numeric>,
    pub amount_collateral: Option<Numeric>,
    pub amount_fee: Option<Numeric>,
    pub asset_id_synthetic: Option<Numeric>,
    pub asset_id_collateral: Option<Numeric>,
    pub position_id: Option<Numeric>,
    pub is_buying_synthetic: Option<bool>,
}

/// Id and width bounds of a limit order
pub(crate) struct OrderWidths {
    pub synthetic: u32,
    pub collateral: u32,
    pub position: u32,
}

pub(crate) const PERPETUAL_WIDTHS: OrderWidths = OrderWidths {
    synthetic: SYNTHETIC_ASSET_ID_BITS,
    collateral: COLLATERAL_ASSET_ID_BITS,
    position: POSITION_ID_BITS,
};

impl LimitOrder {
    /// Fields under `tag`; a margin selector, when given, leads the tagged word
    pub(crate) fn field_list(
        &self,
        tag: u32,
        widths: &OrderWidths,
        margin: Option<u8>,
    ) -> Result<FieldList> {
        let buying = required(self.is_buying_synthetic, "is_buying_synthetic")?;
        let synthetic = (
            "asset_id_synthetic",
            input::asset(&self.asset_id_synthetic, "asset_id_synthetic")?,
            widths.synthetic,
            "amount_synthetic",
            input::uint(&self.amount_synthetic, "amount_synthetic")?,
        );
        let collateral = (
            "asset_id_collateral",
            input::asset(&self.asset_id_collateral, "asset_id_collateral")?,
            widths.collateral,
            "amount_collateral",
            input::uint(&self.amount_collateral, "amount_collateral")?,
        );
        let fee_asset = collateral.1;
        let (sell, buy) = if buying {
            (collateral, synthetic)
        } else {
            (synthetic, collateral)
        };
        let position = input::uint(&self.position_id, "position_id")?;

        let mut order = Packed::tagged(tag);
        if let Some(margin) = margin {
            order = order.selector("type", margin, SELECTOR_BITS);
        }
        let order = order
            .slot("position_id", position, widths.position)
            .slot("buy_position_id", position, widths.position)
            .slot("fee_position_id", position, widths.position)
            .slot("expiration_timestamp", self.base.expiration_timestamp()?, TIMESTAMP_BITS)
            .pad(LIMIT_ORDER_PAD);

        Ok(FieldList::new(tag)
            .bits(sell.0, sell.1, sell.2)
            .bits(buy.0, buy.1, buy.2)
            .bits("fee_asset_id", fee_asset, widths.collateral)
            .packed(
                "amounts",
                Packed::new()
                    .slot(sell.3, sell.4, AMOUNT_BITS)
                    .slot(buy.3, buy.4, AMOUNT_BITS)
                    .slot("amount_fee", input::uint(&self.amount_fee, "amount_fee")?, AMOUNT_BITS)
                    .slot("nonce", self.base.nonce()?, NONCE_BITS),
            )
            .packed("order", order))
    }
}

impl Canonical for LimitOrder {
    const KIND: &'static str = "limit_order";

    fn type_tag(&self) -> Result<u32> {
        Ok(tags::LIMIT_ORDER)
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        self.field_list(tags::LIMIT_ORDER, &PERPETUAL_WIDTHS, None)
    }
}

/// Liquidation of a position against a liquidator's order
///
/// The liquidator signs its own order: the digest is the order digest. The
/// settlement values are range-checked first and do not enter it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liquidate {
    pub liquidator_order: Option<LimitOrder>,
    pub liquidated_position_id: Option<Numeric>,
    pub actual_collateral: Option<Numeric>,
    pub actual_synthetic: Option<Numeric>,
    pub actual_liquidator_fee: Option<Numeric>,
}

impl Canonical for Liquidate {
    const KIND: &'static str = "liquidate";

    fn type_tag(&self) -> Result<u32> {
        Ok(tags::LIQUIDATE)
    }

    fn fields(&self, hasher: &CanonicalHasher) -> Result<FieldList> {
        let position = input::uint(&self.liquidated_position_id, "liquidated_position_id")?;
        let collateral = input::uint(&self.actual_collateral, "actual_collateral")?;
        let synthetic = input::uint(&self.actual_synthetic, "actual_synthetic")?;
        let fee = input::uint(&self.actual_liquidator_fee, "actual_liquidator_fee")?;
        check(
            FieldList::new(tags::LIQUIDATE)
                .bits("liquidated_position_id", position, POSITION_ID_BITS)
                .bits("actual_collateral", collateral, AMOUNT_BITS)
                .bits("actual_synthetic", synthetic, AMOUNT_BITS)
                .bits("actual_liquidator_fee", fee, AMOUNT_BITS),
        )?;

        required(self.liquidator_order.as_ref(), "liquidator_order")?.fields(hasher)
    }
}

/// Price report signed by an oracle
///
/// `signer_key` names the verifying key. It is checked when present and is
/// not part of the digest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedOraclePrice {
    pub signer_key: Option<Numeric>,
    pub external_price: Option<Numeric>,
    pub timestamp: Option<Numeric>,
    pub signed_asset_id: Option<Numeric>,
}

impl SignedOraclePrice {
    /// Fields under `tag`, heading the price word with `head`
    pub(crate) fn field_list(&self, tag: u32, head: u32) -> Result<FieldList> {
        if let Some(signer_key) = &self.signer_key {
            check(FieldList::new(tag).key("signer_key", signer_key.to_key("signer_key")?))?;
        }
        Ok(FieldList::new(tag)
            .uint(
                "signed_asset_id",
                input::hash(&self.signed_asset_id, "signed_asset_id")?,
                Bound::Modulus,
            )
            .packed(
                "price",
                Packed::tagged(head)
                    .slot(
                        "external_price",
                        input::uint(&self.external_price, "external_price")?,
                        EXTERNAL_PRICE_BITS,
                    )
                    .slot("timestamp", input::uint(&self.timestamp, "timestamp")?, TIMESTAMP_BITS),
            ))
    }
}

impl Canonical for SignedOraclePrice {
    const KIND: &'static str = "signed_oracle_price";

    fn type_tag(&self) -> Result<u32> {
        Ok(tags::ORACLE_PRICE)
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        self.field_list(tags::ORACLE_PRICE, 0)
    }
}
