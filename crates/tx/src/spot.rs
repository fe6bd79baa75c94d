//! Spot-market messages
//!
//! Ids are 32-bit and amounts 128-bit. The unified messages reuse these
//! shapes with 64-bit amounts, so every field list takes its tag and amount
//! width from the caller.
//!
//! Amounts and keys take a hash word each; ids, nonce and expiration share
//! one word headed by the tag:
//!
//! ```text
//! withdrawal [(eth_address), amount, fee, tag|asset|pos|chain|nonce|exp]
//! transfer   [receiver, amount, tag|asset|(synthetic)|pos|pos|nonce|exp]
//! limit      [amount_sell, amount_buy, fee, tag|sell|buy|pos|nonce|exp]
//! ```

use serde::{Deserialize, Serialize};
use zkdex_algorithms::error::Result;
use zkdex_algorithms::{CanonicalHasher, FieldList, Packed, U256};
use zkdex_params::bounds::{ID32_BITS, NONCE_BITS, SPOT_AMOUNT_BITS, TIMESTAMP_BITS};
use zkdex_params::tags;

use crate::canonical::Canonical;
use crate::input::{self, Numeric};
use crate::perpetual::{withdrawal_tag, OrderBase};

/// Withdrawal of a spot balance
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotWithdrawal {
    #[serde(flatten)]
    pub base: OrderBase,
    pub asset_id: Option<Numeric>,
    pub position_id: Option<Numeric>,
    pub amount: Option<Numeric>,
    /// Zero when absent
    pub fee: Option<Numeric>,
    pub chain_id: Option<Numeric>,
    pub eth_address: Option<Numeric>,
}

impl SpotWithdrawal {
    pub(crate) fn field_list(&self, own: u32, to_address: u32, amount_bits: u32) -> Result<FieldList> {
        let public_key = self.base.public_key()?;
        let eth_address = input::key(&self.eth_address, "eth_address")?;
        let tag = withdrawal_tag(&public_key, &eth_address, own, to_address);

        let mut fields = FieldList::new(tag);
        if tag == to_address {
            fields = fields.key("eth_address", eth_address);
        }
        Ok(fields
            .bits("amount", input::uint(&self.amount, "amount")?, amount_bits)
            .bits("fee", input::uint_or_zero(&self.fee, "fee")?, amount_bits)
            .packed(
                "withdrawal",
                Packed::tagged(tag)
                    .slot("asset_id", input::asset(&self.asset_id, "asset_id")?, ID32_BITS)
                    .slot("position_id", input::uint(&self.position_id, "position_id")?, ID32_BITS)
                    .slot("chain_id", input::uint(&self.chain_id, "chain_id")?, ID32_BITS)
                    .slot("nonce", self.base.nonce()?, NONCE_BITS)
                    .slot("expiration_timestamp", self.base.expiration_timestamp()?, TIMESTAMP_BITS),
            ))
    }
}

impl Canonical for SpotWithdrawal {
    const KIND: &'static str = "spot_withdrawal";

    fn type_tag(&self) -> Result<u32> {
        Ok(withdrawal_tag(
            &self.base.public_key()?,
            &input::key(&self.eth_address, "eth_address")?,
            tags::SPOT_WITHDRAWAL,
            tags::SPOT_WITHDRAWAL_TO_ADDRESS,
        ))
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        self.field_list(
            tags::SPOT_WITHDRAWAL,
            tags::SPOT_WITHDRAWAL_TO_ADDRESS,
            SPOT_AMOUNT_BITS,
        )
    }
}

/// Transfer of a spot balance
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotTransfer {
    #[serde(flatten)]
    pub base: OrderBase,
    pub asset_id: Option<Numeric>,
    pub amount: Option<Numeric>,
    pub sender_position_id: Option<Numeric>,
    pub receiver_position_id: Option<Numeric>,
    pub receiver_public_key: Option<Numeric>,
}

impl SpotTransfer {
    /// Fields under `tag`; a synthetic id, when given, follows the asset id
    ///
    /// The sender key signs the transfer and is not part of its digest.
    pub(crate) fn field_list(
        &self,
        tag: u32,
        amount_bits: u32,
        synthetic_id: Option<U256>,
    ) -> Result<FieldList> {
        self.base.public_key()?;
        let mut ids = Packed::tagged(tag).slot(
            "asset_id",
            input::asset(&self.asset_id, "asset_id")?,
            ID32_BITS,
        );
        if let Some(synthetic_id) = synthetic_id {
            ids = ids.slot("synthetic_id", synthetic_id, ID32_BITS);
        }
        let ids = ids
            .slot(
                "sender_position_id",
                input::uint(&self.sender_position_id, "sender_position_id")?,
                ID32_BITS,
            )
            .slot(
                "receiver_position_id",
                input::uint(&self.receiver_position_id, "receiver_position_id")?,
                ID32_BITS,
            )
            .slot("nonce", self.base.nonce()?, NONCE_BITS)
            .slot("expiration_timestamp", self.base.expiration_timestamp()?, TIMESTAMP_BITS);

        Ok(FieldList::new(tag)
            .key(
                "receiver_public_key",
                input::key(&self.receiver_public_key, "receiver_public_key")?,
            )
            .bits("amount", input::uint(&self.amount, "amount")?, amount_bits)
            .packed("transfer", ids))
    }
}

impl Canonical for SpotTransfer {
    const KIND: &'static str = "spot_transfer";

    fn type_tag(&self) -> Result<u32> {
        Ok(tags::SPOT_TRANSFER)
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        self.field_list(tags::SPOT_TRANSFER, SPOT_AMOUNT_BITS, None)
    }
}

/// Spot limit order, expressed directly as sold and bought assets
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotLimitOrder {
    #[serde(flatten)]
    pub base: OrderBase,
    pub asset_sell: Option<Numeric>,
    pub asset_buy: Option<Numeric>,
    pub amount_sell: Option<Numeric>,
    pub amount_buy: Option<Numeric>,
    pub amount_fee: Option<Numeric>,
    pub position_id: Option<Numeric>,
}

impl SpotLimitOrder {
    pub(crate) fn field_list(&self, tag: u32, amount_bits: u32) -> Result<FieldList> {
        Ok(FieldList::new(tag)
            .bits("amount_sell", input::uint(&self.amount_sell, "amount_sell")?, amount_bits)
            .bits("amount_buy", input::uint(&self.amount_buy, "amount_buy")?, amount_bits)
            .bits("amount_fee", input::uint(&self.amount_fee, "amount_fee")?, amount_bits)
            .packed(
                "order",
                Packed::tagged(tag)
                    .slot("asset_sell", input::asset(&self.asset_sell, "asset_sell")?, ID32_BITS)
                    .slot("asset_buy", input::asset(&self.asset_buy, "asset_buy")?, ID32_BITS)
                    .slot("position_id", input::uint(&self.position_id, "position_id")?, ID32_BITS)
                    .slot("nonce", self.base.nonce()?, NONCE_BITS)
                    .slot("expiration_timestamp", self.base.expiration_timestamp()?, TIMESTAMP_BITS),
            ))
    }
}

impl Canonical for SpotLimitOrder {
    const KIND: &'static str = "spot_limit_order";

    fn type_tag(&self) -> Result<u32> {
        Ok(tags::SPOT_LIMIT_ORDER)
    }

    fn fields(&self, _: &CanonicalHasher) -> Result<FieldList> {
        self.field_list(tags::SPOT_LIMIT_ORDER, SPOT_AMOUNT_BITS)
    }
}
