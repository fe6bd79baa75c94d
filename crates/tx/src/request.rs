//! Unified requests dispatched on their `"type"`
//!
//! Trades are not requests here: each side needs its own key, so they go
//! through the trade entry points instead.

use serde::{Deserialize, Serialize};
use zkdex_algorithms::error::Result;
use zkdex_algorithms::{CanonicalHasher, FieldList};

use crate::canonical::Canonical;
use crate::unified::{
    MarginType, UnifiedLiquidate, UnifiedOraclePrice, UnifiedPerpLimitOrder, UnifiedSpotLimitOrder,
    UnifiedTransfer, UnifiedWithdrawal,
};

/// Any single-signer unified message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnifiedRequest {
    UnifiedWithdrawal(UnifiedWithdrawal),
    UnifiedTransfer(UnifiedTransfer),
    UnifiedSpotLimitOrder(UnifiedSpotLimitOrder),
    /// Perpetual order with cross margin
    PerpCross(UnifiedPerpLimitOrder),
    /// Perpetual order with isolated margin
    PerpIso(UnifiedPerpLimitOrder),
    UnifiedLiquidate(UnifiedLiquidate),
    UnifiedOraclePrice(UnifiedOraclePrice),
}

impl UnifiedRequest {
    /// Parse a request, restoring the margin mode its tag carried
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut request: Self = serde_json::from_str(json)?;
        match &mut request {
            UnifiedRequest::PerpCross(order) => order.margin_type = Some(MarginType::Cross),
            UnifiedRequest::PerpIso(order) => order.margin_type = Some(MarginType::Isolated),
            _ => {}
        }
        Ok(request)
    }

    /// Message kind, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            UnifiedRequest::UnifiedWithdrawal(_) => UnifiedWithdrawal::KIND,
            UnifiedRequest::UnifiedTransfer(_) => UnifiedTransfer::KIND,
            UnifiedRequest::UnifiedSpotLimitOrder(_) => UnifiedSpotLimitOrder::KIND,
            UnifiedRequest::PerpCross(_) | UnifiedRequest::PerpIso(_) => {
                UnifiedPerpLimitOrder::KIND
            }
            UnifiedRequest::UnifiedLiquidate(_) => UnifiedLiquidate::KIND,
            UnifiedRequest::UnifiedOraclePrice(_) => UnifiedOraclePrice::KIND,
        }
    }

    fn message(&self) -> &dyn Message {
        match self {
            UnifiedRequest::UnifiedWithdrawal(m) => m,
            UnifiedRequest::UnifiedTransfer(m) => m,
            UnifiedRequest::UnifiedSpotLimitOrder(m) => m,
            UnifiedRequest::PerpCross(m) | UnifiedRequest::PerpIso(m) => m,
            UnifiedRequest::UnifiedLiquidate(m) => m,
            UnifiedRequest::UnifiedOraclePrice(m) => m,
        }
    }

    /// Tag of the wrapped message
    pub fn type_tag(&self) -> Result<u32> {
        self.message().tag()
    }

    /// Field list of the wrapped message
    pub fn fields(&self, hasher: &CanonicalHasher) -> Result<FieldList> {
        self.message().field_list(hasher)
    }
}

// Object-safe view of `Canonical`
trait Message {
    fn tag(&self) -> Result<u32>;
    fn field_list(&self, hasher: &CanonicalHasher) -> Result<FieldList>;
}

impl<T: Canonical> Message for T {
    fn tag(&self) -> Result<u32> {
        self.type_tag()
    }

    fn field_list(&self, hasher: &CanonicalHasher) -> Result<FieldList> {
        self.fields(hasher)
    }
}
