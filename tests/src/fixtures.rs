//! Keys and messages shared by the integration tests and benchmarks

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use zkdex_tx::Engine;

/// A seed long enough for the default minimum
pub const SEED: &[u8] = b"hello world good life 996 very nice";
/// Private key derived from [`SEED`]
pub const SEED_KEY: &str = "0x02aca28609503a6474ec0a115b8662dbf760b6da6109e17c757dbbd3835c93f9";
/// Packed public key of [`SEED_KEY`] and its x-coordinate
pub const SEED_PK_X: &str = "0xb03ee7244d3dcaabbc9038c2b77e33a9116a530a61f7f9033138a06b80623403";
pub const SEED_PK_Y: &str = "0x13c48fdbccf625449ee4bb100ad2cd3583d2ba5f78385f100b26bd094b0a9d4f";

/// Compact public key used in the message vectors
pub const PK: &str = "0x8f792ad4f9b161ad77e37423d3709e0fc3d694259f4ec84c354f532e58643faa";
pub const ZERO_KEY: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Ethereum address of the secp256k1 private key `0x1`
pub const ETH_ADDRESS: &str = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf";

pub fn engine() -> Engine {
    Engine::new().expect("poseidon constants")
}

pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Perpetual transfer with the given amount and nonce
pub fn transfer(amount: u64, nonce: u32) -> String {
    format!(
        r#"{{"nonce":"{nonce}","public_key":"{PK}","expiration_timestamp":"0","sender_position_id":"0","receiver_public_key":"{ZERO_KEY}","receiver_position_id":"0","amount":"{amount}","asset_id":"0xa"}}"#
    )
}

/// Perpetual limit order
pub fn limit_order(nonce: u32, is_buying: bool) -> String {
    format!(
        r#"{{"nonce":"{nonce}","public_key":"{PK}","expiration_timestamp":"2","amount_synthetic":"3","amount_collateral":"4","amount_fee":"5","asset_id_synthetic":"6","asset_id_collateral":"0x7","position_id":"8","is_buying_synthetic":{is_buying}}}"#
    )
}

/// Unified spot order selling `asset_sell` for `asset_buy`
pub fn spot_order(asset_sell: &str, asset_buy: &str, position_id: u32) -> String {
    format!(
        r#"{{"amount_buy":"80","amount_sell":"70","amount_fee":"111","expiration_timestamp":"3396833","nonce":"1654615998","public_key":"{PK}","asset_buy":"{asset_buy}","asset_sell":"{asset_sell}","position_id":"{position_id}"}}"#
    )
}

/// Spot trade between two orders with the given fees
pub fn spot_trade(fee_a: i64, fee_b: i64) -> String {
    format!(
        r#"{{"party_a_order":{},"party_b_order":{},"actual_a_sold":"30","actual_b_sold":"40","actual_a_fee":"{fee_a}","actual_b_fee":"{fee_b}","type":"UNIFIED_SPOT_TRADE"}}"#,
        spot_order("0x1111", "0x22222", 922337),
        spot_order("0x22222", "0x1111", 9223),
    )
}
