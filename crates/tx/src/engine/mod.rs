//! The request engine
//!
//! An [`Engine`] is built once and shared by reference. It owns the
//! Poseidon constants and the configuration; every operation is a pure
//! function of its arguments and those constants, apart from the nonce drawn
//! from the caller's RNG (the OS RNG unless a `*_with_rng` variant is used).
//! Ethereum co-signatures take no RNG: their nonce is derived per RFC 6979.
//!
//! Public keys travel as `{x, y}` pairs where `x` is the packed key (y with
//! the parity of the x-coordinate in bit 255) and `y` the x-coordinate.
//!
//! Arguments arrive as JSON and hex strings. Malformed input (bad JSON,
//! non-hex digits, more than 64 digits, empty strings) is an error for every
//! operation, verification included. A well-formed signature that does not
//! match is `Ok(false)`.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::de::DeserializeOwned;
use zkdex_algorithms::ec::jubjub;
use zkdex_algorithms::{CanonicalHasher, FieldElement, FieldList, U256};
use zkdex_api::{
    ComposeHash, ComposeSig, EthAddressSignature, EthCoSignature, Error, HexStyle, PublicKeyXy,
    Result, ResultExt, SignatureOutput,
};
use zkdex_sign::bridge::{self, EthSecretKey};
use zkdex_sign::ecdsa::jubjub as ecdsa;
use zkdex_sign::keys::{self, PrivateKey, PublicKey};

use crate::canonical::Canonical;
use crate::config::EngineConfig;
use crate::input::Numeric;
use crate::perpetual::{
    ConditionalTransfer, LimitOrder, Liquidate, SignedOraclePrice, Transfer, WithdrawV1, WithdrawV2,
};
use crate::request::UnifiedRequest;
use crate::spot::{SpotLimitOrder, SpotTransfer, SpotWithdrawal};
use crate::trade::{PerpetualTrade, SpotTrade, Trade};

/// Hashing and signing context
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    hasher: CanonicalHasher,
}

fn parse_json<T: DeserializeOwned>(json: &str, context: &'static str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| Error::Parse {
        context,
        message: e.to_string(),
    })
}

fn parse_hex(value: &str, context: &'static str) -> Result<U256> {
    U256::parse_hex(value.trim()).with_context(context)
}

fn parse_digest(value: &str) -> Result<FieldElement> {
    FieldElement::from_uint(&parse_hex(value, "digest")?)
        .ok_or_else(|| Error::range("digest", "must be below the field modulus"))
}

fn parse_private_key(value: &str) -> Result<PrivateKey> {
    Ok(PrivateKey::from_uint(&parse_hex(value, "private key")?)?)
}

impl Engine {
    /// Engine with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Engine with `config`
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let hasher = CanonicalHasher::new()?;
        tracing::debug!(?config, "engine ready");
        Ok(Self { config, hasher })
    }

    /// The configuration the engine was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The canonical hasher
    pub fn hasher(&self) -> &CanonicalHasher {
        &self.hasher
    }

    fn render(&self, digest: &FieldElement) -> String {
        self.config.digest_hex.render(&digest.to_bytes())
    }

    fn finish(&self, kind: &'static str, fields: &FieldList) -> Result<FieldElement> {
        let digest = self.hasher.hash(fields)?;
        tracing::debug!(kind, tag = fields.tag(), fields = fields.len(), "message hashed");
        Ok(digest)
    }

    // Typed messages

    /// Digest of a typed message
    pub fn digest<T: Canonical>(&self, message: &T) -> Result<FieldElement> {
        let fields = message.fields(&self.hasher)?;
        self.finish(T::KIND, &fields)
    }

    /// Digest of a typed message, as hex
    pub fn hash_message<T: Canonical>(&self, message: &T) -> Result<String> {
        Ok(self.render(&self.digest(message)?))
    }

    /// Sign the digest of a typed message
    pub fn sign_message<T: Canonical>(
        &self,
        message: &T,
        private_key: &PrivateKey,
    ) -> Result<SignatureOutput> {
        self.sign_message_with_rng(message, private_key, &mut OsRng)
    }

    /// Sign the digest of a typed message, drawing the nonce from `rng`
    pub fn sign_message_with_rng<T: Canonical, R: CryptoRng + RngCore>(
        &self,
        message: &T,
        private_key: &PrivateKey,
        rng: &mut R,
    ) -> Result<SignatureOutput> {
        let digest = self.digest(message)?;
        let signature = ecdsa::sign(private_key, &digest, rng)?;
        tracing::debug!(kind = T::KIND, "message signed");
        Ok(signature.to_output())
    }

    fn hash_json<T: Canonical + DeserializeOwned>(&self, json: &str) -> Result<String> {
        self.hash_message(&parse_json::<T>(json, T::KIND)?)
    }

    fn sign_json<T: Canonical + DeserializeOwned>(
        &self,
        json: &str,
        private_key: &str,
    ) -> Result<SignatureOutput> {
        let message = parse_json::<T>(json, T::KIND)?;
        self.sign_message(&message, &parse_private_key(private_key)?)
    }

    // Perpetual messages

    /// Digest of a withdrawal whose asset id is given separately
    pub fn hash_withdraw(&self, json: &str, asset_id: &str) -> Result<String> {
        let withdraw = parse_json::<WithdrawV1>(json, WithdrawV2::KIND)?;
        self.hash_message(&withdraw.with_asset_id(Numeric::from(asset_id)))
    }

    /// Digest of a withdrawal embedding its asset id
    pub fn hash_withdraw_v2(&self, json: &str) -> Result<String> {
        self.hash_json::<WithdrawV2>(json)
    }

    /// Digest of a transfer
    pub fn hash_transfer(&self, json: &str) -> Result<String> {
        self.hash_json::<Transfer>(json)
    }

    /// Digest of a conditional transfer
    pub fn hash_conditional_transfer(&self, json: &str) -> Result<String> {
        self.hash_json::<ConditionalTransfer>(json)
    }

    /// Digest of a perpetual limit order
    pub fn hash_limit_order(&self, json: &str) -> Result<String> {
        self.hash_json::<LimitOrder>(json)
    }

    /// Digest of a liquidation, which is its liquidator order's digest
    pub fn hash_liquidate(&self, json: &str) -> Result<String> {
        self.hash_json::<Liquidate>(json)
    }

    /// Digest of an oracle price report
    pub fn hash_signed_oracle_price(&self, json: &str) -> Result<String> {
        self.hash_json::<SignedOraclePrice>(json)
    }

    /// Sign a withdrawal whose asset id is given separately
    pub fn sign_withdraw(
        &self,
        json: &str,
        asset_id: &str,
        private_key: &str,
    ) -> Result<SignatureOutput> {
        let withdraw = parse_json::<WithdrawV1>(json, WithdrawV2::KIND)?;
        self.sign_message(
            &withdraw.with_asset_id(Numeric::from(asset_id)),
            &parse_private_key(private_key)?,
        )
    }

    /// Sign a withdrawal embedding its asset id
    pub fn sign_withdraw_v2(&self, json: &str, private_key: &str) -> Result<SignatureOutput> {
        self.sign_json::<WithdrawV2>(json, private_key)
    }

    /// Sign a transfer
    pub fn sign_transfer(&self, json: &str, private_key: &str) -> Result<SignatureOutput> {
        self.sign_json::<Transfer>(json, private_key)
    }

    /// Sign a conditional transfer
    pub fn sign_conditional_transfer(
        &self,
        json: &str,
        private_key: &str,
    ) -> Result<SignatureOutput> {
        self.sign_json::<ConditionalTransfer>(json, private_key)
    }

    /// Sign a perpetual limit order
    pub fn sign_limit_order(&self, json: &str, private_key: &str) -> Result<SignatureOutput> {
        self.sign_json::<LimitOrder>(json, private_key)
    }

    /// Sign a liquidation
    pub fn sign_liquidate(&self, json: &str, private_key: &str) -> Result<SignatureOutput> {
        self.sign_json::<Liquidate>(json, private_key)
    }

    /// Sign an oracle price report
    pub fn sign_signed_oracle_price(
        &self,
        json: &str,
        private_key: &str,
    ) -> Result<SignatureOutput> {
        self.sign_json::<SignedOraclePrice>(json, private_key)
    }

    // Spot messages

    /// Digest of a spot withdrawal
    pub fn hash_spot_withdrawal(&self, json: &str) -> Result<String> {
        self.hash_json::<SpotWithdrawal>(json)
    }

    /// Digest of a spot transfer
    pub fn hash_spot_transfer(&self, json: &str) -> Result<String> {
        self.hash_json::<SpotTransfer>(json)
    }

    /// Digest of a spot limit order
    pub fn hash_spot_limit_order(&self, json: &str) -> Result<String> {
        self.hash_json::<SpotLimitOrder>(json)
    }

    /// Sign a spot withdrawal
    pub fn sign_spot_withdrawal(&self, json: &str, private_key: &str) -> Result<SignatureOutput> {
        self.sign_json::<SpotWithdrawal>(json, private_key)
    }

    /// Sign a spot transfer
    pub fn sign_spot_transfer(&self, json: &str, private_key: &str) -> Result<SignatureOutput> {
        self.sign_json::<SpotTransfer>(json, private_key)
    }

    /// Sign a spot limit order
    pub fn sign_spot_limit_order(&self, json: &str, private_key: &str) -> Result<SignatureOutput> {
        self.sign_json::<SpotLimitOrder>(json, private_key)
    }

    // Unified messages

    /// Digest of a unified request, dispatched on its `"type"`
    pub fn unified_digest(&self, request: &UnifiedRequest) -> Result<FieldElement> {
        let fields = request.fields(&self.hasher)?;
        self.finish(request.kind(), &fields)
    }

    /// Digest of a unified request, as hex
    pub fn hash_unified(&self, json: &str) -> Result<String> {
        let request = UnifiedRequest::from_json(json).map_err(|e| Error::Parse {
            context: "unified request",
            message: e.to_string(),
        })?;
        Ok(self.render(&self.unified_digest(&request)?))
    }

    /// Sign a unified request
    pub fn sign_unified(&self, json: &str, private_key: &str) -> Result<SignatureOutput> {
        self.sign_unified_with_rng(json, private_key, &mut OsRng)
    }

    /// Sign a unified request, drawing the nonce from `rng`
    pub fn sign_unified_with_rng<R: CryptoRng + RngCore>(
        &self,
        json: &str,
        private_key: &str,
        rng: &mut R,
    ) -> Result<SignatureOutput> {
        let request = UnifiedRequest::from_json(json).map_err(|e| Error::Parse {
            context: "unified request",
            message: e.to_string(),
        })?;
        let private_key = parse_private_key(private_key)?;
        let digest = self.unified_digest(&request)?;
        let signature = ecdsa::sign(&private_key, &digest, rng)?;
        tracing::debug!(kind = request.kind(), "message signed");
        Ok(signature.to_output())
    }

    // Trades

    /// Side hashes of a trade
    pub fn trade_hashes<T: Trade>(&self, trade: &T) -> Result<(FieldElement, FieldElement)> {
        let hashes = trade.hashes(&self.hasher)?;
        tracing::debug!(kind = T::KIND, "trade hashed");
        Ok(hashes)
    }

    /// Sign side A with `private_key_a` and side B with `private_key_b`
    pub fn sign_trade_with_rng<T: Trade, R: CryptoRng + RngCore>(
        &self,
        trade: &T,
        private_key_a: &PrivateKey,
        private_key_b: &PrivateKey,
        rng: &mut R,
    ) -> Result<ComposeSig> {
        let (hash_a, hash_b) = self.trade_hashes(trade)?;
        let signature_a = ecdsa::sign(private_key_a, &hash_a, rng)?;
        let signature_b = ecdsa::sign(private_key_b, &hash_b, rng)?;
        tracing::debug!(kind = T::KIND, "trade signed");
        Ok(ComposeSig {
            signature_a: signature_a.to_output(),
            signature_b: signature_b.to_output(),
        })
    }

    fn compose_hash<T: Trade>(&self, trade: &T) -> Result<ComposeHash> {
        let (hash_a, hash_b) = self.trade_hashes(trade)?;
        Ok(ComposeHash {
            hash_a: self.render(&hash_a),
            hash_b: self.render(&hash_b),
        })
    }

    fn sign_trade_json<T: Trade + DeserializeOwned>(
        &self,
        json: &str,
        private_key_a: &str,
        private_key_b: &str,
    ) -> Result<ComposeSig> {
        let trade = parse_json::<T>(json, T::KIND)?;
        let a = parse_private_key(private_key_a)?;
        let b = parse_private_key(private_key_b)?;
        self.sign_trade_with_rng(&trade, &a, &b, &mut OsRng)
    }

    /// Side hashes of a spot trade
    pub fn hash_spot_trade(&self, json: &str) -> Result<ComposeHash> {
        self.compose_hash(&parse_json::<SpotTrade>(json, SpotTrade::KIND)?)
    }

    /// Side hashes of a perpetual trade
    pub fn hash_perpetual_trade(&self, json: &str) -> Result<ComposeHash> {
        self.compose_hash(&parse_json::<PerpetualTrade>(json, PerpetualTrade::KIND)?)
    }

    /// Sign both sides of a spot trade
    pub fn sign_spot_trade(
        &self,
        json: &str,
        private_key_a: &str,
        private_key_b: &str,
    ) -> Result<ComposeSig> {
        self.sign_trade_json::<SpotTrade>(json, private_key_a, private_key_b)
    }

    /// Sign both sides of a perpetual trade
    pub fn sign_perpetual_trade(
        &self,
        json: &str,
        private_key_a: &str,
        private_key_b: &str,
    ) -> Result<ComposeSig> {
        self.sign_trade_json::<PerpetualTrade>(json, private_key_a, private_key_b)
    }

    // Signatures and keys

    /// Sign a raw digest
    pub fn sign(&self, private_key: &str, digest: &str) -> Result<SignatureOutput> {
        self.sign_with_rng(private_key, digest, &mut OsRng)
    }

    /// Sign a raw digest, drawing the nonce from `rng`
    pub fn sign_with_rng<R: CryptoRng + RngCore>(
        &self,
        private_key: &str,
        digest: &str,
        rng: &mut R,
    ) -> Result<SignatureOutput> {
        let private_key = parse_private_key(private_key)?;
        let digest = parse_digest(digest)?;
        Ok(ecdsa::sign(&private_key, &digest, rng)?.to_output())
    }

    /// Check `(r, s)` over `digest` against the key `{pk_x: packed, pk_y: x}`
    pub fn verify_signature(
        &self,
        r: &str,
        s: &str,
        pk_x: &str,
        pk_y: &str,
        digest: &str,
    ) -> Result<bool> {
        Ok(ecdsa::verify(
            &parse_hex(r, "signature r")?,
            &parse_hex(s, "signature s")?,
            &parse_hex(pk_x, "public key x")?,
            &parse_hex(pk_y, "public key y")?,
            &parse_hex(digest, "digest")?,
        ))
    }

    /// Derive a private key from a seed of at least the configured length
    pub fn private_key_from_seed(&self, seed: &[u8]) -> Result<String> {
        let private_key = keys::private_key_from_seed(seed, self.config.min_seed_length)?;
        Ok(private_key.to_hex(self.config.digest_hex))
    }

    /// Public key of a private key, as `{packed, x}`
    pub fn private_key_to_public_key_xy(&self, private_key: &str) -> Result<PublicKeyXy> {
        let public_key = parse_private_key(private_key)?.public_key()?;
        Ok(public_key.to_xy(HexStyle::Prefixed))
    }

    /// `{packed, x}` of a packed public key
    pub fn public_key_to_xy(&self, public_key: &str) -> Result<PublicKeyXy> {
        let packed = parse_hex(public_key, "public key")?.to_be_bytes();
        Ok(keys::public_key_to_xy(&packed)?.to_xy(HexStyle::Prefixed))
    }

    /// Packed key of the pair `{x: packed, y: x-coordinate}`, once both agree
    pub fn compress_public_key(&self, x: &str, y: &str) -> Result<String> {
        let packed =
            keys::compress_public_key(&parse_hex(x, "public key x")?, &parse_hex(y, "public key y")?)?;
        Ok(HexStyle::Prefixed.render(&packed))
    }

    /// Whether the packed key `x` and x-coordinate `y` name one curve point
    pub fn is_on_curve(&self, x: &str, y: &str) -> Result<bool> {
        Ok(jubjub::is_on_curve(&parse_hex(x, "x")?, &parse_hex(y, "y")?))
    }

    // Ethereum bridge

    /// Ownership proof of an L2 key over a 32-byte digest
    pub fn eth_sign(&self, private_key: &str, digest: &str) -> Result<EthAddressSignature> {
        self.eth_sign_with_rng(private_key, digest, &mut OsRng)
    }

    /// Ownership proof of an L2 key, drawing the nonce from `rng`
    pub fn eth_sign_with_rng<R: CryptoRng + RngCore>(
        &self,
        private_key: &str,
        digest: &str,
        rng: &mut R,
    ) -> Result<EthAddressSignature> {
        let private_key = parse_private_key(private_key)?;
        let digest = parse_hex(digest, "digest")?.to_be_bytes();
        Ok(bridge::eth_sign(&private_key, &digest, rng)?.to_output())
    }

    /// Check an ownership proof
    pub fn l2_verify(
        &self,
        x: &str,
        y: &str,
        s: &str,
        pk_x: &str,
        pk_y: &str,
        digest: &str,
    ) -> Result<bool> {
        let valid = bridge::l2_verify(
            &parse_hex(x, "proof x")?,
            &parse_hex(y, "proof y")?,
            &parse_hex(s, "proof s")?,
            &parse_hex(pk_x, "public key x")?,
            &parse_hex(pk_y, "public key y")?,
            &parse_hex(digest, "digest")?.to_be_bytes(),
        );
        tracing::debug!(valid, "ownership proof verified");
        Ok(valid)
    }

    /// Digest binding `eth_address` to the L2 key `{pk_x: packed, pk_y: x}`
    pub fn registration_digest(&self, eth_address: &str, pk_x: &str, pk_y: &str) -> Result<String> {
        let address = bridge::parse_eth_address(eth_address)?;
        let public_key =
            PublicKey::from_xy(&parse_hex(pk_x, "public key x")?, &parse_hex(pk_y, "public key y")?)?;
        let digest = bridge::registration_digest(&self.hasher, &address, &public_key)?;
        Ok(self.render(&digest))
    }

    /// Co-sign a registration digest with an Ethereum private key
    ///
    /// Deterministic: the same key and digest give the same signature.
    pub fn eth_co_sign(&self, eth_private_key: &str, digest: &str) -> Result<EthCoSignature> {
        let secret_key =
            EthSecretKey::from_uint(&parse_hex(eth_private_key, "ethereum private key")?)?;
        let digest = parse_digest(digest)?;
        Ok(bridge::eth_co_sign(&secret_key, &digest)?)
    }

    /// Check that `eth_address` co-signed `digest`
    pub fn eth_co_verify(
        &self,
        eth_address: &str,
        digest: &str,
        r: &str,
        s: &str,
        v: u8,
    ) -> Result<bool> {
        let address = bridge::parse_eth_address(eth_address)?;
        let r = parse_hex(r, "signature r")?;
        let s = parse_hex(s, "signature s")?;
        let Some(digest) = FieldElement::from_uint(&parse_hex(digest, "digest")?) else {
            return Ok(false);
        };
        Ok(bridge::eth_co_verify(&address, &digest, &r, &s, v)?)
    }
}
