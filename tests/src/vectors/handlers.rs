//! Handlers running one case against the engine

use std::collections::HashMap;

use zkdex_tx::Engine;

use super::dispatcher::{insert, HandlerFn};
use super::error::{Result, VectorError};
use super::model::{TestCase, TestGroup};

fn input(case: &TestCase, name: &'static str) -> Result<String> {
    case.get(name)
        .map(|v| v.as_string())
        .ok_or(VectorError::MissingField(name))
}

/// Compare against the expected output `field`, if the case names one
fn check(case: &TestCase, field: &'static str, actual: &str) -> Result<()> {
    let Some(expected) = case.get(field).map(|v| v.as_string()) else {
        return Ok(());
    };
    if expected.eq_ignore_ascii_case(actual) {
        Ok(())
    } else {
        Err(VectorError::Mismatch {
            field,
            expected,
            actual: actual.to_string(),
        })
    }
}

fn check_bool(case: &TestCase, field: &'static str, actual: bool) -> Result<()> {
    let expected = case
        .get(field)
        .and_then(|v| v.as_bool())
        .ok_or(VectorError::MissingField(field))?;
    if expected == actual {
        Ok(())
    } else {
        Err(VectorError::Mismatch {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// Single-signer message digests
fn hash_message(engine: &Engine, group: &TestGroup, case: &TestCase) -> Result<()> {
    let message = input(case, "message")?;
    let digest = match group.operation.as_str() {
        "hash_withdraw" => engine.hash_withdraw(&message, &input(case, "asset_id")?)?,
        "hash_withdraw_v2" => engine.hash_withdraw_v2(&message)?,
        "hash_transfer" => engine.hash_transfer(&message)?,
        "hash_conditional_transfer" => engine.hash_conditional_transfer(&message)?,
        "hash_limit_order" => engine.hash_limit_order(&message)?,
        "hash_liquidate" => engine.hash_liquidate(&message)?,
        "hash_signed_oracle_price" => engine.hash_signed_oracle_price(&message)?,
        "hash_spot_withdrawal" => engine.hash_spot_withdrawal(&message)?,
        "hash_spot_transfer" => engine.hash_spot_transfer(&message)?,
        "hash_spot_limit_order" => engine.hash_spot_limit_order(&message)?,
        "hash_unified" => engine.hash_unified(&message)?,
        other => return Err(VectorError::UnknownOperation(other.to_string())),
    };
    check(case, "digest", &digest)
}

fn hash_trade(engine: &Engine, group: &TestGroup, case: &TestCase) -> Result<()> {
    let message = input(case, "message")?;
    let hashes = match group.operation.as_str() {
        "hash_spot_trade" => engine.hash_spot_trade(&message)?,
        "hash_perpetual_trade" => engine.hash_perpetual_trade(&message)?,
        other => return Err(VectorError::UnknownOperation(other.to_string())),
    };
    if hashes.hash_a == hashes.hash_b {
        return Err(VectorError::InvalidData("both sides hash alike".into()));
    }
    check(case, "hash_a", &hashes.hash_a)?;
    check(case, "hash_b", &hashes.hash_b)
}

fn private_key_from_seed(engine: &Engine, _group: &TestGroup, case: &TestCase) -> Result<()> {
    let seed = match case.get("seed_hex") {
        Some(v) => hex::decode(v.as_string())?,
        None => input(case, "seed")?.into_bytes(),
    };
    let private_key = engine.private_key_from_seed(&seed)?;
    check(case, "private_key", &private_key)
}

fn private_key_to_public_key_xy(
    engine: &Engine,
    _group: &TestGroup,
    case: &TestCase,
) -> Result<()> {
    let xy = engine.private_key_to_public_key_xy(&input(case, "private_key")?)?;
    check(case, "x", &xy.x)?;
    check(case, "y", &xy.y)
}

fn public_key_to_xy(engine: &Engine, _group: &TestGroup, case: &TestCase) -> Result<()> {
    let xy = engine.public_key_to_xy(&input(case, "public_key")?)?;
    check(case, "x", &xy.x)?;
    check(case, "y", &xy.y)
}

fn compress_public_key(engine: &Engine, _group: &TestGroup, case: &TestCase) -> Result<()> {
    let compact = engine.compress_public_key(&input(case, "x")?, &input(case, "y")?)?;
    check(case, "public_key", &compact)
}

fn is_on_curve(engine: &Engine, _group: &TestGroup, case: &TestCase) -> Result<()> {
    let on_curve = engine.is_on_curve(&input(case, "x")?, &input(case, "y")?)?;
    check_bool(case, "on_curve", on_curve)
}

/// Sign with a seeded nonce, then verify against the derived key
fn sign_verify(engine: &Engine, _group: &TestGroup, case: &TestCase) -> Result<()> {
    let private_key = input(case, "private_key")?;
    let digest = input(case, "digest")?;
    let mut rng = crate::fixtures::rng(case.test_id);
    let signature = engine.sign_with_rng(&private_key, &digest, &mut rng)?;
    let xy = engine.private_key_to_public_key_xy(&private_key)?;
    let valid = engine.verify_signature(&signature.r, &signature.s, &xy.x, &xy.y, &digest)?;
    if valid {
        Ok(())
    } else {
        Err(VectorError::InvalidData("signature did not verify".into()))
    }
}

fn verify_signature(engine: &Engine, _group: &TestGroup, case: &TestCase) -> Result<()> {
    let valid = engine.verify_signature(
        &input(case, "r")?,
        &input(case, "s")?,
        &input(case, "pk_x")?,
        &input(case, "pk_y")?,
        &input(case, "digest")?,
    )?;
    check_bool(case, "valid", valid)
}

fn registration_digest(engine: &Engine, _group: &TestGroup, case: &TestCase) -> Result<()> {
    let digest = engine.registration_digest(
        &input(case, "eth_address")?,
        &input(case, "pk_x")?,
        &input(case, "pk_y")?,
    )?;
    check(case, "digest", &digest)
}

/// Co-sign a digest with an Ethereum key, then verify against its address
fn eth_co_sign_verify(engine: &Engine, _group: &TestGroup, case: &TestCase) -> Result<()> {
    let digest = input(case, "digest")?;
    let signature = engine.eth_co_sign(&input(case, "eth_private_key")?, &digest)?;
    let valid = engine.eth_co_verify(
        &input(case, "eth_address")?,
        &digest,
        &signature.r,
        &signature.s,
        signature.v,
    )?;
    check_bool(case, "valid", valid)
}

/// Register every handler
pub fn register(map: &mut HashMap<&'static str, HandlerFn>) {
    for operation in [
        "hash_withdraw",
        "hash_withdraw_v2",
        "hash_transfer",
        "hash_conditional_transfer",
        "hash_limit_order",
        "hash_liquidate",
        "hash_signed_oracle_price",
        "hash_spot_withdrawal",
        "hash_spot_transfer",
        "hash_spot_limit_order",
        "hash_unified",
    ] {
        insert(map, operation, hash_message);
    }
    insert(map, "hash_spot_trade", hash_trade);
    insert(map, "hash_perpetual_trade", hash_trade);
    insert(map, "private_key_from_seed", private_key_from_seed);
    insert(map, "private_key_to_public_key_xy", private_key_to_public_key_xy);
    insert(map, "public_key_to_xy", public_key_to_xy);
    insert(map, "compress_public_key", compress_public_key);
    insert(map, "is_on_curve", is_on_curve);
    insert(map, "sign_verify", sign_verify);
    insert(map, "verify_signature", verify_signature);
    insert(map, "registration_digest", registration_digest);
    insert(map, "eth_co_sign_verify", eth_co_sign_verify);
}
