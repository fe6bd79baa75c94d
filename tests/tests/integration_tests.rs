//! End-to-end flows across the key, message and bridge layers

use std::thread;

use zkdex_api::{Error, HexStyle};
use zkdex_tests::fixtures::*;
use zkdex_tx::{Engine, EngineConfig};

#[test]
fn test_sign_transfer_and_verify() {
    let e = engine();
    let json = transfer(1000, 7);
    let digest = e.hash_transfer(&json).unwrap();
    let signature = e.sign_transfer(&json, SEED_KEY).unwrap();

    assert!(e
        .verify_signature(&signature.r, &signature.s, SEED_PK_X, SEED_PK_Y, &digest)
        .unwrap());

    // a different message does not verify under the same signature
    let other = e.hash_transfer(&transfer(1001, 7)).unwrap();
    assert!(!e
        .verify_signature(&signature.r, &signature.s, SEED_PK_X, SEED_PK_Y, &other)
        .unwrap());
}

#[test]
fn test_seed_to_signature() {
    let e = engine();
    let private_key = e.private_key_from_seed(SEED).unwrap();
    assert_eq!(private_key, SEED_KEY);

    let xy = e.private_key_to_public_key_xy(&private_key).unwrap();
    assert!(e.is_on_curve(&xy.x, &xy.y).unwrap());

    let compact = e.compress_public_key(&xy.x, &xy.y).unwrap();
    assert_eq!(e.public_key_to_xy(&compact).unwrap(), xy);

    let digest = e.hash_limit_order(&limit_order(1, true)).unwrap();
    let signature = e.sign_limit_order(&limit_order(1, true), &private_key).unwrap();
    assert!(e
        .verify_signature(&signature.r, &signature.s, &xy.x, &xy.y, &digest)
        .unwrap());
}

#[test]
fn test_sign_unified_and_verify() {
    let e = engine();
    let json = spot_order("0x1111", "0x22222", 922337)
        .replacen('{', r#"{"type":"UNIFIED_SPOT_LIMIT_ORDER","#, 1);
    let digest = e.hash_unified(&json).unwrap();
    let signature = e.sign_unified(&json, SEED_KEY).unwrap();
    assert!(e
        .verify_signature(&signature.r, &signature.s, SEED_PK_X, SEED_PK_Y, &digest)
        .unwrap());

    // the unified tag separates it from the plain spot order
    assert_ne!(
        digest,
        e.hash_spot_limit_order(&spot_order("0x1111", "0x22222", 922337))
            .unwrap()
    );
}

#[test]
fn test_trade_sides_verify_under_their_own_keys() {
    let e = engine();
    let key_b = "0x3";
    let xy_b = e.private_key_to_public_key_xy(key_b).unwrap();

    let json = spot_trade(1, -2);
    let hashes = e.hash_spot_trade(&json).unwrap();
    let signatures = e.sign_spot_trade(&json, SEED_KEY, key_b).unwrap();

    let a = &signatures.signature_a;
    let b = &signatures.signature_b;
    assert!(e.verify_signature(&a.r, &a.s, SEED_PK_X, SEED_PK_Y, &hashes.hash_a).unwrap());
    assert!(e.verify_signature(&b.r, &b.s, &xy_b.x, &xy_b.y, &hashes.hash_b).unwrap());

    assert!(!e.verify_signature(&a.r, &a.s, SEED_PK_X, SEED_PK_Y, &hashes.hash_b).unwrap());
    assert!(!e.verify_signature(&b.r, &b.s, &xy_b.x, &xy_b.y, &hashes.hash_a).unwrap());
}

#[test]
fn test_trade_fee_binds_both_sides() {
    let e = engine();
    let before = e.hash_spot_trade(&spot_trade(1, -2)).unwrap();
    let after = e.hash_spot_trade(&spot_trade(1, -3)).unwrap();
    assert_ne!(before.hash_a, after.hash_a);
    assert_ne!(before.hash_b, after.hash_b);
}

#[test]
fn test_ownership_proof() {
    let e = engine();
    let digest = e.hash_transfer(&transfer(5, 1)).unwrap();
    let proof = e.eth_sign_with_rng(SEED_KEY, &digest, &mut rng(3)).unwrap();
    assert_eq!(proof.pk_x, SEED_PK_X);
    assert_eq!(proof.pk_y, SEED_PK_Y);
    assert!(e
        .l2_verify(&proof.x, &proof.y, &proof.s, &proof.pk_x, &proof.pk_y, &digest)
        .unwrap());

    let other = e.hash_transfer(&transfer(6, 1)).unwrap();
    assert!(!e
        .l2_verify(&proof.x, &proof.y, &proof.s, &proof.pk_x, &proof.pk_y, &other)
        .unwrap());
}

#[test]
fn test_registration_flow() {
    let e = engine();
    let xy = e.private_key_to_public_key_xy(SEED_KEY).unwrap();
    let digest = e.registration_digest(ETH_ADDRESS, &xy.x, &xy.y).unwrap();
    assert_eq!(
        digest,
        "0x16bb920dbf88087517fbff42835e9940c3119abc8a96c2900b4cfa2452d02898"
    );
    let cosig = e.eth_co_sign("0x1", &digest).unwrap();
    assert!(cosig.v == 27 || cosig.v == 28);
    assert_eq!(e.eth_co_sign("0x1", &digest).unwrap(), cosig);
    assert!(e
        .eth_co_verify(ETH_ADDRESS, &digest, &cosig.r, &cosig.s, cosig.v)
        .unwrap());

    // registering another L2 key needs a fresh co-signature
    let other = e.private_key_to_public_key_xy("0x3").unwrap();
    let other_digest = e.registration_digest(ETH_ADDRESS, &other.x, &other.y).unwrap();
    assert!(!e
        .eth_co_verify(ETH_ADDRESS, &other_digest, &cosig.r, &cosig.s, cosig.v)
        .unwrap());
}

#[test]
fn test_configured_engine() {
    let config = EngineConfig::default()
        .with_digest_hex(HexStyle::Bare)
        .with_min_seed_length(40);
    let e = Engine::with_config(config).unwrap();

    let digest = e.hash_transfer(&transfer(0, 0)).unwrap();
    assert_eq!(
        digest,
        "023408af1feaf9432599c6562003b4f105a83aa7fa5bf9dbfb17e37d2f876601"
    );
    assert!(matches!(
        e.private_key_from_seed(SEED),
        Err(Error::Format { .. })
    ));

    // bare digests are accepted back as input
    let signature = e.sign(SEED_KEY, &digest).unwrap();
    assert!(e
        .verify_signature(&signature.r, &signature.s, SEED_PK_X, SEED_PK_Y, &digest)
        .unwrap());
}

#[test]
fn test_shared_engine_across_threads() {
    let e = engine();
    let expected = e.hash_transfer(&transfer(42, 9)).unwrap();
    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| e.hash_transfer(&transfer(42, 9)).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_error_kinds() {
    let e = engine();
    assert!(matches!(e.hash_transfer("{"), Err(Error::Parse { .. })));
    assert!(matches!(
        e.hash_transfer(r#"{"nonce":"0"}"#),
        Err(Error::MissingField { .. })
    ));
    assert!(matches!(
        e.hash_transfer(&transfer(0, 0).replace(r#""amount":"0""#, r#""amount":"-1""#)),
        Err(Error::Range { .. }) | Err(Error::Format { .. })
    ));
    assert!(matches!(e.sign("", "0x1"), Err(Error::NullInput { .. })));
}
