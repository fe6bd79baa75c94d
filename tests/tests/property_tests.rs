//! Property-based tests over the request engine

use once_cell::sync::Lazy;
use proptest::prelude::*;
use zkdex_tests::fixtures::*;
use zkdex_tx::Engine;

static ENGINE: Lazy<Engine> = Lazy::new(engine);

/// 31 random bytes: always below the field modulus and the curve order
fn small_hex() -> impl Strategy<Value = String> {
    any::<[u8; 31]>()
        .prop_filter("nonzero", |b| b.iter().any(|&x| x != 0))
        .prop_map(|b| format!("0x{}", hex::encode(b)))
}

/// Flip bit `bit` (0..4) of the last hex digit
fn flip_last_digit(value: &str, bit: u32) -> String {
    let (head, last) = value.split_at(value.len() - 1);
    let digit = u32::from_str_radix(last, 16).unwrap() ^ (1 << bit);
    format!("{head}{digit:x}")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn transfer_digest_is_deterministic(amount in any::<u64>(), nonce in any::<u32>()) {
        let json = transfer(amount, nonce);
        prop_assert_eq!(ENGINE.hash_transfer(&json).unwrap(), ENGINE.hash_transfer(&json).unwrap());
    }

    #[test]
    fn transfer_digest_binds_the_amount(a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a != b);
        prop_assert_ne!(
            ENGINE.hash_transfer(&transfer(a, 1)).unwrap(),
            ENGINE.hash_transfer(&transfer(b, 1)).unwrap()
        );
    }

    #[test]
    fn tags_separate_message_kinds(amount in any::<u64>(), nonce in any::<u32>()) {
        let json = transfer(amount, nonce);
        let conditional = json.replacen('{', r#"{"condition":"0x0","#, 1);
        prop_assert_ne!(
            ENGINE.hash_transfer(&json).unwrap(),
            ENGINE.hash_conditional_transfer(&conditional).unwrap()
        );
    }

    #[test]
    fn limit_order_direction_matters(nonce in any::<u32>()) {
        prop_assert_ne!(
            ENGINE.hash_limit_order(&limit_order(nonce, true)).unwrap(),
            ENGINE.hash_limit_order(&limit_order(nonce, false)).unwrap()
        );
    }

    #[test]
    fn sign_verify_roundtrip(private_key in small_hex(), digest in small_hex(), seed in any::<u64>()) {
        let signature = ENGINE.sign_with_rng(&private_key, &digest, &mut rng(seed)).unwrap();
        let xy = ENGINE.private_key_to_public_key_xy(&private_key).unwrap();
        prop_assert!(ENGINE
            .verify_signature(&signature.r, &signature.s, &xy.x, &xy.y, &digest)
            .unwrap());
    }

    #[test]
    fn flipped_digest_fails_verification(digest in small_hex(), bit in 0u32..4) {
        let signature = ENGINE.sign_with_rng(SEED_KEY, &digest, &mut rng(1)).unwrap();
        let flipped = flip_last_digit(&digest, bit);
        prop_assert!(!ENGINE
            .verify_signature(&signature.r, &signature.s, SEED_PK_X, SEED_PK_Y, &flipped)
            .unwrap());
    }

    #[test]
    fn flipped_signature_fails_verification(digest in small_hex(), bit in 0u32..4) {
        let signature = ENGINE.sign_with_rng(SEED_KEY, &digest, &mut rng(2)).unwrap();
        let s = flip_last_digit(&signature.s, bit);
        prop_assert!(!ENGINE
            .verify_signature(&signature.r, &s, SEED_PK_X, SEED_PK_Y, &digest)
            .unwrap());
    }

    #[test]
    fn trade_fee_changes_both_hashes(fee in -1_000_000i64..1_000_000, delta in 1i64..1000) {
        let before = ENGINE.hash_spot_trade(&spot_trade(fee, -2)).unwrap();
        let after = ENGINE.hash_spot_trade(&spot_trade(fee + delta, -2)).unwrap();
        prop_assert_ne!(&before.hash_a, &after.hash_a);
        prop_assert_ne!(&before.hash_b, &after.hash_b);
        prop_assert_ne!(&before.hash_a, &before.hash_b);
    }

    #[test]
    fn derived_keys_are_on_curve(private_key in small_hex(), bit in 0u32..4) {
        let xy = ENGINE.private_key_to_public_key_xy(&private_key).unwrap();
        prop_assert!(ENGINE.is_on_curve(&xy.x, &xy.y).unwrap());
        prop_assert!(!ENGINE.is_on_curve(&xy.x, &flip_last_digit(&xy.y, bit)).unwrap());
    }

    #[test]
    fn compact_keys_roundtrip(private_key in small_hex()) {
        let xy = ENGINE.private_key_to_public_key_xy(&private_key).unwrap();
        let compact = ENGINE.compress_public_key(&xy.x, &xy.y).unwrap();
        prop_assert_eq!(ENGINE.public_key_to_xy(&compact).unwrap(), xy);
    }
}
