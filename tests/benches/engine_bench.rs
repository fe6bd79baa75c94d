//! End-to-end benchmarks: trades, key derivation, verification and the bridge

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zkdex_tests::fixtures::*;

fn bench_trades(c: &mut Criterion) {
    let mut group = c.benchmark_group("trades");
    let engine = engine();
    let trade = spot_trade(1, -2);

    group.bench_function("hash_spot_trade", |b| {
        b.iter(|| engine.hash_spot_trade(black_box(&trade)).unwrap())
    });
    group.bench_function("sign_spot_trade", |b| {
        b.iter(|| engine.sign_spot_trade(black_box(&trade), SEED_KEY, "0x3").unwrap())
    });
    group.finish();
}

fn bench_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("keys");
    let engine = engine();
    let digest = engine.hash_transfer(&transfer(1, 1)).unwrap();
    let signature = engine.sign(SEED_KEY, &digest).unwrap();

    group.bench_function("private_key_from_seed", |b| {
        b.iter(|| engine.private_key_from_seed(black_box(SEED)).unwrap())
    });
    group.bench_function("verify_signature", |b| {
        b.iter(|| {
            engine
                .verify_signature(&signature.r, &signature.s, SEED_PK_X, SEED_PK_Y, black_box(&digest))
                .unwrap()
        })
    });
    group.finish();
}

fn bench_bridge(c: &mut Criterion) {
    let mut group = c.benchmark_group("bridge");
    let engine = engine();
    let digest = engine
        .registration_digest(ETH_ADDRESS, SEED_PK_X, SEED_PK_Y)
        .unwrap();
    let cosig = engine.eth_co_sign("0x1", &digest).unwrap();

    group.bench_function("registration_digest", |b| {
        b.iter(|| {
            engine
                .registration_digest(black_box(ETH_ADDRESS), SEED_PK_X, SEED_PK_Y)
                .unwrap()
        })
    });
    group.bench_function("eth_co_verify", |b| {
        b.iter(|| {
            engine
                .eth_co_verify(ETH_ADDRESS, black_box(&digest), &cosig.r, &cosig.s, cosig.v)
                .unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_trades, bench_keys, bench_bridge);
criterion_main!(benches);
