use zkdex_tests::fixtures::engine;
use zkdex_tests::vectors::{loader, runner::Runner};

fn run(name: &str) {
    let engine = engine();
    let suite = loader::load_suite_by_name(name)
        .unwrap_or_else(|e| panic!("Failed to load {name} suite: {e}"));

    println!("Running vector suite: {}", suite.suite);
    Runner::new(&engine)
        .run_suite(&suite)
        .expect("vector tests failed");
}

#[test]
fn test_perpetual_vectors() {
    run("perpetual");
}

#[test]
fn test_spot_vectors() {
    run("spot");
}

#[test]
fn test_unified_vectors() {
    run("unified");
}

#[test]
fn test_trade_vectors() {
    run("trades");
}

#[test]
fn test_key_vectors() {
    run("keys");
}

#[test]
fn test_bridge_vectors() {
    run("bridge");
}

#[test]
fn test_every_group_has_a_handler() {
    let suites = loader::load_all_suites().expect("vector suites");
    for suite in &suites {
        for group in &suite.groups {
            assert!(
                zkdex_tests::vectors::dispatcher::REGISTRY.contains_key(group.operation.as_str()),
                "no handler for {}",
                group.operation
            );
        }
    }
}

#[test]
fn test_group_defaults_fill_cases() {
    let suite = loader::parse_suite(
        r#"{
            "suite": "inline",
            "testGroups": [{
                "tgId": 1,
                "operation": "is_on_curve",
                "defaults": {"x": "0x1", "on_curve": false},
                "tests": [{"tcId": 1, "y": "0x2"}, {"tcId": 2, "x": "0x3", "y": "0x4"}]
            }]
        }"#,
    )
    .unwrap();
    let cases = &suite.groups[0].tests;
    assert_eq!(cases[0].get("x").unwrap().as_string(), "0x1");
    assert_eq!(cases[1].get("x").unwrap().as_string(), "0x3");
    assert_eq!(cases[1].get("on_curve").unwrap().as_bool(), Some(false));
    Runner::new(&engine()).run_suite(&suite).unwrap();
}
