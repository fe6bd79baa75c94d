//! Loads vector suites from JSON files.

use crate::vectors::model::TestSuite;
use std::fs;
use std::path::{Path, PathBuf};

/// Every suite shipped with the crate
pub const SUITES: &[&str] = &["perpetual", "spot", "unified", "trades", "keys", "bridge"];

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("json")
}

/// Parse a suite and push group defaults down into its cases
pub fn parse_suite(json: &str) -> Result<TestSuite, String> {
    let mut suite: TestSuite =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse JSON: {e}"))?;

    for group in &mut suite.groups {
        for case in &mut group.tests {
            for (k, v) in &group.defaults {
                case.fields.entry(k.clone()).or_insert_with(|| v.clone());
            }
        }
    }
    Ok(suite)
}

/// Load `json/<name>.json`
pub fn load_suite_by_name(name: &str) -> Result<TestSuite, String> {
    let file = vectors_dir().join(format!("{name}.json"));
    let json = fs::read_to_string(&file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    parse_suite(&json)
}

pub fn load_all_suites() -> Result<Vec<TestSuite>, String> {
    SUITES.iter().map(|name| load_suite_by_name(name)).collect()
}
