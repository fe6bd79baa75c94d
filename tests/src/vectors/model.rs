//! Data model of a vector suite. No dependency on the engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Any JSON value a case may carry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FlexValue {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
    Array(Vec<FlexValue>),
    Object(HashMap<String, FlexValue>),
    Null,
}

impl FlexValue {
    /// Strings as-is, objects and arrays re-encoded as JSON
    pub fn as_string(&self) -> String {
        match self {
            FlexValue::String(s) => s.clone(),
            FlexValue::Number(n) => n.to_string(),
            FlexValue::Bool(b) => b.to_string(),
            FlexValue::Array(arr) => {
                serde_json::to_string(arr).unwrap_or_else(|_| format!("{arr:?}"))
            }
            FlexValue::Object(obj) => {
                serde_json::to_string(obj).unwrap_or_else(|_| format!("{obj:?}"))
            }
            FlexValue::Null => String::new(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlexValue::Bool(b) => Some(*b),
            FlexValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Whether a case must succeed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    #[default]
    Valid,
    Invalid,
}

/// One case
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub result: Expectation,
    /// Substring the error message of an invalid case must contain
    #[serde(default)]
    pub error_contains: Option<String>,
    /// Operation inputs and expected outputs
    #[serde(flatten)]
    pub fields: HashMap<String, FlexValue>,
}

impl TestCase {
    pub fn get(&self, name: &str) -> Option<&FlexValue> {
        self.fields.get(name)
    }
}

/// Cases sharing one operation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub group_id: u64,
    pub operation: String,
    /// Fields copied into every case that lacks them
    #[serde(default)]
    pub defaults: HashMap<String, FlexValue>,
    pub tests: Vec<TestCase>,
}

/// A whole vector file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub suite: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "testGroups")]
    pub groups: Vec<TestGroup>,
}
