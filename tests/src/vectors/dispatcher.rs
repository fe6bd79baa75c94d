//! Registry mapping operation names to handlers

use std::collections::HashMap;

use once_cell::sync::Lazy;
use zkdex_tx::Engine;

use super::error::Result;
use super::model::{TestCase, TestGroup};

/// Handler function type
pub type HandlerFn = fn(&Engine, &TestGroup, &TestCase) -> Result<()>;

/// Global registry of operation handlers
pub static REGISTRY: Lazy<HashMap<&'static str, HandlerFn>> = Lazy::new(|| {
    let mut m = HashMap::<&'static str, HandlerFn>::new();
    super::handlers::register(&mut m);
    m
});

pub fn insert(map: &mut HashMap<&'static str, HandlerFn>, operation: &'static str, handler: HandlerFn) {
    map.insert(operation, handler);
}
