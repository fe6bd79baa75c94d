//! Walks suites and tallies results.

use zkdex_tx::Engine;

use super::dispatcher::REGISTRY;
use super::error::{Result, VectorError};
use super::model::{Expectation, TestCase, TestGroup, TestSuite};

pub struct Runner<'e> {
    engine: &'e Engine,
}

impl<'e> Runner<'e> {
    pub fn new(engine: &'e Engine) -> Self {
        Self { engine }
    }

    /// Run one case through the handler its group names
    pub fn run_case(&self, group: &TestGroup, case: &TestCase) -> Result<()> {
        let handler = REGISTRY
            .get(group.operation.as_str())
            .ok_or_else(|| VectorError::UnknownOperation(group.operation.clone()))?;
        handler(self.engine, group, case)
    }

    pub fn run_suite(&self, suite: &TestSuite) -> std::result::Result<(), String> {
        let mut passed = 0;
        let mut failed = 0;

        for group in &suite.groups {
            println!(
                "Running {} group {}: {} ({} cases)",
                suite.suite,
                group.group_id,
                group.operation,
                group.tests.len()
            );

            for case in &group.tests {
                match (self.run_case(group, case), case.result) {
                    (Ok(()), Expectation::Valid) => passed += 1,
                    (Err(e), Expectation::Invalid) => {
                        let message = e.to_string();
                        match &case.error_contains {
                            Some(needle) if !message.contains(needle.as_str()) => {
                                failed += 1;
                                eprintln!(
                                    "Case {} failed with '{}', expected it to mention '{}'",
                                    case.test_id, message, needle
                                );
                            }
                            _ => passed += 1,
                        }
                    }
                    (Ok(()), Expectation::Invalid) => {
                        failed += 1;
                        eprintln!("Case {} succeeded but expected an error", case.test_id);
                    }
                    (Err(e), Expectation::Valid) => {
                        failed += 1;
                        eprintln!("Case {} failed: {}", case.test_id, e);
                    }
                }
            }
        }

        println!("Test results: {} passed, {} failed", passed, failed);

        if failed > 0 {
            Err(format!("{failed} tests failed"))
        } else {
            Ok(())
        }
    }
}
