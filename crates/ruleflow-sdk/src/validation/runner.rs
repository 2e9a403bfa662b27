//! Runs a rule set's companion tests

use super::validator::{RulesValidatorAdaptor, VALIDATOR_SOURCE};
use crate::engine::RulesEngine;
use crate::error::{Result, SdkError};
use futures::future::join_all;
use ruleflow_core::{DataSet, Feature, RuleEvaluationResult, Rules};
use ruleflow_repository::RulesLoader;
use ruleflow_runtime::{AdaptorRegistry, DataFetchService};
use std::sync::Arc;
use tracing::{error, info};

/// Suffix of the rule set holding the tests for `<name>`
pub const TESTS_SUFFIX: &str = "-tests";

/// Validates rule sets against their `<name>-tests` companions.
///
/// Each test is a feature whose `testData` feeds the rules under test and
/// whose conditions assert on the `rules-validator` parameters.
pub struct RulesValidationRunner {
    loader: Arc<dyn RulesLoader>,
}

impl RulesValidationRunner {
    pub fn new(loader: Arc<dyn RulesLoader>) -> Self {
        Self { loader }
    }

    /// Load `name` and `<name>-tests`, then run every test.
    ///
    /// # Errors
    ///
    /// Loading errors, or [`SdkError::ValidationFailed`] naming each test
    /// that did not match.
    pub async fn validate_rules(&self, name: &str) -> Result<Vec<RuleEvaluationResult>> {
        let rules = self.loader.load(name).await?;
        let tests = self
            .loader
            .load(&format!("{}{}", name, TESTS_SUFFIX))
            .await?;

        info!("Validating rule set {} with {} test(s)", name, tests.len());
        self.validate(rules, &tests).await
    }

    /// Run every test feature in `tests` against `rules` concurrently
    pub async fn validate(&self, rules: Rules, tests: &Rules) -> Result<Vec<RuleEvaluationResult>> {
        let rules = Arc::new(rules);
        let results = join_all(
            tests
                .features
                .iter()
                .map(|test| run_test(test, Arc::clone(&rules))),
        )
        .await;

        let failed: Vec<String> = results
            .iter()
            .filter(|result| !result.has_match())
            .map(|result| result.feature.clone())
            .collect();

        if failed.is_empty() {
            info!("All {} business rule test(s) passed", results.len());
            Ok(results)
        } else {
            error!(
                "{} of {} business rule test(s) failed: {}",
                failed.len(),
                results.len(),
                failed.join(", ")
            );
            Err(SdkError::ValidationFailed(failed))
        }
    }

    /// Clear anything the loader cached while loading rule sets
    pub fn clean_up(&self) {
        self.loader.clean_up();
    }
}

/// Run a single test feature against `rules`
pub async fn run_test(test: &Feature, rules: Arc<Rules>) -> RuleEvaluationResult {
    let test_data: DataSet = test.test_data.iter().cloned().collect();
    let validator = RulesValidatorAdaptor::for_test_data(rules, test_data);
    let registry = AdaptorRegistry::new().with_adaptor(VALIDATOR_SOURCE, Arc::new(validator));
    let engine = RulesEngine::new(DataFetchService::new(registry), None);

    let test_rules = Rules::new(vec![test.clone()]);
    let result = engine
        .evaluate(&test_rules, Arc::default())
        .await
        .into_iter()
        .next()
        .unwrap_or_else(|| {
            RuleEvaluationResult::new(&test.name, Vec::new(), test.return_value(false))
        });

    if result.has_match() {
        info!("Business rule test {} passed", test.name);
    } else {
        error!("Business rule test {} failed", test.name);
    }
    result
}
