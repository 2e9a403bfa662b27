//! Rule validation tests against fixture rule sets

mod common;

use common::{rules, write_fixture, OFFERS_JSON, OFFERS_TESTS_JSON};
use ruleflow_repository::RulesFileLoader;
use ruleflow_sdk::validation::run_test;
use ruleflow_sdk::{RulesValidationRunner, SdkError};
use std::sync::Arc;
use tempfile::TempDir;

fn runner(dir: &TempDir) -> RulesValidationRunner {
    RulesValidationRunner::new(Arc::new(RulesFileLoader::new(dir.path())))
}

#[tokio::test]
async fn test_passing_test_matches() {
    let tests = rules(OFFERS_TESTS_JSON);
    let passing = tests.feature("offer-when-both-match").unwrap();

    let result = run_test(passing, Arc::new(rules(OFFERS_JSON))).await;

    assert!(result.has_match());
    assert_eq!(result.feature, "offer-when-both-match");
}

#[tokio::test]
async fn test_failing_test_does_not_match() {
    let tests = rules(OFFERS_TESTS_JSON);
    let failing = tests.feature("offer-when-pre-condition-fails").unwrap();

    let result = run_test(failing, Arc::new(rules(OFFERS_JSON))).await;

    assert!(!result.has_match());
    assert_eq!(result.return_value, "false");
}

#[tokio::test]
async fn test_validate_rules_reports_failed_tests() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "offers.json", OFFERS_JSON);
    write_fixture(dir.path(), "offers-tests.json", OFFERS_TESTS_JSON);

    let result = runner(&dir).validate_rules("offers").await;

    match result {
        Err(SdkError::ValidationFailed(failed)) => {
            assert_eq!(failed, vec!["offer-when-pre-condition-fails".to_string()]);
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_validate_passes_when_all_tests_match() {
    let dir = TempDir::new().unwrap();
    let tests = rules(OFFERS_TESTS_JSON).filtered(|test| test.is_named("offer-when-both-match"));

    let results = runner(&dir)
        .validate(rules(OFFERS_JSON), &tests)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert!(results[0].has_match());
}

#[tokio::test]
async fn test_missing_tests_rule_set_is_repository_error() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "offers.json", OFFERS_JSON);

    let result = runner(&dir).validate_rules("offers").await;

    assert!(matches!(result, Err(SdkError::Repository(_))));
}
