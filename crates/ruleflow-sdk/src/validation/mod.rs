//! Rule validation tooling
//!
//! A rule set `offers` may ship with an `offers-tests` rule set. Every feature
//! in it is a test: its `testData` is served as the data of every source while
//! `offers` runs, and its conditions assert on the outcome through the
//! `rules-validator` data source.

mod runner;
mod test_data;
mod validator;

pub use runner::{run_test, RulesValidationRunner, TESTS_SUFFIX};
pub use test_data::TestDataAdaptor;
pub use validator::{
    RulesValidatorAdaptor, FEATURE_NAME_ATTRIBUTE, RETURN_VALUE_ATTRIBUTE, VALIDATOR_SOURCE,
};
