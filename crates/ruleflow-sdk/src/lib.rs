//! ruleflow SDK
//!
//! High-level API for building a rules engine, executing rule sets and
//! validating them against their companion test rule sets.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod validation;

// Re-export main types
pub use builder::RulesEngineBuilder;
pub use config::EngineConfig;
pub use engine::{RuleSet, RulesEngine};
pub use error::{Result, SdkError};
pub use validation::{RulesValidationRunner, RulesValidatorAdaptor, TestDataAdaptor};

// Re-export commonly used types from dependencies
pub use ruleflow_core::{
    DataSet, Feature, Parameter, ParameterKey, RuleEvaluationResult, Rules, UserContext,
};
pub use ruleflow_repository::{RemoteConfigProperties, RulesFileLoader, RulesLoader};
pub use ruleflow_runtime::{DataFetchingContext, DataSourceAdaptor, DataSourceError};
