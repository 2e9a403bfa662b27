//! ruleflow Core - Rule model and data types for the ruleflow rules engine
//!
//! This crate provides the fundamental types shared by the runtime and SDK:
//! - Parameter keys, parameters and data sets fetched from data sources
//! - Rules, features, requirements and evaluation conditions
//! - Evaluation results
//! - ISO date/time parsing used by date predicates
//! - Error types

pub mod datetime;
pub mod error;
pub mod result;
pub mod rules;
pub mod text;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use result::{EvaluatedParameter, RuleEvaluationResult};
pub use rules::{
    Action, Combination, EvaluationCondition, EvaluationPhase, Feature, MatchingOptions, Predicate,
    Requirements, Rules,
};
pub use types::{DataSet, Parameter, ParameterKey, UserContext};
