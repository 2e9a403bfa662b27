//! Evaluation results

use crate::rules::EvaluationCondition;
use crate::types::Parameter;
use serde::{Deserialize, Serialize};

/// A satisfied condition with the parameters that satisfied it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatedParameter {
    pub condition: EvaluationCondition,
    pub parameters: Vec<Parameter>,
}

impl EvaluatedParameter {
    pub fn new(condition: EvaluationCondition, parameters: Vec<Parameter>) -> Self {
        Self {
            condition,
            parameters,
        }
    }
}

/// Outcome of evaluating one feature
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleEvaluationResult {
    /// Feature name
    pub feature: String,

    /// Empty on a negative outcome
    pub matched: Vec<EvaluatedParameter>,

    pub return_value: String,
}

impl RuleEvaluationResult {
    pub fn new(
        feature: impl Into<String>,
        matched: Vec<EvaluatedParameter>,
        return_value: impl Into<String>,
    ) -> Self {
        Self {
            feature: feature.into(),
            matched,
            return_value: return_value.into(),
        }
    }

    pub fn has_match(&self) -> bool {
        !self.matched.is_empty()
    }
}
