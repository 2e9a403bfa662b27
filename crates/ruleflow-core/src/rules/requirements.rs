//! Feature requirements

use super::condition::EvaluationCondition;
use serde::{Deserialize, Serialize};

/// Which condition list of a feature is being evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationPhase {
    PreConditions,
    Conditions,
    PostConditions,
}

/// How the conditions of one list are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combination {
    #[default]
    And,
    Or,
}

/// Matching options attached to a requirements block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingOptions {
    /// `AND` or `OR`, case-insensitive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combination: Option<String>,
}

/// Condition lists of a feature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<MatchingOptions>,

    #[serde(default)]
    pub pre_conditions: Vec<EvaluationCondition>,

    #[serde(default)]
    pub conditions: Vec<EvaluationCondition>,

    #[serde(default)]
    pub post_conditions: Vec<EvaluationCondition>,
}

impl Requirements {
    /// Create empty requirements
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pre_condition(mut self, condition: EvaluationCondition) -> Self {
        self.pre_conditions.push(condition);
        self
    }

    pub fn with_condition(mut self, condition: EvaluationCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_post_condition(mut self, condition: EvaluationCondition) -> Self {
        self.post_conditions.push(condition);
        self
    }

    pub fn with_combination(mut self, combination: impl Into<String>) -> Self {
        self.options = Some(MatchingOptions {
            combination: Some(combination.into()),
        });
        self
    }

    /// Conditions evaluated in `phase`
    pub fn conditions_for(&self, phase: EvaluationPhase) -> &[EvaluationCondition] {
        match phase {
            EvaluationPhase::PreConditions => &self.pre_conditions,
            EvaluationPhase::Conditions => &self.conditions,
            EvaluationPhase::PostConditions => &self.post_conditions,
        }
    }

    /// Configured combination mode, `AND` when absent or unrecognised
    pub fn combination(&self) -> Combination {
        match self
            .options
            .as_ref()
            .and_then(|options| options.combination.as_deref())
        {
            Some(mode) if mode.trim().eq_ignore_ascii_case("or") => Combination::Or,
            _ => Combination::And,
        }
    }
}
