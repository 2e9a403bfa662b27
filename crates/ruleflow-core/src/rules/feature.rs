//! Feature definition

use super::action::Action;
use super::requirements::Requirements;
use crate::text::eq_ignore_case;
use crate::types::Parameter;
use serde::{Deserialize, Serialize};

/// One named business rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Unique name, compared case-insensitively
    pub name: String,

    #[serde(default)]
    pub requirements: Requirements,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,

    /// Inline fixture data used by rule validation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_data: Vec<Parameter>,
}

impl Feature {
    /// Create a new feature
    pub fn new(name: impl Into<String>, requirements: Requirements) -> Self {
        Self {
            name: name.into(),
            requirements,
            actions: Vec::new(),
            test_data: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_test_data(mut self, test_data: Vec<Parameter>) -> Self {
        self.test_data = test_data;
        self
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    /// Value returned for a positive or negative evaluation.
    ///
    /// Taken from the first `return` action, falling back to `"true"`/`"false"`.
    pub fn return_value(&self, positive: bool) -> String {
        self.actions
            .iter()
            .find(|action| action.is_return())
            .and_then(|action| {
                if positive {
                    action.value.clone()
                } else {
                    action.default_value.clone()
                }
            })
            .unwrap_or_else(|| positive.to_string())
    }
}
