//! Feature actions

use serde::{Deserialize, Serialize};

/// Action type carrying a feature's return values
pub const RETURN_ACTION: &str = "return";

/// An action attached to a feature.
///
/// Only `return` actions are interpreted: `value` is returned on a positive
/// evaluation and `defaultValue` on a negative one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Action {
    /// Create a `return` action
    pub fn returning(value: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            action_type: RETURN_ACTION.to_string(),
            key: None,
            value: Some(value.into()),
            default_value: Some(default_value.into()),
        }
    }

    pub fn is_return(&self) -> bool {
        self.action_type.eq_ignore_ascii_case(RETURN_ACTION)
    }
}
