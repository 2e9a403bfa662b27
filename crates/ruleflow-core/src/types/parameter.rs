//! Parameters fetched from data sources

use super::key::ParameterKey;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One fetched value, identified by its composite key.
///
/// Equality and hashing consider the key only: two parameters with the same
/// key but different values are "the same parameter" for set semantics.
/// Use [`Parameter::is_identical`] for a deep comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    key: ParameterKey,

    #[serde(default, rename = "dataValue")]
    value: Option<String>,

    #[serde(default, rename = "dataId", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl Parameter {
    /// Create a parameter with an optional value
    pub fn new(key: ParameterKey, value: Option<String>) -> Self {
        Self {
            key,
            value,
            id: None,
        }
    }

    /// Create a parameter holding a value
    pub fn with_value(key: ParameterKey, value: impl Into<String>) -> Self {
        Self::new(key, Some(value.into()))
    }

    /// Create a null-valued parameter, used when a data source returned nothing for a key
    pub fn null(key: ParameterKey) -> Self {
        Self::new(key, None)
    }

    /// Create a parameter from a composite `source:name` key
    pub fn parse(composite_key: &str, value: impl Into<String>) -> Result<Self> {
        Ok(Self::with_value(ParameterKey::parse(composite_key)?, value))
    }

    /// Attach a source-specific identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn key(&self) -> &ParameterKey {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Deep comparison of key, value and id
    pub fn is_identical(&self, other: &Parameter) -> bool {
        self.key == other.key && self.value == other.value && self.id == other.id
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Parameter {}

impl Hash for Parameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
