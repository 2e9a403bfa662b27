//! Composite parameter keys

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one attribute served by one data source.
///
/// Written as `source:name`; the string is split on the first `:` so
/// attribute names may themselves contain colons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParameterKey {
    data_source: String,
    name: String,
}

impl ParameterKey {
    /// Create a key from its parts
    pub fn new(data_source: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            data_source: data_source.into(),
            name: name.into(),
        }
    }

    /// Parse a composite `source:name` key
    pub fn parse(composite: &str) -> Result<Self> {
        match composite.split_once(':') {
            Some((source, name)) if !source.is_empty() && !name.is_empty() => {
                Ok(Self::new(source, name))
            }
            _ => Err(CoreError::MalformedKey(composite.to_string())),
        }
    }

    /// Name of the data source serving this key
    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    /// Attribute name within the data source
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.data_source, self.name)
    }
}

impl FromStr for ParameterKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ParameterKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ParameterKey> for String {
    fn from(key: ParameterKey) -> Self {
        key.to_string()
    }
}
