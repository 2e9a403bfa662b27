//! Mapping raw JSON payloads into data sets

use crate::error::{DataSourceError, Result};
use ruleflow_core::{DataSet, Parameter, ParameterKey};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Turns a source payload into parameters for the requested keys
pub trait DataSetMapper: Send + Sync {
    fn to_data_set(&self, parameter_keys: &[ParameterKey], payload: &str) -> Result<DataSet>;
}

/// Maps composite keys to RFC 6901 JSON pointers.
///
/// ```yaml
/// pointers:
///   client-telephones:phone-number: /client/phones
///   user-profile:badge-level: /profile/badge
/// ```
///
/// An array at the pointer fans out into one parameter per element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonPointerDataSetMapper {
    pointers: HashMap<String, String>,
}

impl JsonPointerDataSetMapper {
    pub fn new(pointers: HashMap<String, String>) -> Self {
        Self { pointers }
    }

    /// Add a pointer for a key
    pub fn with_pointer(mut self, key: &ParameterKey, pointer: impl Into<String>) -> Self {
        self.pointers.insert(key.to_string(), pointer.into());
        self
    }

    fn parameters_at(key: &ParameterKey, node: &Value) -> Vec<Parameter> {
        match node {
            Value::Array(items) => items
                .iter()
                .flat_map(|item| Self::parameters_at(key, item))
                .collect(),
            Value::Null => vec![Parameter::null(key.clone())],
            Value::String(text) => vec![Parameter::with_value(key.clone(), text.clone())],
            other => vec![Parameter::with_value(key.clone(), other.to_string())],
        }
    }
}

impl DataSetMapper for JsonPointerDataSetMapper {
    fn to_data_set(&self, parameter_keys: &[ParameterKey], payload: &str) -> Result<DataSet> {
        let document: Value = serde_json::from_str(payload)?;
        let mut data_set = DataSet::new();

        for key in parameter_keys {
            let pointer = self.pointers.get(&key.to_string()).ok_or_else(|| {
                DataSourceError::Mapping(format!("No JSON pointer configured for {}", key))
            })?;
            if let Some(node) = document.pointer(pointer) {
                data_set.extend(Self::parameters_at(key, node));
            }
        }

        Ok(data_set)
    }
}
