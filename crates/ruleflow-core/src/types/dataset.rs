//! DataSet - parameters gathered from one or more data sources

use super::key::ParameterKey;
use super::parameter::Parameter;
use std::collections::HashMap;

/// Unordered collection of parameters, stored as a multimap keyed by [`ParameterKey`].
///
/// A key may hold several differently valued parameters (e.g. every phone
/// number on file). Inserting a parameter identical in key, value and id to
/// one already present is a no-op.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    parameters: HashMap<ParameterKey, Vec<Parameter>>,
}

impl DataSet {
    /// Create an empty data set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter
    pub fn add(&mut self, parameter: Parameter) {
        let entries = self.parameters.entry(parameter.key().clone()).or_default();
        if !entries.iter().any(|existing| existing.is_identical(&parameter)) {
            entries.push(parameter);
        }
    }

    /// All parameters stored under `key` (zero, one or many)
    pub fn lookup(&self, key: &ParameterKey) -> &[Parameter] {
        self.parameters
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Union another data set into this one
    pub fn merge(&mut self, other: DataSet) {
        for parameter in other.parameters.into_values().flatten() {
            self.add(parameter);
        }
    }

    /// Iterate over every parameter
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.values().flatten()
    }

    /// Iterate over distinct keys
    pub fn keys(&self) -> impl Iterator<Item = &ParameterKey> {
        self.parameters.keys()
    }

    /// Total number of parameters
    pub fn len(&self) -> usize {
        self.parameters.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.values().all(Vec::is_empty)
    }
}

impl FromIterator<Parameter> for DataSet {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut data_set = DataSet::new();
        data_set.extend(iter);
        data_set
    }
}

impl Extend<Parameter> for DataSet {
    fn extend<I: IntoIterator<Item = Parameter>>(&mut self, iter: I) {
        for parameter in iter {
            self.add(parameter);
        }
    }
}
