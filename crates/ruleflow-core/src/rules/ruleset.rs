//! Rule set definition

use super::feature::Feature;
use serde::{Deserialize, Serialize};

/// Ordered list of features, loaded once per evaluation call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Rules {
    /// Create a rule set
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Copy of this rule set holding only the features accepted by `keep`
    pub fn filtered<F>(&self, mut keep: F) -> Rules
    where
        F: FnMut(&Feature) -> bool,
    {
        Rules {
            features: self
                .features
                .iter()
                .filter(|feature| keep(feature))
                .cloned()
                .collect(),
        }
    }

    /// Find a feature by name, case-insensitively
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|feature| feature.is_named(name))
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }
}
