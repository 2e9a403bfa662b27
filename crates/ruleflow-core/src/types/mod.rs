//! Data types exchanged between data sources and the evaluator

pub mod dataset;
pub mod key;
pub mod parameter;

pub use dataset::DataSet;
pub use key::ParameterKey;
pub use parameter::Parameter;

use std::collections::HashMap;

/// Opaque caller-supplied context forwarded to every data source adaptor
pub type UserContext = HashMap<String, serde_json::Value>;
