//! Data source exposing the outcome of a rule set as parameters

use super::test_data::TestDataAdaptor;
use crate::engine::RulesEngine;
use async_trait::async_trait;
use ruleflow_core::{DataSet, Parameter, ParameterKey, Rules};
use ruleflow_runtime::{
    AdaptorRegistry, DataFetchService, DataFetchingContext, DataSourceAdaptor, Result,
};
use std::sync::Arc;
use tracing::debug;

/// Source name the validator is registered under
pub const VALIDATOR_SOURCE: &str = "rules-validator";

/// Attribute holding the return value of each matching feature
pub const RETURN_VALUE_ATTRIBUTE: &str = "rule-execution-result.returnValue";

/// Attribute holding the name of each matching feature
pub const FEATURE_NAME_ATTRIBUTE: &str = "rule-execution-result.feature-name";

/// Runs the rules under test on every fetch and reports the matching features.
///
/// Negative results produce no parameters, so a test asserting on a feature
/// name only passes when that feature matched.
#[derive(Debug, Clone)]
pub struct RulesValidatorAdaptor {
    engine: RulesEngine,
    rules: Arc<Rules>,
}

impl RulesValidatorAdaptor {
    pub fn new(engine: RulesEngine, rules: Arc<Rules>) -> Self {
        Self { engine, rules }
    }

    /// Validator whose inner engine answers every data source from `test_data`
    pub fn for_test_data(rules: Arc<Rules>, test_data: DataSet) -> Self {
        let registry =
            AdaptorRegistry::new().with_fallback(Arc::new(TestDataAdaptor::new(test_data)));
        Self::new(RulesEngine::new(DataFetchService::new(registry), None), rules)
    }
}

#[async_trait]
impl DataSourceAdaptor for RulesValidatorAdaptor {
    async fn fetch(&self, context: DataFetchingContext) -> Result<DataSet> {
        let results = self.engine.evaluate(&self.rules, context.user_context).await;

        let return_value_key = ParameterKey::new(VALIDATOR_SOURCE, RETURN_VALUE_ATTRIBUTE);
        let feature_name_key = ParameterKey::new(VALIDATOR_SOURCE, FEATURE_NAME_ATTRIBUTE);

        let data: DataSet = results
            .into_iter()
            .filter(|result| result.has_match())
            .flat_map(|result| {
                [
                    Parameter::with_value(return_value_key.clone(), result.return_value),
                    Parameter::with_value(feature_name_key.clone(), result.feature),
                ]
            })
            .collect();
        debug!("Rules under test produced {} validator parameter(s)", data.len());
        Ok(data)
    }
}
