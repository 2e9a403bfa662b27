//! Two-phase rules engine
//!
//! Execution runs pre-conditions first, keeps the features that passed, then
//! evaluates the main conditions of those features:
//!
//! 1. Fetch every parameter referenced by pre-conditions and evaluate them
//! 2. Keep features with no pre-conditions or a matching pre-condition result
//! 3. Fetch every parameter referenced by the survivors' conditions and evaluate them
//!
//! In each phase, features depending on a data source that failed to fetch
//! are left out of that phase's results.

mod phases;

pub use phases::{features_with_errors, filter_rules_to_evaluate, parameters_by_data_source};

use crate::builder::RulesEngineBuilder;
use crate::error::{Result, SdkError};
use ruleflow_core::{EvaluationPhase, RuleEvaluationResult, Rules, UserContext};
use ruleflow_repository::RulesLoader;
use ruleflow_runtime::{DataFetchService, RulesEvaluator};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Rule set to execute: loaded by name, or supplied directly
#[derive(Debug, Clone, Copy)]
pub enum RuleSet<'a> {
    Named(&'a str),
    Inline(&'a Rules),
}

impl<'a> From<&'a str> for RuleSet<'a> {
    fn from(name: &'a str) -> Self {
        RuleSet::Named(name)
    }
}

impl<'a> From<&'a String> for RuleSet<'a> {
    fn from(name: &'a String) -> Self {
        RuleSet::Named(name)
    }
}

impl<'a> From<&'a Rules> for RuleSet<'a> {
    fn from(rules: &'a Rules) -> Self {
        RuleSet::Inline(rules)
    }
}

/// Entry point for executing rules
#[derive(Clone)]
pub struct RulesEngine {
    data_service: DataFetchService,
    loader: Option<Arc<dyn RulesLoader>>,
}

impl RulesEngine {
    /// Create an engine; without a loader only inline rule sets can be executed
    pub fn new(data_service: DataFetchService, loader: Option<Arc<dyn RulesLoader>>) -> Self {
        Self {
            data_service,
            loader,
        }
    }

    /// Start building an engine
    pub fn builder() -> RulesEngineBuilder {
        RulesEngineBuilder::new()
    }

    pub fn data_service(&self) -> &DataFetchService {
        &self.data_service
    }

    pub fn loader(&self) -> Option<&Arc<dyn RulesLoader>> {
        self.loader.as_ref()
    }

    /// Load (if named) and execute a rule set.
    ///
    /// # Errors
    ///
    /// Fails only when a named rule set cannot be loaded; data source
    /// failures degrade the result instead.
    pub async fn execute_rules<'a>(
        &self,
        rules: impl Into<RuleSet<'a>>,
        user_context: impl Into<Arc<UserContext>>,
    ) -> Result<Vec<RuleEvaluationResult>> {
        let user_context = user_context.into();
        match rules.into() {
            RuleSet::Inline(rules) => Ok(self.evaluate(rules, user_context).await),
            RuleSet::Named(name) => {
                let loader = self
                    .loader
                    .as_ref()
                    .ok_or_else(|| SdkError::LoaderNotConfigured(name.to_string()))?;
                let rules = loader.load(name).await?;
                Ok(self.evaluate(&rules, user_context).await)
            }
        }
    }

    /// Run both phases over an in-memory rule set
    pub async fn evaluate(
        &self,
        rules: &Rules,
        user_context: Arc<UserContext>,
    ) -> Vec<RuleEvaluationResult> {
        let pre_results = self
            .fetch_data_and_evaluate(
                rules,
                Arc::clone(&user_context),
                EvaluationPhase::PreConditions,
            )
            .await;
        let filtered = filter_rules_to_evaluate(rules, &pre_results);
        self.fetch_data_and_evaluate(&filtered, user_context, EvaluationPhase::Conditions)
            .await
    }

    async fn fetch_data_and_evaluate(
        &self,
        rules: &Rules,
        user_context: Arc<UserContext>,
        phase: EvaluationPhase,
    ) -> Vec<RuleEvaluationResult> {
        let parameters = parameters_by_data_source(rules, phase);
        debug!(
            "{:?}: fetching data from {} source(s) for {} feature(s)",
            phase,
            parameters.len(),
            rules.len()
        );
        let fetched = self.data_service.fetch_data(&parameters, user_context).await;

        let excluded = features_with_errors(rules, phase, &fetched.errors);
        for name in &excluded {
            warn!(
                "{:?}: skipping feature {} because a data source it depends on failed",
                phase, name
            );
        }
        let to_evaluate = if excluded.is_empty() {
            rules.clone()
        } else {
            rules.filtered(|feature| !excluded.iter().any(|name| feature.is_named(name)))
        };

        let results = RulesEvaluator::new(&fetched.data_set, &to_evaluate, phase).evaluate();
        debug!(
            "{:?}: {} of {} feature(s) matched",
            phase,
            results.iter().filter(|result| result.has_match()).count(),
            results.len()
        );
        results
    }
}

impl fmt::Debug for RulesEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RulesEngine")
            .field("data_service", &self.data_service)
            .field("loader", &self.loader.is_some())
            .finish()
    }
}
