//! Per-phase helpers used by the engine

use ruleflow_core::{EvaluationPhase, ParameterKey, RuleEvaluationResult, Rules};
use ruleflow_runtime::DataSourceError;
use std::collections::{HashMap, HashSet};

/// Distinct parameter keys referenced by the phase's conditions, grouped by data source.
///
/// Keys keep the order of first reference within each source.
pub fn parameters_by_data_source(
    rules: &Rules,
    phase: EvaluationPhase,
) -> HashMap<String, Vec<ParameterKey>> {
    let mut seen = HashSet::new();
    let mut grouped: HashMap<String, Vec<ParameterKey>> = HashMap::new();

    let keys = rules
        .features
        .iter()
        .flat_map(|feature| feature.requirements.conditions_for(phase))
        .map(|condition| &condition.key);

    for key in keys {
        if seen.insert(key) {
            grouped
                .entry(key.data_source().to_string())
                .or_default()
                .push(key.clone());
        }
    }
    grouped
}

/// Copy of `rules` keeping features with no pre-conditions or a matching pre-condition result
pub fn filter_rules_to_evaluate(rules: &Rules, pre_results: &[RuleEvaluationResult]) -> Rules {
    rules.filtered(|feature| {
        feature.requirements.pre_conditions.is_empty()
            || pre_results
                .iter()
                .filter(|result| result.has_match())
                .any(|result| feature.is_named(&result.feature))
    })
}

/// Names of features whose phase conditions reference a data source that failed
pub fn features_with_errors(
    rules: &Rules,
    phase: EvaluationPhase,
    errors: &HashMap<String, DataSourceError>,
) -> Vec<String> {
    if errors.is_empty() {
        return Vec::new();
    }

    rules
        .features
        .iter()
        .filter(|feature| {
            feature
                .requirements
                .conditions_for(phase)
                .iter()
                .any(|condition| errors.contains_key(condition.key.data_source()))
        })
        .map(|feature| feature.name.clone())
        .collect()
}
