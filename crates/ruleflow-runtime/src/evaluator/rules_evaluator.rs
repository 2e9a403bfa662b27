//! Evaluates features against a data set

use super::matchers;
use chrono::{DateTime, Utc};
use ruleflow_core::{
    Combination, CoreError, DataSet, EvaluatedParameter, EvaluationCondition, EvaluationPhase,
    Feature, Parameter, Predicate, RuleEvaluationResult, Rules,
};
use std::borrow::Cow;
use tracing::{debug, warn};

/// Evaluates every feature of a rule set for one phase.
///
/// All conditions of the phase must hold (AND). Within a condition, a positive
/// predicate needs any parameter under the key to match, while a negative
/// predicate must hold for every parameter. With no data for a key the
/// condition is evaluated once against a null-valued parameter.
#[derive(Debug, Clone)]
pub struct RulesEvaluator<'a> {
    data_set: &'a DataSet,
    rules: &'a Rules,
    phase: EvaluationPhase,
    now: DateTime<Utc>,
}

impl<'a> RulesEvaluator<'a> {
    pub fn new(data_set: &'a DataSet, rules: &'a Rules, phase: EvaluationPhase) -> Self {
        Self {
            data_set,
            rules,
            phase,
            now: Utc::now(),
        }
    }

    /// Fix the clock used by date predicates
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Evaluate every feature, in rule set order
    pub fn evaluate(&self) -> Vec<RuleEvaluationResult> {
        self.rules
            .features
            .iter()
            .map(|feature| self.evaluate_feature(feature))
            .collect()
    }

    fn evaluate_feature(&self, feature: &Feature) -> RuleEvaluationResult {
        if feature.requirements.combination() == Combination::Or {
            warn!(
                "Feature {}: OR combination is not supported, evaluating with AND",
                feature.name
            );
        }

        let conditions = feature.requirements.conditions_for(self.phase);
        let positive = conditions
            .iter()
            .all(|condition| self.evaluate_condition(condition));

        let matched = if positive {
            conditions
                .iter()
                .map(|condition| {
                    EvaluatedParameter::new(condition.clone(), self.matched_parameters(condition))
                })
                .collect()
        } else {
            Vec::new()
        };

        debug!(
            "Feature {} evaluated {} in phase {:?}",
            feature.name,
            if positive { "positive" } else { "negative" },
            self.phase
        );
        RuleEvaluationResult::new(&feature.name, matched, feature.return_value(positive))
    }

    /// Parameters a condition is tested against
    fn candidates(&self, condition: &EvaluationCondition) -> Cow<'a, [Parameter]> {
        let parameters = self.data_set.lookup(&condition.key);
        if parameters.is_empty() {
            debug!(
                "No data exists for evaluating condition {}. Evaluating with null value.",
                condition
            );
            Cow::Owned(vec![Parameter::null(condition.key.clone())])
        } else {
            Cow::Borrowed(parameters)
        }
    }

    /// Evaluate a single condition against the data set
    pub fn evaluate_condition(&self, condition: &EvaluationCondition) -> bool {
        let candidates = self.candidates(condition);
        let result = if condition.is_negative() {
            candidates
                .iter()
                .all(|parameter| self.is_match(condition, parameter))
        } else {
            candidates
                .iter()
                .any(|parameter| self.is_match(condition, parameter))
        };

        debug!(
            "Evaluation of condition {} with {} parameter(s) resulted in {}",
            condition,
            candidates.len(),
            result
        );
        result
    }

    /// Apply the condition's predicate to one parameter.
    ///
    /// Conditions without a predicate and unparseable dates evaluate to false.
    pub fn is_match(&self, condition: &EvaluationCondition, parameter: &Parameter) -> bool {
        let Some(predicate) = condition.predicate() else {
            warn!(
                "Condition not implemented: {}. Assuming negative evaluation.",
                condition
            );
            return false;
        };

        let outcome: Result<bool, CoreError> = match predicate {
            Predicate::Equals(option) => Ok(matchers::is_equal_to(option, parameter)),
            Predicate::NotEquals(option) => Ok(matchers::is_not_equal_to(option, parameter)),
            Predicate::OneOf(options) => Ok(matchers::is_one_of(options, parameter)),
            Predicate::NotOneOf(options) => Ok(matchers::is_not_one_of(options, parameter)),
            Predicate::Contains(option) => Ok(matchers::contains(option, parameter)),
            Predicate::NotContains(option) => Ok(matchers::not_contains(option, parameter)),
            Predicate::WithinDays(days) => matchers::is_within_days(days, parameter, self.now),
            Predicate::BeyondDays(days) => matchers::is_beyond_days(days, parameter, self.now),
            Predicate::After(date) => matchers::is_after(date, parameter, self.now),
            Predicate::Before(date) => matchers::is_before(date, parameter, self.now),
        };

        outcome.unwrap_or_else(|err| {
            warn!(
                "Condition {} could not be evaluated: {}. Assuming negative evaluation.",
                condition, err
            );
            false
        })
    }

    /// Parameters that satisfied the condition's predicate
    fn matched_parameters(&self, condition: &EvaluationCondition) -> Vec<Parameter> {
        self.candidates(condition)
            .iter()
            .filter(|parameter| self.is_match(condition, parameter))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use ruleflow_core::{Action, ParameterKey, Requirements};

    fn key(source: &str, name: &str) -> ParameterKey {
        ParameterKey::new(source, name)
    }

    fn phones() -> DataSet {
        [
            Parameter::with_value(key("ct", "phone"), "555-0100"),
            Parameter::with_value(key("ct", "phone"), "555-0199"),
        ]
        .into_iter()
        .collect()
    }

    fn single(condition: EvaluationCondition) -> Rules {
        Rules::new(vec![Feature::new(
            "feature",
            Requirements::new().with_condition(condition),
        )])
    }

    fn evaluate(data_set: &DataSet, rules: &Rules) -> RuleEvaluationResult {
        let mut results =
            RulesEvaluator::new(data_set, rules, EvaluationPhase::Conditions).evaluate();
        assert_eq!(results.len(), 1);
        results.remove(0)
    }

    #[test]
    fn test_positive_condition_any_semantics() {
        let rules = single(EvaluationCondition::new(key("ct", "phone")).with_equals("555-0199"));
        let result = evaluate(&phones(), &rules);

        assert!(result.has_match());
        assert_eq!(result.return_value, "true");
        let matched = &result.matched[0].parameters;
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].value(), Some("555-0199"));
    }

    #[test]
    fn test_negative_condition_all_semantics() {
        let rules =
            single(EvaluationCondition::new(key("ct", "phone")).with_not_equals("555-0199"));
        let result = evaluate(&phones(), &rules);

        assert!(!result.has_match());
        assert_eq!(result.return_value, "false");

        let rules =
            single(EvaluationCondition::new(key("ct", "phone")).with_not_one_of(["555-0000"]));
        let result = evaluate(&phones(), &rules);
        assert!(result.has_match());
        assert_eq!(result.matched[0].parameters.len(), 2);
    }

    #[test]
    fn test_missing_data_evaluates_as_null() {
        let empty = DataSet::new();

        let equals = single(EvaluationCondition::new(key("ct", "phone")).with_equals("555-0100"));
        assert!(!evaluate(&empty, &equals).has_match());

        let not_equals =
            single(EvaluationCondition::new(key("ct", "phone")).with_not_equals("555-0100"));
        let result = evaluate(&empty, &not_equals);
        assert!(result.has_match());
        assert_eq!(result.matched[0].parameters[0].value(), None);
    }

    #[test]
    fn test_all_conditions_must_match() {
        let data_set: DataSet = [
            Parameter::with_value(key("ds1", "a"), "x"),
            Parameter::with_value(key("ds2", "b"), "y"),
        ]
        .into_iter()
        .collect();
        let requirements = Requirements::new()
            .with_condition(EvaluationCondition::new(key("ds1", "a")).with_equals("x"))
            .with_condition(EvaluationCondition::new(key("ds2", "b")).with_equals("z"));
        let rules = Rules::new(vec![Feature::new("f", requirements)]);

        assert!(!evaluate(&data_set, &rules).has_match());
    }

    #[test]
    fn test_condition_without_predicate_is_false() {
        let data_set: DataSet = [Parameter::with_value(key("ds1", "a"), "x")]
            .into_iter()
            .collect();
        let rules = single(EvaluationCondition::new(key("ds1", "a")));

        assert!(!evaluate(&data_set, &rules).has_match());
    }

    #[test]
    fn test_unparseable_date_is_false() {
        let data_set: DataSet = [Parameter::with_value(key("up", "since"), "yesterday")]
            .into_iter()
            .collect();
        let rules = single(EvaluationCondition::new(key("up", "since")).with_within_days(10));

        assert!(!evaluate(&data_set, &rules).has_match());
    }

    #[test]
    fn test_date_predicates_use_fixed_clock() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let registered = (now - Duration::days(5)).to_rfc3339();
        let data_set: DataSet = [Parameter::with_value(key("up", "registered"), registered)]
            .into_iter()
            .collect();
        let rules =
            single(EvaluationCondition::new(key("up", "registered")).with_within_days(7));

        let results = RulesEvaluator::new(&data_set, &rules, EvaluationPhase::Conditions)
            .with_now(now)
            .evaluate();
        assert!(results[0].has_match());
    }

    #[test]
    fn test_phase_selects_condition_list() {
        let data_set: DataSet = [Parameter::with_value(key("ds1", "attr"), "p-one")]
            .into_iter()
            .collect();
        let requirements = Requirements::new()
            .with_pre_condition(EvaluationCondition::new(key("ds1", "attr")).with_equals("p-one"))
            .with_condition(EvaluationCondition::new(key("ds2", "attr")).with_equals("c-two"));
        let rules = Rules::new(vec![Feature::new("f", requirements)]);

        let pre = RulesEvaluator::new(&data_set, &rules, EvaluationPhase::PreConditions).evaluate();
        assert!(pre[0].has_match());
        assert_eq!(pre[0].matched[0].condition.key, key("ds1", "attr"));

        let main = RulesEvaluator::new(&data_set, &rules, EvaluationPhase::Conditions).evaluate();
        assert!(!main[0].has_match());
    }

    #[test]
    fn test_return_action_values() {
        let data_set: DataSet = [Parameter::with_value(key("up", "badge"), "gold")]
            .into_iter()
            .collect();
        let feature = |expected: &str| {
            Feature::new(
                "badge",
                Requirements::new().with_condition(
                    EvaluationCondition::new(key("up", "badge")).with_equals(expected),
                ),
            )
            .with_action(Action::returning("VIP", "REGULAR"))
        };
        let rules = Rules::new(vec![feature("GOLD"), feature("SILVER")]);

        let results =
            RulesEvaluator::new(&data_set, &rules, EvaluationPhase::Conditions).evaluate();
        assert_eq!(results[0].return_value, "VIP");
        assert_eq!(results[1].return_value, "REGULAR");
    }

    #[test]
    fn test_or_combination_evaluates_as_and() {
        let data_set: DataSet = [Parameter::with_value(key("ds", "a"), "x")]
            .into_iter()
            .collect();
        let requirements = Requirements::new()
            .with_combination("OR")
            .with_condition(EvaluationCondition::new(key("ds", "a")).with_equals("x"))
            .with_condition(EvaluationCondition::new(key("ds", "b")).with_equals("y"));
        let rules = Rules::new(vec![Feature::new("f", requirements)]);

        assert!(!evaluate(&data_set, &rules).has_match());
    }
}
