//! Evaluation conditions and the predicates they resolve to

use crate::types::ParameterKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single predicate test against one data key.
///
/// A condition document may set several predicate fields; the one that is
/// applied is chosen by [`EvaluationCondition::predicate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationCondition {
    /// Key of the parameter under test
    pub key: ParameterKey,

    /// Optional value type hint carried by the rule document
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equals: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_equals: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_one_of: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_contains: Option<String>,

    /// Only applied when greater than zero
    #[serde(default, skip_serializing_if = "is_zero")]
    pub within_days: u64,

    /// Only applied when greater than zero
    #[serde(default, skip_serializing_if = "is_zero")]
    pub beyond_days: u64,

    /// ISO date or date-time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,

    /// ISO date or date-time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

fn is_zero(days: &u64) -> bool {
    *days == 0
}

/// Predicate resolved from a condition, borrowing its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate<'a> {
    Equals(&'a str),
    NotEquals(&'a str),
    OneOf(&'a [String]),
    NotOneOf(&'a [String]),
    Contains(&'a str),
    NotContains(&'a str),
    WithinDays(u64),
    BeyondDays(u64),
    After(&'a str),
    Before(&'a str),
}

impl Predicate<'_> {
    /// Whether this is one of the negated predicates
    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            Predicate::NotEquals(_) | Predicate::NotOneOf(_) | Predicate::NotContains(_)
        )
    }
}

impl EvaluationCondition {
    /// Create a condition with no predicate set
    pub fn new(key: ParameterKey) -> Self {
        Self {
            key,
            value_type: None,
            equals: None,
            not_equals: None,
            one_of: None,
            not_one_of: None,
            contains: None,
            not_contains: None,
            within_days: 0,
            beyond_days: 0,
            after: None,
            before: None,
        }
    }

    pub fn with_equals(mut self, value: impl Into<String>) -> Self {
        self.equals = Some(value.into());
        self
    }

    pub fn with_not_equals(mut self, value: impl Into<String>) -> Self {
        self.not_equals = Some(value.into());
        self
    }

    pub fn with_one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.one_of = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_not_one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.not_one_of = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_contains(mut self, value: impl Into<String>) -> Self {
        self.contains = Some(value.into());
        self
    }

    pub fn with_not_contains(mut self, value: impl Into<String>) -> Self {
        self.not_contains = Some(value.into());
        self
    }

    pub fn with_within_days(mut self, days: u64) -> Self {
        self.within_days = days;
        self
    }

    pub fn with_beyond_days(mut self, days: u64) -> Self {
        self.beyond_days = days;
        self
    }

    pub fn with_after(mut self, date: impl Into<String>) -> Self {
        self.after = Some(date.into());
        self
    }

    pub fn with_before(mut self, date: impl Into<String>) -> Self {
        self.before = Some(date.into());
        self
    }

    /// Resolve the predicate to apply.
    ///
    /// First match wins in the order equals, notEquals, oneOf, notOneOf,
    /// contains, notContains, withinDays, beyondDays, after, before.
    /// Returns `None` when no predicate is set.
    pub fn predicate(&self) -> Option<Predicate<'_>> {
        if let Some(value) = &self.equals {
            return Some(Predicate::Equals(value));
        }
        if let Some(value) = &self.not_equals {
            return Some(Predicate::NotEquals(value));
        }
        if let Some(values) = &self.one_of {
            return Some(Predicate::OneOf(values));
        }
        if let Some(values) = &self.not_one_of {
            return Some(Predicate::NotOneOf(values));
        }
        if let Some(value) = &self.contains {
            return Some(Predicate::Contains(value));
        }
        if let Some(value) = &self.not_contains {
            return Some(Predicate::NotContains(value));
        }
        if self.within_days > 0 {
            return Some(Predicate::WithinDays(self.within_days));
        }
        if self.beyond_days > 0 {
            return Some(Predicate::BeyondDays(self.beyond_days));
        }
        if let Some(date) = &self.after {
            return Some(Predicate::After(date));
        }
        self.before.as_deref().map(Predicate::Before)
    }

    /// Whether the condition carries any negative predicate field.
    ///
    /// Negative conditions must hold for every parameter under the key.
    pub fn is_negative(&self) -> bool {
        self.not_equals.is_some() || self.not_one_of.is_some() || self.not_contains.is_some()
    }
}

impl fmt::Display for EvaluationCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.predicate() {
            Some(predicate) => write!(f, "{} {:?}", self.key, predicate),
            None => write!(f, "{} <no predicate>", self.key),
        }
    }
}
