//! Rule model
//!
//! A rule set is a list of features. Each feature has three condition lists
//! (pre-conditions, conditions, post-conditions) and optional actions.

pub mod action;
pub mod condition;
pub mod feature;
pub mod requirements;
pub mod ruleset;

pub use action::Action;
pub use condition::{EvaluationCondition, Predicate};
pub use feature::Feature;
pub use requirements::{Combination, EvaluationPhase, MatchingOptions, Requirements};
pub use ruleset::Rules;
