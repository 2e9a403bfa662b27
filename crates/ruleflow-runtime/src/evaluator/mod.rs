//! Rule evaluation

pub mod matchers;
mod rules_evaluator;

pub use rules_evaluator::RulesEvaluator;
