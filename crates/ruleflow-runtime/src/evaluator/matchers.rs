//! Predicate matchers
//!
//! String comparisons are case-insensitive. A missing value compares as the
//! literal `"null"`. Date matchers take `now` explicitly so callers share one
//! clock reading per evaluation.

use chrono::{DateTime, Months, Utc};
use ruleflow_core::datetime::parse_iso_date_time;
use ruleflow_core::text::{contains_ignore_case, eq_ignore_case};
use ruleflow_core::{CoreError, Parameter};

const NULL_VALUE: &str = "null";

fn value_of(parameter: &Parameter) -> &str {
    parameter.value().unwrap_or(NULL_VALUE)
}

fn far_future(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_add_months(Months::new(100 * 12))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Parse the parameter's value as a date, substituting `default` when absent
fn date_of(
    parameter: &Parameter,
    default: DateTime<Utc>,
) -> Result<DateTime<Utc>, CoreError> {
    match parameter.value() {
        Some(value) => parse_iso_date_time(value),
        None => Ok(default),
    }
}

pub fn is_equal_to(option: &str, parameter: &Parameter) -> bool {
    eq_ignore_case(option, value_of(parameter))
}

pub fn is_not_equal_to(option: &str, parameter: &Parameter) -> bool {
    !is_equal_to(option, parameter)
}

pub fn is_one_of(options: &[String], parameter: &Parameter) -> bool {
    options
        .iter()
        .any(|option| eq_ignore_case(option, value_of(parameter)))
}

pub fn is_not_one_of(options: &[String], parameter: &Parameter) -> bool {
    !is_one_of(options, parameter)
}

pub fn contains(option: &str, parameter: &Parameter) -> bool {
    contains_ignore_case(value_of(parameter), option)
}

pub fn not_contains(option: &str, parameter: &Parameter) -> bool {
    !contains(option, parameter)
}

/// `|days(now, value)| <= days`; a missing value reads as 100 years from now
pub fn is_within_days(
    days: u64,
    parameter: &Parameter,
    now: DateTime<Utc>,
) -> Result<bool, CoreError> {
    let given = date_of(parameter, far_future(now))?;
    Ok(days_between(now, given) <= days)
}

/// `|days(value, now)| > days`; a missing value reads as 100 years from now
pub fn is_beyond_days(
    days: u64,
    parameter: &Parameter,
    now: DateTime<Utc>,
) -> Result<bool, CoreError> {
    let given = date_of(parameter, far_future(now))?;
    Ok(days_between(given, now) > days)
}

/// Value strictly after `date`; a missing value reads as now
pub fn is_after(date: &str, parameter: &Parameter, now: DateTime<Utc>) -> Result<bool, CoreError> {
    let bound = parse_iso_date_time(date)?;
    Ok(date_of(parameter, now)? > bound)
}

/// Value strictly before `date`; a missing value reads as 100 years from now
pub fn is_before(
    date: &str,
    parameter: &Parameter,
    now: DateTime<Utc>,
) -> Result<bool, CoreError> {
    let bound = parse_iso_date_time(date)?;
    Ok(date_of(parameter, far_future(now))? < bound)
}

/// Whole days between two instants, truncated toward zero
fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    (to - from).num_days().unsigned_abs()
}
