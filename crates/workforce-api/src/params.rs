//! Request parameter extraction and validation.
//!
//! Query strings are deserialized into structs of optional raw strings and
//! then parsed here, so a missing or malformed value produces the
//! endpoint's own error message instead of a generic extractor rejection.
//! Requests the extractors themselves refuse (a repeated query key, a path
//! segment that is not UTF-8) are mapped through [`rejected`] to the same
//! message.

use core::fmt::Display;
use core::str::FromStr;

use serde::Deserialize;
use workforce_types::EmployeeId;

use crate::error::ApiError;

/// Error message for `GET /top-earners`.
pub const TOP_EARNERS_MESSAGE: &str = "Please provide a valid value for \"n\".";

/// Error message for `GET /employee-retention-rate`.
pub const RETENTION_MESSAGE: &str = "Please provide valid startYear and endYear parameters.";

/// Error message for `GET /employees-by-experience/{minExp}/{maxExp}`.
pub const EXPERIENCE_MESSAGE: &str = "Please provide valid minExp and maxExp parameters.";

/// Error message for `GET /employees-by-salary-range`.
pub const SALARY_RANGE_MESSAGE: &str =
    "Please provide valid minSalary and maxSalary parameters.";

/// Error message for `GET /employees/{id}`.
pub const EMPLOYEE_ID_MESSAGE: &str = "Please provide a valid employee id.";

/// Query parameters for `GET /top-earners`.
#[derive(Debug, Default, Deserialize)]
pub struct TopEarnersQuery {
    /// How many employees to return.
    pub n: Option<String>,
}

/// Query parameters for `GET /employee-retention-rate`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionQuery {
    /// Year that fixes the starting cohort.
    pub start_year: Option<String>,
    /// Year at which retention is measured.
    pub end_year: Option<String>,
}

/// Query parameters for `GET /employees-by-salary-range`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRangeQuery {
    /// Inclusive lower salary bound.
    pub min_salary: Option<String>,
    /// Inclusive upper salary bound.
    pub max_salary: Option<String>,
}

/// Parse an integer parameter, ignoring surrounding whitespace.
///
/// Returns `None` when the value is absent, blank, fractional, out of
/// range for `T`, or not a number at all.
pub fn parse_integer<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

impl TopEarnersQuery {
    /// The requested count. Negative counts are rejected.
    pub fn count(&self) -> Result<usize, ApiError> {
        parse_integer(self.n.as_deref())
            .ok_or_else(|| ApiError::InvalidParameter(TOP_EARNERS_MESSAGE.to_owned()))
    }
}

impl RetentionQuery {
    /// The `(start_year, end_year)` pair.
    pub fn years(&self) -> Result<(i32, i32), ApiError> {
        both(
            self.start_year.as_deref(),
            self.end_year.as_deref(),
            RETENTION_MESSAGE,
        )
    }
}

impl SalaryRangeQuery {
    /// The `(min_salary, max_salary)` pair.
    pub fn bounds(&self) -> Result<(i64, i64), ApiError> {
        both(
            self.min_salary.as_deref(),
            self.max_salary.as_deref(),
            SALARY_RANGE_MESSAGE,
        )
    }
}

/// Parse the `(minExp, maxExp)` path segments.
pub fn experience_bounds(min_exp: &str, max_exp: &str) -> Result<(i64, i64), ApiError> {
    both(Some(min_exp), Some(max_exp), EXPERIENCE_MESSAGE)
}

/// Parse an employee identifier path segment.
pub fn employee_id(raw: &str) -> Result<EmployeeId, ApiError> {
    parse_integer::<u32>(Some(raw))
        .map(EmployeeId::new)
        .filter(|id| id.is_valid())
        .ok_or_else(|| ApiError::InvalidParameter(EMPLOYEE_ID_MESSAGE.to_owned()))
}

/// Turn an extractor rejection into the endpoint's parameter error.
pub fn rejected<R: Display>(message: &'static str) -> impl FnOnce(R) -> ApiError {
    move |rejection| {
        tracing::debug!(%rejection, "extractor rejected request");
        ApiError::InvalidParameter(message.to_owned())
    }
}

fn both<T: FromStr>(
    first: Option<&str>,
    second: Option<&str>,
    message: &str,
) -> Result<(T, T), ApiError> {
    match (parse_integer(first), parse_integer(second)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ApiError::InvalidParameter(message.to_owned())),
    }
}
