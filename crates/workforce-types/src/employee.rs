//! The employee record served by every analytical endpoint.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::EmployeeId;

/// An immutable employee record.
///
/// Field names use camelCase on the wire (`jobTitle`, `startDate`) and
/// the start date is an ISO 8601 calendar date (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Employee {
    /// Unique positive identifier.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Role label. This is the grouping key for per-position aggregates.
    pub job_title: String,
    /// Annual compensation. The unit is opaque to the service.
    #[ts(type = "number")]
    pub salary: u64,
    /// First day of employment.
    pub start_date: NaiveDate,
}

impl Employee {
    /// Build a record from its parts.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        job_title: impl Into<String>,
        salary: u64,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: EmployeeId::new(id),
            name: name.into(),
            job_title: job_title.into(),
            salary,
            start_date,
        }
    }

    /// Calendar year in which the employee joined.
    pub fn start_year(&self) -> i32 {
        self.start_date.year()
    }

    /// Whole completed years of service as of `today`.
    ///
    /// A year only counts once its anniversary has been reached. A start
    /// date after `today` yields zero.
    pub fn tenure_years(&self, today: NaiveDate) -> u32 {
        today.years_since(self.start_date).unwrap_or(0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Employee {
        Employee::new(3, "Bob", "Frontend Developer", 95_000, date(2020, 3, 10))
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "name": "Bob",
                "jobTitle": "Frontend Developer",
                "salary": 95000,
                "startDate": "2020-03-10",
            })
        );
    }

    #[test]
    fn parses_from_wire_format() {
        let raw = r#"{"id":1,"name":"John","jobTitle":"Data Scientist","salary":100000,"startDate":"2022-01-15"}"#;
        let employee: Employee = serde_json::from_str(raw).unwrap();
        assert_eq!(employee.id, EmployeeId::new(1));
        assert_eq!(employee.start_year(), 2022);
    }

    #[test]
    fn tenure_counts_only_completed_years() {
        let bob = sample();
        assert_eq!(bob.tenure_years(date(2025, 3, 9)), 4);
        assert_eq!(bob.tenure_years(date(2025, 3, 10)), 5);
        assert_eq!(bob.tenure_years(date(2020, 3, 10)), 0);
    }

    #[test]
    fn leap_day_start_waits_for_march_first_in_common_years() {
        let leap = Employee::new(11, "Lee", "Data Scientist", 90_000, date(2020, 2, 29));
        assert_eq!(leap.tenure_years(date(2021, 2, 28)), 0);
        assert_eq!(leap.tenure_years(date(2021, 3, 1)), 1);
        assert_eq!(leap.tenure_years(date(2024, 2, 29)), 4);
    }

    #[test]
    fn tenure_before_start_is_zero() {
        assert_eq!(sample().tenure_years(date(2019, 1, 1)), 0);
    }
}
