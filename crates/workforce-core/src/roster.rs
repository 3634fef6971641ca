//! The employee store.
//!
//! A [`Roster`] is built once at startup, validated, and then shared
//! read-only by every request. Cloning a roster clones an [`Arc`], never
//! the records, and nothing hands out mutable access to them. Derivations
//! that need a different ordering work on their own copy.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};
use workforce_types::{Employee, EmployeeId};

use crate::config::RosterSection;

/// The roster compiled into the binary, used when no file is configured.
const BUILTIN_ROSTER: &str = include_str!("../data/default-roster.yaml");

/// Errors that can occur while building a roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Failed to read the roster file from disk.
    #[error("failed to read roster file {}: {source}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The roster document is not valid YAML (or JSON).
    #[error("failed to parse roster: {source}")]
    Parse {
        /// The underlying parse error.
        #[from]
        source: serde_yml::Error,
    },

    /// Identifiers must be positive.
    #[error("employee id {id} is not a positive integer")]
    InvalidId {
        /// The rejected identifier.
        id: EmployeeId,
    },

    /// Two records share an identifier.
    #[error("duplicate employee id {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: EmployeeId,
    },

    /// A required text field is empty.
    #[error("employee {id} has an empty {field}")]
    EmptyField {
        /// The offending record.
        id: EmployeeId,
        /// Wire name of the empty field.
        field: &'static str,
    },

    /// A start date lies after the evaluation date.
    #[error("employee {id} starts on {start_date}, after {today}")]
    FutureStartDate {
        /// The offending record.
        id: EmployeeId,
        /// The record's start date.
        start_date: NaiveDate,
        /// The date the roster was validated against.
        today: NaiveDate,
    },
}

/// On-disk roster document: `employees:` followed by a list of records.
#[derive(Debug, Deserialize)]
struct RosterFile {
    employees: Vec<Employee>,
}

/// Validated, immutable, ordered collection of employee records.
#[derive(Debug, Clone)]
pub struct Roster {
    employees: Arc<[Employee]>,
}

impl Roster {
    /// Validate `employees` against `today` and freeze them.
    ///
    /// Collection order is preserved; it is the order every filter returns.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found: a non-positive or
    /// duplicate id, an empty name or job title, or a start date after
    /// `today`.
    pub fn new(employees: Vec<Employee>, today: NaiveDate) -> Result<Self, RosterError> {
        let mut seen = BTreeSet::new();
        for employee in &employees {
            let id = employee.id;
            if !id.is_valid() {
                return Err(RosterError::InvalidId { id });
            }
            if !seen.insert(id) {
                return Err(RosterError::DuplicateId { id });
            }
            if employee.name.trim().is_empty() {
                return Err(RosterError::EmptyField { id, field: "name" });
            }
            if employee.job_title.trim().is_empty() {
                return Err(RosterError::EmptyField {
                    id,
                    field: "jobTitle",
                });
            }
            if employee.start_date > today {
                return Err(RosterError::FutureStartDate {
                    id,
                    start_date: employee.start_date,
                    today,
                });
            }
        }
        Ok(Self {
            employees: employees.into(),
        })
    }

    /// The ten-record roster shipped with the service.
    ///
    /// # Errors
    ///
    /// Fails only if `today` predates one of the built-in start dates.
    pub fn builtin(today: NaiveDate) -> Result<Self, RosterError> {
        Self::from_yaml(BUILTIN_ROSTER, today)
    }

    /// Parse a roster document. JSON documents are accepted as well.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Parse`] for malformed input, or any
    /// validation error from [`Roster::new`].
    pub fn from_yaml(document: &str, today: NaiveDate) -> Result<Self, RosterError> {
        let file: RosterFile = serde_yml::from_str(document)?;
        Self::new(file.employees, today)
    }

    /// Read and parse a roster file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Io`] if the file cannot be read, otherwise as
    /// [`Roster::from_yaml`].
    pub fn from_file(path: &Path, today: NaiveDate) -> Result<Self, RosterError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents, today)
    }

    /// Build the roster described by the configuration.
    ///
    /// # Errors
    ///
    /// As [`Roster::from_file`] or [`Roster::builtin`].
    pub fn load(section: &RosterSection, today: NaiveDate) -> Result<Self, RosterError> {
        let roster = match &section.path {
            Some(path) => {
                debug!(path = %path.display(), "loading roster file");
                Self::from_file(path, today)?
            }
            None => Self::builtin(today)?,
        };
        let source = if section.path.is_some() { "file" } else { "builtin" };
        info!(employees = roster.len(), source, "roster loaded");
        Ok(roster)
    }

    /// All records in collection order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Look up a record by identifier.
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 1)
    }

    fn record(id: u32, name: &str, title: &str, start: NaiveDate) -> Employee {
        Employee::new(id, name, title, 50_000, start)
    }

    #[test]
    fn builtin_roster_has_ten_records_in_order() {
        let roster = Roster::builtin(today()).unwrap();
        assert_eq!(roster.len(), 10);
        let ids: Vec<u32> = roster.employees().iter().map(|e| e.id.into_inner()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        let williams = roster.get(EmployeeId::new(6)).unwrap();
        assert_eq!(williams.name, "Williams");
        assert_eq!(williams.salary, 120_000);
        assert_eq!(williams.start_date, date(2018, 6, 15));
    }

    #[test]
    fn get_unknown_id_is_none() {
        let roster = Roster::builtin(today()).unwrap();
        assert!(roster.get(EmployeeId::new(99)).is_none());
    }

    #[test]
    fn clones_share_the_same_records() {
        let roster = Roster::builtin(today()).unwrap();
        let other = roster.clone();
        assert!(std::ptr::eq(roster.employees(), other.employees()));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let employees = vec![
            record(1, "A", "Dev", date(2020, 1, 1)),
            record(1, "B", "Dev", date(2020, 1, 1)),
        ];
        let err = Roster::new(employees, today()).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId { id } if id == EmployeeId::new(1)));
    }

    #[test]
    fn rejects_zero_id() {
        let employees = vec![record(0, "A", "Dev", date(2020, 1, 1))];
        let err = Roster::new(employees, today()).unwrap_err();
        assert!(matches!(err, RosterError::InvalidId { .. }));
    }

    #[test]
    fn rejects_blank_job_title() {
        let employees = vec![record(1, "A", "  ", date(2020, 1, 1))];
        let err = Roster::new(employees, today()).unwrap_err();
        assert!(matches!(err, RosterError::EmptyField { field: "jobTitle", .. }));
    }

    #[test]
    fn rejects_future_start_date() {
        let employees = vec![record(1, "A", "Dev", date(2030, 1, 1))];
        let err = Roster::new(employees, today()).unwrap_err();
        assert!(matches!(err, RosterError::FutureStartDate { .. }));
    }

    #[test]
    fn start_date_of_today_is_accepted() {
        let employees = vec![record(1, "A", "Dev", today())];
        assert_eq!(Roster::new(employees, today()).unwrap().len(), 1);
    }

    #[test]
    fn empty_roster_is_allowed() {
        let roster = Roster::new(Vec::new(), today()).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn parses_json_documents() {
        let json = r#"{"employees":[{"id":4,"name":"Ada","jobTitle":"Engineer","salary":1,"startDate":"2001-02-03"}]}"#;
        let roster = Roster::from_yaml(json, today()).unwrap();
        assert_eq!(roster.employees().first().unwrap().name, "Ada");
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = Roster::from_yaml("employees: 12", today()).unwrap_err();
        assert!(matches!(err, RosterError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Roster::from_file(Path::new("/nonexistent/roster.yaml"), today()).unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }

    #[test]
    fn load_without_path_uses_builtin() {
        let roster = Roster::load(&RosterSection::default(), today()).unwrap();
        assert_eq!(roster.len(), 10);
    }
}
