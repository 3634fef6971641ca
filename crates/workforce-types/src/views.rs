//! Response shapes for the aggregate and listing endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::employee::Employee;

/// Mean salary keyed by job title.
pub type AverageSalaries = BTreeMap<String, f64>;

/// Retention percentage keyed by job title.
pub type RetentionRates = BTreeMap<String, f64>;

/// Body of `GET /employees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EmployeeList {
    /// Number of records in `employees`.
    pub count: usize,
    /// Records in roster order.
    pub employees: Vec<Employee>,
}

impl EmployeeList {
    /// Wrap a list of records, filling in the count.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            count: employees.len(),
            employees,
        }
    }
}

/// Body of every error response: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ErrorBody {
    /// Human-readable description of what went wrong.
    pub error: String,
}
