//! Pure derivations over the employee collection.
//!
//! Every function here takes the collection by shared reference and
//! returns a fresh value; none of them reorder or otherwise touch the
//! input. Filters preserve collection order.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use workforce_types::{AverageSalaries, Employee, RetentionRates};

/// Arithmetic mean of `salary` for each distinct `job_title`.
///
/// Keys are exactly the job titles present in `employees`, so every group
/// has at least one member.
pub fn average_salary_by_position(employees: &[Employee]) -> AverageSalaries {
    let mut groups: BTreeMap<&str, (u128, u64)> = BTreeMap::new();
    for employee in employees {
        let (total, count) = groups.entry(employee.job_title.as_str()).or_default();
        *total = total.saturating_add(u128::from(employee.salary));
        *count = count.saturating_add(1);
    }
    groups
        .into_iter()
        .map(|(title, (total, count))| (title.to_owned(), ratio(total, count)))
        .collect()
}

/// Employees whose whole-year tenure on `today` lies in
/// `[min_years, max_years]`.
///
/// An inverted range matches nothing.
pub fn employees_by_experience(
    employees: &[Employee],
    min_years: i64,
    max_years: i64,
    today: NaiveDate,
) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| (min_years..=max_years).contains(&i64::from(e.tenure_years(today))))
        .cloned()
        .collect()
}

/// The `n` best-paid employees, highest salary first.
///
/// Equal salaries keep their collection order. Asking for more than the
/// collection holds returns all of it.
pub fn top_earners(employees: &[Employee], n: usize) -> Vec<Employee> {
    let mut ranked = employees.to_vec();
    // stable: ties stay in roster order
    ranked.sort_by_key(|e| Reverse(e.salary));
    ranked.truncate(n);
    ranked
}

/// Per-position retention between two years, as a percentage.
///
/// The cohort of a position is everyone holding it who joined in or before
/// `start_year`; the retained share is the part of that cohort that had
/// joined in or before `end_year`. Positions with an empty cohort are left
/// out.
pub fn retention_rate_by_position(
    employees: &[Employee],
    start_year: i32,
    end_year: i32,
) -> RetentionRates {
    let mut groups: BTreeMap<&str, (u128, u64)> = BTreeMap::new();
    for employee in employees.iter().filter(|e| e.start_year() <= start_year) {
        let (retained, cohort) = groups.entry(employee.job_title.as_str()).or_default();
        *cohort = cohort.saturating_add(1);
        if employee.start_year() <= end_year {
            *retained = retained.saturating_add(1);
        }
    }
    groups
        .into_iter()
        .map(|(title, (retained, cohort))| {
            (title.to_owned(), ratio(retained.saturating_mul(100), cohort))
        })
        .collect()
}

/// Employees whose salary lies in `[min_salary, max_salary]`.
///
/// Bounds are signed so a negative lower bound is simply permissive.
pub fn employees_by_salary_range(
    employees: &[Employee],
    min_salary: i64,
    max_salary: i64,
) -> Vec<Employee> {
    let bounds = i128::from(min_salary)..=i128::from(max_salary);
    employees
        .iter()
        .filter(|e| bounds.contains(&i128::from(e.salary)))
        .cloned()
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: u128, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
