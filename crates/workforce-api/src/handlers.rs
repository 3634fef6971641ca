//! REST API endpoint handlers.
//!
//! All handlers read from the immutable roster in the shared
//! [`AppState`] and delegate the computation to
//! [`workforce_core::analytics`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/health` | Liveness and roster size |
//! | `GET` | `/employees` | Full roster |
//! | `GET` | `/employees/{id}` | Single employee |
//! | `GET` | `/average-salary-by-position` | Mean salary per job title |
//! | `GET` | `/employees-by-experience/{minExp}/{maxExp}` | Tenure filter |
//! | `GET` | `/top-earners` | Highest salaries first |
//! | `GET` | `/employee-retention-rate` | Retention per job title |
//! | `GET` | `/employees-by-salary-range` | Salary filter |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse};
use workforce_core::analytics;
use workforce_types::{AverageSalaries, Employee, EmployeeList, RetentionRates};

use crate::error::ApiError;
use crate::params::{
    self, EMPLOYEE_ID_MESSAGE, EXPERIENCE_MESSAGE, RETENTION_MESSAGE, RetentionQuery,
    SALARY_RANGE_MESSAGE, SalaryRangeQuery, TOP_EARNERS_MESSAGE, TopEarnersQuery, rejected,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing the roster size and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let employee_count = state.roster.len();
    let today = state.today();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Workforce Analytics</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        li::before {{ content: "GET "; color: #7ee787; font-weight: bold; }}
    </style>
</head>
<body>
    <h1>Workforce Analytics</h1>
    <p class="subtitle">Read-only salary and tenure views over the employee roster</p>

    <div>
        <div class="metric">
            <div class="label">Employees</div>
            <div class="value">{employee_count}</div>
        </div>
        <div class="metric">
            <div class="label">Evaluated on</div>
            <div class="value">{today}</div>
        </div>
    </div>

    <h2>API Endpoints</h2>
    <ul>
        <li><a href="/employees">/employees</a> -- Full roster</li>
        <li><a href="/employees/1">/employees/{{id}}</a> -- Single employee</li>
        <li><a href="/average-salary-by-position">/average-salary-by-position</a> -- Mean salary per job title</li>
        <li><a href="/employees-by-experience/2/5">/employees-by-experience/{{minExp}}/{{maxExp}}</a> -- Tenure filter</li>
        <li><a href="/top-earners?n=3">/top-earners?n=3</a> -- Highest salaries first</li>
        <li><a href="/employee-retention-rate?startYear=2020&amp;endYear=2022">/employee-retention-rate?startYear=&amp;endYear=</a> -- Retention per job title</li>
        <li><a href="/employees-by-salary-range?minSalary=90000&amp;maxSalary=100000">/employees-by-salary-range?minSalary=&amp;maxSalary=</a> -- Salary filter</li>
        <li><a href="/health">/health</a> -- Liveness</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Report liveness, roster size, and the crate version.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "employees": state.roster.len(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// GET /employees, GET /employees/{id}
// ---------------------------------------------------------------------------

/// List the whole roster in collection order.
pub async fn list_employees(State(state): State<Arc<AppState>>) -> Json<EmployeeList> {
    Json(EmployeeList::new(state.roster.employees().to_vec()))
}

/// Return a single employee record.
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    id_str: Result<Path<String>, PathRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Path(id_str) = id_str.map_err(rejected(EMPLOYEE_ID_MESSAGE))?;
    let id = params::employee_id(&id_str)?;
    let employee = state
        .roster
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("employee {id} not found")))?;
    Ok(Json(employee.clone()))
}

// ---------------------------------------------------------------------------
// GET /average-salary-by-position
// ---------------------------------------------------------------------------

/// Mean salary keyed by job title.
pub async fn average_salary_by_position(
    State(state): State<Arc<AppState>>,
) -> Json<AverageSalaries> {
    Json(analytics::average_salary_by_position(
        state.roster.employees(),
    ))
}

// ---------------------------------------------------------------------------
// GET /employees-by-experience/{minExp}/{maxExp}
// ---------------------------------------------------------------------------

/// Employees whose whole-year tenure lies in the inclusive range.
///
/// Both path segments must be integers; an inverted range returns `[]`.
pub async fn employees_by_experience(
    State(state): State<Arc<AppState>>,
    segments: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let Path((min_exp, max_exp)) = segments.map_err(rejected(EXPERIENCE_MESSAGE))?;
    let (min_years, max_years) = params::experience_bounds(&min_exp, &max_exp)?;
    Ok(Json(analytics::employees_by_experience(
        state.roster.employees(),
        min_years,
        max_years,
        state.today(),
    )))
}

// ---------------------------------------------------------------------------
// GET /top-earners?n=
// ---------------------------------------------------------------------------

/// The `n` highest-paid employees, highest first.
pub async fn top_earners(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TopEarnersQuery>, QueryRejection>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let Query(query) = query.map_err(rejected(TOP_EARNERS_MESSAGE))?;
    let n = query.count()?;
    Ok(Json(analytics::top_earners(state.roster.employees(), n)))
}

// ---------------------------------------------------------------------------
// GET /employee-retention-rate?startYear=&endYear=
// ---------------------------------------------------------------------------

/// Retention percentage per job title between two years.
pub async fn employee_retention_rate(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RetentionQuery>, QueryRejection>,
) -> Result<Json<RetentionRates>, ApiError> {
    let Query(query) = query.map_err(rejected(RETENTION_MESSAGE))?;
    let (start_year, end_year) = query.years()?;
    Ok(Json(analytics::retention_rate_by_position(
        state.roster.employees(),
        start_year,
        end_year,
    )))
}

// ---------------------------------------------------------------------------
// GET /employees-by-salary-range?minSalary=&maxSalary=
// ---------------------------------------------------------------------------

/// Employees whose salary lies in the inclusive range.
pub async fn employees_by_salary_range(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SalaryRangeQuery>, QueryRejection>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let Query(query) = query.map_err(rejected(SALARY_RANGE_MESSAGE))?;
    let (min_salary, max_salary) = query.bounds()?;
    Ok(Json(analytics::employees_by_salary_range(
        state.roster.employees(),
        min_salary,
        max_salary,
    )))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Answer unknown routes with the standard error body.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
