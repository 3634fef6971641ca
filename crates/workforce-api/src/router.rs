//! Axum router construction for the API.
//!
//! Assembles all routes into a single [`Router`] with request tracing and
//! CORS middleware enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the API server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /health` -- liveness and roster size
/// - `GET /employees` -- full roster
/// - `GET /employees/{id}` -- single employee
/// - `GET /average-salary-by-position` -- mean salary per job title
/// - `GET /employees-by-experience/{minExp}/{maxExp}` -- tenure filter
/// - `GET /top-earners?n=` -- highest salaries first
/// - `GET /employee-retention-rate?startYear=&endYear=` -- retention per job title
/// - `GET /employees-by-salary-range?minSalary=&maxSalary=` -- salary filter
///
/// Anything else answers 404 with the standard error body.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        // Status
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        // Roster
        .route("/employees", get(handlers::list_employees))
        .route("/employees/{id}", get(handlers::get_employee))
        // Analytics
        .route(
            "/average-salary-by-position",
            get(handlers::average_salary_by_position),
        )
        .route(
            "/employees-by-experience/{min_exp}/{max_exp}",
            get(handlers::employees_by_experience),
        )
        .route("/top-earners", get(handlers::top_earners))
        .route("/employee-retention-rate", get(handlers::employee_retention_rate))
        .route(
            "/employees-by-salary-range",
            get(handlers::employees_by_salary_range),
        )
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
