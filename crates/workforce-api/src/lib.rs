//! HTTP API for the workforce analytics service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Analytical endpoints** over the employee roster (average salary by
//!   position, experience range, top earners, retention rate, salary
//!   range)
//! - **Roster browsing** (`/employees`, `/employees/{id}`)
//! - **Service endpoints** (`/health` and a minimal HTML index at `/`)
//!
//! # Architecture
//!
//! Every request reads the shared, immutable [`Roster`] held in
//! [`AppState`] and hands it to a pure derivation in
//! [`workforce_core::analytics`]. Nothing is cached or mutated between
//! requests, so identical requests always produce identical responses.
//!
//! [`Roster`]: workforce_core::Roster

pub mod error;
pub mod handlers;
pub mod params;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, serve, start_server};
pub use state::AppState;
