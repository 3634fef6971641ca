//! Employee roster, analytical derivations, and service configuration.
//!
//! This crate owns everything the HTTP layer computes over: the immutable
//! employee store and the pure functions that turn it into derived views.
//!
//! # Modules
//!
//! - [`analytics`] -- Pure aggregations and filters over a slice of
//!   employees (average salary, experience range, top earners,
//!   retention rate, salary range).
//! - [`clock`] -- [`Clock`] trait supplying the evaluation date used for
//!   tenure, with system and fixed implementations.
//! - [`config`] -- Configuration loading from `workforce-config.yaml` into
//!   strongly-typed structs, with environment overrides.
//! - [`roster`] -- The validated, shared, read-only employee store.
//!
//! [`Clock`]: clock::Clock

pub mod analytics;
pub mod clock;
pub mod config;
pub mod roster;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, ServiceConfig};
pub use roster::{Roster, RosterError};
