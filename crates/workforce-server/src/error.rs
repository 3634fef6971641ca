//! Error types for the server binary.
//!
//! [`AppError`] is the top-level error type that wraps every failure mode
//! during startup and serving.

/// Top-level error for the server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: workforce_core::ConfigError,
    },

    /// The employee roster could not be built.
    #[error("roster error: {source}")]
    Roster {
        /// The underlying roster error.
        #[from]
        source: workforce_core::RosterError,
    },

    /// The HTTP server failed to bind or crashed.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: workforce_api::ServerError,
    },
}
