//! Shared application state for the API server.
//!
//! [`AppState`] holds the immutable employee roster and the clock used to
//! evaluate tenure. It is wrapped in [`Arc`] and injected into handlers
//! through Axum's `State` extractor. There is no lock: nothing in the
//! service writes to the roster after startup.

use std::sync::Arc;

use chrono::NaiveDate;
use workforce_core::{Clock, Roster};

/// Shared state for the Axum application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The canonical employee store.
    pub roster: Roster,
    /// Source of the evaluation date for tenure calculations.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create state from a roster and an explicit clock.
    pub fn new(roster: Roster, clock: Arc<dyn Clock>) -> Self {
        Self { roster, clock }
    }

    /// The evaluation date for the current request.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
