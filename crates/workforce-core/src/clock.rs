//! Evaluation date for tenure calculations.
//!
//! Tenure is measured against "today". Handlers never read the system time
//! directly; they ask the [`Clock`] held in application state, so tests can
//! pin the date and get stable answers.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Send + Sync + core::fmt::Debug {
    /// The date that counts as "today" for this evaluation.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// Pin the clock to `today`.
    pub const fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_never_moves() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let clock = FixedClock::new(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn system_clock_is_after_the_default_roster() {
        let floor = NaiveDate::from_ymd_opt(2022, 9, 30).unwrap();
        assert!(SystemClock.today() > floor);
    }
}
