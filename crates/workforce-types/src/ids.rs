//! Type-safe identifier wrapper for employee records.
//!
//! Employee identifiers are small positive integers assigned by whoever
//! authors the roster. The newtype keeps them from being confused with
//! salaries, years, or counts at compile time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unique identifier for an employee in the roster.
///
/// Serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EmployeeId(pub u32);

impl EmployeeId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Return the inner integer value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }

    /// Whether the identifier satisfies the positive-integer invariant.
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl core::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EmployeeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<EmployeeId> for u32 {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_valid_id() {
        assert!(!EmployeeId::new(0).is_valid());
        assert!(EmployeeId::new(1).is_valid());
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&EmployeeId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: EmployeeId = serde_json::from_str("7").unwrap();
        assert_eq!(back, EmployeeId::from(7));
    }
}
