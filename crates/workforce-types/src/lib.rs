//! Shared type definitions for the workforce analytics service.
//!
//! This crate is the single source of truth for the data model served by
//! the API. Types defined here flow downstream to `TypeScript` via `ts-rs`
//! so dashboard clients consume the same shapes the server emits.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifier wrapper for employees
//! - [`employee`] -- The immutable [`Employee`] record
//! - [`views`] -- Response shapes for aggregate and listing endpoints

pub mod employee;
pub mod ids;
pub mod views;

// Re-export all public types at crate root for convenience.
pub use employee::Employee;
pub use ids::EmployeeId;
pub use views::{AverageSalaries, EmployeeList, ErrorBody, RetentionRates};

#[cfg(test)]
mod tests {
    //! Type export checks and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs writes the bindings to `bindings/` relative to the crate
        // root when `export_all` is invoked.
        use ts_rs::TS;

        let _ = crate::ids::EmployeeId::export_all();
        let _ = crate::employee::Employee::export_all();
        let _ = crate::views::EmployeeList::export_all();
        let _ = crate::views::ErrorBody::export_all();
    }
}
