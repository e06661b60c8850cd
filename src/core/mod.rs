//! Core module: curriculum models, grade ledger and GPA aggregation

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod gradebook;
pub mod ledger;
pub mod models;
pub mod report;
pub mod shell;

/// Returns the current version of the `cgpa-calc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
