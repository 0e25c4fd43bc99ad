//! Core module for the planning engine
//!
//! Everything here is a pure transformation over in-memory values: the
//! catalog snapshot and the major requirement table are passed in as
//! parameters, never held as process-wide handles.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod models;
pub mod progress;
pub mod recommend;
pub mod supplemental;

/// Returns the current version of the `course-planner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
