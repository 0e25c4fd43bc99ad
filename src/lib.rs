//! Shared library for `course-planner`
//! Contains the eligibility, prerequisite-resolution, and requirement-progress
//! engine used by the CLI

pub mod core;
pub mod logger;

pub use self::core::config;
pub use self::core::get_version;
