//! Error types for the planning engine

use thiserror::Error;

/// Structural defects in major requirement configuration.
///
/// These indicate a configuration problem, never student-data sparsity:
/// sparse or unknown student data degrades gracefully (unknown codes count
/// as not completed, unknown majors yield a neutral report), but a
/// requirement group that is missing its shape must surface to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequirementError {
    /// A requirement group record lacks a field its type requires.
    #[error("requirement group '{group}' is missing its '{field}' field")]
    MissingField {
        /// Name of the defective group.
        group: String,
        /// The absent field.
        field: &'static str,
    },

    /// A requirement group declares a type the engine does not know.
    #[error("requirement group '{group}' has unrecognized type '{kind}'")]
    UnknownGroupType {
        /// Name of the defective group.
        group: String,
        /// The unrecognized type string.
        kind: String,
    },
}

/// Errors raised while loading planner data files at the CLI boundary.
///
/// The core itself never performs I/O; these only occur in the loaders
/// that materialize catalog, student, and majors files for it.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid JSON for the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The file was read but is not a valid TOML requirement table.
    #[error("invalid majors table: {0}")]
    Toml(#[from] toml::de::Error),
}

impl LoadError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
