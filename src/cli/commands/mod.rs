//! CLI command handlers for `course-planner`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod plan;
pub mod progress;

use course_planner::config::Config;
use course_planner::core::models::{Catalog, MajorTable, Student};
use course_planner::{error, info};
use std::fs;
use std::path::Path;

/// Resolve the majors requirement table for a command
///
/// Precedence: an explicit `--majors` path, then the config `majors_file`,
/// then the compiled-in table.
pub fn resolve_major_table(
    majors_path: Option<&Path>,
    config: &Config,
) -> Result<MajorTable, String> {
    if let Some(path) = majors_path {
        return MajorTable::load(path).map_err(|e| format!("✗ Failed to load majors table: {e}"));
    }
    if !config.paths.majors_file.is_empty() {
        return MajorTable::load(&config.paths.majors_file)
            .map_err(|e| format!("✗ Failed to load majors table: {e}"));
    }
    Ok(MajorTable::from_defaults())
}

/// Load a catalog JSON file for a command
pub fn load_catalog(path: &Path, verbose: bool) -> Result<Catalog, String> {
    let catalog = Catalog::load(path).map_err(|e| {
        error!("Failed to load catalog {}: {e}", path.display());
        format!("✗ Failed to load {}: {e}", path.display())
    })?;

    if verbose {
        println!(
            "✓ Catalog loaded successfully from: {} ({} courses)",
            path.display(),
            catalog.len()
        );
    } else {
        info!("Catalog loaded: {}", path.display());
    }

    Ok(catalog)
}

/// Load a student record JSON file for a command
pub fn load_student(path: &Path) -> Result<Student, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("✗ Failed to load {}: {e}", path.display()))?;
    Student::from_json_str(&content).map_err(|e| {
        error!("Failed to parse student record {}: {e}", path.display());
        format!("✗ Invalid student record {}: {e}", path.display())
    })
}
