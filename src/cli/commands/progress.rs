//! Progress command handler

use course_planner::config::Config;
use course_planner::core::progress::progress;
use course_planner::error;
use std::path::Path;

/// Run the progress command: report progress toward a declared major.
///
/// # Arguments
/// * `catalog_path` - Path to the catalog JSON file
/// * `student_path` - Path to the student record JSON file
/// * `majors_path` - Optional majors table override
/// * `config` - Loaded configuration
/// * `verbose` - Whether to show detailed output
pub fn run(
    catalog_path: &Path,
    student_path: &Path,
    majors_path: Option<&Path>,
    config: &Config,
    verbose: bool,
) {
    if let Err(err) = report_single(catalog_path, student_path, majors_path, config, verbose) {
        error!("Progress report failed for {}: {err}", student_path.display());
        eprintln!("{err}");
    }
}

fn report_single(
    catalog_path: &Path,
    student_path: &Path,
    majors_path: Option<&Path>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let catalog = super::load_catalog(catalog_path, verbose)?;
    let student = super::load_student(student_path)?;
    let majors = super::resolve_major_table(majors_path, config)?;

    if !student.has_major() {
        println!("✗ No declared major on the student record; nothing to report.");
        return Ok(());
    }

    let report = progress(
        &student.major,
        &student.completed_courses,
        &catalog,
        &majors,
    )
    .map_err(|e| format!("✗ Requirement configuration defect: {e}"))?;

    println!("\n=== Major Progress: {} ===\n", report.major);
    println!(
        "Credits: {} completed of {} required",
        report.credits_completed, report.credits_required
    );

    if report.satisfied_groups.is_empty() && report.remaining_groups.is_empty() {
        println!("No requirement groups are configured for this major.");
        return Ok(());
    }

    for group in &report.satisfied_groups {
        println!("✓ {group}");
    }
    for remaining in &report.remaining_groups {
        println!(
            "✗ {} ({} more needed): {}",
            remaining.group,
            remaining.still_needed,
            remaining.missing_courses.join(", ")
        );
    }

    Ok(())
}
