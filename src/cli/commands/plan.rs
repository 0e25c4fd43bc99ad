//! Plan command handler

use course_planner::config::Config;
use course_planner::core::eligibility::available_courses;
use course_planner::core::recommend::build_recommendation_input;
use course_planner::error;
use std::path::Path;

/// Run the plan command: list the courses a student may take in a semester.
///
/// # Arguments
/// * `catalog_path` - Path to the catalog JSON file
/// * `student_path` - Path to the student record JSON file
/// * `semester` - Target semester tag
/// * `majors_path` - Optional majors table override
/// * `json` - Emit the full recommendation payload as JSON
/// * `career_path` - Career path carried into the payload
/// * `side_interests` - Side interests carried into the payload
/// * `config` - Loaded configuration
/// * `verbose` - Whether to show detailed output
#[allow(clippy::too_many_arguments)]
pub fn run(
    catalog_path: &Path,
    student_path: &Path,
    semester: &str,
    majors_path: Option<&Path>,
    json: bool,
    career_path: &str,
    side_interests: &[String],
    config: &Config,
    verbose: bool,
) {
    if let Err(err) = plan_single(
        catalog_path,
        student_path,
        semester,
        majors_path,
        json,
        career_path,
        side_interests,
        config,
        verbose,
    ) {
        error!("Plan failed for {}: {err}", student_path.display());
        eprintln!("{err}");
    }
}

#[allow(clippy::too_many_arguments)]
fn plan_single(
    catalog_path: &Path,
    student_path: &Path,
    semester: &str,
    majors_path: Option<&Path>,
    json: bool,
    career_path: &str,
    side_interests: &[String],
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let catalog = super::load_catalog(catalog_path, verbose)?;
    let student = super::load_student(student_path)?;
    let majors = super::resolve_major_table(majors_path, config)?;

    if json {
        let payload = build_recommendation_input(
            &student,
            career_path,
            side_interests,
            semester,
            &catalog,
            &majors,
            config,
        )
        .map_err(|e| format!("✗ Requirement configuration defect: {e}"))?;

        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|e| format!("✗ Failed to serialize payload: {e}"))?;
        println!("{rendered}");
        return Ok(());
    }

    let major = student.has_major().then_some(student.major.as_str());
    let eligible = available_courses(&student.completed_courses, semester, &catalog, major);

    if eligible.is_empty() {
        println!(
            "✗ No eligible courses found for {semester}. The student may have completed \
             all available courses, or nothing is offered in this semester."
        );
        return Ok(());
    }

    println!(
        "✓ {} eligible course(s) for {} in {semester}:",
        eligible.len(),
        if student.name.is_empty() {
            "student"
        } else {
            student.name.as_str()
        }
    );
    for course in &eligible {
        println!(
            "  {}  {} ({} cr)",
            course.course_code, course.title, course.credits
        );
    }

    Ok(())
}
