//! Course eligibility filtering
//!
//! Composes completion filtering, semester-availability filtering, and
//! prerequisite evaluation into the list of courses a student may take in
//! a target semester. Pure over its inputs: the catalog snapshot is a
//! parameter and nothing here retains state between calls.

use crate::core::models::{Catalog, Course};
use crate::core::supplemental::{self, SupplementalCourse};
use crate::debug;
use std::collections::HashSet;

/// Remove courses the student has already completed
///
/// # Arguments
/// * `courses` - Candidate course records
/// * `completed` - Course codes the student has completed
///
/// # Returns
/// References to the courses not yet completed, in input order
#[must_use]
pub fn filter_completed<'a>(courses: &'a [Course], completed: &[String]) -> Vec<&'a Course> {
    let completed_set: HashSet<&str> = completed.iter().map(String::as_str).collect();
    courses
        .iter()
        .filter(|course| !completed_set.contains(course.course_code.as_str()))
        .collect()
}

/// Compute the courses a student may take in a target semester
///
/// A course is eligible when all three hold:
/// 1. the student has not completed it,
/// 2. it is offered in `target_semester` (exact tag membership; a cohort
///    tag like "Freshman Fall" never matches generic "Fall"),
/// 3. its prerequisite expression is satisfied by the completed set.
///
/// The declared major never narrows this list. That is a deliberate
/// policy, not an oversight: courses outside the major stay visible so
/// electives can be surfaced; the major only shapes the separately
/// reported progress view.
///
/// # Arguments
/// * `completed` - Course codes the student has completed
/// * `target_semester` - Semester tag eligibility is computed for
/// * `catalog` - Catalog snapshot for this planning request
/// * `major` - Declared major, if any (informational only)
///
/// # Returns
/// Eligible courses in catalog order; empty when nothing survives
#[must_use]
pub fn available_courses<'a>(
    completed: &[String],
    target_semester: &str,
    catalog: &'a Catalog,
    major: Option<&str>,
) -> Vec<&'a Course> {
    if let Some(major) = major {
        debug!("major '{major}' recorded; majors never narrow the eligible list");
    }

    let completed_set: HashSet<String> = completed.iter().cloned().collect();

    catalog
        .courses()
        .iter()
        .filter(|course| !completed_set.contains(&course.course_code))
        .filter(|course| course.offered_in(target_semester))
        .filter(|course| course.prerequisites.is_satisfied(&completed_set))
        .collect()
}

/// Resolve a course code against the catalog, falling back to the
/// supplemental math listing
///
/// Catalog-native records take precedence. A supplemental record is
/// normalized into the uniform [`Course`] shape on the way out, so every
/// resolved course looks the same to callers.
///
/// # Arguments
/// * `code` - Course code to resolve
/// * `catalog` - Catalog snapshot for this planning request
///
/// # Returns
/// The resolved course, or `None` if the code is absent from both sources
#[must_use]
pub fn resolve_course(code: &str, catalog: &Catalog) -> Option<Course> {
    if let Some(course) = catalog.get(code) {
        return Some(course.clone());
    }
    supplemental::math_course_info(code).map(SupplementalCourse::to_course)
}
