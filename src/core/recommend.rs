//! Recommendation payload assembly
//!
//! Composes the eligibility filter and the progress tracker into the
//! single outbound value the recommendation-generation collaborator
//! consumes. Nothing here ranks, scores, or explains courses; that is
//! the collaborator's job. This module only materializes its input.

use crate::core::config::Config;
use crate::core::eligibility::available_courses;
use crate::core::error::RequirementError;
use crate::core::models::{Catalog, Course, MajorTable, Student};
use crate::core::progress::{progress, MajorProgress, RemainingGroup};
use serde::Serialize;

/// Student context carried into the recommendation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentInfo {
    /// Display name
    pub name: String,
    /// Declared major (empty when undeclared)
    pub major: String,
    /// Class year
    pub year: String,
    /// Completed course codes
    pub completed_courses: Vec<String>,
    /// Standing interests from the student record
    pub interests: Vec<String>,
    /// Career path supplied with this request
    pub career_path: String,
    /// Side interests supplied with this request
    pub side_interests: Vec<String>,
}

/// Semester context carried into the recommendation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemesterInfo {
    /// Target semester tag
    pub semester: String,
    /// Minimum credits to aim for
    pub target_credits_min: u32,
    /// Maximum credits to aim for
    pub target_credits_max: u32,
}

/// The outbound payload for the recommendation collaborator
///
/// This is the shape downstream prompting consumes verbatim; it is
/// recomputed per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationInput {
    /// Courses the student may take, in catalog order
    pub eligible_courses: Vec<Course>,
    /// Progress toward the declared major, when one is declared
    pub major_progress: Option<MajorProgress>,
    /// Outstanding requirement deficits, when a major is declared
    pub remaining_requirements: Vec<RemainingGroup>,
    /// Student context
    pub student: StudentInfo,
    /// Semester context with the configured credit-target window
    pub semester: SemesterInfo,
}

/// Build the recommendation payload for one planning request
///
/// Eligibility ignores the major (electives stay visible); the major
/// only populates the progress and remaining-requirements views. An
/// undeclared major leaves both views empty.
///
/// # Arguments
/// * `student` - The student record
/// * `career_path` - Career path supplied with this request
/// * `side_interests` - Side interests supplied with this request
/// * `target_semester` - Semester tag to plan for
/// * `catalog` - Catalog snapshot for this request
/// * `majors` - The static requirement table
/// * `config` - Planner configuration (credit-target window)
///
/// # Errors
/// Returns a [`RequirementError`] when the declared major's requirement
/// configuration is structurally defective
pub fn build_recommendation_input(
    student: &Student,
    career_path: &str,
    side_interests: &[String],
    target_semester: &str,
    catalog: &Catalog,
    majors: &MajorTable,
    config: &Config,
) -> Result<RecommendationInput, RequirementError> {
    let major = student.has_major().then_some(student.major.as_str());

    let eligible_courses: Vec<Course> =
        available_courses(&student.completed_courses, target_semester, catalog, major)
            .into_iter()
            .cloned()
            .collect();

    let major_progress = match major {
        Some(major) => Some(progress(
            major,
            &student.completed_courses,
            catalog,
            majors,
        )?),
        None => None,
    };
    let remaining_requirements = major_progress
        .as_ref()
        .map(|p| p.remaining_groups.clone())
        .unwrap_or_default();

    Ok(RecommendationInput {
        eligible_courses,
        major_progress,
        remaining_requirements,
        student: StudentInfo {
            name: student.name.clone(),
            major: student.major.clone(),
            year: student.year.clone(),
            completed_courses: student.completed_courses.clone(),
            interests: student.interests.clone(),
            career_path: career_path.to_string(),
            side_interests: side_interests.to_vec(),
        },
        semester: SemesterInfo {
            semester: target_semester.to_string(),
            target_credits_min: config.planning.target_credits_min,
            target_credits_max: config.planning.target_credits_max,
        },
    })
}
