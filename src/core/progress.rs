//! Major requirement progress tracking
//!
//! Walks a major's requirement tree against the completed-course set and
//! reports which groups are satisfied, what exactly is outstanding in the
//! rest, and aggregate credit progress. The remaining view reconstructs
//! the deficit (which codes, how many more pool picks) because the
//! downstream recommendation step consumes it to prioritize suggestions.

use crate::core::eligibility::resolve_course;
use crate::core::error::RequirementError;
use crate::core::models::{Catalog, GroupRule, MajorTable};
use serde::Serialize;
use std::collections::HashSet;

/// Outstanding work for one unsatisfied requirement group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemainingGroup {
    /// Name of the unsatisfied group
    pub group: String,

    /// Codes still needed: the missing courses of a required group, or
    /// the untaken candidates of a pool group
    pub missing_courses: Vec<String>,

    /// How many more selections are outstanding
    pub still_needed: usize,
}

/// Aggregate progress toward a declared major
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorProgress {
    /// The major this report covers
    pub major: String,

    /// Names of requirement groups already satisfied
    pub satisfied_groups: Vec<String>,

    /// Unsatisfied groups with their reconstructed deficits
    pub remaining_groups: Vec<RemainingGroup>,

    /// Credits earned from completed courses resolvable to a record
    pub credits_completed: u32,

    /// Total credits the major requires (0 for unknown majors)
    pub credits_required: u32,
}

/// Compute requirement progress for a major
///
/// Unknown majors yield a neutral report (no groups, zero required
/// credits) rather than an error: undeclared and nonstandard majors are
/// supported on purpose. Course codes referenced by a group but absent
/// from every source simply count as not completed.
///
/// # Arguments
/// * `major` - Declared major name
/// * `completed` - Course codes the student has completed
/// * `catalog` - Catalog snapshot used to resolve credits
/// * `majors` - The static requirement table
///
/// # Errors
/// Returns a [`RequirementError`] when a requirement group is
/// structurally defective (missing `type`/`courses`/`min_count` or an
/// unknown type). That indicates broken configuration, not sparse
/// student data, so it must reach the caller.
pub fn progress(
    major: &str,
    completed: &[String],
    catalog: &Catalog,
    majors: &MajorTable,
) -> Result<MajorProgress, RequirementError> {
    let completed_set: HashSet<String> = completed.iter().cloned().collect();
    let credits_completed = completed_credits(&completed_set, catalog);

    let Some(requirements) = majors.get(major) else {
        return Ok(MajorProgress {
            major: major.to_string(),
            satisfied_groups: Vec::new(),
            remaining_groups: Vec::new(),
            credits_completed,
            credits_required: 0,
        });
    };

    let mut satisfied_groups = Vec::new();
    let mut remaining_groups = Vec::new();

    for group in &requirements.groups {
        match group.rule()? {
            GroupRule::Required(courses) => {
                let missing: Vec<String> = courses
                    .iter()
                    .filter(|code| !completed_set.contains(*code))
                    .cloned()
                    .collect();

                if missing.is_empty() {
                    satisfied_groups.push(group.name.clone());
                } else {
                    let still_needed = missing.len();
                    remaining_groups.push(RemainingGroup {
                        group: group.name.clone(),
                        missing_courses: missing,
                        still_needed,
                    });
                }
            }
            GroupRule::Pool {
                candidates,
                min_count,
            } => {
                let taken = candidates
                    .iter()
                    .filter(|code| completed_set.contains(*code))
                    .count();

                if taken >= min_count {
                    satisfied_groups.push(group.name.clone());
                } else {
                    let untaken: Vec<String> = candidates
                        .iter()
                        .filter(|code| !completed_set.contains(*code))
                        .cloned()
                        .collect();
                    remaining_groups.push(RemainingGroup {
                        group: group.name.clone(),
                        missing_courses: untaken,
                        still_needed: min_count - taken,
                    });
                }
            }
        }
    }

    Ok(MajorProgress {
        major: major.to_string(),
        satisfied_groups,
        remaining_groups,
        credits_completed,
        credits_required: requirements.total_credits,
    })
}

/// Compute only the remaining-requirements view for a major
///
/// # Errors
/// Same failure mode as [`progress`]: structurally defective groups
pub fn remaining_requirements(
    major: &str,
    completed: &[String],
    catalog: &Catalog,
    majors: &MajorTable,
) -> Result<Vec<RemainingGroup>, RequirementError> {
    Ok(progress(major, completed, catalog, majors)?.remaining_groups)
}

/// Sum the credits of completed courses
///
/// Each code is resolved through the catalog with supplemental fallback;
/// codes absent from both sources contribute 0 rather than failing.
fn completed_credits(completed: &HashSet<String>, catalog: &Catalog) -> u32 {
    completed
        .iter()
        .filter_map(|code| resolve_course(code, catalog))
        .map(|course| course.credits)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, MajorRequirements, RequirementGroup};

    fn catalog() -> Catalog {
        Catalog::from_courses(vec![
            Course::new("CSCI-UA.0101".to_string(), "Intro to CS".to_string(), 4),
            Course::new("CSCI-UA.0102".to_string(), "Data Structures".to_string(), 4),
            Course::new("PHIL-UA.0001".to_string(), "Logic".to_string(), 3),
        ])
    }

    fn table_with(groups: Vec<RequirementGroup>, total_credits: u32) -> MajorTable {
        let mut table = MajorTable::new();
        table.insert(
            "Computer Science".to_string(),
            MajorRequirements {
                total_credits,
                groups,
            },
        );
        table
    }

    fn done(codes: &[&str]) -> Vec<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_required_group_reports_exact_deficit() {
        let table = table_with(
            vec![RequirementGroup::required(
                "Calculus",
                &["MATH-UA.0121", "MATH-UA.0122"],
            )],
            128,
        );

        let report = progress(
            "Computer Science",
            &done(&["MATH-UA.0121"]),
            &catalog(),
            &table,
        )
        .expect("well-formed table");

        assert!(report.satisfied_groups.is_empty());
        assert_eq!(report.remaining_groups.len(), 1);
        assert_eq!(
            report.remaining_groups[0].missing_courses,
            vec!["MATH-UA.0122"]
        );
        assert_eq!(report.remaining_groups[0].still_needed, 1);
    }

    #[test]
    fn test_required_group_satisfied() {
        let table = table_with(
            vec![RequirementGroup::required(
                "Intro",
                &["CSCI-UA.0101", "CSCI-UA.0102"],
            )],
            128,
        );

        let report = progress(
            "Computer Science",
            &done(&["CSCI-UA.0101", "CSCI-UA.0102"]),
            &catalog(),
            &table,
        )
        .expect("well-formed table");

        assert_eq!(report.satisfied_groups, vec!["Intro"]);
        assert!(report.remaining_groups.is_empty());
    }

    #[test]
    fn test_pool_group_counts_selections() {
        let table = table_with(
            vec![RequirementGroup::pool(
                "Electives",
                &["A", "B", "C", "D"],
                2,
            )],
            128,
        );

        let unmet = progress("Computer Science", &done(&["A"]), &catalog(), &table)
            .expect("well-formed table");
        assert_eq!(unmet.remaining_groups.len(), 1);
        assert_eq!(unmet.remaining_groups[0].still_needed, 1);
        assert_eq!(
            unmet.remaining_groups[0].missing_courses,
            vec!["B", "C", "D"]
        );

        let met = progress("Computer Science", &done(&["A", "C"]), &catalog(), &table)
            .expect("well-formed table");
        assert_eq!(met.satisfied_groups, vec!["Electives"]);
    }

    #[test]
    fn test_unknown_major_neutral_report() {
        let report = progress(
            "Undeclared-XYZ",
            &done(&["CSCI-UA.0101"]),
            &catalog(),
            &MajorTable::new(),
        )
        .expect("unknown majors are tolerated");

        assert!(report.satisfied_groups.is_empty());
        assert!(report.remaining_groups.is_empty());
        assert_eq!(report.credits_required, 0);
    }

    #[test]
    fn test_credits_sum_from_catalog() {
        let report = progress(
            "Undeclared-XYZ",
            &done(&["CSCI-UA.0101", "PHIL-UA.0001"]),
            &catalog(),
            &MajorTable::new(),
        )
        .expect("unknown majors are tolerated");

        assert_eq!(report.credits_completed, 7);
    }

    #[test]
    fn test_credits_use_supplemental_fallback() {
        // MATH-UA.0121 is not in the catalog fixture; the supplemental
        // listing supplies its 4 credits.
        let report = progress(
            "Undeclared-XYZ",
            &done(&["MATH-UA.0121"]),
            &catalog(),
            &MajorTable::new(),
        )
        .expect("unknown majors are tolerated");

        assert_eq!(report.credits_completed, 4);
    }

    #[test]
    fn test_unresolvable_codes_contribute_zero_credits() {
        let report = progress(
            "Undeclared-XYZ",
            &done(&["XXXX-UA.0000"]),
            &catalog(),
            &MajorTable::new(),
        )
        .expect("unknown codes never raise");

        assert_eq!(report.credits_completed, 0);
    }

    #[test]
    fn test_duplicate_completions_count_once() {
        let report = progress(
            "Undeclared-XYZ",
            &done(&["CSCI-UA.0101", "CSCI-UA.0101"]),
            &catalog(),
            &MajorTable::new(),
        )
        .expect("duplicates collapse");

        assert_eq!(report.credits_completed, 4);
    }

    #[test]
    fn test_unknown_codes_in_group_count_as_not_completed() {
        let table = table_with(
            vec![RequirementGroup::required("Ghost", &["GHOST-UA.0001"])],
            128,
        );

        let report = progress("Computer Science", &[], &catalog(), &table)
            .expect("unknown referenced codes never raise");

        assert_eq!(
            report.remaining_groups[0].missing_courses,
            vec!["GHOST-UA.0001"]
        );
    }

    #[test]
    fn test_structural_defect_surfaces() {
        let mut bad = RequirementGroup::required("Broken", &["A"]);
        bad.kind = None;
        let table = table_with(vec![bad], 128);

        let err = progress("Computer Science", &[], &catalog(), &table)
            .expect_err("defective groups must surface");

        assert_eq!(
            err,
            RequirementError::MissingField {
                group: "Broken".to_string(),
                field: "type",
            }
        );
    }

    #[test]
    fn test_remaining_requirements_view() {
        let table = table_with(
            vec![
                RequirementGroup::required("Intro", &["CSCI-UA.0101"]),
                RequirementGroup::required("Theory", &["CSCI-UA.0310"]),
            ],
            128,
        );

        let remaining = remaining_requirements(
            "Computer Science",
            &done(&["CSCI-UA.0101"]),
            &catalog(),
            &table,
        )
        .expect("well-formed table");

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].group, "Theory");
    }
}
