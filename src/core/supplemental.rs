//! Supplemental math course listing
//!
//! A static secondary course source for the special-track math sequence.
//! Its records are merged into lookups by course code; catalog-native
//! records always take precedence over entries here.

use crate::core::models::Course;

/// Credit count assigned when the listing omits one.
const DEFAULT_CREDITS: u32 = 4;

/// A raw record from the supplemental math listing
///
/// The listing uses `name` where the catalog uses `title`, and may omit
/// the credit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementalCourse {
    /// Course code, same scheme as the primary catalog
    pub code: &'static str,
    /// Course name (maps to catalog `title`)
    pub name: &'static str,
    /// Credit count, when the listing records one
    pub credits: Option<u32>,
}

impl SupplementalCourse {
    /// Normalize this record into the uniform catalog [`Course`] shape
    ///
    /// This is the single construction site for secondary-source defaults:
    /// prerequisites → empty, semesters offered → empty, credits → 4,
    /// difficulty → 0, description → empty.
    #[must_use]
    pub fn to_course(&self) -> Course {
        Course::new(
            self.code.to_string(),
            self.name.to_string(),
            self.credits.unwrap_or(DEFAULT_CREDITS),
        )
    }
}

/// The supplemental math listing itself.
const MATH_LISTING: &[SupplementalCourse] = &[
    SupplementalCourse {
        code: "MATH-UA.0009",
        name: "Algebra and Calculus",
        credits: Some(4),
    },
    SupplementalCourse {
        code: "MATH-UA.0120",
        name: "Discrete Mathematics",
        credits: Some(4),
    },
    SupplementalCourse {
        code: "MATH-UA.0121",
        name: "Calculus I",
        credits: Some(4),
    },
    SupplementalCourse {
        code: "MATH-UA.0122",
        name: "Calculus II",
        credits: Some(4),
    },
    SupplementalCourse {
        code: "MATH-UA.0123",
        name: "Calculus III",
        credits: Some(4),
    },
    SupplementalCourse {
        code: "MATH-UA.0140",
        name: "Linear Algebra",
        credits: Some(4),
    },
    SupplementalCourse {
        code: "MATH-UA.0233",
        name: "Theory of Probability",
        credits: None,
    },
    SupplementalCourse {
        code: "MATH-UA.0235",
        name: "Probability and Statistics",
        credits: Some(4),
    },
    SupplementalCourse {
        code: "MATH-UA.0325",
        name: "Analysis",
        credits: Some(4),
    },
    SupplementalCourse {
        code: "MATH-UA.0343",
        name: "Algebra",
        credits: None,
    },
];

/// Look up a course in the supplemental math listing by exact code
#[must_use]
pub fn math_course_info(code: &str) -> Option<&'static SupplementalCourse> {
    MATH_LISTING.iter().find(|course| course.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::PrereqExpr;

    #[test]
    fn test_lookup_by_exact_code() {
        let course = math_course_info("MATH-UA.0121").expect("listing has Calculus I");
        assert_eq!(course.name, "Calculus I");

        assert!(math_course_info("MATH-UA.9999").is_none());
        assert!(math_course_info("math-ua.0121").is_none());
    }

    #[test]
    fn test_normalization_maps_name_to_title() {
        let course = math_course_info("MATH-UA.0140")
            .expect("listing has Linear Algebra")
            .to_course();

        assert_eq!(course.course_code, "MATH-UA.0140");
        assert_eq!(course.title, "Linear Algebra");
        assert_eq!(course.credits, 4);
    }

    #[test]
    fn test_normalization_backfills_defaults() {
        let course = math_course_info("MATH-UA.0233")
            .expect("listing has Theory of Probability")
            .to_course();

        // Credits omitted in the listing fall back to 4.
        assert_eq!(course.credits, 4);
        assert_eq!(course.prerequisites, PrereqExpr::None);
        assert!(course.semester_offered.is_empty());
        assert!((course.difficulty - 0.0).abs() < f32::EPSILON);
        assert!(course.description.is_empty());
    }
}
