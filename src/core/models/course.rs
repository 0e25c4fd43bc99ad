//! Course model and prerequisite expressions

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw prerequisite field as it appears in catalog records.
///
/// Legacy records store a bare list of course codes (any one suffices);
/// newer records store a `{logic, courses}` node with a single level of
/// logic. Anything else is captured as `Other` so a bad expression never
/// fails the whole catalog load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawPrereq {
    Codes(Vec<String>),
    Node {
        logic: String,
        courses: Vec<String>,
    },
    Other(serde_json::Value),
}

/// A course's prerequisite expression, folded into a closed sum type at the
/// catalog-load boundary.
///
/// Expressions are single-level only: there is no nesting of AND under OR
/// or vice versa. That is a recorded limitation of the catalog data model,
/// not something to extend here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPrereq", into = "RawPrereq")]
pub enum PrereqExpr {
    /// No prerequisite; always satisfied.
    #[default]
    None,
    /// Satisfied when at least one listed code has been completed.
    AnyOf(Vec<String>),
    /// Satisfied only when every listed code has been completed.
    AllOf(Vec<String>),
    /// Unparseable expression; never satisfied (fails closed).
    Malformed,
}

impl From<RawPrereq> for PrereqExpr {
    fn from(raw: RawPrereq) -> Self {
        match raw {
            RawPrereq::Codes(codes) => {
                if codes.is_empty() {
                    Self::None
                } else {
                    Self::AnyOf(codes)
                }
            }
            RawPrereq::Node { logic, courses } => {
                if courses.is_empty() {
                    Self::None
                } else if logic.eq_ignore_ascii_case("and") {
                    Self::AllOf(courses)
                } else {
                    // Unknown logic keywords degrade to OR.
                    Self::AnyOf(courses)
                }
            }
            // An explicit null is an absent expression, not a malformed one.
            RawPrereq::Other(serde_json::Value::Null) => Self::None,
            RawPrereq::Other(_) => Self::Malformed,
        }
    }
}

impl From<PrereqExpr> for RawPrereq {
    fn from(expr: PrereqExpr) -> Self {
        match expr {
            PrereqExpr::None => Self::Codes(Vec::new()),
            PrereqExpr::AnyOf(codes) => Self::Codes(codes),
            PrereqExpr::AllOf(courses) => Self::Node {
                logic: "and".to_string(),
                courses,
            },
            PrereqExpr::Malformed => Self::Other(serde_json::Value::Null),
        }
    }
}

impl PrereqExpr {
    /// Decide whether this expression is satisfied by a completed-course set.
    ///
    /// Course codes are compared exactly; only *completed* courses count.
    /// Malformed expressions are never satisfied.
    #[must_use]
    pub fn is_satisfied(&self, completed: &HashSet<String>) -> bool {
        match self {
            Self::None => true,
            Self::AnyOf(codes) => codes.iter().any(|code| completed.contains(code)),
            Self::AllOf(codes) => codes.iter().all(|code| completed.contains(code)),
            Self::Malformed => false,
        }
    }

    /// Returns `true` when no prerequisite is recorded.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Represents one course in the catalog
///
/// Identity is the course code; two records with the same code describe
/// the same course. Records are immutable for the duration of a planning
/// request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, the unique key (e.g., "CSCI-UA.0101")
    pub course_code: String,

    /// Course title (e.g., "Introduction to Computer Science")
    #[serde(default)]
    pub title: String,

    /// Credit count
    #[serde(default)]
    pub credits: u32,

    /// Prerequisite expression, folded from either wire form
    #[serde(default)]
    pub prerequisites: PrereqExpr,

    /// Semester tags this course is offered in. Tags are exact strings:
    /// a cohort tag like "Freshman Fall" is distinct from "Fall".
    #[serde(default)]
    pub semester_offered: Vec<String>,

    /// Advisory difficulty rating; never affects eligibility
    #[serde(default)]
    pub difficulty: f32,

    /// Course description
    #[serde(default)]
    pub description: String,
}

impl Course {
    /// Create a new course with no prerequisites and no offerings
    ///
    /// # Arguments
    /// * `course_code` - Unique course code
    /// * `title` - Full course title
    /// * `credits` - Credit count
    #[must_use]
    pub const fn new(course_code: String, title: String, credits: u32) -> Self {
        Self {
            course_code,
            title,
            credits,
            prerequisites: PrereqExpr::None,
            semester_offered: Vec::new(),
            difficulty: 0.0,
            description: String::new(),
        }
    }

    /// Whether this course is offered in the given semester tag
    ///
    /// Membership is an exact tag match; "Freshman Fall" matches only
    /// "Freshman Fall", never generic "Fall".
    #[must_use]
    pub fn offered_in(&self, semester: &str) -> bool {
        self.semester_offered.iter().any(|tag| tag == semester)
    }

    /// Add a semester tag to the offering list
    pub fn add_offering(&mut self, semester: String) {
        if !self.semester_offered.contains(&semester) {
            self.semester_offered.push(semester);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(codes: &[&str]) -> HashSet<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "CSCI-UA.0101".to_string(),
            "Introduction to Computer Science".to_string(),
            4,
        );

        assert_eq!(course.course_code, "CSCI-UA.0101");
        assert_eq!(course.title, "Introduction to Computer Science");
        assert_eq!(course.credits, 4);
        assert!(course.prerequisites.is_none());
        assert!(course.semester_offered.is_empty());
    }

    #[test]
    fn test_offered_in_exact_tag() {
        let mut course = Course::new("CSCI-UA.0101".to_string(), "Intro".to_string(), 4);
        course.add_offering("Freshman Fall".to_string());

        assert!(course.offered_in("Freshman Fall"));
        assert!(!course.offered_in("Fall"));
    }

    #[test]
    fn test_add_duplicate_offering() {
        let mut course = Course::new("CSCI-UA.0101".to_string(), "Intro".to_string(), 4);
        course.add_offering("Fall".to_string());
        course.add_offering("Fall".to_string());

        assert_eq!(course.semester_offered.len(), 1);
    }

    #[test]
    fn test_empty_prereq_always_satisfied() {
        assert!(PrereqExpr::None.is_satisfied(&completed(&[])));
        assert!(PrereqExpr::None.is_satisfied(&completed(&["CSCI-UA.0101"])));
    }

    #[test]
    fn test_any_of_satisfied_by_intersection() {
        let expr = PrereqExpr::AnyOf(vec!["A".to_string(), "B".to_string()]);

        assert!(!expr.is_satisfied(&completed(&[])));
        assert!(!expr.is_satisfied(&completed(&["C"])));
        assert!(expr.is_satisfied(&completed(&["B"])));
        assert!(expr.is_satisfied(&completed(&["A", "B", "C"])));
    }

    #[test]
    fn test_all_of_requires_every_code() {
        let expr = PrereqExpr::AllOf(vec!["A".to_string(), "B".to_string()]);

        assert!(!expr.is_satisfied(&completed(&["A"])));
        assert!(expr.is_satisfied(&completed(&["A", "B"])));
    }

    #[test]
    fn test_malformed_never_satisfied() {
        assert!(!PrereqExpr::Malformed.is_satisfied(&completed(&["A", "B", "C"])));
    }

    #[test]
    fn test_codes_compared_exactly() {
        let expr = PrereqExpr::AnyOf(vec!["CSCI-UA.0101".to_string()]);

        assert!(!expr.is_satisfied(&completed(&["csci-ua.0101"])));
        assert!(expr.is_satisfied(&completed(&["CSCI-UA.0101"])));
    }

    #[test]
    fn test_deserialize_legacy_list_form() {
        let expr: PrereqExpr = serde_json::from_str(r#"["CSCI-UA.0101", "CSCI-UA.0102"]"#)
            .expect("list form parses");

        assert_eq!(
            expr,
            PrereqExpr::AnyOf(vec!["CSCI-UA.0101".to_string(), "CSCI-UA.0102".to_string()])
        );
    }

    #[test]
    fn test_deserialize_empty_list_is_none() {
        let expr: PrereqExpr = serde_json::from_str("[]").expect("empty list parses");
        assert_eq!(expr, PrereqExpr::None);
    }

    #[test]
    fn test_deserialize_null_is_absent_not_malformed() {
        let expr: PrereqExpr = serde_json::from_str("null").expect("null parses");
        assert_eq!(expr, PrereqExpr::None);
    }

    #[test]
    fn test_deserialize_and_node() {
        let expr: PrereqExpr =
            serde_json::from_str(r#"{"logic": "AND", "courses": ["A", "B"]}"#)
                .expect("and node parses");

        assert_eq!(
            expr,
            PrereqExpr::AllOf(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_deserialize_or_node() {
        let expr: PrereqExpr = serde_json::from_str(r#"{"logic": "or", "courses": ["A"]}"#)
            .expect("or node parses");

        assert_eq!(expr, PrereqExpr::AnyOf(vec!["A".to_string()]));
    }

    #[test]
    fn test_unknown_logic_degrades_to_or() {
        let expr: PrereqExpr =
            serde_json::from_str(r#"{"logic": "xor", "courses": ["A", "B"]}"#)
                .expect("unknown logic parses");

        assert_eq!(
            expr,
            PrereqExpr::AnyOf(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_malformed_shapes_fail_closed() {
        // A node missing its courses key is not a valid expression.
        let missing_courses: PrereqExpr =
            serde_json::from_str(r#"{"logic": "and"}"#).expect("still deserializes");
        assert_eq!(missing_courses, PrereqExpr::Malformed);

        // Neither list nor node.
        let scalar: PrereqExpr = serde_json::from_str("42").expect("still deserializes");
        assert_eq!(scalar, PrereqExpr::Malformed);
    }

    #[test]
    fn test_course_record_round_trip() {
        let json = r#"{
            "course_code": "CSCI-UA.0201",
            "title": "Computer Systems Organization",
            "credits": 4,
            "prerequisites": {"logic": "and", "courses": ["CSCI-UA.0101", "CSCI-UA.0102"]},
            "semester_offered": ["Fall", "Spring"],
            "difficulty": 3.5,
            "description": "Covers machine-level programming."
        }"#;

        let course: Course = serde_json::from_str(json).expect("course record parses");
        assert_eq!(course.course_code, "CSCI-UA.0201");
        assert_eq!(
            course.prerequisites,
            PrereqExpr::AllOf(vec!["CSCI-UA.0101".to_string(), "CSCI-UA.0102".to_string()])
        );

        let back = serde_json::to_string(&course).expect("course record serializes");
        let reparsed: Course = serde_json::from_str(&back).expect("reparses");
        assert_eq!(reparsed, course);
    }

    #[test]
    fn test_course_record_defaults_for_missing_fields() {
        let course: Course = serde_json::from_str(r#"{"course_code": "MATH-UA.0121"}"#)
            .expect("minimal record parses");

        assert_eq!(course.title, "");
        assert_eq!(course.credits, 0);
        assert!(course.prerequisites.is_none());
        assert!(course.semester_offered.is_empty());
    }
}
