//! Student history model

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A student's academic history, as read from the student record
///
/// The planning core only ever reads this; it never mutates a student
/// record while computing eligibility or progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Course codes the student has completed. Order is irrelevant and
    /// duplicates collapse; see [`completed_set`](Self::completed_set).
    #[serde(default)]
    pub completed_courses: Vec<String>,

    /// Declared major; empty string means undeclared
    #[serde(default)]
    pub major: String,

    /// Class year (e.g., "Sophomore")
    #[serde(default)]
    pub year: String,

    /// Free-text interests
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Student {
    /// Create a student with an empty history
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            completed_courses: Vec::new(),
            major: String::new(),
            year: String::new(),
            interests: Vec::new(),
        }
    }

    /// The completed courses as a set (duplicates collapse)
    #[must_use]
    pub fn completed_set(&self) -> HashSet<String> {
        self.completed_courses.iter().cloned().collect()
    }

    /// Whether the student has declared a major
    #[must_use]
    pub fn has_major(&self) -> bool {
        !self.major.is_empty()
    }

    /// Record a completed course (duplicates are ignored)
    pub fn add_completed(&mut self, course_code: String) {
        if !self.completed_courses.contains(&course_code) {
            self.completed_courses.push(course_code);
        }
    }

    /// Parse a student record from its JSON document
    ///
    /// # Errors
    /// Returns an error if the JSON does not match the student record shape
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_creation() {
        let student = Student::new("Alex".to_string());

        assert_eq!(student.name, "Alex");
        assert!(student.completed_courses.is_empty());
        assert!(!student.has_major());
    }

    #[test]
    fn test_completed_set_collapses_duplicates() {
        let mut student = Student::new("Alex".to_string());
        student.completed_courses = vec![
            "CSCI-UA.0101".to_string(),
            "CSCI-UA.0101".to_string(),
            "MATH-UA.0121".to_string(),
        ];

        assert_eq!(student.completed_set().len(), 2);
    }

    #[test]
    fn test_add_completed_ignores_duplicates() {
        let mut student = Student::new("Alex".to_string());
        student.add_completed("CSCI-UA.0101".to_string());
        student.add_completed("CSCI-UA.0101".to_string());

        assert_eq!(student.completed_courses.len(), 1);
    }

    #[test]
    fn test_from_json_with_defaults() {
        let student = Student::from_json_str(r#"{"name": "Sam", "major": "Computer Science"}"#)
            .expect("student record parses");

        assert_eq!(student.name, "Sam");
        assert!(student.has_major());
        assert!(student.completed_courses.is_empty());
        assert!(student.interests.is_empty());
    }
}
