//! Catalog snapshot model

use super::Course;
use crate::core::error::LoadError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// An in-memory snapshot of the course catalog for one planning request
///
/// The catalog preserves record order: eligibility results come back in
/// catalog order with no implicit sort. Lookup by course code is backed
/// by an index, and a code identifies at most one course: when a
/// duplicate code appears, the first record wins.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from course records, preserving their order
    ///
    /// Records with a course code already present are dropped; the first
    /// record for a code is authoritative.
    #[must_use]
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let mut catalog = Self::new();
        for course in courses {
            catalog.add_course(course);
        }
        catalog
    }

    /// Add a course to the catalog
    ///
    /// # Returns
    /// `true` if the course was added, `false` if a course with that code
    /// already exists
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.index.contains_key(&course.course_code) {
            return false;
        }
        self.index
            .insert(course.course_code.clone(), self.courses.len());
        self.courses.push(course);
        true
    }

    /// Look up a course by exact code
    #[must_use]
    pub fn get(&self, course_code: &str) -> Option<&Course> {
        self.index.get(course_code).map(|&i| &self.courses[i])
    }

    /// All courses in catalog order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Parse a catalog from a JSON array of course records
    ///
    /// # Errors
    /// Returns an error if the JSON does not parse as a list of course
    /// records. A record with a malformed *prerequisite* field still
    /// parses; the expression folds to its fail-closed form instead of
    /// poisoning the whole catalog.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Ok(Self::from_courses(courses))
    }

    /// Load a catalog from a JSON file
    ///
    /// This is a boundary convenience for the CLI; the core itself only
    /// ever sees the materialized snapshot.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Ok(Self::from_json_str(&content)?)
    }
}
