//! Major requirement table model

use crate::core::error::{LoadError, RequirementError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Built-in major requirement table, compiled into the binary.
const MAJORS_DEFAULTS: &str = include_str!("../../assets/DefaultMajors.toml");

/// One named block of a major's degree requirements
///
/// A group record carries its fields as options so a structurally
/// defective table is representable: the defect surfaces as a
/// [`RequirementError`] when the group is evaluated, not as a silent skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementGroup {
    /// Group name (e.g., "Intro Sequence", "CS Electives")
    pub name: String,

    /// Group type: "required" (every course) or "pool" (pick from a set)
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Course codes this group covers
    pub courses: Option<Vec<String>>,

    /// For pool groups, how many courses from `courses` are required
    pub min_count: Option<usize>,
}

/// Validated form of a requirement group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRule<'a> {
    /// Every listed course must eventually be completed
    Required(&'a [String]),
    /// At least `min_count` of the candidate courses must be completed
    Pool {
        /// Candidate course codes
        candidates: &'a [String],
        /// Number of candidates required
        min_count: usize,
    },
}

impl RequirementGroup {
    /// Create an explicit-list group
    #[must_use]
    pub fn required(name: &str, courses: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            kind: Some("required".to_string()),
            courses: Some(courses.iter().map(ToString::to_string).collect()),
            min_count: None,
        }
    }

    /// Create a pool group
    #[must_use]
    pub fn pool(name: &str, courses: &[&str], min_count: usize) -> Self {
        Self {
            name: name.to_string(),
            kind: Some("pool".to_string()),
            courses: Some(courses.iter().map(ToString::to_string).collect()),
            min_count: Some(min_count),
        }
    }

    /// Validate this record into its closed rule form
    ///
    /// # Errors
    /// Returns a [`RequirementError`] when the record is missing `type` or
    /// `courses`, declares an unknown type, or is a pool with no
    /// `min_count`. These are configuration defects and must reach the
    /// caller rather than being swallowed.
    pub fn rule(&self) -> Result<GroupRule<'_>, RequirementError> {
        let kind = self.kind.as_deref().ok_or_else(|| {
            RequirementError::MissingField {
                group: self.name.clone(),
                field: "type",
            }
        })?;
        let courses = self.courses.as_deref().ok_or_else(|| {
            RequirementError::MissingField {
                group: self.name.clone(),
                field: "courses",
            }
        })?;

        match kind.to_ascii_lowercase().as_str() {
            "required" => Ok(GroupRule::Required(courses)),
            "pool" => {
                let min_count =
                    self.min_count
                        .ok_or_else(|| RequirementError::MissingField {
                            group: self.name.clone(),
                            field: "min_count",
                        })?;
                Ok(GroupRule::Pool {
                    candidates: courses,
                    min_count,
                })
            }
            other => Err(RequirementError::UnknownGroupType {
                group: self.name.clone(),
                kind: other.to_string(),
            }),
        }
    }
}

/// The requirement tree for one major
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorRequirements {
    /// Total credits the major requires for graduation
    #[serde(default)]
    pub total_credits: u32,

    /// Named requirement groups
    #[serde(default)]
    pub groups: Vec<RequirementGroup>,
}

/// The static mapping from major name to its requirement tree
///
/// This is configuration data, not user data. The compiled-in default
/// table can be replaced with a user-supplied TOML file; either way the
/// table is passed into the progress tracker as an explicit parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorTable {
    /// Requirement trees keyed by major name
    #[serde(default)]
    pub majors: HashMap<String, MajorRequirements>,
}

impl MajorTable {
    /// Create an empty table (every major unknown)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a requirement table from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed into the table shape
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load the compiled-in default requirement table
    ///
    /// # Panics
    /// Panics if the embedded table is invalid TOML. This should never
    /// happen in practice since the table is compiled into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(MAJORS_DEFAULTS)
            .expect("Failed to parse compiled-in major requirement table")
    }

    /// Load a requirement table from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Ok(Self::from_toml(&content)?)
    }

    /// Look up a major's requirement tree by exact name
    ///
    /// Unknown majors return `None`; they are tolerated, not rejected,
    /// because the system supports undeclared and nonstandard majors.
    #[must_use]
    pub fn get(&self, major: &str) -> Option<&MajorRequirements> {
        self.majors.get(major)
    }

    /// Add or replace a major's requirement tree
    pub fn insert(&mut self, major: String, requirements: MajorRequirements) {
        self.majors.insert(major, requirements);
    }
}
