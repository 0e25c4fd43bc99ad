//! Data models for `course-planner`

pub mod catalog;
pub mod course;
pub mod major;
pub mod student;

pub use catalog::Catalog;
pub use course::{Course, PrereqExpr};
pub use major::{GroupRule, MajorRequirements, MajorTable, RequirementGroup};
pub use student::Student;
