//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a course participates in the programme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    /// Regular GPA-bearing course
    Core,
    /// Elective (GPA-bearing)
    Elective,
    /// Pass/fail enrichment course, excluded from GPA arithmetic
    #[serde(rename = "Audit Course", alias = "AuditCourse")]
    AuditCourse,
    /// Non-academic requirement, excluded from GPA arithmetic
    #[serde(rename = "Mandatory Course", alias = "MandatoryCourse")]
    MandatoryCourse,
}

impl CourseType {
    /// Whether graded results of this course type enter SGPA/CGPA
    #[must_use]
    pub const fn is_gpa_bearing(self) -> bool {
        matches!(self, Self::Core | Self::Elective)
    }
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "core" => Ok(Self::Core),
            "elective" => Ok(Self::Elective),
            "audit" | "auditcourse" => Ok(Self::AuditCourse),
            "mandatory" | "mandatorycourse" => Ok(Self::MandatoryCourse),
            _ => Err(format!("Unknown course type: {s}")),
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Core => "Core",
            Self::Elective => "Elective",
            Self::AuditCourse => "Audit Course",
            Self::MandatoryCourse => "Mandatory Course",
        };
        f.pad(label)
    }
}

/// Represents a course in a semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g., "U18CSI3201"); joins the course to its grade
    pub code: String,

    /// Course name (e.g., "DATA STRUCTURES")
    pub name: String,

    /// Credit weight
    pub credits: u32,

    /// Course type
    #[serde(rename = "type")]
    pub kind: CourseType,

    /// Delivery tag (e.g., "Embedded TL - 3+1"); informational only
    #[serde(default)]
    pub requirement: String,
}

impl Course {
    /// Create a new course with an empty requirement tag
    ///
    /// # Arguments
    /// * `code` - Unique course code
    /// * `name` - Course name
    /// * `credits` - Credit weight
    /// * `kind` - Course type
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, credits: u32, kind: CourseType) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits,
            kind,
            requirement: String::new(),
        }
    }

    /// Set the requirement tag
    #[must_use]
    pub fn with_requirement(mut self, requirement: impl Into<String>) -> Self {
        self.requirement = requirement.into();
        self
    }
}

/// Fields for a course added by the user; the code is assigned by the curriculum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    /// Course name
    pub name: String,
    /// Credit weight
    pub credits: u32,
    /// Course type
    pub kind: CourseType,
    /// Requirement tag
    pub requirement: String,
}

impl CourseDraft {
    /// Create a draft with an empty requirement tag
    #[must_use]
    pub fn new(name: impl Into<String>, credits: u32, kind: CourseType) -> Self {
        Self {
            name: name.into(),
            credits,
            kind,
            requirement: String::new(),
        }
    }

    pub(crate) fn into_course(self, code: String) -> Course {
        Course {
            code,
            name: self.name,
            credits: self.credits,
            kind: self.kind,
            requirement: self.requirement,
        }
    }
}

/// Partial replacement of a course's fields; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePatch {
    /// New course code (grade follows the course)
    pub code: Option<String>,
    /// New name
    pub name: Option<String>,
    /// New credit weight
    pub credits: Option<u32>,
    /// New course type
    pub kind: Option<CourseType>,
    /// New requirement tag
    pub requirement: Option<String>,
}

impl CoursePatch {
    /// Whether the patch changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.name.is_none()
            && self.credits.is_none()
            && self.kind.is_none()
            && self.requirement.is_none()
    }

    /// Set one field from a `field=value` style pair
    ///
    /// # Errors
    /// Returns an error for an unknown field or an unparsable value
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), String> {
        match field {
            "code" => {
                if value.trim().is_empty() {
                    return Err("Course code cannot be empty".to_string());
                }
                self.code = Some(value.trim().to_string());
            }
            "name" => self.name = Some(value.to_string()),
            "credits" => {
                self.credits = Some(
                    value
                        .parse::<u32>()
                        .map_err(|_| format!("Invalid credit value: '{value}'"))?,
                );
            }
            "type" | "kind" => self.kind = Some(value.parse()?),
            "requirement" => self.requirement = Some(value.to_string()),
            _ => return Err(format!("Unknown course field: '{field}'")),
        }
        Ok(())
    }

    /// Apply all fields except `code`, which needs ledger migration
    pub(crate) fn apply_details(&self, course: &mut Course) {
        if let Some(name) = &self.name {
            course.name.clone_from(name);
        }
        if let Some(credits) = self.credits {
            course.credits = credits;
        }
        if let Some(kind) = self.kind {
            course.kind = kind;
        }
        if let Some(requirement) = &self.requirement {
            course.requirement.clone_from(requirement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("U18CSI3201", "DATA STRUCTURES", 4, CourseType::Core)
            .with_requirement("Embedded TL - 3+1");

        assert_eq!(course.code, "U18CSI3201");
        assert_eq!(course.name, "DATA STRUCTURES");
        assert_eq!(course.credits, 4);
        assert_eq!(course.kind, CourseType::Core);
        assert_eq!(course.requirement, "Embedded TL - 3+1");
    }

    #[test]
    fn test_gpa_bearing_types() {
        assert!(CourseType::Core.is_gpa_bearing());
        assert!(CourseType::Elective.is_gpa_bearing());
        assert!(!CourseType::AuditCourse.is_gpa_bearing());
        assert!(!CourseType::MandatoryCourse.is_gpa_bearing());
    }

    #[test]
    fn test_course_type_parse() {
        assert_eq!("core".parse::<CourseType>(), Ok(CourseType::Core));
        assert_eq!("Audit Course".parse::<CourseType>(), Ok(CourseType::AuditCourse));
        assert_eq!("mandatory".parse::<CourseType>(), Ok(CourseType::MandatoryCourse));
        assert!("lab".parse::<CourseType>().is_err());
    }

    #[test]
    fn test_course_type_serde_names() {
        let course: Course = toml::from_str(
            r#"
code = "U18CSR1001"
name = "DISRUPTIVE TECHNOLOGIES"
credits = 2
type = "Audit Course"
"#,
        )
        .expect("course should parse");
        assert_eq!(course.kind, CourseType::AuditCourse);
        assert!(course.requirement.is_empty());
    }

    #[test]
    fn test_patch_set_field() {
        let mut patch = CoursePatch::default();
        assert!(patch.is_empty());

        patch.set_field("credits", "3").unwrap();
        patch.set_field("type", "elective").unwrap();
        patch.set_field("name", "Compiler Design").unwrap();
        assert_eq!(patch.credits, Some(3));
        assert_eq!(patch.kind, Some(CourseType::Elective));
        assert!(!patch.is_empty());

        assert!(patch.set_field("credits", "-1").is_err());
        assert!(patch.set_field("code", "  ").is_err());
        assert!(patch.set_field("colour", "red").is_err());
    }

    #[test]
    fn test_patch_apply_details_keeps_code() {
        let mut course = Course::new("X1", "Old", 4, CourseType::Core);
        let patch = CoursePatch {
            code: Some("X2".to_string()),
            name: Some("New".to_string()),
            credits: Some(0),
            ..CoursePatch::default()
        };
        patch.apply_details(&mut course);
        assert_eq!(course.code, "X1");
        assert_eq!(course.name, "New");
        assert_eq!(course.credits, 0);
    }
}
