//! Curriculum catalogs
//!
//! A catalog is a TOML document describing a [`Curriculum`]:
//!
//! ```toml
//! name = "KCT - Computer Science & Engineering"
//!
//! [[semesters]]
//! ordinal = 1
//! title = "Semester I"
//!
//! [[semesters.courses]]
//! code = "U18PHI1202"
//! name = "ENGINEERING PHYSICS"
//! credits = 4
//! type = "Core"                  # Core | Elective | Audit Course | Mandatory Course
//! requirement = "Embedded TL - 3+1"
//!
//! [[semesters.electives.alternatives]]
//! code = "U18JAI2201"
//! name = "JAPANESE LEVEL I"
//! credits = 3
//! type = "Elective"
//! ```
//!
//! The KCT CSE catalog (semesters I-IV) is compiled into the binary.

use crate::core::models::Curriculum;
use logger::{debug, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Embedded KCT CSE catalog
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalogs/kct_cse.toml");

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid TOML or does not match the schema.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// The catalog parsed but describes an impossible curriculum.
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// The compiled-in KCT CSE curriculum
///
/// # Panics
/// Panics if the embedded catalog is invalid. It is checked by the test suite.
#[must_use]
pub fn builtin() -> Curriculum {
    from_toml(BUILTIN_CATALOG).expect("Failed to parse compiled-in curriculum catalog")
}

/// Parse and validate a catalog from a TOML string
///
/// Duplicate course codes are accepted with a warning; those courses share one grade.
///
/// # Errors
/// Returns an error if the TOML is malformed or the curriculum fails validation
pub fn from_toml(toml_str: &str) -> Result<Curriculum, CatalogError> {
    let curriculum: Curriculum = toml::from_str(toml_str)?;
    validate(&curriculum)?;

    for code in curriculum.duplicate_codes() {
        warn!("Course code {code} appears more than once; its entries share one grade");
    }
    debug!(
        "Loaded catalog '{}' with {} semesters",
        curriculum.name,
        curriculum.semesters.len()
    );
    Ok(curriculum)
}

/// Read a catalog file
///
/// # Errors
/// Returns an error if the file cannot be read, parsed or validated
pub fn load<P: AsRef<Path>>(path: P) -> Result<Curriculum, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_toml(&content)
}

fn validate(curriculum: &Curriculum) -> Result<(), CatalogError> {
    let mut ordinals = HashSet::new();
    for semester in &curriculum.semesters {
        if semester.ordinal == 0 {
            return Err(CatalogError::Invalid(format!(
                "semester '{}' has ordinal 0; ordinals start at 1",
                semester.title
            )));
        }
        if !ordinals.insert(semester.ordinal) {
            return Err(CatalogError::Invalid(format!(
                "semester ordinal {} is used more than once",
                semester.ordinal
            )));
        }

        let alternatives = semester
            .electives
            .iter()
            .flat_map(|group| group.alternatives.iter());
        if let Some(course) = semester
            .courses
            .iter()
            .chain(alternatives)
            .find(|c| c.code.trim().is_empty())
        {
            return Err(CatalogError::Invalid(format!(
                "course '{}' in semester {} has an empty code",
                course.name, semester.ordinal
            )));
        }

        if let Some(group) = &semester.electives {
            if let Some(selected) = &group.selected {
                if !group.contains(selected) {
                    return Err(CatalogError::Invalid(format!(
                        "semester {} selects unknown elective '{selected}'",
                        semester.ordinal
                    )));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseType;

    #[test]
    fn test_builtin_catalog_shape() {
        let curriculum = builtin();
        assert_eq!(curriculum.name, "KCT - Computer Science & Engineering");
        let ordinals: Vec<u32> = curriculum.semesters.iter().map(|s| s.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4]);

        let first = curriculum.semester(1).unwrap();
        assert_eq!(first.courses.len(), 7);
        let electives = first.electives.as_ref().expect("semester I has language electives");
        assert_eq!(electives.alternatives.len(), 4);
        assert!(electives.selected.is_none());

        assert_eq!(curriculum.semester(2).unwrap().courses.len(), 10);
        assert_eq!(curriculum.semester(3).unwrap().courses.len(), 7);
        assert_eq!(curriculum.semester(4).unwrap().courses.len(), 8);
    }

    #[test]
    fn test_builtin_course_types() {
        let curriculum = builtin();
        let second = curriculum.semester(2).unwrap();
        let pe = second
            .courses
            .iter()
            .find(|c| c.code == "U18PED0001")
            .unwrap();
        assert_eq!(pe.kind, CourseType::MandatoryCourse);
        assert_eq!(pe.credits, 0);
        assert_eq!(pe.requirement, "Non Academic");

        let audit = &curriculum.semester(1).unwrap().courses[6];
        assert_eq!(audit.code, "U18CSR1001");
        assert_eq!(audit.kind, CourseType::AuditCourse);
    }

    #[test]
    fn test_builtin_duplicate_code() {
        assert_eq!(builtin().duplicate_codes(), vec!["U18CSI2202".to_string()]);
    }

    #[test]
    fn test_rejects_zero_ordinal() {
        let result = from_toml(
            r#"
[[semesters]]
ordinal = 0
title = "Orientation"
"#,
        );
        assert!(matches!(result, Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_rejects_repeated_ordinal() {
        let result = from_toml(
            r#"
[[semesters]]
ordinal = 2
title = "A"

[[semesters]]
ordinal = 2
title = "B"
"#,
        );
        assert!(matches!(result, Err(CatalogError::Invalid(msg)) if msg.contains("ordinal 2")));
    }

    #[test]
    fn test_rejects_unknown_preselected_elective() {
        let result = from_toml(
            r#"
[[semesters]]
ordinal = 1
title = "Semester I"

[semesters.electives]
selected = "U18SPI2201"

[[semesters.electives.alternatives]]
code = "U18JAI2201"
name = "JAPANESE LEVEL I"
credits = 3
type = "Elective"
"#,
        );
        assert!(matches!(result, Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_rejects_empty_code() {
        let result = from_toml(
            r#"
[[semesters]]
ordinal = 1
title = "Semester I"

[[semesters.courses]]
code = " "
name = "Nameless"
credits = 3
type = "Core"
"#,
        );
        assert!(matches!(result, Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_parse_error_for_bad_type() {
        let result = from_toml(
            r#"
[[semesters]]
ordinal = 1
title = "Semester I"

[[semesters.courses]]
code = "X1"
name = "X"
credits = 3
type = "Seminar"
"#,
        );
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load("/definitely/not/here/catalog.toml");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
