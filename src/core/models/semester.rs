//! Semester model

use super::Course;
use crate::core::error::GpaError;
use serde::{Deserialize, Serialize};

/// Mutually exclusive course alternatives; at most one is selected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectiveGroup {
    /// Alternatives offered (e.g., the language electives)
    pub alternatives: Vec<Course>,

    /// Code of the selected alternative, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

impl ElectiveGroup {
    /// Create a group with nothing selected
    #[must_use]
    pub const fn new(alternatives: Vec<Course>) -> Self {
        Self {
            alternatives,
            selected: None,
        }
    }

    /// Look up an alternative by code
    #[must_use]
    pub fn alternative(&self, code: &str) -> Option<&Course> {
        self.alternatives.iter().find(|c| c.code == code)
    }

    /// The currently selected alternative
    #[must_use]
    pub fn selected_course(&self) -> Option<&Course> {
        self.selected
            .as_deref()
            .and_then(|code| self.alternative(code))
    }

    /// Whether `code` is one of the alternatives
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.alternative(code).is_some()
    }
}

/// A semester: an ordered course list plus an optional elective group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester number (positive, not necessarily contiguous)
    pub ordinal: u32,

    /// Display title (e.g., "Semester I")
    pub title: String,

    /// Courses in display order
    #[serde(default)]
    pub courses: Vec<Course>,

    /// Elective alternatives, of which one may be active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electives: Option<ElectiveGroup>,
}

impl Semester {
    /// Create an empty semester
    #[must_use]
    pub fn new(ordinal: u32, title: impl Into<String>) -> Self {
        Self {
            ordinal,
            title: title.into(),
            courses: Vec::new(),
            electives: None,
        }
    }

    /// Append a course
    #[must_use]
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Attach an elective group
    #[must_use]
    pub fn with_electives(mut self, group: ElectiveGroup) -> Self {
        self.electives = Some(group);
        self
    }

    /// Courses that currently count: the course list, then the selected elective
    pub fn active_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().chain(
            self.electives
                .as_ref()
                .and_then(ElectiveGroup::selected_course),
        )
    }

    /// The selected elective, if the semester has a group and a selection
    #[must_use]
    pub fn selected_elective(&self) -> Option<&Course> {
        self.electives.as_ref().and_then(ElectiveGroup::selected_course)
    }

    /// Whether any course or elective alternative uses `code`
    #[must_use]
    pub fn uses_code(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c.code == code)
            || self.electives.as_ref().is_some_and(|g| g.contains(code))
    }

    /// Borrow the course at `index`
    ///
    /// # Errors
    /// Returns `CourseNotFound` when `index` is out of range
    pub fn course(&self, index: usize) -> Result<&Course, GpaError> {
        self.courses.get(index).ok_or(GpaError::CourseNotFound {
            ordinal: self.ordinal,
            index,
        })
    }

    /// Make `code` the active elective
    ///
    /// # Errors
    /// Returns `ElectiveNotFound` when the semester has no group or `code` is not an alternative
    pub fn select_elective(&mut self, code: &str) -> Result<(), GpaError> {
        let ordinal = self.ordinal;
        let not_found = || GpaError::ElectiveNotFound {
            ordinal,
            code: code.to_string(),
        };
        let group = self.electives.as_mut().ok_or_else(not_found)?;
        if !group.contains(code) {
            return Err(not_found());
        }
        group.selected = Some(code.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseType;

    fn languages() -> ElectiveGroup {
        ElectiveGroup::new(vec![
            Course::new("U18JAI2201", "JAPANESE LEVEL I", 3, CourseType::Elective),
            Course::new("U18FRI2201", "FRENCH LEVEL I", 3, CourseType::Elective),
        ])
    }

    #[test]
    fn test_active_courses_without_selection() {
        let semester = Semester::new(1, "Semester I")
            .with_course(Course::new("U18PHI1202", "ENGINEERING PHYSICS", 4, CourseType::Core))
            .with_electives(languages());

        let codes: Vec<&str> = semester.active_courses().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["U18PHI1202"]);
        assert!(semester.selected_elective().is_none());
    }

    #[test]
    fn test_select_elective_switches() {
        let mut semester = Semester::new(1, "Semester I").with_electives(languages());

        semester.select_elective("U18JAI2201").unwrap();
        assert_eq!(semester.selected_elective().unwrap().code, "U18JAI2201");

        semester.select_elective("U18FRI2201").unwrap();
        let codes: Vec<&str> = semester.active_courses().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["U18FRI2201"]);
    }

    #[test]
    fn test_select_unknown_elective() {
        let mut semester = Semester::new(1, "Semester I").with_electives(languages());
        semester.select_elective("U18JAI2201").unwrap();

        let err = semester.select_elective("U18GEI2201").unwrap_err();
        assert!(err.is_not_found());
        // Previous selection survives a failed select
        assert_eq!(semester.selected_elective().unwrap().code, "U18JAI2201");
    }

    #[test]
    fn test_select_without_group() {
        let mut semester = Semester::new(3, "Semester III");
        assert_eq!(
            semester.select_elective("U18JAI2201"),
            Err(GpaError::ElectiveNotFound {
                ordinal: 3,
                code: "U18JAI2201".to_string()
            })
        );
    }

    #[test]
    fn test_uses_code_covers_alternatives() {
        let semester = Semester::new(1, "Semester I").with_electives(languages());
        assert!(semester.uses_code("U18FRI2201"));
        assert!(!semester.uses_code("U18HII2201"));
    }

    #[test]
    fn test_course_index_out_of_range() {
        let semester = Semester::new(2, "Semester II");
        assert_eq!(
            semester.course(0),
            Err(GpaError::CourseNotFound { ordinal: 2, index: 0 })
        );
    }
}
