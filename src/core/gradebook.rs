//! Gradebook: a curriculum paired with its grade ledger
//!
//! This is the surface presentation code talks to. Queries recompute from
//! scratch; commands mutate synchronously, so the next query already sees them.

use crate::core::aggregate::{compute_cgpa, compute_sgpa, GpaTally};
use crate::core::catalog;
use crate::core::error::GpaError;
use crate::core::ledger::GradeLedger;
use crate::core::models::{Course, CourseDraft, CoursePatch, Curriculum, ElectiveGroup, Grade};
use logger::debug;

/// Per-semester result row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterSummary {
    /// Semester ordinal
    pub ordinal: u32,
    /// Semester title
    pub title: String,
    /// SGPA tally for the semester
    pub tally: GpaTally,
}

/// Curriculum store and grade ledger kept consistent with each other
#[derive(Debug, Clone, Default)]
pub struct Gradebook {
    curriculum: Curriculum,
    ledger: GradeLedger,
}

impl Gradebook {
    /// Start an ungraded gradebook over `curriculum`
    #[must_use]
    pub fn new(curriculum: Curriculum) -> Self {
        Self {
            curriculum,
            ledger: GradeLedger::new(),
        }
    }

    /// Gradebook over the compiled-in KCT CSE catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(catalog::builtin())
    }

    /// The curriculum
    #[must_use]
    pub const fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    /// The grade ledger
    #[must_use]
    pub const fn ledger(&self) -> &GradeLedger {
        &self.ledger
    }

    // --- Queries ---

    /// Courses of a semester in display order (elective alternatives excluded)
    ///
    /// # Errors
    /// `SemesterNotFound` if the ordinal does not exist
    pub fn courses(&self, ordinal: u32) -> Result<&[Course], GpaError> {
        Ok(&self.curriculum.semester(ordinal)?.courses)
    }

    /// Elective group of a semester, if it has one
    ///
    /// # Errors
    /// `SemesterNotFound` if the ordinal does not exist
    pub fn electives(&self, ordinal: u32) -> Result<Option<&ElectiveGroup>, GpaError> {
        Ok(self.curriculum.semester(ordinal)?.electives.as_ref())
    }

    /// SGPA of one semester
    ///
    /// # Errors
    /// `SemesterNotFound` if the ordinal does not exist
    pub fn sgpa(&self, ordinal: u32) -> Result<GpaTally, GpaError> {
        let semester = self.curriculum.semester(ordinal)?;
        Ok(compute_sgpa(semester, &self.ledger))
    }

    /// CGPA over the whole curriculum
    #[must_use]
    pub fn cgpa(&self) -> GpaTally {
        compute_cgpa(&self.curriculum, &self.ledger)
    }

    /// SGPA of every semester, in curriculum order
    #[must_use]
    pub fn semester_summaries(&self) -> Vec<SemesterSummary> {
        self.curriculum
            .semesters
            .iter()
            .map(|semester| SemesterSummary {
                ordinal: semester.ordinal,
                title: semester.title.clone(),
                tally: compute_sgpa(semester, &self.ledger),
            })
            .collect()
    }

    /// Grade recorded for `code`
    #[must_use]
    pub fn grade(&self, code: &str) -> Grade {
        self.ledger.grade(code)
    }

    // --- Commands ---

    /// Record a grade for a course in the curriculum
    ///
    /// [`Grade::Ungraded`] clears the entry.
    ///
    /// # Errors
    /// `UnknownCode` if no course or elective alternative uses `code`
    pub fn set_grade(&mut self, code: &str, grade: Grade) -> Result<(), GpaError> {
        if !self.curriculum.contains_code(code) {
            return Err(GpaError::UnknownCode(code.to_string()));
        }
        self.ledger.set_grade(code, grade);
        debug!("Grade for {code} set to {grade}");
        Ok(())
    }

    /// Parse `token` and record it as the grade for `code`
    ///
    /// # Errors
    /// `InvalidGrade` for an unknown token, `UnknownCode` for an unknown course
    pub fn set_grade_token(&mut self, code: &str, token: &str) -> Result<(), GpaError> {
        let grade = token.parse::<Grade>()?;
        self.set_grade(code, grade)
    }

    /// Remove the grade for `code`; clearing an absent grade is not an error
    pub fn clear_grade(&mut self, code: &str) {
        self.ledger.clear_grade(code);
        debug!("Grade for {code} cleared");
    }

    /// Add a course to a semester; returns its synthesized code
    ///
    /// # Errors
    /// `SemesterNotFound` if the ordinal does not exist
    pub fn add_course(&mut self, ordinal: u32, draft: CourseDraft) -> Result<String, GpaError> {
        self.curriculum.add_course(ordinal, draft)
    }

    /// Edit the course at `index` (0-based) of a semester, migrating its grade on rename
    ///
    /// # Errors
    /// `SemesterNotFound`, `CourseNotFound` or `DuplicateCode`
    pub fn edit_course(
        &mut self,
        ordinal: u32,
        index: usize,
        patch: &CoursePatch,
    ) -> Result<(), GpaError> {
        self.curriculum
            .edit_course(ordinal, index, patch, &mut self.ledger)
    }

    /// Delete the course at `index` (0-based) of a semester together with its grade
    ///
    /// # Errors
    /// `SemesterNotFound` or `CourseNotFound`
    pub fn delete_course(&mut self, ordinal: u32, index: usize) -> Result<Course, GpaError> {
        self.curriculum
            .delete_course(ordinal, index, &mut self.ledger)
    }

    /// Choose the active elective of a semester
    ///
    /// # Errors
    /// `SemesterNotFound` or `ElectiveNotFound`
    pub fn select_elective(&mut self, ordinal: u32, code: &str) -> Result<(), GpaError> {
        self.curriculum.select_elective(ordinal, code)
    }

    /// Deselect the active elective of a semester
    ///
    /// # Errors
    /// `SemesterNotFound` or `ElectiveNotFound` when the semester has no elective group
    pub fn clear_elective(&mut self, ordinal: u32) -> Result<(), GpaError> {
        self.curriculum.clear_elective(ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseType;

    #[test]
    fn test_fresh_gradebook_is_zero() {
        let book = Gradebook::builtin();
        assert_eq!(book.cgpa().to_string(), "0.00");
        assert_eq!(book.cgpa().ra_count, 0);
        assert!(book
            .semester_summaries()
            .iter()
            .all(|s| s.tally == GpaTally::default()));
    }

    #[test]
    fn test_set_grade_rejects_unknown_code() {
        let mut book = Gradebook::builtin();
        assert_eq!(
            book.set_grade("NOPE101", Grade::O),
            Err(GpaError::UnknownCode("NOPE101".to_string()))
        );
        assert!(book.ledger().is_empty());
    }

    #[test]
    fn test_invalid_token_leaves_ledger_unchanged() {
        let mut book = Gradebook::builtin();
        book.set_grade_token("U18MAT3102", "A").unwrap();
        assert_eq!(
            book.set_grade_token("U18MAT3102", "F"),
            Err(GpaError::InvalidGrade("F".to_string()))
        );
        assert_eq!(book.grade("U18MAT3102"), Grade::A);
    }

    #[test]
    fn test_ungraded_token_clears() {
        let mut book = Gradebook::builtin();
        book.set_grade_token("U18MAT3102", "O").unwrap();
        book.set_grade_token("U18MAT3102", "NOT_GRADED").unwrap();
        assert!(book.ledger().is_empty());
    }

    #[test]
    fn test_elective_alternatives_can_be_graded() {
        let mut book = Gradebook::builtin();
        book.set_grade("U18GEI2201", Grade::APlus).unwrap();
        assert_eq!(book.sgpa(1).unwrap().credits, 0);

        book.select_elective(1, "U18GEI2201").unwrap();
        assert_eq!(book.sgpa(1).unwrap().to_string(), "9.00");
    }

    #[test]
    fn test_queries_on_missing_semester() {
        let book = Gradebook::builtin();
        assert!(book.courses(9).unwrap_err().is_not_found());
        assert!(book.sgpa(9).unwrap_err().is_not_found());
        assert!(book.electives(9).is_err());
        assert!(book.electives(3).unwrap().is_none());
    }

    #[test]
    fn test_added_course_is_gradable() {
        let mut book = Gradebook::builtin();
        let code = book
            .add_course(3, CourseDraft::new("COMPILER DESIGN", 3, CourseType::Core))
            .unwrap();
        book.set_grade(&code, Grade::B).unwrap();
        assert_eq!(book.sgpa(3).unwrap().to_string(), "6.00");
        assert_eq!(book.courses(3).unwrap().last().unwrap().code, code);
    }
}
