//! Curriculum model and its structural mutations
//!
//! Mutations that touch course codes take the [`GradeLedger`] so a grade is
//! never orphaned or resurrected by an edit or delete.

use super::{Course, CourseDraft, CoursePatch, Semester};
use crate::core::error::GpaError;
use crate::core::ledger::GradeLedger;
use logger::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Prefix for codes synthesized by [`Curriculum::add_course`]
pub const CUSTOM_CODE_PREFIX: &str = "CUSTOM-";

/// Ordered semesters of a programme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    /// Programme name (e.g., "KCT - Computer Science & Engineering")
    #[serde(default)]
    pub name: String,

    /// Semesters in display order
    #[serde(default)]
    pub semesters: Vec<Semester>,

    /// Counter behind synthesized course codes
    #[serde(skip)]
    next_custom_id: u64,
}

impl Curriculum {
    /// Create an empty curriculum
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            semesters: Vec::new(),
            next_custom_id: 1,
        }
    }

    /// Append a semester
    #[must_use]
    pub fn with_semester(mut self, semester: Semester) -> Self {
        self.semesters.push(semester);
        self
    }

    /// Borrow a semester by ordinal
    ///
    /// # Errors
    /// Returns `SemesterNotFound` if no semester has this ordinal
    pub fn semester(&self, ordinal: u32) -> Result<&Semester, GpaError> {
        self.semesters
            .iter()
            .find(|s| s.ordinal == ordinal)
            .ok_or(GpaError::SemesterNotFound(ordinal))
    }

    /// Mutably borrow a semester by ordinal
    ///
    /// # Errors
    /// Returns `SemesterNotFound` if no semester has this ordinal
    pub fn semester_mut(&mut self, ordinal: u32) -> Result<&mut Semester, GpaError> {
        self.semesters
            .iter_mut()
            .find(|s| s.ordinal == ordinal)
            .ok_or(GpaError::SemesterNotFound(ordinal))
    }

    /// Whether any course list or elective group in the curriculum uses `code`
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.semesters.iter().any(|s| s.uses_code(code))
    }

    /// Codes that appear more than once, in first-seen order
    #[must_use]
    pub fn duplicate_codes(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for course in self.all_courses() {
            if !seen.insert(course.code.as_str()) && !duplicates.contains(&course.code) {
                duplicates.push(course.code.clone());
            }
        }
        duplicates
    }

    /// Every course entry and every elective alternative, selected or not
    pub fn all_courses(&self) -> impl Iterator<Item = &Course> {
        self.semesters.iter().flat_map(|s| {
            s.courses.iter().chain(
                s.electives
                    .iter()
                    .flat_map(|group| group.alternatives.iter()),
            )
        })
    }

    /// Append a new course to a semester under a freshly synthesized code
    ///
    /// # Returns
    /// The code assigned to the new course
    ///
    /// # Errors
    /// Returns `SemesterNotFound` if the ordinal does not exist
    pub fn add_course(&mut self, ordinal: u32, draft: CourseDraft) -> Result<String, GpaError> {
        // Check before consuming a code so a failed add leaves the counter alone
        self.semester(ordinal)?;
        let code = self.synthesize_code();
        let course = draft.into_course(code.clone());
        self.semester_mut(ordinal)?.courses.push(course);
        debug!("Added course {code} to semester {ordinal}");
        Ok(code)
    }

    fn synthesize_code(&mut self) -> String {
        loop {
            let id = self.next_custom_id.max(1);
            self.next_custom_id = id + 1;
            let code = format!("{CUSTOM_CODE_PREFIX}{id}");
            if !self.contains_code(&code) {
                return code;
            }
        }
    }

    /// Replace fields of the course at `index` in semester `ordinal`
    ///
    /// When the patch renames the course, its grade moves to the new code in the
    /// same call. If the old code is still used elsewhere (a duplicate entry),
    /// the grade is copied so the other entry keeps it.
    ///
    /// # Errors
    /// - `SemesterNotFound` / `CourseNotFound` for invalid positions
    /// - `DuplicateCode` if the new code is already used by another course
    pub fn edit_course(
        &mut self,
        ordinal: u32,
        index: usize,
        patch: &CoursePatch,
        ledger: &mut GradeLedger,
    ) -> Result<(), GpaError> {
        let old_code = self.semester(ordinal)?.course(index)?.code.clone();
        let rename = patch
            .code
            .as_deref()
            .filter(|new_code| *new_code != old_code);

        if let Some(new_code) = rename {
            if self.contains_code(new_code) {
                return Err(GpaError::DuplicateCode(new_code.to_string()));
            }
        }

        let course = &mut self.semester_mut(ordinal)?.courses[index];
        patch.apply_details(course);

        if let Some(new_code) = rename {
            course.code = new_code.to_string();
            let grade = if self.contains_code(&old_code) {
                ledger.grade(&old_code)
            } else {
                ledger.take(&old_code)
            };
            ledger.set_grade(new_code, grade);
            debug!("Renamed course {old_code} to {new_code} in semester {ordinal} (grade {grade})");
        } else {
            debug!("Edited course {old_code} in semester {ordinal}");
        }
        Ok(())
    }

    /// Remove the course at `index` in semester `ordinal`
    ///
    /// The ledger entry for its code is purged unless another course still uses it.
    ///
    /// # Errors
    /// `SemesterNotFound` / `CourseNotFound` for invalid positions
    pub fn delete_course(
        &mut self,
        ordinal: u32,
        index: usize,
        ledger: &mut GradeLedger,
    ) -> Result<Course, GpaError> {
        let semester = self.semester_mut(ordinal)?;
        semester.course(index)?;
        let removed = semester.courses.remove(index);
        if !self.contains_code(&removed.code) {
            ledger.clear_grade(&removed.code);
        }
        debug!("Deleted course {} from semester {ordinal}", removed.code);
        Ok(removed)
    }

    /// Make `code` the active elective of semester `ordinal`
    ///
    /// Grades of other alternatives stay in the ledger, dormant until reselected.
    ///
    /// # Errors
    /// `SemesterNotFound`, or `ElectiveNotFound` if `code` is not an alternative
    pub fn select_elective(&mut self, ordinal: u32, code: &str) -> Result<(), GpaError> {
        self.semester_mut(ordinal)?.select_elective(code)?;
        debug!("Selected elective {code} for semester {ordinal}");
        Ok(())
    }

    /// Deselect the elective of semester `ordinal`; a no-op if nothing is selected
    ///
    /// # Errors
    /// `SemesterNotFound`, or `ElectiveNotFound` if the semester has no elective group
    pub fn clear_elective(&mut self, ordinal: u32) -> Result<(), GpaError> {
        let semester = self.semester_mut(ordinal)?;
        let group = semester
            .electives
            .as_mut()
            .ok_or_else(|| GpaError::ElectiveNotFound {
                ordinal,
                code: String::new(),
            })?;
        group.selected = None;
        Ok(())
    }
}

impl Default for Curriculum {
    fn default() -> Self {
        Self::new(String::new())
    }
}
