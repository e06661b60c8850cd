//! Grade ledger: course code to letter grade.
//!
//! The ledger is a plain map. Keeping its keys in step with the curriculum is
//! the curriculum's job (see [`Curriculum::delete_course`] and
//! [`Curriculum::edit_course`]).
//!
//! [`Curriculum::delete_course`]: crate::core::models::Curriculum::delete_course
//! [`Curriculum::edit_course`]: crate::core::models::Curriculum::edit_course

use crate::core::models::Grade;
use std::collections::HashMap;

/// Recorded grades keyed by course code. Absent codes are ungraded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeLedger {
    grades: HashMap<String, Grade>,
}

impl GradeLedger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `grade` for `code`, replacing any previous entry.
    ///
    /// Setting [`Grade::Ungraded`] is the same as [`clear_grade`](Self::clear_grade).
    pub fn set_grade(&mut self, code: impl Into<String>, grade: Grade) {
        let code = code.into();
        if grade.is_graded() {
            self.grades.insert(code, grade);
        } else {
            self.grades.remove(&code);
        }
    }

    /// Remove the entry for `code`; absent entries are not an error
    pub fn clear_grade(&mut self, code: &str) {
        self.grades.remove(code);
    }

    /// Grade recorded for `code`, or [`Grade::Ungraded`]
    #[must_use]
    pub fn grade(&self, code: &str) -> Grade {
        self.grades.get(code).copied().unwrap_or_default()
    }

    /// Remove and return the entry for `code`
    pub fn take(&mut self, code: &str) -> Grade {
        self.grades.remove(code).unwrap_or_default()
    }

    /// Number of graded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// Whether no grade has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Iterate over `(code, grade)` entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Grade)> {
        self.grades.iter().map(|(code, grade)| (code.as_str(), *grade))
    }
}
