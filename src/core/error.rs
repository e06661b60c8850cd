//! Error types for curriculum and grade operations.
//!
//! Every failing operation leaves the curriculum and ledger unchanged.

use thiserror::Error;

/// Errors returned by curriculum, ledger and gradebook operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GpaError {
    /// No semester carries the requested ordinal.
    #[error("semester {0} not found")]
    SemesterNotFound(u32),

    /// The course index is out of range for the semester.
    #[error("semester {ordinal} has no course at position {index}")]
    CourseNotFound { ordinal: u32, index: usize },

    /// The semester has no elective group, or the code is not one of its alternatives.
    #[error("semester {ordinal} has no elective alternative '{code}'")]
    ElectiveNotFound { ordinal: u32, code: String },

    /// The course code does not belong to any course in the curriculum.
    #[error("course code '{0}' is not in the curriculum")]
    UnknownCode(String),

    /// The grade token is not one of O, A+, A, B+, B, C, RA.
    #[error("invalid grade '{0}' (expected one of O, A+, A, B+, B, C, RA)")]
    InvalidGrade(String),

    /// Renaming would give two different courses the same code.
    #[error("course code '{0}' is already used by another course")]
    DuplicateCode(String),
}

impl GpaError {
    /// Returns `true` for the lookup failures (semester, course, elective or code).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SemesterNotFound(_)
                | Self::CourseNotFound { .. }
                | Self::ElectiveNotFound { .. }
                | Self::UnknownCode(_)
        )
    }
}
