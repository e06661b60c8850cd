//! SGPA / CGPA aggregation
//!
//! Results are recomputed from the curriculum and ledger on every call; nothing
//! is cached. A course contributes to a tally only when all of these hold:
//! - its type is GPA-bearing (audit and mandatory courses never count)
//! - it is in a course list, or it is the selected elective of its semester
//! - it has a grade other than RA (RA only bumps `ra_count`)
//!
//! Credits and points are whole numbers summed in `u64` (saturating), so any
//! `u32` credit weight is accepted and the only floating-point step is the
//! final division.

use crate::core::ledger::GradeLedger;
use crate::core::models::{Course, Curriculum, Semester};
use std::fmt;
use std::ops::AddAssign;

/// Fractional digits used when displaying any GPA
pub const GPA_DECIMALS: usize = 2;

/// Running sums behind a GPA value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GpaTally {
    /// Credits of graded, GPA-bearing, non-RA courses
    pub credits: u64,
    /// Sum of `credits * grade points` over the same courses
    pub points: u64,
    /// Number of GPA-bearing courses graded RA
    pub ra_count: u32,
}

impl GpaTally {
    /// Fold one course and its grade into the tally
    pub fn record(&mut self, course: &Course, ledger: &GradeLedger) {
        if !course.kind.is_gpa_bearing() {
            return;
        }
        let grade = ledger.grade(&course.code);
        if grade.is_reappearance() {
            self.ra_count = self.ra_count.saturating_add(1);
        } else if let Some(points) = grade.points() {
            let credits = u64::from(course.credits);
            self.credits = self.credits.saturating_add(credits);
            self.points = self.points.saturating_add(credits * u64::from(points));
        }
    }

    /// Credit-weighted grade point average, `0.0` when nothing counts
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn gpa(&self) -> f64 {
        if self.credits == 0 {
            0.0
        } else {
            self.points as f64 / self.credits as f64
        }
    }
}

impl AddAssign for GpaTally {
    fn add_assign(&mut self, rhs: Self) {
        self.credits = self.credits.saturating_add(rhs.credits);
        self.points = self.points.saturating_add(rhs.points);
        self.ra_count = self.ra_count.saturating_add(rhs.ra_count);
    }
}

impl fmt::Display for GpaTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", GPA_DECIMALS, self.gpa())
    }
}

/// Semester Grade Point Average for one semester
#[must_use]
pub fn compute_sgpa(semester: &Semester, ledger: &GradeLedger) -> GpaTally {
    let mut tally = GpaTally::default();
    for course in semester.active_courses() {
        tally.record(course, ledger);
    }
    tally
}

/// Cumulative Grade Point Average over the whole curriculum
///
/// This is one credit-weighted average across every semester, not the mean of
/// the per-semester SGPAs.
#[must_use]
pub fn compute_cgpa(curriculum: &Curriculum, ledger: &GradeLedger) -> GpaTally {
    let mut tally = GpaTally::default();
    for semester in &curriculum.semesters {
        tally += compute_sgpa(semester, ledger);
    }
    tally
}
