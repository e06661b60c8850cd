//! Letter grade model

use crate::core::error::GpaError;
use std::fmt;
use std::str::FromStr;

/// A letter grade on the ten-point scale, or the absence of one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grade {
    /// Outstanding (10 points)
    O,
    /// Excellent (9 points)
    APlus,
    /// Very good (8 points)
    A,
    /// Good (7 points)
    BPlus,
    /// Above average (6 points)
    B,
    /// Satisfactory (5 points)
    C,
    /// Reappearance required (0 points, counted as a failure)
    Ra,
    /// No grade recorded yet; never averaged
    #[default]
    Ungraded,
}

impl Grade {
    /// Every assignable grade, best first
    pub const GRADED: [Self; 7] = [
        Self::O,
        Self::APlus,
        Self::A,
        Self::BPlus,
        Self::B,
        Self::C,
        Self::Ra,
    ];

    /// Grade points for this grade, `None` when ungraded
    #[must_use]
    pub const fn points(self) -> Option<u32> {
        match self {
            Self::O => Some(10),
            Self::APlus => Some(9),
            Self::A => Some(8),
            Self::BPlus => Some(7),
            Self::B => Some(6),
            Self::C => Some(5),
            Self::Ra => Some(0),
            Self::Ungraded => None,
        }
    }

    /// Whether a grade has been recorded
    #[must_use]
    pub const fn is_graded(self) -> bool {
        !matches!(self, Self::Ungraded)
    }

    /// Whether this grade is a reappearance (failing) result
    #[must_use]
    pub const fn is_reappearance(self) -> bool {
        matches!(self, Self::Ra)
    }

    /// Canonical token for this grade
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::O => "O",
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
            Self::Ra => "RA",
            Self::Ungraded => "-",
        }
    }
}

impl FromStr for Grade {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "O" => Ok(Self::O),
            "A+" => Ok(Self::APlus),
            "A" => Ok(Self::A),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "RA" => Ok(Self::Ra),
            "-" | "UNGRADED" | "NOT_GRADED" => Ok(Self::Ungraded),
            _ => Err(GpaError::InvalidGrade(s.to_string())),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
