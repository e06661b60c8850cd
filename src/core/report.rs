//! Grade sheet rendering
//!
//! Produces a plain-text or Markdown sheet listing every semester's courses,
//! their grades, the SGPA of each semester and the overall CGPA.

use crate::core::gradebook::Gradebook;
use crate::core::models::{Course, Semester};
use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

/// Supported grade sheet formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Aligned plain-text columns
    #[default]
    Text,
    /// Markdown tables
    Markdown,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render the full grade sheet
#[must_use]
pub fn render(book: &Gradebook, format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => render_text(book),
        ReportFormat::Markdown => render_markdown(book),
    }
}

/// Render one semester's course table in plain text
#[must_use]
pub fn render_semester_text(book: &Gradebook, semester: &Semester) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", semester.title, semester.ordinal);
    for (idx, course) in semester.courses.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}", idx + 1, text_row(book, course));
    }
    if let Some(group) = &semester.electives {
        let _ = writeln!(out, "  Electives (choose one):");
        for course in &group.alternatives {
            let marker = if group.selected.as_deref() == Some(course.code.as_str()) {
                '*'
            } else {
                ' '
            };
            let _ = writeln!(out, "    {marker} {}", text_row(book, course));
        }
    }
    let tally = book.sgpa(semester.ordinal).unwrap_or_default();
    let _ = writeln!(
        out,
        "  SGPA {tally}  (credits counted: {}, RA: {})",
        tally.credits, tally.ra_count
    );
    out
}

fn text_row(book: &Gradebook, course: &Course) -> String {
    format!(
        "{:<12} {:<45} {:>2} cr  {:<16} {:<3}",
        course.code,
        truncate(&course.name, 45),
        course.credits,
        course.kind,
        book.grade(&course.code)
    )
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let mut short: String = value.chars().take(max - 1).collect();
        short.push('…');
        short
    }
}

fn render_text(book: &Gradebook) -> String {
    let curriculum = book.curriculum();
    let mut out = String::new();
    if !curriculum.name.is_empty() {
        let _ = writeln!(out, "{}\n", curriculum.name);
    }
    for semester in &curriculum.semesters {
        out.push_str(&render_semester_text(book, semester));
        out.push('\n');
    }
    let cgpa = book.cgpa();
    let _ = writeln!(
        out,
        "CGPA {cgpa}  (credits counted: {}, RA: {})",
        cgpa.credits, cgpa.ra_count
    );
    out
}

fn render_markdown(book: &Gradebook) -> String {
    let curriculum = book.curriculum();
    let mut md = String::new();
    let title = if curriculum.name.is_empty() {
        "Grade Sheet"
    } else {
        curriculum.name.as_str()
    };
    let _ = writeln!(md, "# {title}\n");

    for semester in &curriculum.semesters {
        let _ = writeln!(md, "## {}\n", semester.title);
        let _ = writeln!(md, "| # | Code | Course | Credits | Type | Requirement | Grade |");
        let _ = writeln!(md, "|---|------|--------|---------|------|-------------|-------|");
        for (idx, course) in semester.courses.iter().enumerate() {
            let _ = writeln!(md, "| {} | {} |", idx + 1, markdown_cells(book, course));
        }
        if let Some(selected) = semester.selected_elective() {
            let _ = writeln!(md, "| E | {} |", markdown_cells(book, selected));
        }
        let tally = book.sgpa(semester.ordinal).unwrap_or_default();
        let _ = writeln!(md, "\n**SGPA:** {tally} (RA: {})\n", tally.ra_count);
    }

    let cgpa = book.cgpa();
    let _ = writeln!(md, "## Summary\n");
    let _ = writeln!(md, "| Semester | SGPA | Credits | RA |");
    let _ = writeln!(md, "|----------|------|---------|----|");
    for summary in book.semester_summaries() {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} |",
            summary.title, summary.tally, summary.tally.credits, summary.tally.ra_count
        );
    }
    let _ = writeln!(
        md,
        "| **Overall (CGPA)** | **{cgpa}** | {} | {} |",
        cgpa.credits, cgpa.ra_count
    );
    md
}

fn markdown_cells(book: &Gradebook, course: &Course) -> String {
    format!(
        "{} | {} | {} | {} | {} | {}",
        course.code,
        course.name.replace('|', "\\|"),
        course.credits,
        course.kind,
        course.requirement,
        book.grade(&course.code)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    #[test]
    fn test_format_parse_and_display() {
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("TXT".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert!("pdf".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Markdown.to_string(), "markdown");
        assert_eq!(ReportFormat::Markdown.extension(), "md");
    }

    #[test]
    fn test_text_sheet_lists_grades_and_totals() {
        let mut book = Gradebook::builtin();
        book.set_grade("U18CSI3201", Grade::O).unwrap();
        book.set_grade("U18CST3003", Grade::Ra).unwrap();

        let sheet = render(&book, ReportFormat::Text);
        assert!(sheet.starts_with("KCT - Computer Science & Engineering"));
        assert!(sheet.contains("Semester III (3)"));
        assert!(sheet.contains("SGPA 10.00  (credits counted: 4, RA: 1)"));
        assert!(sheet.contains("CGPA 10.00  (credits counted: 4, RA: 1)"));
        assert!(sheet.contains("Electives (choose one):"));
    }

    #[test]
    fn test_text_marks_selected_elective() {
        let mut book = Gradebook::builtin();
        book.select_elective(1, "U18HII2201").unwrap();
        let semester = book.curriculum().semester(1).unwrap().clone();
        let block = render_semester_text(&book, &semester);
        assert!(block.contains("* U18HII2201"));
        assert!(block.contains("  U18JAI2201"));
    }

    #[test]
    fn test_markdown_sheet() {
        let mut book = Gradebook::builtin();
        book.set_grade("U18MAI4201", Grade::BPlus).unwrap();
        book.select_elective(1, "U18FRI2201").unwrap();

        let md = render(&book, ReportFormat::Markdown);
        assert!(md.starts_with("# KCT - Computer Science & Engineering"));
        assert!(md.contains("## Semester IV"));
        assert!(md.contains("| E | U18FRI2201 | FRENCH LEVEL I | 3 | Elective | Theory | - |"));
        assert!(md.contains("| **Overall (CGPA)** | **7.00** | 4 | 0 |"));
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijk", 5), "abcd…");
    }
}
