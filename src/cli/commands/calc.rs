//! Calc command handler
//!
//! Applies grades and elective choices given as flags, then prints or writes
//! the grade sheet.

use super::load_gradebook;
use cgpa_calc::config::Config;
use cgpa_calc::core::report::{render, ReportFormat};
use cgpa_calc::Gradebook;
use logger::{error, info, verbose};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Flags collected for one `calc` run
pub struct CalcRequest<'a> {
    /// `(code, grade token)` pairs
    pub grades: &'a [(String, String)],
    /// `(semester, code)` elective choices
    pub electives: &'a [(u32, String)],
    /// Grade sheet format name
    pub format: &'a str,
    /// Output file; stdout when `None`. A bare name gets the format's extension
    pub output: Option<&'a Path>,
    /// Catalog file flag
    pub catalog: Option<&'a Path>,
}

/// Run the calc command
pub fn run(request: &CalcRequest<'_>, config: &Config) {
    match calculate(request, config) {
        Ok((format, sheet)) => {
            if let Some(path) = request.output {
                let path = sheet_path(path, format);
                if let Err(e) = fs::write(&path, &sheet) {
                    error!("Failed to write grade sheet {}: {e}", path.display());
                    eprintln!("✗ Failed to write {}: {e}", path.display());
                    std::process::exit(1);
                }
                println!("✓ Grade sheet written: {}", path.display());
            } else {
                print!("{sheet}");
            }
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Output path with the format's extension added when the name has none
fn sheet_path(path: &Path, format: ReportFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}

/// Apply every flag to a fresh gradebook and render the sheet
fn calculate(
    request: &CalcRequest<'_>,
    config: &Config,
) -> Result<(ReportFormat, String), String> {
    let format = ReportFormat::from_str(request.format).map_err(|e| format!("✗ {e}"))?;
    let mut book = load_gradebook(request.catalog, config)?;
    apply(&mut book, request.grades, request.electives)?;

    let cgpa = book.cgpa();
    info!("CGPA {cgpa} over {} credits", cgpa.credits);
    verbose!("✓ Applied {} grades", book.ledger().len());
    Ok((format, render(&book, format)))
}

fn apply(
    book: &mut Gradebook,
    grades: &[(String, String)],
    electives: &[(u32, String)],
) -> Result<(), String> {
    for (ordinal, code) in electives {
        book.select_elective(*ordinal, code)
            .map_err(|e| format!("✗ --elective {ordinal}={code}: {e}"))?;
    }
    for (code, token) in grades {
        book.set_grade_token(code, token)
            .map_err(|e| format!("✗ --grade {code}={token}: {e}"))?;
    }
    Ok(())
}
