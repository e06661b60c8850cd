//! Courses command handler

use super::load_gradebook;
use cgpa_calc::config::Config;
use cgpa_calc::core::report::render_semester_text;
use logger::error;
use std::path::Path;

/// List the courses of one semester, or of every semester
pub fn run(semester: Option<u32>, catalog: Option<&Path>, config: &Config) {
    match listing(semester, catalog, config) {
        Ok(text) => print!("{text}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn listing(semester: Option<u32>, catalog: Option<&Path>, config: &Config) -> Result<String, String> {
    let book = load_gradebook(catalog, config)?;
    let curriculum = book.curriculum();

    if let Some(ordinal) = semester {
        let semester = curriculum.semester(ordinal).map_err(|e| {
            error!("Course listing failed: {e}");
            format!("✗ {e}")
        })?;
        return Ok(render_semester_text(&book, semester));
    }

    let mut out = String::new();
    if !curriculum.name.is_empty() {
        out.push_str(&curriculum.name);
        out.push_str("\n\n");
    }
    for semester in &curriculum.semesters {
        out.push_str(&render_semester_text(&book, semester));
        out.push('\n');
    }
    Ok(out)
}
