//! Line-oriented interactive session over a [`Gradebook`]
//!
//! One command per line. Every command that changes grades or courses is
//! answered with the recomputed SGPA of the affected semesters and the CGPA,
//! so the displayed results are never stale. Course positions are 1-based.

use crate::core::error::GpaError;
use crate::core::gradebook::Gradebook;
use crate::core::models::{CourseDraft, CoursePatch, CourseType, Grade};
use crate::core::report::{render, render_semester_text, ReportFormat};
use logger::debug;
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Command reference printed by `help`
pub const HELP: &str = "\
Commands:
  grade CODE GRADE              record O, A+, A, B+, B, C or RA (- clears)
  clear CODE                    remove a recorded grade
  add SEM CREDITS TYPE NAME...  add a course (TYPE: core, elective, audit, mandatory)
  edit SEM POS field=value...   change code, name, credits, type or requirement
  delete SEM POS                remove a course and its grade
  elective SEM CODE|none        choose the active elective
  courses [SEM]                 list courses with their grades
  sgpa SEM                      show one semester's SGPA
  cgpa                          show the CGPA
  summary                       show the full grade sheet
  help                          show this help
  quit                          leave the session";

/// Errors produced while reading or running a shell command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// The line could not be understood.
    #[error("{0}")]
    Usage(String),

    /// The command was understood but the gradebook rejected it.
    #[error(transparent)]
    Gpa(#[from] GpaError),
}

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Record a grade
    Grade {
        /// Course code
        code: String,
        /// Grade to record
        grade: Grade,
    },
    /// Remove a grade
    Clear {
        /// Course code
        code: String,
    },
    /// Add a course
    Add {
        /// Semester ordinal
        ordinal: u32,
        /// New course fields
        draft: CourseDraft,
    },
    /// Edit a course
    Edit {
        /// Semester ordinal
        ordinal: u32,
        /// 0-based course index
        index: usize,
        /// Field replacements
        patch: CoursePatch,
    },
    /// Delete a course
    Delete {
        /// Semester ordinal
        ordinal: u32,
        /// 0-based course index
        index: usize,
    },
    /// Select (or with `None`, deselect) an elective
    Elective {
        /// Semester ordinal
        ordinal: u32,
        /// Alternative code
        code: Option<String>,
    },
    /// List courses of one or all semesters
    Courses(Option<u32>),
    /// Show one SGPA
    Sgpa(u32),
    /// Show the CGPA
    Cgpa,
    /// Show the full grade sheet
    Summary,
    /// Show the command reference
    Help,
    /// End the session
    Quit,
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep going
    Continue(String),
    /// End the session
    Quit,
}

/// Split a line on whitespace, keeping double-quoted runs together
///
/// # Errors
/// Returns `Usage` for an unterminated quote
pub fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if in_quotes {
        return Err(ShellError::Usage("unterminated quote".to_string()));
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn usage(msg: &str) -> ShellError {
    ShellError::Usage(format!("usage: {msg}"))
}

fn parse_ordinal(token: Option<&String>, form: &str) -> Result<u32, ShellError> {
    let token = token.ok_or_else(|| usage(form))?;
    token
        .parse::<u32>()
        .map_err(|_| ShellError::Usage(format!("'{token}' is not a semester number")))
}

fn parse_position(token: Option<&String>, form: &str) -> Result<usize, ShellError> {
    let token = token.ok_or_else(|| usage(form))?;
    match token.parse::<usize>() {
        Ok(0) => Err(ShellError::Usage("course positions start at 1".to_string())),
        Ok(pos) => Ok(pos - 1),
        Err(_) => Err(ShellError::Usage(format!(
            "'{token}' is not a course position"
        ))),
    }
}

/// Parse one input line; blank lines and `#` comments yield `None`
///
/// # Errors
/// Returns `Usage` for unknown commands or malformed arguments, and
/// `Gpa(InvalidGrade)` for an unknown grade token
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ShellError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let tokens = tokenize(trimmed)?;
    let Some((head, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match head.to_lowercase().as_str() {
        "grade" | "set" => {
            const FORM: &str = "grade CODE GRADE";
            let [code, grade] = args else {
                return Err(usage(FORM));
            };
            ShellCommand::Grade {
                code: code.clone(),
                grade: grade.parse()?,
            }
        }
        "clear" => {
            let [code] = args else {
                return Err(usage("clear CODE"));
            };
            ShellCommand::Clear { code: code.clone() }
        }
        "add" => {
            const FORM: &str = "add SEM CREDITS TYPE NAME...";
            if args.len() < 4 {
                return Err(usage(FORM));
            }
            let ordinal = parse_ordinal(args.first(), FORM)?;
            let credits = args[1]
                .parse::<u32>()
                .map_err(|_| ShellError::Usage(format!("'{}' is not a credit count", args[1])))?;
            let kind = args[2].parse::<CourseType>().map_err(ShellError::Usage)?;
            let name = args[3..].join(" ");
            ShellCommand::Add {
                ordinal,
                draft: CourseDraft::new(name, credits, kind),
            }
        }
        "edit" => {
            const FORM: &str = "edit SEM POS field=value...";
            if args.len() < 3 {
                return Err(usage(FORM));
            }
            let ordinal = parse_ordinal(args.first(), FORM)?;
            let index = parse_position(args.get(1), FORM)?;
            let mut patch = CoursePatch::default();
            for pair in &args[2..] {
                let (field, value) = pair
                    .split_once('=')
                    .ok_or_else(|| ShellError::Usage(format!("expected field=value, got '{pair}'")))?;
                patch
                    .set_field(&field.to_lowercase(), value)
                    .map_err(ShellError::Usage)?;
            }
            ShellCommand::Edit {
                ordinal,
                index,
                patch,
            }
        }
        "delete" | "rm" => {
            const FORM: &str = "delete SEM POS";
            if args.len() != 2 {
                return Err(usage(FORM));
            }
            ShellCommand::Delete {
                ordinal: parse_ordinal(args.first(), FORM)?,
                index: parse_position(args.get(1), FORM)?,
            }
        }
        "elective" => {
            const FORM: &str = "elective SEM CODE|none";
            let [_, code] = args else {
                return Err(usage(FORM));
            };
            let code = (!code.eq_ignore_ascii_case("none")).then(|| code.clone());
            ShellCommand::Elective {
                ordinal: parse_ordinal(args.first(), FORM)?,
                code,
            }
        }
        "courses" | "ls" => match args {
            [] => ShellCommand::Courses(None),
            [_] => ShellCommand::Courses(Some(parse_ordinal(args.first(), "courses [SEM]")?)),
            _ => return Err(usage("courses [SEM]")),
        },
        "sgpa" => {
            if args.len() != 1 {
                return Err(usage("sgpa SEM"));
            }
            ShellCommand::Sgpa(parse_ordinal(args.first(), "sgpa SEM")?)
        }
        "cgpa" if args.is_empty() => ShellCommand::Cgpa,
        "summary" if args.is_empty() => ShellCommand::Summary,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => {
            return Err(ShellError::Usage(format!(
                "unknown command '{other}' (type 'help')"
            )))
        }
    };
    Ok(Some(command))
}

/// Recomputed results after a change to the given semesters
fn refresh(book: &Gradebook, ordinals: &[u32]) -> String {
    let mut out = String::new();
    for ordinal in ordinals {
        if let Ok(tally) = book.sgpa(*ordinal) {
            let _ = write!(out, "SGPA[{ordinal}] {tally} (RA: {})  ", tally.ra_count);
        }
    }
    let cgpa = book.cgpa();
    let _ = write!(out, "CGPA {cgpa} (RA: {})", cgpa.ra_count);
    out
}

fn semesters_using(book: &Gradebook, code: &str) -> Vec<u32> {
    book.curriculum()
        .semesters
        .iter()
        .filter(|s| s.uses_code(code))
        .map(|s| s.ordinal)
        .collect()
}

/// Run one command against the gradebook
///
/// # Errors
/// Returns `Gpa` when the gradebook rejects the command; state is unchanged
pub fn execute(book: &mut Gradebook, command: ShellCommand) -> Result<Outcome, ShellError> {
    debug!("Shell command: {command:?}");
    let text = match command {
        ShellCommand::Grade { code, grade } => {
            book.set_grade(&code, grade)?;
            format!("{code} = {grade}\n{}", refresh(book, &semesters_using(book, &code)))
        }
        ShellCommand::Clear { code } => {
            book.clear_grade(&code);
            format!("{code} cleared\n{}", refresh(book, &semesters_using(book, &code)))
        }
        ShellCommand::Add { ordinal, draft } => {
            let code = book.add_course(ordinal, draft)?;
            format!("Added {code} to semester {ordinal}\n{}", refresh(book, &[ordinal]))
        }
        ShellCommand::Edit {
            ordinal,
            index,
            patch,
        } => {
            book.edit_course(ordinal, index, &patch)?;
            let code = &book.courses(ordinal)?[index].code;
            format!(
                "Updated {code} in semester {ordinal}\n{}",
                refresh(book, &[ordinal])
            )
        }
        ShellCommand::Delete { ordinal, index } => {
            let removed = book.delete_course(ordinal, index)?;
            format!(
                "Deleted {} {}\n{}",
                removed.code,
                removed.name,
                refresh(book, &[ordinal])
            )
        }
        ShellCommand::Elective { ordinal, code } => {
            let label = if let Some(code) = code {
                book.select_elective(ordinal, &code)?;
                format!("Elective for semester {ordinal}: {code}")
            } else {
                book.clear_elective(ordinal)?;
                format!("No elective selected for semester {ordinal}")
            };
            format!("{label}\n{}", refresh(book, &[ordinal]))
        }
        ShellCommand::Courses(Some(ordinal)) => {
            let semester = book.curriculum().semester(ordinal)?;
            render_semester_text(book, semester)
        }
        ShellCommand::Courses(None) => {
            let mut out = String::new();
            for semester in &book.curriculum().semesters {
                out.push_str(&render_semester_text(book, semester));
            }
            out
        }
        ShellCommand::Sgpa(ordinal) => {
            let tally = book.sgpa(ordinal)?;
            format!("SGPA[{ordinal}] {tally} (RA: {})", tally.ra_count)
        }
        ShellCommand::Cgpa => refresh(book, &[]),
        ShellCommand::Summary => render(book, ReportFormat::Text),
        ShellCommand::Help => HELP.to_string(),
        ShellCommand::Quit => return Ok(Outcome::Quit),
    };
    Ok(Outcome::Continue(text))
}

/// Drive a session: read commands from `input` until `quit` or end of input
///
/// Rejected commands are reported on `output` and leave the gradebook unchanged.
///
/// # Errors
/// Returns an error only if reading input or writing output fails
pub fn run<R: BufRead, W: Write>(
    book: &mut Gradebook,
    input: R,
    output: &mut W,
    prompt: bool,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(output, "cgpa> ")?;
            output.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let result = parse_line(&line).and_then(|parsed| match parsed {
            Some(command) => execute(book, command).map(Some),
            None => Ok(None),
        });
        match result {
            Ok(Some(Outcome::Quit)) => break,
            Ok(Some(Outcome::Continue(text))) => writeln!(output, "{}", text.trim_end())?,
            Ok(None) => {}
            Err(err) => writeln!(output, "✗ {err}")?,
        }
    }
    Ok(())
}
