//! CLI argument definitions for `cgpacalc`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use cgpa_calc::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Parse a `CODE=GRADE` pair
fn parse_grade_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((code, grade)) if !code.trim().is_empty() && !grade.trim().is_empty() => {
            Ok((code.trim().to_string(), grade.trim().to_string()))
        }
        _ => Err(format!("expected CODE=GRADE, got '{raw}'")),
    }
}

/// Parse a `SEM=CODE` pair
fn parse_elective_pair(raw: &str) -> Result<(u32, String), String> {
    let (sem, code) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected SEM=CODE, got '{raw}'"))?;
    let ordinal = sem
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("'{sem}' is not a semester number"))?;
    let code = code.trim();
    if code.is_empty() {
        return Err(format!("expected SEM=CODE, got '{raw}'"));
    }
    Ok((ordinal, code.to_string()))
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (`level`, `file`, `verbose`, `catalog`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List the curriculum's courses.
    Courses {
        /// Only list this semester
        #[arg(short, long, value_name = "N")]
        semester: Option<u32>,

        /// Curriculum catalog TOML (defaults to config `catalog`, then the built-in catalog)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Compute SGPA and CGPA from grades given on the command line.
    Calc {
        /// Grade for a course, repeatable (e.g. `--grade U18CSI3201=A+`)
        #[arg(short, long = "grade", value_name = "CODE=GRADE", value_parser = parse_grade_pair)]
        grades: Vec<(String, String)>,

        /// Elective choice for a semester, repeatable (e.g. `--elective 1=U18FRI2201`)
        #[arg(short, long = "elective", value_name = "SEM=CODE", value_parser = parse_elective_pair)]
        electives: Vec<(u32, String)>,

        /// Grade sheet format: text or markdown (md)
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Write the grade sheet to this file instead of stdout (`.txt`/`.md` added when FILE has no extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Curriculum catalog TOML (defaults to config `catalog`, then the built-in catalog)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Enter grades and edit courses interactively.
    Shell {
        /// Curriculum catalog TOML (defaults to config `catalog`, then the built-in catalog)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "cgpacalc",
    about = "SGPA / CGPA calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog file
    #[arg(long = "config-catalog", value_name = "FILE")]
    pub config_catalog: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalog: self
                .config_catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
