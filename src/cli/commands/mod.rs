//! CLI command handlers for `cgpacalc`.
//!
//! Each command is implemented in its own submodule.

pub mod calc;
pub mod config;
pub mod courses;
pub mod shell;

use cgpa_calc::config::Config;
use cgpa_calc::core::catalog;
use cgpa_calc::Gradebook;
use logger::{error, info};
use std::path::{Path, PathBuf};

/// Pick the catalog file: the command's `--catalog` flag, else the config `catalog` key
fn catalog_path(flag: Option<&Path>, config: &Config) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(|| {
        (!config.catalog.file.is_empty()).then(|| PathBuf::from(&config.catalog.file))
    })
}

/// Build a gradebook over the selected catalog, falling back to the built-in one
pub fn load_gradebook(flag: Option<&Path>, config: &Config) -> Result<Gradebook, String> {
    let Some(path) = catalog_path(flag, config) else {
        info!("Using built-in catalog");
        return Ok(Gradebook::builtin());
    };
    let curriculum = catalog::load(&path).map_err(|e| {
        error!("Failed to load catalog {}: {e}", path.display());
        format!("✗ Failed to load catalog {}: {e}", path.display())
    })?;
    info!("Catalog loaded: {}", path.display());
    Ok(Gradebook::new(curriculum))
}
