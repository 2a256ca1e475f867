// Root library of the `planx` crate.
// Re-exports the main modules and provides helpers for locating plan files
// in the data directory.

pub mod algorithm;
pub mod course;
pub mod error;
pub mod models;
pub mod plx;

pub use algorithm::Dependencies;
pub use course::Course;
pub use error::{PlanError, Result};
pub use models::{
    Category, Competence, ControlKind, Degree, EducationPlan, HOURS_PER_CREDIT, Indicator,
    LoadStats, Registry, SemesterWork, Subject, WorkKind,
};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default data directory with *.plx exports (relative to the cwd).
pub const DATAFILES_DIR: &str = "datafiles";

/// Resolve the data directory: the `PLANX_DATA_DIR` env var wins, then
/// `datafiles/` under the cwd, then the cwd itself.
pub fn get_datafiles_dir() -> PathBuf {
    if let Ok(path) = std::env::var("PLANX_DATA_DIR") {
        let p = PathBuf::from(path);
        if p.is_dir() {
            return p;
        }
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let candidate = cwd.join(DATAFILES_DIR);
    if candidate.is_dir() { candidate } else { cwd }
}

/// Resolve a plan file: a direct path is used as given, otherwise the name
/// is looked up in the data directory.
pub fn resolve_plan_path(name: &str) -> Result<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Ok(direct.to_path_buf());
    }
    let candidate = get_datafiles_dir().join(name);
    if candidate.is_file() {
        return Ok(candidate);
    }
    Err(PlanError::Io {
        path: candidate,
        source: io::Error::new(io::ErrorKind::NotFound, "plan file not found"),
    })
}

/// List the *.plx files available in the data directory, ignoring hidden
/// and editor-temporary files.
pub fn list_available_plans() -> Vec<String> {
    let mut plans = Vec::new();
    let Ok(entries) = fs::read_dir(get_datafiles_dir()) else {
        return plans;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || name.starts_with('~') || name.ends_with('~') {
            continue;
        }
        if name.to_lowercase().ends_with(".plx") {
            plans.push(name.to_string());
        }
    }
    plans.sort();
    plans
}
