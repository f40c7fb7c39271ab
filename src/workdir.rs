//! Working directory resolution
//!
//! The only fallible step in the report. Failure is swallowed at the point
//! of origin and replaced by the `UNKNOWN_DIR` placeholder.

use std::env;
use std::path::PathBuf;

use crate::consts::UNKNOWN_DIR;
use crate::error::AppError;

/// Returns the absolute path of the current working directory, or
/// `"Unknown"` if it cannot be resolved (e.g. the directory was deleted).
pub(crate) fn resolve() -> String {
    resolve_from(query())
}

fn query() -> Result<PathBuf, AppError> {
    Ok(env::current_dir()?)
}

fn resolve_from(dir: Result<PathBuf, AppError>) -> String {
    match dir {
        Ok(path) => path.display().to_string(),
        Err(_) => UNKNOWN_DIR.to_string(),
    }
}
