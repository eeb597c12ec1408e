//! History data layer
//!
//! Loads the per-line history table and aggregates it into commits.

mod aggregate;
mod loader;

pub use aggregate::aggregate_commits;
pub use loader::{REQUIRED_COLUMNS, load_records, parse_records};

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::Commit;

/// Errors that can occur while loading the history table
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column `{0}`")]
    MissingColumn(&'static str),

    #[error("Row {row}: invalid {column} value `{value}`")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Row {row}: invalid {column} `{value}`")]
    InvalidDate {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Load the table at `path` and aggregate it into time-sorted commits
pub fn load_commits(path: &Path, repo: &str) -> Result<Vec<Commit>, DataLoadError> {
    let records = load_records(path)?;
    Ok(aggregate_commits(records, repo))
}
