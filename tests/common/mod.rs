//! Common test utilities for integration tests.
//!
//! Builds per-line history tables in memory or on disk.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

use std::io::Write;

use chrono::DateTime;
use tempfile::NamedTempFile;

use commitscope::data::{aggregate_commits, parse_records};
use commitscope::model::Commit;

pub const HEADER: &str = "commit,file,line,type,depth,length,author,date,time,timezone,datetime";
pub const REPO: &str = "me/repo";

/// Builder for a history table
#[derive(Debug, Default, Clone)]
pub struct History {
    rows: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `lines` lines of `file` (of type `kind`) to commit `id` at `datetime`
    pub fn lines(mut self, id: &str, datetime: &str, file: &str, kind: &str, lines: u32) -> Self {
        let dt = DateTime::parse_from_rfc3339(datetime).expect("fixture datetime");
        let date = dt.format("%Y-%m-%d");
        let time = dt.format("%H:%M:%S");
        let timezone = dt.format("%:z");
        for line in 1..=lines {
            self.rows.push(format!(
                "{id},{file},{line},{kind},{depth},{length},jw,{date},{time},{timezone},{datetime}",
                depth = line % 4,
                length = 10 + line,
            ));
        }
        self
    }

    /// Add a commit touching a single JavaScript file
    pub fn commit(self, id: &str, datetime: &str, lines: u32) -> Self {
        let file = format!("src/{id}.js");
        self.lines(id, datetime, &file, "js", lines)
    }

    pub fn csv(&self) -> String {
        let mut out = String::from(HEADER);
        for row in &self.rows {
            out.push('\n');
            out.push_str(row);
        }
        out.push('\n');
        out
    }

    /// Write the table to a temporary file
    pub fn write(&self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(self.csv().as_bytes()).expect("write fixture");
        file
    }

    /// Parse and aggregate the table
    pub fn commits(&self) -> Vec<Commit> {
        let records = parse_records(self.csv().as_bytes()).expect("fixture parses");
        aggregate_commits(records, REPO)
    }
}

/// Five commits on consecutive days, ten hours apart in time of day
pub fn five_days() -> History {
    History::new()
        .commit("c1", "2024-02-01T08:00:00-08:00", 3)
        .commit("c2", "2024-02-02T13:36:00-08:00", 6)
        .commit("c3", "2024-02-03T22:15:00-08:00", 2)
        .commit("c4", "2024-02-04T10:00:00-08:00", 8)
        .commit("c5", "2024-02-05T16:45:00-08:00", 4)
}
