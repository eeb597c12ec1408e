//! Line record data model

use chrono::{DateTime, FixedOffset};

/// One changed line from the per-line history table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// File path the line belongs to
    pub file: String,
    /// 1-based line position
    pub line: u32,
    /// Language/category tag (`type` column)
    pub kind: String,
    /// Nesting depth
    pub depth: u32,
    /// Line length in characters
    pub length: u32,
    /// Commit identifier
    pub commit: String,
    /// Author name
    pub author: String,
    /// Commit date at local midnight in the row's timezone
    pub date: DateTime<FixedOffset>,
    /// Raw time-of-day column
    pub time: String,
    /// Raw timezone column (e.g. `-08:00`)
    pub timezone: String,
    /// Canonical commit instant
    pub datetime: DateTime<FixedOffset>,
}
