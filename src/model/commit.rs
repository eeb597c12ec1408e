//! Commit data model

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, FixedOffset, Timelike, Utc};

use super::LineRecord;

/// Base URL commits link to; the repository slug is appended
pub const GITHUB_BASE_URL: &str = "https://github.com";

/// One commit, built from all line records sharing its identifier
///
/// The backing line records are bulk payload: they are reachable through
/// [`Commit::lines`] but take no part in equality or `Debug` output.
#[derive(Clone)]
pub struct Commit {
    /// Full commit identifier
    id: String,
    /// Link to the commit on the hosting service
    url: String,
    /// Author name
    author: String,
    /// Commit date at local midnight
    date: DateTime<FixedOffset>,
    /// Raw time-of-day column
    time: String,
    /// Raw timezone column
    timezone: String,
    /// Commit instant (taken from the first record)
    datetime: DateTime<FixedOffset>,
    /// Hour + minute/60 of `datetime`, in [0, 24)
    hour_frac: f64,
    /// Number of line records in this commit
    total_lines: usize,
    lines: Vec<LineRecord>,
}

impl Commit {
    /// Build a commit from its line records.
    ///
    /// Shared scalar fields come from the first record. Returns `None` for an
    /// empty group.
    pub fn from_lines(id: String, repo: &str, lines: Vec<LineRecord>) -> Option<Self> {
        let first = lines.first()?;
        let datetime = first.datetime;

        Some(Self {
            url: commit_url(repo, &id),
            id,
            author: first.author.clone(),
            date: first.date,
            time: first.time.clone(),
            timezone: first.timezone.clone(),
            datetime,
            hour_frac: hour_fraction(&datetime),
            total_lines: lines.len(),
            lines,
        })
    }

    /// Full commit identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Link to the commit on the hosting service
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Commit date at local midnight
    pub fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    /// Raw time-of-day column
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Raw timezone column
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Commit timestamp in its recorded offset
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.datetime
    }

    /// Hour + minute/60 of the timestamp, in [0, 24)
    pub fn hour_frac(&self) -> f64 {
        self.hour_frac
    }

    /// Number of line records in this commit
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Line records backing this commit
    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    /// Commit instant in UTC
    pub fn instant(&self) -> DateTime<Utc> {
        self.datetime.with_timezone(&Utc)
    }

    /// First 10 characters of the identifier
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(10) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    /// Number of distinct files this commit touched
    pub fn files_touched(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.file.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

impl PartialEq for Commit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.url == other.url
            && self.author == other.author
            && self.date == other.date
            && self.time == other.time
            && self.timezone == other.timezone
            && self.datetime == other.datetime
            && self.hour_frac == other.hour_frac
            && self.total_lines == other.total_lines
    }
}

impl fmt::Debug for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commit")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("author", &self.author)
            .field("datetime", &self.datetime)
            .field("hour_frac", &self.hour_frac)
            .field("total_lines", &self.total_lines)
            .finish_non_exhaustive()
    }
}

/// Commit URL for `repo` (an `owner/name` slug)
pub fn commit_url(repo: &str, id: &str) -> String {
    format!("{GITHUB_BASE_URL}/{repo}/commit/{id}")
}

/// Wall-clock hour plus minute fraction, in the instant's own offset
pub fn hour_fraction(datetime: &DateTime<FixedOffset>) -> f64 {
    datetime.hour() as f64 + datetime.minute() as f64 / 60.0
}
