//! Stats View - Aggregate counters over the visible history
//!
//! Every value degrades to `0` or `—` on an empty set.

mod render;

use std::collections::HashMap;

use crate::format::{MISSING, day_period, format_count};
use crate::model::{Commit, LineRecord};

/// Aggregates over the currently visible line records and commits
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stats {
    /// Number of line records
    pub total_lines: usize,
    /// Number of commits
    pub total_commits: usize,
    /// Number of distinct files
    pub files: usize,
    /// File with the highest line number, and that number
    pub longest_file: Option<(String, u32)>,
    /// Mean of each file's highest line number
    pub mean_file_length: Option<f64>,
    /// Deepest nesting level seen
    pub max_depth: Option<u32>,
    /// Day period with the most line records
    pub busiest_period: Option<&'static str>,
}

impl Stats {
    /// Compute stats from line records and the number of commits they came from
    pub fn compute<'a>(lines: impl IntoIterator<Item = &'a LineRecord>, total_commits: usize) -> Self {
        let mut total_lines = 0;
        let mut max_depth: Option<u32> = None;
        // First-seen order keeps ties deterministic
        let mut file_index: HashMap<&str, usize> = HashMap::new();
        let mut file_lengths: Vec<(&str, u32)> = Vec::new();
        let mut period_index: HashMap<&'static str, usize> = HashMap::new();
        let mut period_counts: Vec<(&'static str, usize)> = Vec::new();

        for record in lines {
            total_lines += 1;
            max_depth = Some(max_depth.map_or(record.depth, |d| d.max(record.depth)));

            match file_index.get(record.file.as_str()) {
                Some(&i) => file_lengths[i].1 = file_lengths[i].1.max(record.line),
                None => {
                    file_index.insert(record.file.as_str(), file_lengths.len());
                    file_lengths.push((record.file.as_str(), record.line));
                }
            }

            let period = day_period(&record.datetime);
            match period_index.get(period) {
                Some(&i) => period_counts[i].1 += 1,
                None => {
                    period_index.insert(period, period_counts.len());
                    period_counts.push((period, 1));
                }
            }
        }

        let longest_file = first_max_by_key(&file_lengths, |(_, len)| *len)
            .map(|(name, len)| (name.to_string(), *len));
        let mean_file_length = (!file_lengths.is_empty()).then(|| {
            file_lengths.iter().map(|(_, len)| *len as f64).sum::<f64>() / file_lengths.len() as f64
        });
        let busiest_period = first_max_by_key(&period_counts, |(_, n)| *n).map(|(p, _)| *p);

        Self {
            total_lines,
            total_commits,
            files: file_lengths.len(),
            longest_file,
            mean_file_length,
            max_depth,
            busiest_period,
        }
    }

    /// Stats for a slice of commits (their flattened line records)
    pub fn for_commits(commits: &[Commit]) -> Self {
        Self::compute(commits.iter().flat_map(|c| c.lines()), commits.len())
    }

    /// Label/value rows in display order
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total LOC", format_count(self.total_lines)),
            ("Total commits", format_count(self.total_commits)),
            ("Files", format_count(self.files)),
            (
                "Longest file (lines)",
                self.longest_file
                    .as_ref()
                    .map_or_else(|| MISSING.to_string(), |(name, len)| format!("{len} ({name})")),
            ),
            (
                "Avg file length (lines)",
                self.mean_file_length
                    .map_or_else(|| MISSING.to_string(), |mean| format!("{mean:.1}")),
            ),
            (
                "Maximum depth",
                self.max_depth
                    .map_or_else(|| MISSING.to_string(), |d| d.to_string()),
            ),
            (
                "Most active period",
                self.busiest_period.unwrap_or(MISSING).to_string(),
            ),
        ]
    }
}

/// First element with the greatest key (later ties lose)
fn first_max_by_key<T, K: PartialOrd>(items: &[T], key: impl Fn(&T) -> K) -> Option<&T> {
    let mut best: Option<(&T, K)> = None;
    for item in items {
        let k = key(item);
        let better = match &best {
            Some((_, best_key)) => k > *best_key,
            None => true,
        };
        if better {
            best = Some((item, k));
        }
    }
    best.map(|(item, _)| item)
}

/// View state for the stats panel
#[derive(Debug, Clone, Default)]
pub struct StatsView {
    stats: Stats,
}

impl StatsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from the visible commits
    pub fn refresh(&mut self, commits: &[Commit]) {
        self.stats = Stats::for_commits(commits);
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}
