//! Commit aggregation

use std::collections::HashMap;

use crate::model::{Commit, LineRecord};

/// Group records by commit id and sort the commits by instant.
///
/// Groups keep first-seen order of commit ids, so commits sharing an instant
/// stay in input order after the (stable) sort.
pub fn aggregate_commits(records: Vec<LineRecord>, repo: &str) -> Vec<Commit> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<LineRecord>)> = Vec::new();

    for record in records {
        match index.get(&record.commit) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(record.commit.clone(), groups.len());
                groups.push((record.commit.clone(), vec![record]));
            }
        }
    }

    let mut commits: Vec<Commit> = groups
        .into_iter()
        .filter_map(|(id, lines)| Commit::from_lines(id, repo, lines))
        .collect();
    commits.sort_by(|a, b| a.datetime().cmp(&b.datetime()));

    tracing::debug!(commits = commits.len(), "aggregated commits");
    commits
}
