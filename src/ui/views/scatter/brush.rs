//! Brush selection and the readouts derived from it

use std::collections::HashMap;

use crate::format::{format_count, format_percent};
use crate::model::Commit;

/// Axis-aligned rectangle in chart pixel space (normalized so `x0 <= x1`, `y0 <= y1`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Brush {
    /// Rectangle spanned by two opposite corners, in any order
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x0: a.0.min(b.0),
            y0: a.1.min(b.1),
            x1: a.0.max(b.0),
            y1: a.1.max(b.1),
        }
    }

    /// Inclusive containment test
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }

    /// Whether the rectangle has zero width or height
    pub fn is_empty(&self) -> bool {
        self.x0 == self.x1 || self.y0 == self.y1
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Line count and share of one language among the selected lines
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub kind: String,
    pub lines: usize,
    pub share: f64,
}

impl LanguageShare {
    /// `123 lines (45.6%)`
    pub fn describe(&self) -> String {
        format!(
            "{} lines ({})",
            format_count(self.lines),
            format_percent(self.share)
        )
    }
}

/// Readouts for the current brush selection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionSummary {
    /// Number of selected commits
    pub commits: usize,
    /// Per-language line counts, in first-seen order
    pub languages: Vec<LanguageShare>,
}

impl SelectionSummary {
    /// Summarize the commits at `selected` (indices into `commits`)
    pub fn compute(commits: &[Commit], selected: &[usize]) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut total = 0;

        for line in selected
            .iter()
            .filter_map(|&i| commits.get(i))
            .flat_map(|c| c.lines())
        {
            total += 1;
            match index.get(line.kind.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(line.kind.as_str(), counts.len());
                    counts.push((line.kind.as_str(), 1));
                }
            }
        }

        let languages = counts
            .into_iter()
            .map(|(kind, lines)| LanguageShare {
                kind: kind.to_string(),
                lines,
                share: lines as f64 / total as f64,
            })
            .collect();

        Self {
            commits: selected.iter().filter(|&&i| i < commits.len()).count(),
            languages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commits == 0
    }

    /// `N commit(s) selected`, or `None` when nothing is selected
    pub fn count_label(&self) -> Option<String> {
        match self.commits {
            0 => None,
            1 => Some("1 commit selected".to_string()),
            n => Some(format!("{} commits selected", format_count(n))),
        }
    }
}
