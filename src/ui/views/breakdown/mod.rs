//! File Breakdown View - One colored unit per visible line, grouped by file
//!
//! Groups are keyed by file name and re-bound incrementally: existing groups
//! are updated in place, new files enter, vanished files exit.

mod render;

use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::LineRecord;
use crate::ui::theme::CATEGORY_PALETTE;

/// Lines of one file
#[derive(Debug, Clone, PartialEq)]
pub struct FileGroup {
    /// File path (the group key)
    pub name: String,
    /// Line type of every visible line, in record order
    pub units: Vec<String>,
    /// Rebind generation in which the group entered
    pub entered_at: u64,
}

impl FileGroup {
    pub fn line_count(&self) -> usize {
        self.units.len()
    }
}

/// What a rebind did to the group set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RebindSummary {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// Ordinal color assignment: first type seen gets the first palette color
#[derive(Debug, Clone, Default)]
pub struct TypeColors {
    assigned: HashMap<String, usize>,
}

impl TypeColors {
    /// Color for `kind`, assigning the next palette slot if unseen
    pub fn color_for(&mut self, kind: &str) -> Color {
        let next = self.assigned.len();
        let slot = *self.assigned.entry(kind.to_string()).or_insert(next);
        CATEGORY_PALETTE[slot % CATEGORY_PALETTE.len()]
    }

    /// Color for an already-assigned `kind`
    pub fn get(&self, kind: &str) -> Option<Color> {
        self.assigned
            .get(kind)
            .map(|slot| CATEGORY_PALETTE[slot % CATEGORY_PALETTE.len()])
    }
}

/// View state for the per-file unit grid
#[derive(Debug, Clone, Default)]
pub struct BreakdownView {
    /// Groups sorted by line count, descending
    groups: Vec<FileGroup>,
    colors: TypeColors,
    generation: u64,
    /// First group shown
    scroll_offset: usize,
}

impl BreakdownView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-bind the groups to a new set of visible line records
    pub fn rebind<'a>(&mut self, lines: impl IntoIterator<Item = &'a LineRecord>) -> RebindSummary {
        self.generation += 1;

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut incoming: Vec<(&str, Vec<String>)> = Vec::new();
        for line in lines {
            self.colors.color_for(&line.kind);
            match index.get(line.file.as_str()) {
                Some(&i) => incoming[i].1.push(line.kind.clone()),
                None => {
                    index.insert(line.file.as_str(), incoming.len());
                    incoming.push((line.file.as_str(), vec![line.kind.clone()]));
                }
            }
        }

        let mut summary = RebindSummary::default();

        // Exit: drop groups whose file is no longer visible
        let before = self.groups.len();
        self.groups.retain(|g| index.contains_key(g.name.as_str()));
        summary.exited = before - self.groups.len();

        // Update in place, keyed by file name
        let existing: HashMap<String, usize> = self
            .groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.name.clone(), i))
            .collect();
        for (name, units) in incoming {
            match existing.get(name) {
                Some(&i) => {
                    self.groups[i].units = units;
                    summary.updated += 1;
                }
                None => {
                    self.groups.push(FileGroup {
                        name: name.to_string(),
                        units,
                        entered_at: self.generation,
                    });
                    summary.entered += 1;
                }
            }
        }

        // Stable: equal counts keep their previous relative order
        self.groups
            .sort_by(|a, b| b.line_count().cmp(&a.line_count()));
        self.scroll_offset = self.scroll_offset.min(self.groups.len().saturating_sub(1));

        tracing::debug!(
            entered = summary.entered,
            updated = summary.updated,
            exited = summary.exited,
            "file breakdown rebound"
        );
        summary
    }

    pub fn groups(&self) -> &[FileGroup] {
        &self.groups
    }

    pub fn colors(&self) -> &TypeColors {
        &self.colors
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.groups.len() {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}
