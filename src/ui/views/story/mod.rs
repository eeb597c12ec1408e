//! Story View - One narrative step per commit
//!
//! Scrolling the pane moves a trigger line over the steps; when a new step
//! crosses it the pane reports a [`StepEnter`] so the caller can move the
//! time cursor to that step's commit.

mod render;
mod tracker;

pub use tracker::{ScrollDirection, StepBox, StepEnter, StepTracker, TriggerLineTracker};

use crate::format::{format_count, long_datetime};
use crate::model::Commit;

/// One narrative unit
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Index of the commit in canonical (time-sorted) order
    pub commit: usize,
    /// Narrative sentence
    pub text: String,
    /// Link to the commit
    pub url: String,
    /// Distinct files touched by the commit
    pub files: usize,
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("1 {word}")
    } else {
        format!("{} {word}s", format_count(n))
    }
}

/// Build one step per commit, in the order given
pub fn build_steps(commits: &[Commit]) -> Vec<Step> {
    commits
        .iter()
        .enumerate()
        .map(|(i, commit)| {
            let files = commit.files_touched();
            let which = if i == 0 {
                "the first commit"
            } else {
                "another commit"
            };
            let text = format!(
                "On {}, I made {which} ({}). I edited {} across {}.",
                long_datetime(&commit.datetime()),
                commit.short_id(),
                plural(commit.total_lines(), "line"),
                plural(files, "file"),
            );
            Step {
                commit: i,
                text,
                url: commit.url().to_string(),
                files,
            }
        })
        .collect()
}

/// Greedy word wrap; words longer than `width` are split
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Columns reserved on the left for the trigger marker
pub(crate) const GUTTER_WIDTH: u16 = 2;

/// A step's text wrapped to the pane width
#[derive(Debug, Clone, Default)]
struct WrappedStep {
    text: Vec<String>,
    link: Vec<String>,
}

impl WrappedStep {
    /// Text, link and one blank spacer line
    fn height(&self) -> usize {
        self.text.len() + self.link.len() + 1
    }
}

/// View state for the scrollytelling pane
#[derive(Debug)]
pub struct StoryView {
    steps: Vec<Step>,
    tracker: Box<dyn StepTracker>,
    wrapped: Vec<WrappedStep>,
    boxes: Vec<StepBox>,
    /// Inner (width, height) the geometry was computed for
    viewport: (u16, u16),
    content_height: usize,
    scroll: usize,
}

impl Default for StoryView {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl StoryView {
    /// Story pane with a trigger line at `trigger` (fraction of the viewport)
    pub fn new(trigger: f64) -> Self {
        Self::with_tracker(Box::new(TriggerLineTracker::new(trigger)))
    }

    /// Story pane driven by a custom tracker
    pub fn with_tracker(tracker: Box<dyn StepTracker>) -> Self {
        Self {
            steps: Vec::new(),
            tracker,
            wrapped: Vec::new(),
            boxes: Vec::new(),
            viewport: (0, 0),
            content_height: 0,
            scroll: 0,
        }
    }

    /// Replace the steps with one per commit
    pub fn set_commits(&mut self, commits: &[Commit]) {
        self.steps = build_steps(commits);
        self.scroll = 0;
        self.relayout();
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn active(&self) -> Option<usize> {
        self.tracker.active()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn boxes(&self) -> &[StepBox] {
        &self.boxes
    }

    /// Largest scroll offset
    pub fn max_scroll(&self) -> usize {
        self.content_height
            .saturating_sub(self.viewport.1 as usize)
    }

    /// Adopt a new inner viewport size; geometry is recomputed when it changes
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.viewport != (width, height) {
            self.viewport = (width, height);
            self.relayout();
        }
    }

    /// Recompute step boundaries for the current viewport
    fn relayout(&mut self) {
        let (width, height) = self.viewport;
        let text_width = width.saturating_sub(GUTTER_WIDTH) as usize;
        let height = height as usize;
        let trigger_line = self.tracker.trigger_line(height);

        // Leading pad keeps the first step below the trigger line at offset 0,
        // trailing pad lets the last step reach it.
        let mut top = trigger_line + 1;
        self.wrapped.clear();
        self.boxes.clear();
        for step in &self.steps {
            let wrapped = WrappedStep {
                text: wrap_words(&step.text, text_width),
                link: wrap_words(&step.url, text_width),
            };
            self.boxes.push(StepBox {
                top,
                height: wrapped.height(),
            });
            top += wrapped.height();
            self.wrapped.push(wrapped);
        }
        self.content_height = top + height.saturating_sub(trigger_line);
        self.scroll = self.scroll.min(self.max_scroll());

        self.tracker.layout(self.boxes.clone(), height);
        tracing::debug!(
            steps = self.steps.len(),
            width,
            height,
            "story geometry recomputed"
        );
    }

    /// Scroll to an absolute offset (clamped) and observe it
    pub fn scroll_to(&mut self, offset: usize) -> Option<StepEnter> {
        self.scroll = offset.min(self.max_scroll());
        self.tracker.scroll_to(self.scroll)
    }

    /// Scroll by `delta` lines
    pub fn scroll_by(&mut self, delta: isize) -> Option<StepEnter> {
        self.scroll_to(self.scroll.saturating_add_signed(delta))
    }

    /// Scroll so `index`'s first line sits on the trigger line
    pub fn scroll_to_step(&mut self, index: usize) -> Option<StepEnter> {
        let trigger_line = self.tracker.trigger_line(self.viewport.1 as usize);
        let top = self.boxes.get(index)?.top;
        self.scroll_to(top.saturating_sub(trigger_line))
    }

    /// Scroll by one page (the viewport height)
    pub fn page(&mut self, down: bool) -> Option<StepEnter> {
        let page = self.viewport.1.max(1) as isize;
        self.scroll_by(if down { page } else { -page })
    }
}
