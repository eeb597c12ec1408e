//! Application state and focus management

use std::cell::Cell;

use chrono::{FixedOffset, Offset, Utc};
use ratatui::layout::Rect;

use crate::config::Config;
use crate::cursor::{ProgressScale, TimeCursor};
use crate::model::{Commit, Notification};
use crate::ui::views::{BreakdownView, ScatterView, SelectionSummary, StatsView, StoryView};
use crate::ui::widgets::SliderTrack;

/// Which input channel receives keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Slider,
    Story,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Slider => Focus::Story,
            Focus::Story => Focus::Slider,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Slider => "Slider",
            Focus::Story => "Story",
        }
    }
}

/// Pane rectangles from the last render (used for mouse hit-testing)
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PaneAreas {
    pub slider: SliderTrack,
    pub story: Rect,
    pub breakdown: Rect,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Keyboard focus
    pub focus: Focus,
    /// Help overlay visible
    pub show_help: bool,
    /// Every commit, time-sorted; never mutated after load
    pub(crate) commits: Vec<Commit>,
    pub(crate) cursor: TimeCursor,
    /// Length of the filtered prefix of `commits`
    pub(crate) visible: usize,
    pub scatter: ScatterView,
    pub stats: StatsView,
    pub breakdown: BreakdownView,
    pub story: StoryView,
    /// Readouts for the current brush
    pub(crate) selection: SelectionSummary,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display in the slider title bar
    pub notification: Option<Notification>,
    pub(crate) config: Config,
    /// Offset the slider label is shown in (that of the latest commit)
    pub(crate) display_offset: FixedOffset,
    /// Mouse button held on the slider track
    pub(crate) slider_dragging: bool,
    /// Last rendered pane areas (uses Cell for interior mutability)
    pub(crate) areas: Cell<PaneAreas>,
}

impl App {
    /// Build the app over a loaded, time-sorted commit sequence
    pub fn new(commits: Vec<Commit>, config: Config) -> Self {
        let cursor = TimeCursor::new(ProgressScale::from_commits(&commits));
        let display_offset = commits
            .last()
            .map(|c| *c.datetime().offset())
            .unwrap_or_else(|| Utc.fix());

        let mut story = StoryView::new(config.story.trigger);
        story.set_commits(&commits);

        let mut app = Self {
            running: true,
            focus: Focus::default(),
            show_help: false,
            visible: commits.len(),
            commits,
            cursor,
            scatter: ScatterView::new(config.radius_range()),
            stats: StatsView::new(),
            breakdown: BreakdownView::new(),
            story,
            selection: SelectionSummary::default(),
            error_message: None,
            notification: None,
            config,
            display_offset,
            slider_dragging: false,
            areas: Cell::new(PaneAreas::default()),
        };
        app.recompute();
        app
    }

    /// Every loaded commit
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn cursor(&self) -> &TimeCursor {
        &self.cursor
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn selection(&self) -> &SelectionSummary {
        &self.selection
    }

    /// Set running to false to quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }
}
