//! Rendering logic for the application

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    prelude::*,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::{App, Focus, PaneAreas};
use crate::format::{MISSING, long_datetime};
use crate::keys;
use crate::ui::components;
use crate::ui::widgets::{
    render_error_banner, render_help_panel, render_status_bar, render_time_slider, render_tooltip,
};

/// Height of the selection readout under the chart
const SELECTION_HEIGHT: u16 = 5;
/// Stats rows plus borders
const STATS_HEIGHT: u16 = 9;

/// Pane rectangles for one terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AppLayout {
    pub slider: Rect,
    pub chart: Rect,
    pub selection: Rect,
    pub stats: Rect,
    pub story: Rect,
    pub breakdown: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [slider, body, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(body);
        let [chart, selection, stats] = Layout::vertical([
            Constraint::Min(8),
            Constraint::Length(SELECTION_HEIGHT),
            Constraint::Length(STATS_HEIGHT),
        ])
        .areas(left);
        let [story, breakdown] =
            Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(right);

        Self {
            slider,
            chart,
            selection,
            stats,
            story,
            breakdown,
            status,
        }
    }

    /// Story pane without its border
    pub fn story_inner(&self) -> Rect {
        self.story.inner(Margin::new(1, 1))
    }
}

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = AppLayout::new(frame.area());

        let notification = self
            .notification
            .as_ref()
            .filter(|n| !n.is_expired())
            .cloned();

        let label = if self.commits.is_empty() {
            MISSING.to_string()
        } else {
            long_datetime(&self.cursor.cutoff().with_timezone(&self.display_offset))
        };
        let track = render_time_slider(
            frame,
            layout.slider,
            self.cursor.progress(),
            &label,
            self.focus == Focus::Slider,
            notification.as_ref(),
        );

        self.scatter.render(frame, layout.chart);
        self.render_selection(frame, layout.selection);
        self.stats.render(frame, layout.stats);
        self.story
            .render(frame, layout.story, self.focus == Focus::Story);
        self.breakdown.render(frame, layout.breakdown);

        let hints = match self.focus {
            Focus::Slider => keys::SLIDER_HINTS,
            Focus::Story => keys::STORY_HINTS,
        };
        let context = format!(
            "{} | {}/{} commits",
            self.focus.label(),
            self.filtered_commits().len(),
            self.commits.len()
        );
        render_status_bar(frame, layout.status, &context, hints);

        self.areas.set(PaneAreas {
            slider: track,
            story: layout.story,
            breakdown: layout.breakdown,
        });

        if let (Some(index), Some(anchor)) = (self.scatter.hovered(), self.scatter.pointer()) {
            if let Some(commit) = self.filtered_commits().get(index) {
                render_tooltip(frame, commit, anchor);
            }
        }

        // Render error banner above status bar (errors are always shown prominently)
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }

        if self.show_help {
            render_help_panel(frame, frame.area());
        }
    }

    /// Selection count and per-language breakdown for the brush
    fn render_selection(&self, frame: &mut Frame, area: Rect) {
        let block = components::top_rule_block(Line::from(" Selection ").bold().cyan());
        let inner_height = block.inner(area).height as usize;

        let mut lines = Vec::new();
        match self.selection.count_label() {
            None => lines.push(Line::from("Drag on the chart to select commits").dark_gray()),
            Some(label) => {
                lines.push(Line::from(label).bold());
                for share in &self.selection.languages {
                    let color = self
                        .breakdown
                        .colors()
                        .get(&share.kind)
                        .unwrap_or(Color::White);
                    lines.push(Line::from(vec![
                        Span::styled(format!("{:<8}", share.kind), Style::default().fg(color)),
                        Span::raw(share.describe()),
                    ]));
                }
            }
        }
        lines.truncate(inner_height);

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
