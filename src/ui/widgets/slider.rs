//! Time slider widget
//!
//! A one-row track with a knob at the current progress, the cutoff time label
//! on the right, and the current notification in the title bar.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    prelude::*,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::cursor::{MAX_PROGRESS, MIN_PROGRESS};
use crate::model::Notification;
use crate::ui::{components, symbols, theme};

/// Width of the cutoff label column
const LABEL_WIDTH: u16 = 32;

/// Screen geometry of the rendered track, for mouse mapping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliderTrack {
    pub area: Rect,
}

impl SliderTrack {
    /// Whether the cell lies on the track row
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.width > 0
            && row == self.area.y
            && (self.area.x..self.area.x + self.area.width).contains(&column)
    }

    /// Progress under `column`, clamped to the track ends
    pub fn progress_at(&self, column: u16) -> f64 {
        if self.area.width <= 1 {
            return MAX_PROGRESS;
        }
        let last = (self.area.width - 1) as f64;
        let offset = column.saturating_sub(self.area.x).min(self.area.width - 1) as f64;
        MIN_PROGRESS + (MAX_PROGRESS - MIN_PROGRESS) * offset / last
    }

    /// Column of the knob for `progress`
    pub fn knob_column(&self, progress: f64) -> u16 {
        let last = self.area.width.saturating_sub(1) as f64;
        let t = ((progress - MIN_PROGRESS) / (MAX_PROGRESS - MIN_PROGRESS)).clamp(0.0, 1.0);
        self.area.x + (t * last).round() as u16
    }
}

/// Build the track line for a track of `width` cells
pub fn build_track_line(track: &SliderTrack, progress: f64) -> Line<'static> {
    let width = track.area.width as usize;
    if width == 0 {
        return Line::default();
    }
    let knob = (track.knob_column(progress) - track.area.x) as usize;
    Line::from(vec![
        Span::styled(
            symbols::slider::FILLED.to_string().repeat(knob),
            Style::default().fg(theme::slider::FILLED),
        ),
        Span::styled(
            symbols::slider::KNOB.to_string(),
            Style::default().fg(theme::slider::KNOB),
        ),
        Span::styled(
            symbols::slider::EMPTY.to_string().repeat(width - knob - 1),
            Style::default().fg(theme::slider::EMPTY),
        ),
    ])
}

/// Render the slider row and return the track geometry
pub fn render_time_slider(
    frame: &mut Frame,
    area: Rect,
    progress: f64,
    label: &str,
    focused: bool,
    notification: Option<&Notification>,
) -> SliderTrack {
    let title = Line::from(format!(" Time {progress:.0}% ")).bold();
    let title = if focused { title.yellow() } else { title.cyan() };
    let mut block = components::bordered_block(title);
    if let Some(notification) = notification {
        let max = area.width.saturating_sub(20) as usize;
        block = block.title(components::build_notification_line(notification, max).right_aligned());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [track_area, label_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(LABEL_WIDTH)]).areas(inner);
    let track = SliderTrack {
        area: Rect {
            height: track_area.height.min(1),
            width: track_area.width.saturating_sub(1),
            ..track_area
        },
    };

    frame.render_widget(Paragraph::new(build_track_line(&track, progress)), track.area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            label.to_string(),
            Style::default().fg(theme::slider::TIME_LABEL),
        ))
        .alignment(Alignment::Right),
        label_area,
    );
    track
}
