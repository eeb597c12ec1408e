//! Commit tooltip widget

use ratatui::{
    Frame,
    layout::Rect,
    prelude::*,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::format::{format_count, full_date, short_time};
use crate::model::Commit;
use crate::ui::components;

/// Tooltip content for one commit: link, date, time, author, lines
pub fn tooltip_lines(commit: &Commit) -> Vec<Line<'static>> {
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<8}"), Style::default().fg(Color::Gray)),
            Span::raw(value),
        ])
    };

    vec![
        Line::from(vec![
            Span::styled(format!("{:<8}", "Commit"), Style::default().fg(Color::Gray)),
            Span::styled(commit.short_id().to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::styled(
            commit.url().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        ),
        field("Date", full_date(&commit.datetime())),
        field("Time", short_time(&commit.datetime())),
        field("Author", commit.author().to_string()),
        field("Lines", format_count(commit.total_lines())),
    ]
}

/// Place a `width`×`height` popup just below-right of `anchor`, kept inside
/// `bounds` with a one-cell margin
pub fn tooltip_rect(anchor: (u16, u16), width: u16, height: u16, bounds: Rect) -> Rect {
    const MARGIN: u16 = 1;
    let width = width.min(bounds.width.saturating_sub(2 * MARGIN));
    let height = height.min(bounds.height.saturating_sub(2 * MARGIN));

    let min_x = bounds.x + MARGIN;
    let min_y = bounds.y + MARGIN;
    let max_x = (bounds.x + bounds.width).saturating_sub(MARGIN + width).max(min_x);
    let max_y = (bounds.y + bounds.height).saturating_sub(MARGIN + height).max(min_y);

    let x = anchor.0.saturating_add(2).clamp(min_x, max_x);
    let y = anchor.1.saturating_add(1).clamp(min_y, max_y);
    Rect::new(x, y, width, height)
}

/// Render the tooltip for `commit` near the mouse position
pub fn render_tooltip(frame: &mut Frame, commit: &Commit, anchor: (u16, u16)) {
    let lines = tooltip_lines(commit);
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let area = tooltip_rect(anchor, content_width + 2, lines.len() as u16 + 2, frame.area());
    if area.width < 3 || area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(components::bordered_block(Line::from(" Commit "))),
        area,
    );
}
