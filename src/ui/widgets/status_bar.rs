//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    build_status_bar_with_prefix(Vec::new(), hints)
}

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Render the key hints, prefixed by a short context label
pub fn render_status_bar(frame: &mut Frame, area: Rect, context: &str, hints: &[KeyHint]) {
    let prefix = vec![Span::styled(
        format!(" {context} "),
        Style::default().fg(Color::Black).bg(Color::Yellow),
    )];
    let status = build_status_bar_with_prefix(prefix, hints);
    frame.render_widget(Paragraph::new(status), area);
}
