//! Rendering for StatsView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::{components, theme};

use super::StatsView;

/// Width of the label column
const LABEL_WIDTH: usize = 24;

impl StatsView {
    /// Render the stats panel
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = components::bordered_block(Line::from(" Summary ").bold().cyan());

        let lines: Vec<Line> = self
            .stats
            .rows()
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<width$}", label, width = LABEL_WIDTH),
                        Style::default().fg(theme::stats::LABEL),
                    ),
                    Span::styled(
                        value,
                        Style::default()
                            .fg(theme::stats::VALUE)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
