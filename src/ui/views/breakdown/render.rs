//! Rendering for BreakdownView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::format::format_count;
use crate::ui::{components, symbols};

use super::{BreakdownView, FileGroup};

/// Width reserved for the file name column
const NAME_WIDTH: usize = 22;

impl BreakdownView {
    /// Render the unit grid
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" Files ({}) ", self.groups.len());
        let block = components::bordered_block(Line::from(title).bold().cyan());

        if self.is_empty() {
            let paragraph = components::empty_state("No lines in view", None).block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let inner = block.inner(area);
        let unit_width = (inner.width as usize).saturating_sub(NAME_WIDTH + 1).max(1);
        let height = inner.height as usize;

        let mut lines: Vec<Line> = Vec::new();
        for group in self.groups.iter().skip(self.scroll_offset) {
            if lines.len() >= height {
                break;
            }
            lines.extend(self.build_group_lines(group, unit_width));
        }
        lines.truncate(height);

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Header line followed by rows of units
    fn build_group_lines(&self, group: &FileGroup, unit_width: usize) -> Vec<Line<'static>> {
        let name = truncate_left(&group.name, NAME_WIDTH);
        let count = format!("{} lines", format_count(group.line_count()));

        let mut rows: Vec<Vec<Span<'static>>> = group
            .units
            .chunks(unit_width)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|kind| {
                        let color = self.colors.get(kind).unwrap_or_default();
                        Span::styled(symbols::breakdown::UNIT.to_string(), Style::default().fg(color))
                    })
                    .collect()
            })
            .collect();
        if rows.is_empty() {
            rows.push(Vec::new());
        }

        let mut lines = Vec::with_capacity(rows.len() + 1);
        for (i, units) in rows.into_iter().enumerate() {
            let label = match i {
                0 => Span::raw(format!("{:<width$} ", name, width = NAME_WIDTH)).bold(),
                1 => Span::raw(format!("{:<width$} ", count, width = NAME_WIDTH)).dark_gray(),
                _ => Span::raw(" ".repeat(NAME_WIDTH + 1)),
            };
            let mut spans = vec![label];
            spans.extend(units);
            lines.push(Line::from(spans));
        }
        if lines.len() == 1 {
            lines.push(Line::from(
                Span::raw(format!("{:<width$}", count, width = NAME_WIDTH)).dark_gray(),
            ));
        }
        lines
    }
}

/// Keep the tail of a long path (`…/views/mod.rs`)
fn truncate_left(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    let tail: String = text.chars().skip(count - (max - 1)).collect();
    format!("…{tail}")
}
