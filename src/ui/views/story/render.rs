//! Rendering for StoryView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::{components, symbols, theme};

use super::StoryView;

impl StoryView {
    /// Render the visible slice of the narrative
    ///
    /// Adopts the pane's inner size first, so geometry follows terminal resizes.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let title = Line::from(" Story ").bold();
        let title = if focused { title.yellow() } else { title.cyan() };
        let block = components::bordered_block(title);
        let inner = block.inner(area);
        self.resize(inner.width, inner.height);

        if self.steps.is_empty() {
            let paragraph = components::empty_state("No commits to tell", None).block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let trigger_line = self.tracker.trigger_line(inner.height as usize);
        let lines: Vec<Line> = (0..inner.height as usize)
            .map(|row| {
                let gutter = if row == trigger_line {
                    Span::styled(
                        format!("{} ", symbols::story::TRIGGER),
                        Style::default().fg(theme::story::ACTIVE),
                    )
                } else {
                    Span::raw("  ")
                };
                let mut spans = vec![gutter];
                spans.extend(self.content_line(self.scroll + row));
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Spans for content line `line` (padding renders as nothing)
    fn content_line(&self, line: usize) -> Option<Span<'static>> {
        let index = self
            .boxes
            .partition_point(|b| b.top + b.height <= line);
        let step_box = self.boxes.get(index).filter(|b| b.contains(line))?;
        let wrapped = self.wrapped.get(index)?;
        let offset = line - step_box.top;

        let active = self.active() == Some(index);
        let text_style = if active {
            Style::default().fg(theme::story::ACTIVE)
        } else {
            Style::default().fg(theme::story::INACTIVE)
        };

        if let Some(text) = wrapped.text.get(offset) {
            return Some(Span::styled(text.clone(), text_style));
        }
        wrapped.link.get(offset - wrapped.text.len()).map(|link| {
            Span::styled(
                link.clone(),
                Style::default()
                    .fg(theme::story::LINK)
                    .add_modifier(Modifier::UNDERLINED),
            )
        })
    }
}
