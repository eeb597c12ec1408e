//! Input handling for the application

use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::render::AppLayout;
use super::state::{App, Focus};
use crate::keys;

/// Story lines scrolled per mouse wheel notch
const WHEEL_LINES: isize = 3;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt(&key) {
            self.quit();
            return;
        }

        if self.show_help {
            if matches!(key.code, keys::HELP | keys::ESC | keys::QUIT) {
                self.show_help = false;
            }
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        match self.focus {
            Focus::Slider => self.handle_slider_key(key),
            Focus::Story => self.handle_story_key(key),
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => self.quit(),
            keys::HELP => self.toggle_help(),
            keys::FOCUS_NEXT => self.cycle_focus(),
            keys::ESC => {
                self.scatter.clear_brush();
                self.on_brush_changed();
            }
            keys::FILES_DOWN => self.breakdown.scroll_down(),
            keys::FILES_UP => self.breakdown.scroll_up(),
            _ => return false,
        }
        true
    }

    fn handle_slider_key(&mut self, key: KeyEvent) {
        let mut step = self.config.slider.step;
        if key.modifiers.contains(KeyModifiers::SHIFT) {
            step *= keys::COARSE_STEP_FACTOR;
        }

        match key.code {
            keys::SLIDER_BACK => self.step_progress(-step),
            keys::SLIDER_FORWARD => self.step_progress(step),
            keys::SLIDER_START => self.set_progress(crate::cursor::MIN_PROGRESS),
            keys::SLIDER_END => self.set_progress(crate::cursor::MAX_PROGRESS),
            _ => {}
        }
    }

    fn handle_story_key(&mut self, key: KeyEvent) {
        let event = match key.code {
            code if keys::is_scroll_down(code) => self.story.scroll_by(1),
            code if keys::is_scroll_up(code) => self.story.scroll_by(-1),
            keys::PAGE_DOWN => self.story.page(true),
            keys::PAGE_UP => self.story.page(false),
            keys::NEXT_STEP => {
                let next = self.story.active().map_or(0, |i| i + 1);
                self.story.scroll_to_step(next)
            }
            keys::PREV_STEP => {
                let prev = self.story.active().map_or(0, |i| i.saturating_sub(1));
                self.story.scroll_to_step(prev)
            }
            _ => None,
        };
        self.on_step_enter(event);
    }

    /// Handle mouse events (slider drag, brush, hover, wheel)
    pub fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        let areas = self.areas.get();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if areas.slider.contains(column, row) {
                    self.focus = Focus::Slider;
                    self.slider_dragging = true;
                    self.set_progress(areas.slider.progress_at(column));
                } else if let Some((x, y)) = self.scatter.cell_to_chart(column, row) {
                    self.scatter.begin_brush(x, y);
                    self.on_brush_changed();
                } else if contains(areas.story, column, row) {
                    self.focus = Focus::Story;
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.slider_dragging {
                    self.set_progress(areas.slider.progress_at(column));
                } else if self.scatter.is_brushing() {
                    if let Some((x, y)) = self.scatter.cell_to_chart_clamped(column, row) {
                        self.scatter.drag_brush(x, y);
                        self.on_brush_changed();
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.slider_dragging = false;
                if self.scatter.is_brushing() {
                    if let Some((x, y)) = self.scatter.cell_to_chart_clamped(column, row) {
                        self.scatter.end_brush(x, y);
                    } else {
                        self.scatter.clear_brush();
                    }
                    self.on_brush_changed();
                }
            }
            MouseEventKind::Moved => {
                self.scatter.hover_cell(column, row);
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                let down = matches!(mouse.kind, MouseEventKind::ScrollDown);
                if contains(areas.story, column, row) {
                    let delta = if down { WHEEL_LINES } else { -WHEEL_LINES };
                    let event = self.story.scroll_by(delta);
                    self.on_step_enter(event);
                } else if contains(areas.breakdown, column, row) {
                    if down {
                        self.breakdown.scroll_down();
                    } else {
                        self.breakdown.scroll_up();
                    }
                }
            }
            _ => {}
        }
    }

    /// Handle terminal resize: recompute story geometry for the new size
    pub fn on_resize(&mut self, width: u16, height: u16) {
        let layout = AppLayout::new(Rect::new(0, 0, width, height));
        let inner = layout.story_inner();
        self.story.resize(inner.width, inner.height);
        self.scatter.clear_hover();
        tracing::debug!(width, height, "terminal resized");
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}
