//! Rendering for ScatterView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points, Rectangle},
};

use crate::format::{axis_date, hour_label};
use crate::ui::{components, theme};

use super::{CHART_HEIGHT, CHART_WIDTH, PLOT, ScatterView};

/// Hours between gridlines
const GRID_STEP_HOURS: usize = 2;
/// Hours between axis labels
const LABEL_STEP_HOURS: usize = 4;
/// Number of date labels on the x axis
const X_TICKS: usize = 4;

/// Canvas y grows upward, chart y grows downward
fn flip(y: f64) -> f64 {
    CHART_HEIGHT - y
}

impl ScatterView {
    /// Render the scatterplot
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block =
            components::bordered_block(Line::from(" Commits by time of day ").bold().cyan());
        self.set_canvas_area(block.inner(area));

        if self.points.is_empty() {
            let paragraph =
                components::empty_state("No commits in view", Some("Move the slider right"))
                    .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([0.0, CHART_WIDTH])
            .y_bounds([0.0, CHART_HEIGHT])
            .paint(|ctx| {
                self.paint_grid(ctx);
                ctx.layer();
                self.paint_points(ctx);
                ctx.layer();
                self.paint_brush(ctx);
                self.paint_axes(ctx);
            });

        frame.render_widget(canvas, area);
    }

    fn paint_grid(&self, ctx: &mut Context) {
        for hour in (0..=24).step_by(GRID_STEP_HOURS) {
            let y = flip(self.y_scale.map(hour as f64));
            ctx.draw(&CanvasLine {
                x1: PLOT.left,
                y1: y,
                x2: PLOT.right,
                y2: y,
                color: theme::scatter::GRIDLINE,
            });
        }
    }

    fn paint_points(&self, ctx: &mut Context) {
        for point in &self.points {
            let color = if self.is_selected(point) {
                theme::scatter::SELECTED
            } else {
                point.color
            };
            ctx.draw(&Circle {
                x: point.x,
                y: flip(point.y),
                radius: point.radius,
                color,
            });
        }

        // Fill the hovered point's center so it stands out
        if let Some(point) = self
            .hovered
            .and_then(|i| self.points.iter().find(|p| p.commit == i))
        {
            ctx.draw(&Points {
                coords: &[(point.x, flip(point.y))],
                color: point.color,
            });
        }
    }

    fn paint_brush(&self, ctx: &mut Context) {
        if let Some(brush) = self.brush {
            ctx.draw(&Rectangle {
                x: brush.x0,
                y: flip(brush.y1),
                width: brush.width(),
                height: brush.height(),
                color: theme::scatter::BRUSH,
            });
        }
    }

    fn paint_axes(&self, ctx: &mut Context) {
        let label_style = Style::default().fg(theme::scatter::AXIS_LABEL);

        for hour in (0..24).step_by(LABEL_STEP_HOURS) {
            let y = flip(self.y_scale.map(hour as f64));
            ctx.print(0.0, y, Line::styled(hour_label(hour as u32), label_style));
        }

        for tick in self.x_scale.ticks(X_TICKS) {
            let x = self.x_scale.map(tick).min(PLOT.right - 50.0);
            ctx.print(x, flip(PLOT.bottom + 20.0), Line::styled(axis_date(&tick), label_style));
        }
    }
}
