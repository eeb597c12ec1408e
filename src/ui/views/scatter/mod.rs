//! Scatter View - Commits plotted by date and time of day
//!
//! Points live in a fixed virtual chart space ([`CHART_WIDTH`] ×
//! [`CHART_HEIGHT`], y growing downward). Brush rectangles and hit tests use
//! the same space; terminal cells are mapped into it through the canvas area
//! recorded at render time.

mod brush;
mod render;

pub use brush::{Brush, LanguageShare, SelectionSummary};

use std::cell::Cell;

use chrono::Utc;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::model::Commit;
use crate::scale::{LinearScale, SqrtScale, TimeScale, extent};
use crate::ui::theme;

/// Virtual chart width
pub const CHART_WIDTH: f64 = 1000.0;
/// Virtual chart height
pub const CHART_HEIGHT: f64 = 600.0;

/// Plot area inside the chart margins (top 10, right 10, bottom 30, left 60)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Clamp a chart-space point into the plot area
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(self.left, self.right), y.clamp(self.top, self.bottom))
    }
}

/// Plot area shared by every scatter view
pub const PLOT: PlotArea = PlotArea {
    left: 60.0,
    right: CHART_WIDTH - 10.0,
    top: 10.0,
    bottom: CHART_HEIGHT - 30.0,
};

/// One plotted commit
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    /// Index of the commit in the visible slice
    pub commit: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
    pub total_lines: usize,
}

/// View state for the commit scatterplot
#[derive(Debug, Clone)]
pub struct ScatterView {
    x_scale: TimeScale,
    y_scale: LinearScale,
    r_scale: SqrtScale,
    /// Points in draw order (largest first, so small points stay on top)
    points: Vec<PlotPoint>,
    brush: Option<Brush>,
    /// Corner where the current brush drag started
    brush_anchor: Option<(f64, f64)>,
    /// Commit index under the pointer
    hovered: Option<usize>,
    /// Terminal cell of the last pointer position over the chart
    pointer: Option<(u16, u16)>,
    /// Canvas area from the last render (uses Cell for interior mutability)
    canvas_area: Cell<Rect>,
}

impl Default for ScatterView {
    fn default() -> Self {
        Self::new((2.0, 30.0))
    }
}

impl ScatterView {
    /// Create an empty view drawing radii in `radius_range`
    pub fn new(radius_range: (f64, f64)) -> Self {
        let now = Utc::now();
        Self {
            x_scale: TimeScale::new((now, now), (PLOT.left, PLOT.right)),
            y_scale: LinearScale::new((0.0, 24.0), (PLOT.bottom, PLOT.top)),
            r_scale: SqrtScale::new((0.0, 1.0), radius_range),
            points: Vec::new(),
            brush: None,
            brush_anchor: None,
            hovered: None,
            pointer: None,
            canvas_area: Cell::new(Rect::default()),
        }
    }

    /// Point the chart at a new visible commit set.
    ///
    /// Scales are updated in place; the brush and hover state are cleared.
    pub fn update(&mut self, commits: &[Commit]) {
        let (start, end) = extent(commits.iter().map(Commit::instant)).unwrap_or_else(|| {
            let now = Utc::now();
            (now, now)
        });
        self.x_scale.set_domain((start, end));
        self.x_scale.nice_days();

        let (mut lo, hi) =
            extent(commits.iter().map(|c| c.total_lines() as f64)).unwrap_or((0.0, 1.0));
        if lo == hi {
            lo = 0.0;
        }
        self.r_scale.set_domain((lo, hi));

        let mut points: Vec<PlotPoint> = commits
            .iter()
            .enumerate()
            .map(|(i, c)| PlotPoint {
                commit: i,
                x: self.x_scale.map(c.instant()),
                y: self.y_scale.map(c.hour_frac()),
                radius: self.r_scale.map(c.total_lines() as f64),
                color: theme::hour_color(c.hour_frac()),
                total_lines: c.total_lines(),
            })
            .collect();
        points.sort_by(|a, b| b.total_lines.cmp(&a.total_lines));
        self.points = points;

        self.brush = None;
        self.brush_anchor = None;
        self.hovered = None;
        self.pointer = None;
    }

    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    pub fn x_scale(&self) -> &TimeScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn r_scale(&self) -> &SqrtScale {
        &self.r_scale
    }

    pub fn brush(&self) -> Option<Brush> {
        self.brush
    }

    /// Replace the brush rectangle (clamped to the plot area)
    pub fn set_brush(&mut self, brush: Option<Brush>) {
        self.brush = brush.map(|b| {
            Brush::from_corners(PLOT.clamp(b.x0, b.y0), PLOT.clamp(b.x1, b.y1))
        });
    }

    /// Whether a brush drag is in progress
    pub fn is_brushing(&self) -> bool {
        self.brush_anchor.is_some()
    }

    /// Start a brush gesture at a chart-space point
    pub fn begin_brush(&mut self, x: f64, y: f64) {
        self.brush_anchor = Some(PLOT.clamp(x, y));
        self.brush = None;
    }

    /// Extend the brush gesture to a chart-space point
    pub fn drag_brush(&mut self, x: f64, y: f64) {
        if let Some(anchor) = self.brush_anchor {
            self.brush = Some(Brush::from_corners(anchor, PLOT.clamp(x, y)));
        }
    }

    /// Finish the brush gesture; a zero-area brush clears the selection
    pub fn end_brush(&mut self, x: f64, y: f64) {
        self.drag_brush(x, y);
        self.brush_anchor = None;
        if self.brush.is_some_and(|b| b.is_empty()) {
            self.brush = None;
        }
    }

    pub fn clear_brush(&mut self) {
        self.brush = None;
        self.brush_anchor = None;
    }

    /// Whether a point falls inside the brush
    pub fn is_selected(&self, point: &PlotPoint) -> bool {
        self.brush.is_some_and(|b| b.contains(point.x, point.y))
    }

    /// Indices of brushed commits, ascending
    pub fn selected(&self) -> Vec<usize> {
        let mut selected: Vec<usize> = self
            .points
            .iter()
            .filter(|p| self.is_selected(p))
            .map(|p| p.commit)
            .collect();
        selected.sort_unstable();
        selected
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Terminal cell the tooltip should anchor to
    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }

    /// Topmost point within `tolerance` (chart units per axis) of `(x, y)`
    pub fn point_at(&self, x: f64, y: f64, tolerance: (f64, f64)) -> Option<&PlotPoint> {
        self.points.iter().rev().find(|p| {
            let rx = p.radius + tolerance.0;
            let ry = p.radius + tolerance.1;
            let dx = (x - p.x) / rx;
            let dy = (y - p.y) / ry;
            dx * dx + dy * dy <= 1.0
        })
    }

    /// Update hover state from a terminal cell; returns the hovered commit
    pub fn hover_cell(&mut self, column: u16, row: u16) -> Option<usize> {
        let hit = self.cell_to_chart(column, row).and_then(|(x, y)| {
            let (cw, ch) = self.cell_size();
            self.point_at(x, y, (cw / 2.0, ch / 2.0)).map(|p| p.commit)
        });
        self.hovered = hit;
        self.pointer = hit.map(|_| (column, row));
        hit
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
        self.pointer = None;
    }

    /// Record where the canvas was drawn
    pub(crate) fn set_canvas_area(&self, area: Rect) {
        self.canvas_area.set(area);
    }

    pub fn canvas_area(&self) -> Rect {
        self.canvas_area.get()
    }

    /// Chart-space size of one terminal cell
    fn cell_size(&self) -> (f64, f64) {
        let area = self.canvas_area.get();
        if area.width == 0 || area.height == 0 {
            return (0.0, 0.0);
        }
        (
            CHART_WIDTH / area.width as f64,
            CHART_HEIGHT / area.height as f64,
        )
    }

    /// Like [`Self::cell_to_chart`], but cells outside the canvas snap to its edge
    pub fn cell_to_chart_clamped(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let area = self.canvas_area.get();
        if area.is_empty() {
            return None;
        }
        let column = column.clamp(area.x, area.right() - 1);
        let row = row.clamp(area.y, area.bottom() - 1);
        self.cell_to_chart(column, row)
    }

    /// Map a terminal cell to the chart-space point at its center
    pub fn cell_to_chart(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let area = self.canvas_area.get();
        if !area.contains((column, row).into()) {
            return None;
        }
        let (cw, ch) = self.cell_size();
        Some((
            (column - area.x) as f64 * cw + cw / 2.0,
            (row - area.y) as f64 * ch + ch / 2.0,
        ))
    }
}
