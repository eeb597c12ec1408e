//! Step tracking for the story pane
//!
//! A tracker maps a scroll offset to the step crossing a fixed trigger line
//! and reports an enter event whenever that step changes. Geometry is handed
//! in by the pane, so how positions are measured stays swappable.

use std::fmt;

/// Vertical extent of one step, in content lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepBox {
    pub top: usize,
    pub height: usize,
}

impl StepBox {
    pub fn contains(&self, line: usize) -> bool {
        self.top <= line && line < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// A step became the one under the trigger line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEnter {
    pub index: usize,
    pub direction: ScrollDirection,
}

/// Observer turning scroll positions into step enter events
pub trait StepTracker: fmt::Debug {
    /// Replace step geometry (on content or viewport size change). Fires nothing.
    fn layout(&mut self, boxes: Vec<StepBox>, viewport_height: usize);

    /// Row of the trigger line within a viewport of `viewport_height`
    fn trigger_line(&self, viewport_height: usize) -> usize;

    /// Observe a new scroll offset
    fn scroll_to(&mut self, offset: usize) -> Option<StepEnter>;

    /// Step currently under the trigger line
    fn active(&self) -> Option<usize>;
}

/// Tracker with a trigger line at a fixed fraction of the viewport height
#[derive(Debug, Clone)]
pub struct TriggerLineTracker {
    /// Trigger position as a fraction of the viewport (0.5 = midpoint)
    trigger: f64,
    boxes: Vec<StepBox>,
    viewport_height: usize,
    offset: usize,
    active: Option<usize>,
}

impl Default for TriggerLineTracker {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl TriggerLineTracker {
    pub fn new(trigger: f64) -> Self {
        Self {
            trigger: if trigger.is_nan() { 0.5 } else { trigger.clamp(0.0, 1.0) },
            boxes: Vec::new(),
            viewport_height: 0,
            offset: 0,
            active: None,
        }
    }

    /// Step containing content line `line`
    fn step_at(&self, line: usize) -> Option<usize> {
        let idx = self.boxes.partition_point(|b| b.top + b.height <= line);
        self.boxes
            .get(idx)
            .filter(|b| b.contains(line))
            .map(|_| idx)
    }
}

impl StepTracker for TriggerLineTracker {
    fn layout(&mut self, boxes: Vec<StepBox>, viewport_height: usize) {
        self.boxes = boxes;
        self.viewport_height = viewport_height;
        if self.active.is_some_and(|i| i >= self.boxes.len()) {
            self.active = None;
        }
    }

    fn trigger_line(&self, viewport_height: usize) -> usize {
        let line = (self.trigger * viewport_height as f64).floor() as usize;
        line.min(viewport_height.saturating_sub(1))
    }

    fn scroll_to(&mut self, offset: usize) -> Option<StepEnter> {
        let direction = if offset >= self.offset {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.offset = offset;

        let line = offset + self.trigger_line(self.viewport_height);
        let index = self.step_at(line)?;
        if self.active == Some(index) {
            return None;
        }
        self.active = Some(index);
        Some(StepEnter { index, direction })
    }

    fn active(&self) -> Option<usize> {
        self.active
    }
}
