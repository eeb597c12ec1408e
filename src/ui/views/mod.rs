//! Pane components
//!
//! Each view owns the state of one pane and knows how to draw it.

mod breakdown;
mod scatter;
mod stats;
mod story;

pub use breakdown::{BreakdownView, FileGroup, RebindSummary, TypeColors};
pub use scatter::{
    Brush, CHART_HEIGHT, CHART_WIDTH, LanguageShare, PLOT, PlotArea, PlotPoint, ScatterView,
    SelectionSummary,
};
pub use stats::{Stats, StatsView};
pub use story::{
    ScrollDirection, Step, StepBox, StepEnter, StepTracker, StoryView, TriggerLineTracker,
    build_steps, wrap_words,
};
