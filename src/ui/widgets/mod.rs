//! Reusable UI widgets

mod error_banner;
mod help_panel;
mod slider;
mod status_bar;
mod tooltip;

pub use error_banner::render_error_banner;
pub use help_panel::{build_help_lines, render_help_panel};
pub use slider::{SliderTrack, build_track_line, render_time_slider};
pub use status_bar::{build_status_bar, build_status_bar_with_prefix, render_status_bar};
pub use tooltip::{render_tooltip, tooltip_lines, tooltip_rect};
