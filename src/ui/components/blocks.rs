//! Block components for UI rendering
//!
//! Common block patterns used across panes.

use ratatui::{
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with title and specified borders
pub fn titled_block<'a>(title: Line<'a>, borders: Borders) -> Block<'a> {
    Block::default().borders(borders).title(title)
}

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::ALL)
}

/// Create a block with only a top border (for readouts under a pane)
pub fn top_rule_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::TOP)
}
