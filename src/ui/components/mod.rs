//! Reusable UI components
//!
//! Common building blocks for panes.

pub mod blocks;
pub mod empty_state;
pub mod message;

pub use blocks::*;
pub use empty_state::*;
pub use message::*;
