//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and focus management
//! - `refresh`: time cursor operations and view recomputation
//! - `input`: key, mouse and resize handling
//! - `render`: UI rendering

mod input;
mod refresh;
mod render;
mod state;

pub use state::{App, Focus};
