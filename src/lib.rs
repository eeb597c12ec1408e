//! commitscope - Scrub through a repository's commit history in the terminal
//!
//! Per-line commit records are aggregated into commits and shown as a
//! time-of-day scatterplot, summary statistics, a per-file line breakdown and
//! a scroll-driven narrative, all synchronized on one time cursor.
//!
//! This library provides:
//! - [`data`]: CSV record loading and commit aggregation
//! - [`model`]: Domain models
//! - [`cursor`]: The shared time cursor
//! - [`scale`]: Linear, square-root and time scales
//! - [`app`]: Application state, recomputation pipeline and input handling
//! - [`ui`]: Panes, widgets and theme
//! - [`config`], [`cli`], [`logging`]: Ambient setup

pub mod app;
pub mod cli;
pub mod config;
pub mod cursor;
pub mod data;
pub mod format;
pub mod keys;
pub mod logging;
pub mod model;
pub mod scale;
pub mod ui;
