//! UI layer
//!
//! Contains panes (views), widgets, components, symbols, and theme definitions.

pub mod components;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;
