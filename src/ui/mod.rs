//! UI rendering module for the trip planner
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod form;
pub mod result;

pub use form::render as render_form;
pub use result::render as render_result;
