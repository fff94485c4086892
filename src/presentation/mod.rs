//! Presentation layer handling terminal UI and user input.
//!
//! This module manages the terminal user interface using ratatui,
//! handles keyboard and mouse input, and renders the task list window.

pub mod buttons;
pub mod ui;
pub mod input;

pub use buttons::*;
pub use ui::*;
pub use input::*;
