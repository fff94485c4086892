//! todolist - Terminal Task List
//!
//! A terminal-based task list: add tasks, mark them completed, remove them
//! and filter the list by completion status.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
