//! Infrastructure layer providing configuration and logging.
//!
//! This module contains the system-level concerns that sit outside the
//! task list itself: reading settings from the environment and routing
//! `tracing` output to a log file.

pub mod config;
pub mod logging;

pub use config::*;
pub use logging::*;
