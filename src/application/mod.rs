//! Application layer managing state and command handling.
//!
//! This module coordinates between the domain layer and presentation layer,
//! owning the task store, the active filter and the list selection.

pub mod state;

pub use state::*;
