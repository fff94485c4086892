//! Domain layer: tasks, the task store and the derived view model.

pub mod models;
pub mod services;
pub mod errors;

pub use models::*;
pub use services::*;
pub use errors::*;
