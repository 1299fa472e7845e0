//! Core of the project tracker: the project/to-do model, its validation
//! rules and the `projects.json` format. Nothing here depends on the UI.

pub mod config;
pub mod error;
pub mod io;
pub mod model;

pub use error::{Result, TrackerError, ValidationError};
pub use model::{ProjectManager, ProjectRecord};
