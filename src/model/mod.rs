pub mod date;
pub mod manager;
pub mod project;
pub mod record;
pub mod todo;

pub use manager::{ImportSummary, ProjectManager, MIN_NAME_LEN};
pub use project::{Project, ProjectData, ProjectEdit, ProjectSnapshot, ProjectStatus, UserRole};
pub use record::ProjectRecord;
pub use todo::{Todo, TodoStatus};
