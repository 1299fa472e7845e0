use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Completion state of a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    #[default]
    Pending,
    Done,
}

impl TodoStatus {
    pub fn all() -> &'static [TodoStatus] {
        &[TodoStatus::Pending, TodoStatus::Done]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "Pending",
            TodoStatus::Done => "Done",
        }
    }
}

/// A short task attached to a project.
///
/// The id is opaque. New items get a UUID, but ids read from a file are
/// kept as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub status: TodoStatus,
}

impl Todo {
    pub(crate) fn new(text: impl Into<String>, status: TodoStatus) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            status,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TodoStatus::Done
    }
}
