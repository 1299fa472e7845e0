use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use super::date::to_millis;
use super::todo::{Todo, TodoStatus};

/// Lifecycle state of a project. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Pending,
    Active,
    Finished,
}

impl ProjectStatus {
    pub fn all() -> &'static [ProjectStatus] {
        &[
            ProjectStatus::Pending,
            ProjectStatus::Active,
            ProjectStatus::Finished,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::Active => "Active",
            ProjectStatus::Finished => "Finished",
        }
    }
}

/// The role the user plays on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Architect,
    Engineer,
    Developer,
}

impl UserRole {
    pub fn all() -> &'static [UserRole] {
        &[UserRole::Architect, UserRole::Engineer, UserRole::Developer]
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Architect => "Architect",
            UserRole::Engineer => "Engineer",
            UserRole::Developer => "Developer",
        }
    }
}

/// Input for creating a project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectData {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub user_role: UserRole,
    /// `None` means "now".
    pub finish_date: Option<DateTime<Utc>>,
}

impl ProjectData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn user_role(mut self, role: UserRole) -> Self {
        self.user_role = role;
        self
    }

    pub fn finish_date(mut self, date: DateTime<Utc>) -> Self {
        self.finish_date = Some(date);
        self
    }

    /// Set the finish date from text; unparseable input falls back to "now".
    pub fn finish_date_str(mut self, date: &str) -> Self {
        self.finish_date = super::date::parse_finish_date(date);
        self
    }
}

/// A partial update applied through the edit form.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectEdit {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub user_role: Option<UserRole>,
    pub finish_date: Option<DateTime<Utc>>,
}

/// Read-only projection of a project, consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSnapshot {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub user_role: UserRole,
    pub cost: f64,
    pub progress: f64,
    pub finish_date: DateTime<Utc>,
    pub todos: Vec<Todo>,
}

impl ProjectSnapshot {
    /// Up to the first two characters of the name, shown in the card icon.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect()
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress * 100.0
    }

    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_done()).count()
    }
}

/// A tracked unit of work with its to-do items.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    id: Uuid,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub user_role: UserRole,
    pub finish_date: DateTime<Utc>,
    cost: f64,
    progress: f64,
    pub todos: Vec<Todo>,
}

impl Project {
    /// Only the manager creates projects, so that name rules are enforced.
    pub(crate) fn new(data: ProjectData) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            status: data.status,
            user_role: data.user_role,
            finish_date: to_millis(data.finish_date.unwrap_or_else(Utc::now)),
            cost: 0.0,
            progress: 0.0,
            todos: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Always finite and non-negative.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Fraction from 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Negative or non-finite values are stored as 0.
    pub fn set_cost(&mut self, cost: f64) {
        self.cost = if cost.is_finite() && cost >= 0.0 {
            cost
        } else {
            warn!(project = %self.name, cost, "cost out of range, using 0");
            0.0
        };
    }

    /// Values outside [0, 1] are clamped; non-finite values are stored as 0.
    pub fn set_progress(&mut self, progress: f64) {
        if !progress.is_finite() {
            warn!(project = %self.name, progress, "progress is not a number, using 0");
            self.progress = 0.0;
            return;
        }
        let clamped = progress.clamp(0.0, 1.0);
        if clamped != progress {
            warn!(project = %self.name, progress, "progress out of range, clamping");
        }
        self.progress = clamped;
    }

    /// Append a to-do item and return it. Empty text is accepted.
    pub fn add_todo(&mut self, text: impl Into<String>, status: TodoStatus) -> &Todo {
        self.todos.push(Todo::new(text, status));
        let idx = self.todos.len() - 1;
        &self.todos[idx]
    }

    /// Update the status of a to-do item. Unknown ids are ignored.
    ///
    /// Returns `true` if an item was found.
    pub fn set_todo_status(&mut self, todo_id: &str, status: TodoStatus) -> bool {
        match self.todos.iter_mut().find(|t| t.id == todo_id) {
            Some(todo) => {
                todo.status = status;
                true
            }
            None => false,
        }
    }

    pub fn todo(&self, todo_id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == todo_id)
    }

    /// Overwrite the fields present in `edit`.
    ///
    /// Name length and uniqueness are not checked here.
    pub fn apply_edit(&mut self, edit: ProjectEdit) {
        if let Some(name) = edit.name {
            self.name = name;
        }
        if let Some(description) = edit.description {
            self.description = description;
        }
        if let Some(status) = edit.status {
            self.status = status;
        }
        if let Some(role) = edit.user_role {
            self.user_role = role;
        }
        if let Some(date) = edit.finish_date {
            self.finish_date = to_millis(date);
        }
    }

    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            user_role: self.user_role,
            cost: self.cost,
            progress: self.progress,
            finish_date: self.finish_date,
            todos: self.todos.clone(),
        }
    }
}
