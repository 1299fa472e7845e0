use serde::{Deserialize, Serialize};

use super::date::format_finish_date;
use super::project::{Project, ProjectStatus, UserRole};
use super::todo::Todo;

/// One project as written to and read from `projects.json`.
///
/// `finish_date` stays textual so that a bad or missing date is reported
/// against the project it belongs to instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    pub user_role: UserRole,
    #[serde(default)]
    pub finish_date: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl From<&Project> for ProjectRecord {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status,
            user_role: project.user_role,
            finish_date: format_finish_date(&project.finish_date),
            cost: project.cost(),
            progress: project.progress(),
            todos: project.todos.clone(),
        }
    }
}
