use tracing::debug;
use uuid::Uuid;

use super::date::parse_finish_date;
use super::project::{Project, ProjectData, ProjectEdit};
use super::record::ProjectRecord;
use crate::error::{Result, ValidationError};

/// Minimum number of characters in a new project's name.
pub const MIN_NAME_LEN: usize = 5;

/// Counts of what an import changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.created + self.updated
    }
}

/// Owns the project collection and enforces the creation rules.
///
/// Projects are kept in creation order. Lookups are linear scans.
#[derive(Debug, Default)]
pub struct ProjectManager {
    projects: Vec<Project>,
    selected: Option<Uuid>,
}

impl ProjectManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a new project.
    pub fn create_project(&mut self, data: ProjectData) -> Result<&mut Project> {
        if data.name.chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort {
                name: data.name,
                min: MIN_NAME_LEN,
            }
            .into());
        }
        if self.projects.iter().any(|p| p.name == data.name) {
            return Err(ValidationError::DuplicateName { name: data.name }.into());
        }

        let project = Project::new(data);
        debug!(id = %project.id(), name = %project.name, "project created");
        self.projects.push(project);
        let idx = self.projects.len() - 1;
        Ok(&mut self.projects[idx])
    }

    /// Remove a project. Unknown ids are ignored.
    ///
    /// Returns `true` if a project was removed.
    pub fn delete_project(&mut self, id: Uuid) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id() != id);
        let removed = self.projects.len() != before;
        if removed {
            debug!(%id, "project deleted");
        }
        removed
    }

    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == id)
    }

    pub fn project_mut(&mut self, id: Uuid) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id() == id)
    }

    /// Apply an edit to the project with `id`, whatever is selected.
    ///
    /// Returns the edited project, or `None` if the id is unknown.
    pub fn edit_project(&mut self, id: Uuid, edit: ProjectEdit) -> Option<&Project> {
        let project = self.project_mut(id)?;
        project.apply_edit(edit);
        debug!(%id, name = %project.name, "project edited");
        Some(&*project)
    }

    /// First project whose name matches exactly.
    pub fn project_by_name(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    // --- Selection ---

    /// Remember `id` as the selected project. The id need not exist.
    pub fn select_project(&mut self, id: Uuid) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected
    }

    /// The selected project, if it still exists.
    pub fn selected_project(&self) -> Option<&Project> {
        self.selected.and_then(|id| self.project(id))
    }

    pub fn selected_project_mut(&mut self) -> Option<&mut Project> {
        let id = self.selected?;
        self.project_mut(id)
    }

    // --- Snapshot persistence ---

    /// Plain records of every project, in collection order.
    pub fn export_snapshot(&self) -> Vec<ProjectRecord> {
        self.projects.iter().map(ProjectRecord::from).collect()
    }

    /// Merge records into the collection by name.
    ///
    /// Records are applied one at a time. On the first failure the error is
    /// returned and records already applied stay applied.
    pub fn import_snapshot(&mut self, items: Vec<ProjectRecord>) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();

        for item in items {
            let finish_date = parse_finish_date(&item.finish_date)
                .ok_or_else(|| ValidationError::InvalidDate {
                    name: item.name.clone(),
                })?;

            if let Some(existing) = self.projects.iter_mut().find(|p| p.name == item.name) {
                existing.description = item.description;
                existing.status = item.status;
                existing.user_role = item.user_role;
                existing.finish_date = finish_date;
                existing.set_cost(item.cost);
                existing.set_progress(item.progress);
                existing.todos = item.todos;
                debug!(id = %existing.id(), name = %existing.name, "project updated from import");
                summary.updated += 1;
            } else {
                let project = self.create_project(ProjectData {
                    name: item.name,
                    description: item.description,
                    status: item.status,
                    user_role: item.user_role,
                    finish_date: Some(finish_date),
                })?;
                project.set_cost(item.cost);
                project.set_progress(item.progress);
                project.todos = item.todos;
                summary.created += 1;
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::model::project::{ProjectStatus, UserRole};
    use crate::model::todo::TodoStatus;

    fn house() -> ProjectData {
        ProjectData::new("House")
            .description("Build house")
            .status(ProjectStatus::Pending)
            .user_role(UserRole::Architect)
            .finish_date_str("2025-01-01")
    }

    fn record(name: &str, finish_date: &str) -> ProjectRecord {
        ProjectRecord {
            name: name.into(),
            description: String::new(),
            status: ProjectStatus::Active,
            user_role: UserRole::Engineer,
            finish_date: finish_date.into(),
            cost: 0.0,
            progress: 0.0,
            todos: Vec::new(),
        }
    }

    #[test]
    fn creates_project_with_defaults() {
        let mut manager = ProjectManager::new();
        let project = manager.create_project(house()).unwrap();
        assert_eq!(project.name, "House");
        assert_eq!(project.cost(), 0.0);
        assert_eq!(project.progress(), 0.0);
        assert!(project.todos.is_empty());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn rejects_short_name() {
        let mut manager = ProjectManager::new();
        let err = manager.create_project(ProjectData::new("Hut")).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::Validation(ValidationError::NameTooShort { min: 5, .. })
        ));
        assert!(manager.is_empty());
    }

    #[test]
    fn rejects_duplicate_name() {
        let mut manager = ProjectManager::new();
        manager.create_project(house()).unwrap();
        let err = manager.create_project(house()).unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::DuplicateName { name }) if name == "House"
        ));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut manager = ProjectManager::new();
        manager.create_project(house()).unwrap();
        manager.create_project(ProjectData::new("HOUSE")).unwrap();
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn delete_removes_and_ignores_unknown() {
        let mut manager = ProjectManager::new();
        let id = manager.create_project(house()).unwrap().id();
        assert!(!manager.delete_project(Uuid::new_v4()));
        assert_eq!(manager.len(), 1);
        assert!(manager.delete_project(id));
        assert!(manager.project(id).is_none());
        assert!(!manager.delete_project(id));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut manager = ProjectManager::new();
        let first = manager.create_project(house()).unwrap().id();
        manager.delete_project(first);
        let second = manager.create_project(house()).unwrap().id();
        assert_ne!(first, second);
    }

    #[test]
    fn keeps_creation_order() {
        let mut manager = ProjectManager::new();
        for name in ["Alpha project", "Bravo project", "Charlie project"] {
            manager.create_project(ProjectData::new(name)).unwrap();
        }
        let bravo = manager.project_by_name("Bravo project").unwrap().id();
        manager.delete_project(bravo);
        let names: Vec<_> = manager.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Alpha project", "Charlie project"]);
    }

    #[test]
    fn selection_resolves_lazily() {
        let mut manager = ProjectManager::new();
        let id = manager.create_project(house()).unwrap().id();

        manager.select_project(Uuid::new_v4());
        assert!(manager.selected_project().is_none());

        manager.select_project(id);
        assert_eq!(manager.selected_project().map(|p| p.id()), Some(id));

        manager.delete_project(id);
        assert_eq!(manager.selected_id(), Some(id));
        assert!(manager.selected_project().is_none());

        manager.clear_selection();
        assert!(manager.selected_id().is_none());
    }

    #[test]
    fn edit_targets_given_id_not_selection() {
        let mut manager = ProjectManager::new();
        let house_id = manager.create_project(house()).unwrap().id();
        let shed_id = manager.create_project(ProjectData::new("Garden shed")).unwrap().id();

        // The edit was opened for the house, then the shed got selected.
        manager.select_project(shed_id);
        let edited = manager.edit_project(
            house_id,
            ProjectEdit {
                name: Some("Beach house".into()),
                status: Some(ProjectStatus::Active),
                ..Default::default()
            },
        );

        assert_eq!(edited.map(|p| p.id()), Some(house_id));
        assert_eq!(manager.project(house_id).unwrap().name, "Beach house");
        let shed = manager.project(shed_id).unwrap();
        assert_eq!(shed.name, "Garden shed");
        assert_eq!(shed.status, ProjectStatus::Pending);
    }

    #[test]
    fn edit_of_deleted_project_is_ignored() {
        let mut manager = ProjectManager::new();
        let id = manager.create_project(house()).unwrap().id();
        manager.delete_project(id);
        let edit = ProjectEdit {
            name: Some("Ghost house".into()),
            ..Default::default()
        };
        assert!(manager.edit_project(id, edit).is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn todo_flow_through_manager() {
        let mut manager = ProjectManager::new();
        let id = manager.create_project(house()).unwrap().id();
        let project = manager.project_mut(id).unwrap();
        let todo_id = project.add_todo("Buy materials", TodoStatus::Pending).id.clone();
        project.set_todo_status(&todo_id, TodoStatus::Done);

        let project = manager.project(id).unwrap();
        assert_eq!(project.todos.len(), 1);
        assert_eq!(project.todos[0].text, "Buy materials");
        assert_eq!(project.todos[0].status, TodoStatus::Done);
    }

    #[test]
    fn import_updates_existing_in_place() {
        let mut manager = ProjectManager::new();
        manager.create_project(ProjectData::new("First project")).unwrap();
        let id = manager.create_project(house()).unwrap().id();

        let mut item = record("House", "2026-06-30T00:00:00.000Z");
        item.cost = 1200.0;
        item.progress = 0.4;
        let summary = manager.import_snapshot(vec![item]).unwrap();

        assert_eq!(summary, ImportSummary { created: 0, updated: 1 });
        assert_eq!(manager.len(), 2);
        let project = &manager.projects()[1];
        assert_eq!(project.id(), id);
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.cost(), 1200.0);
        assert_eq!(project.progress(), 0.4);
    }

    #[test]
    fn import_creates_missing_projects_with_all_fields() {
        let mut manager = ProjectManager::new();
        let mut item = record("Bridge", "2025-05-05");
        item.cost = 50.0;
        item.todos = vec![crate::model::Todo::new("Survey", TodoStatus::Done)];
        let summary = manager.import_snapshot(vec![item]).unwrap();

        assert_eq!(summary.created, 1);
        let project = manager.project_by_name("Bridge").unwrap();
        assert_eq!(project.cost(), 50.0);
        assert_eq!(project.todos.len(), 1);
    }

    #[test]
    fn import_is_not_rolled_back_on_bad_date() {
        let mut manager = ProjectManager::new();
        let items = vec![
            record("Good project", "2025-01-01T00:00:00.000Z"),
            record("Bad project", "nonsense"),
            record("Never reached", "2025-01-01"),
        ];
        let err = manager.import_snapshot(items).unwrap_err();

        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::InvalidDate { name }) if name == "Bad project"
        ));
        assert!(manager.project_by_name("Good project").is_some());
        assert!(manager.project_by_name("Bad project").is_none());
        assert!(manager.project_by_name("Never reached").is_none());
    }

    #[test]
    fn import_keeps_opaque_todo_ids() {
        let mut manager = ProjectManager::new();
        let json = r#"[{"name":"Bridge","status":"active","userRole":"engineer",
            "finishDate":"2025-05-05",
            "todos":[{"id":"t1","text":"Survey","status":"done"}]}]"#;
        let items: Vec<ProjectRecord> = serde_json::from_str(json).unwrap();
        manager.import_snapshot(items).unwrap();

        let project = manager.project_by_name("Bridge").unwrap();
        assert_eq!(project.todos.len(), 1);
        assert_eq!(project.todo("t1").map(|t| t.text.as_str()), Some("Survey"));
        assert_eq!(manager.export_snapshot()[0].todos[0].id, "t1");
    }

    #[test]
    fn import_applies_creation_rules() {
        let mut manager = ProjectManager::new();
        let err = manager
            .import_snapshot(vec![record("Tiny", "2025-01-01")])
            .unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::NameTooShort { .. })
        ));
        assert!(manager.is_empty());
    }

    #[test]
    fn import_sanitizes_numbers() {
        let mut manager = ProjectManager::new();
        let mut item = record("Tower block", "2025-01-01");
        item.cost = -5.0;
        item.progress = 1.7;
        manager.import_snapshot(vec![item]).unwrap();
        let project = manager.project_by_name("Tower block").unwrap();
        assert_eq!(project.cost(), 0.0);
        assert_eq!(project.progress(), 1.0);
    }

    #[test]
    fn export_follows_collection_order() {
        let mut manager = ProjectManager::new();
        manager.create_project(house()).unwrap();
        manager.create_project(ProjectData::new("Second one")).unwrap();
        let records = manager.export_snapshot();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "House");
        assert_eq!(records[0].finish_date, "2025-01-01T00:00:00.000Z");
        assert_eq!(records[1].name, "Second one");
    }

    #[test]
    fn export_then_import_is_idempotent() {
        let mut manager = ProjectManager::new();
        let id = manager.create_project(house()).unwrap().id();
        {
            let project = manager.project_mut(id).unwrap();
            project.add_todo("Buy materials", TodoStatus::Pending);
            project.set_cost(300.0);
            project.set_progress(0.5);
        }
        manager.create_project(ProjectData::new("Garden shed")).unwrap();
        let before: Vec<_> = manager.iter().map(|p| p.snapshot()).collect();

        let summary = manager.import_snapshot(manager.export_snapshot()).unwrap();

        assert_eq!(summary.updated, 2);
        let after: Vec<_> = manager.iter().map(|p| p.snapshot()).collect();
        assert_eq!(before, after);
    }
}
