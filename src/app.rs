use std::path::{Path, PathBuf};

use project_tracker::config::Settings;
use project_tracker::io;
use project_tracker::model::{ProjectManager, TodoStatus};
use tracing::{info, warn};
use uuid::Uuid;

use crate::ui;
use crate::ui::dialogs::ProjectForm;

/// Which page the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Projects,
    Details,
}

/// Main application state.
pub struct TrackerApp {
    pub manager: ProjectManager,
    pub page: Page,

    settings: Settings,
    settings_path: PathBuf,

    // Dialog state
    pub show_new_project: bool,
    pub new_project: ProjectForm,
    /// The project being edited and its form.
    pub edit_form: Option<(Uuid, ProjectForm)>,
    pub show_about: bool,
    pub error_message: Option<String>,

    // Details page input
    pub new_todo_text: String,

    // Status message
    pub status_message: String,
}

impl TrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings_path = Settings::default_path();
        let settings = Settings::load(&settings_path);
        info!(path = %settings_path.display(), "settings loaded");

        Self {
            manager: ProjectManager::new(),
            page: Page::Projects,
            settings,
            settings_path,
            show_new_project: false,
            new_project: ProjectForm::default(),
            edit_form: None,
            show_about: false,
            error_message: None,
            new_todo_text: String::new(),
            status_message: "Ready".to_string(),
        }
    }

    fn report_error(&mut self, message: String) {
        warn!("{}", message);
        self.status_message = message.clone();
        self.error_message = Some(message);
    }

    fn file_dialog(&self) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new().add_filter("JSON", &["json"]);
        match &self.settings.last_directory {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }

    fn remember_path_if_ok<T>(&mut self, path: &Path, outcome: &project_tracker::Result<T>) {
        if remember_if_ok(&mut self.settings, path, outcome) {
            self.settings.save(&self.settings_path);
        }
    }

    // --- File operations ---

    pub fn import_projects(&mut self) {
        let Some(path) = self.file_dialog().pick_file() else {
            return;
        };
        let outcome = io::import_from_file(&mut self.manager, &path);
        self.remember_path_if_ok(&path, &outcome);
        match outcome {
            Ok(summary) => {
                self.status_message = format!(
                    "Imported {} projects ({} new, {} updated)",
                    summary.total(),
                    summary.created,
                    summary.updated
                );
            }
            Err(e) => self.report_error(format!("Error importing projects: {}", e)),
        }
    }

    pub fn export_projects(&mut self) {
        if self.manager.is_empty() {
            self.status_message = "Nothing to export, there are no projects".to_string();
            return;
        }
        let Some(path) = self
            .file_dialog()
            .set_file_name(&self.settings.export_file_name)
            .save_file()
        else {
            return;
        };
        let outcome = io::export_to_file(&self.manager, &path);
        self.remember_path_if_ok(&path, &outcome);
        match outcome {
            Ok(count) => self.status_message = format!("Exported {} projects", count),
            Err(e) => self.report_error(format!("Error exporting projects: {}", e)),
        }
    }

    // --- Project operations ---

    pub fn open_new_project_dialog(&mut self) {
        self.new_project = ProjectForm::default();
        self.show_new_project = true;
    }

    pub fn create_project_from_dialog(&mut self) {
        let created = self
            .manager
            .create_project(self.new_project.to_data())
            .map(|p| p.name.clone());
        match created {
            Ok(name) => {
                self.show_new_project = false;
                self.new_project = ProjectForm::default();
                self.status_message = format!("Created '{}'", name);
            }
            // Keep the form open so the user can fix the input.
            Err(e) => self.report_error(e.to_string()),
        }
    }

    pub fn open_details(&mut self, id: Uuid) {
        self.manager.select_project(id);
        self.new_todo_text.clear();
        self.page = Page::Details;
    }

    pub fn open_edit_dialog(&mut self, id: Uuid) {
        if let Some(project) = self.manager.project(id) {
            self.edit_form = Some((id, ProjectForm::from_snapshot(&project.snapshot())));
            self.manager.select_project(id);
        }
    }

    pub fn save_edit_from_dialog(&mut self) {
        let Some((id, form)) = self.edit_form.take() else {
            return;
        };
        if let Some(project) = self.manager.edit_project(id, form.to_edit()) {
            self.status_message = format!("Updated '{}'", project.name);
        }
    }

    pub fn delete_project(&mut self, id: Uuid) {
        let Some(name) = self.manager.project(id).map(|p| p.name.clone()) else {
            return;
        };
        let confirm = rfd::MessageDialog::new()
            .set_title("Delete Project")
            .set_description(format!("Delete '{}' and all of its to-dos?", name))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        if confirm != rfd::MessageDialogResult::Yes {
            return;
        }

        self.manager.delete_project(id);
        if matches!(self.edit_form, Some((target, _)) if target == id) {
            self.edit_form = None;
        }
        if self.manager.selected_id() == Some(id) {
            self.manager.clear_selection();
            self.page = Page::Projects;
        }
        self.status_message = format!("Deleted '{}'", name);
    }

    // --- To-do operations ---

    pub fn add_todo(&mut self, text: String) {
        if let Some(project) = self.manager.selected_project_mut() {
            project.add_todo(text, TodoStatus::Pending);
            self.status_message = "To-do added".to_string();
        }
    }

    pub fn set_todo_status(&mut self, todo_id: &str, status: TodoStatus) {
        if let Some(project) = self.manager.selected_project_mut() {
            if project.set_todo_status(todo_id, status) {
                self.status_message = format!("To-do marked {}", status.label().to_lowercase());
            }
        }
    }
}

/// Point later file dialogs at `path`'s directory, but only if the file
/// operation on it succeeded. Returns whether the settings changed.
fn remember_if_ok<T>(
    settings: &mut Settings,
    path: &Path,
    outcome: &project_tracker::Result<T>,
) -> bool {
    if outcome.is_err() {
        return false;
    }
    settings.remember_file(path);
    true
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::STATUS_BAR_BG)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Projects: {}", self.manager.len()))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // The selected project may have been deleted since it was opened.
        if self.page == Page::Details && self.manager.selected_project().is_none() {
            self.page = Page::Projects;
        }

        let mut list_action = ui::project_list::ProjectListAction::None;
        let mut details_action = ui::project_details::DetailsAction::None;
        let central_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::same(16.0));
        egui::CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| match self.page {
                Page::Projects => {
                    let snapshots: Vec<_> = self.manager.iter().map(|p| p.snapshot()).collect();
                    list_action = ui::project_list::show_project_list(&snapshots, ui);
                }
                Page::Details => {
                    if let Some(snapshot) = self.manager.selected_project().map(|p| p.snapshot()) {
                        details_action = ui::project_details::show_project_details(
                            &snapshot,
                            &mut self.new_todo_text,
                            ui,
                        );
                    }
                }
            });

        // Handle project list actions
        match list_action {
            ui::project_list::ProjectListAction::Open(id) => self.open_details(id),
            ui::project_list::ProjectListAction::Edit(id) => self.open_edit_dialog(id),
            ui::project_list::ProjectListAction::Delete(id) => self.delete_project(id),
            ui::project_list::ProjectListAction::New => self.open_new_project_dialog(),
            ui::project_list::ProjectListAction::None => {}
        }

        // Handle details page actions
        match details_action {
            ui::project_details::DetailsAction::Back => self.page = Page::Projects,
            ui::project_details::DetailsAction::Edit => {
                if let Some(id) = self.manager.selected_id() {
                    self.open_edit_dialog(id);
                }
            }
            ui::project_details::DetailsAction::Delete => {
                if let Some(id) = self.manager.selected_id() {
                    self.delete_project(id);
                }
            }
            ui::project_details::DetailsAction::AddTodo(text) => self.add_todo(text),
            ui::project_details::DetailsAction::SetTodoStatus(todo_id, status) => {
                self.set_todo_status(&todo_id, status)
            }
            ui::project_details::DetailsAction::None => {}
        }

        // Dialogs
        if self.show_new_project {
            ui::dialogs::show_new_project_dialog(self, ctx);
        }
        if self.edit_form.is_some() {
            ui::dialogs::show_edit_project_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
        if self.error_message.is_some() {
            ui::dialogs::show_error_dialog(self, ctx);
        }
    }
}
