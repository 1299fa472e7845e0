use crate::app::TrackerApp;
use crate::ui::theme;
use chrono::NaiveDate;
use egui::{Color32, Context, RichText, Ui, Window};
use project_tracker::model::date::date_at_midnight;
use project_tracker::model::{ProjectData, ProjectEdit, ProjectSnapshot, ProjectStatus, UserRole};

/// Field values of the new/edit project forms.
#[derive(Debug, Clone)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub user_role: UserRole,
    pub finish_date: NaiveDate,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            status: ProjectStatus::default(),
            user_role: UserRole::default(),
            finish_date: chrono::Utc::now().date_naive(),
        }
    }
}

impl ProjectForm {
    pub fn from_snapshot(project: &ProjectSnapshot) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status,
            user_role: project.user_role,
            finish_date: project.finish_date.date_naive(),
        }
    }

    pub fn to_data(&self) -> ProjectData {
        ProjectData::new(self.name.clone())
            .description(self.description.clone())
            .status(self.status)
            .user_role(self.user_role)
            .finish_date(date_at_midnight(self.finish_date))
    }

    pub fn to_edit(&self) -> ProjectEdit {
        ProjectEdit {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            status: Some(self.status),
            user_role: Some(self.user_role),
            finish_date: Some(date_at_midnight(self.finish_date)),
        }
    }
}

/// Outcome of a form dialog for this frame.
enum FormResult {
    Open,
    Submit,
    Cancel,
}

fn show_form_fields(form: &mut ProjectForm, id: &str, ui: &mut Ui) {
    ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;

    egui::Grid::new((id, "grid"))
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Name").color(theme::TEXT_SECONDARY));
            ui.add_sized(
                [220.0, 24.0],
                egui::TextEdit::singleline(&mut form.name).hint_text("At least 5 characters"),
            );
            ui.end_row();

            ui.label(RichText::new("Description").color(theme::TEXT_SECONDARY));
            ui.add_sized(
                [220.0, 60.0],
                egui::TextEdit::multiline(&mut form.description).desired_rows(3),
            );
            ui.end_row();

            ui.label(RichText::new("Status").color(theme::TEXT_SECONDARY));
            egui::ComboBox::from_id_salt((id, "status"))
                .selected_text(form.status.label())
                .width(220.0)
                .show_ui(ui, |ui| {
                    for s in ProjectStatus::all() {
                        ui.selectable_value(&mut form.status, *s, s.label());
                    }
                });
            ui.end_row();

            ui.label(RichText::new("Role").color(theme::TEXT_SECONDARY));
            egui::ComboBox::from_id_salt((id, "role"))
                .selected_text(form.user_role.label())
                .width(220.0)
                .show_ui(ui, |ui| {
                    for r in UserRole::all() {
                        ui.selectable_value(&mut form.user_role, *r, r.label());
                    }
                });
            ui.end_row();

            ui.label(RichText::new("Finish Date").color(theme::TEXT_SECONDARY));
            ui.add(egui_extras::DatePickerButton::new(&mut form.finish_date).id_salt(id));
            ui.end_row();
        });
}

fn show_form_window(
    title: &str,
    submit_label: &str,
    form: &mut ProjectForm,
    id: &str,
    ctx: &Context,
) -> FormResult {
    let mut result = FormResult::Open;
    Window::new(RichText::new(title).strong().size(14.0))
        .id(egui::Id::new(id))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            show_form_fields(form, id, ui);
            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let submit = egui::Button::new(RichText::new(submit_label).color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], submit).clicked() {
                    result = FormResult::Submit;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    result = FormResult::Cancel;
                }
            });
            ui.add_space(2.0);
        });
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        result = FormResult::Cancel;
    }
    result
}

/// Render the "New Project" dialog.
pub fn show_new_project_dialog(app: &mut TrackerApp, ctx: &Context) {
    match show_form_window("New Project", "Create", &mut app.new_project, "new_project", ctx) {
        FormResult::Submit => app.create_project_from_dialog(),
        FormResult::Cancel => app.show_new_project = false,
        FormResult::Open => {}
    }
}

/// Render the "Edit Project" dialog for the project it was opened on.
pub fn show_edit_project_dialog(app: &mut TrackerApp, ctx: &Context) {
    let Some((_, form)) = app.edit_form.as_mut() else {
        return;
    };
    match show_form_window("Edit Project", "Save", form, "edit_project", ctx) {
        FormResult::Submit => app.save_edit_from_dialog(),
        FormResult::Cancel => app.edit_form = None,
        FormResult::Open => {}
    }
}

/// Render the modal error message, if any.
pub fn show_error_dialog(app: &mut TrackerApp, ctx: &Context) {
    let Some(message) = app.error_message.as_deref() else {
        return;
    };
    let mut should_close = false;
    Window::new(RichText::new("Error").strong().color(theme::DANGER))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(message);
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.add_sized([80.0, 28.0], egui::Button::new("OK")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
        app.error_message = None;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut TrackerApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([280.0, 160.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Project Tracker").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("Track projects and their to-dos,");
                ui.label("built with Rust and egui.");
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
