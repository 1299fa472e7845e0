use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;
use project_tracker::model::{ProjectSnapshot, TodoStatus};

/// Actions the details page can request.
pub enum DetailsAction {
    None,
    Back,
    Edit,
    Delete,
    AddTodo(String),
    SetTodoStatus(String, TodoStatus),
}

/// Render the detail view of one project, including its to-do list.
pub fn show_project_details(
    project: &ProjectSnapshot,
    new_todo_text: &mut String,
    ui: &mut Ui,
) -> DetailsAction {
    let mut action = DetailsAction::None;

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui
            .button(format!("{}  Projects", icons::ARROW_LEFT))
            .clicked()
        {
            action = DetailsAction::Back;
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let del = egui::Button::new(
                RichText::new(format!("{}  Delete", icons::TRASH)).color(Color32::WHITE),
            )
            .fill(theme::DANGER);
            if ui.add(del).clicked() {
                action = DetailsAction::Delete;
            }
            if ui.button(format!("{}  Edit", icons::PENCIL_SIMPLE)).clicked() {
                action = DetailsAction::Edit;
            }
        });
    });
    ui.add_space(8.0);

    let frame = egui::Frame::none()
        .fill(theme::BG_CARD)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(16.0))
        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE));

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(&project.name).strong().size(20.0));
        if !project.description.is_empty() {
            ui.label(RichText::new(&project.description).color(theme::TEXT_SECONDARY));
        }
        ui.add_space(10.0);

        egui::Grid::new("details_props")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Status").color(theme::TEXT_SECONDARY));
                ui.label(
                    RichText::new(project.status.label())
                        .color(theme::status_color(project.status)),
                );
                ui.end_row();

                ui.label(RichText::new("Role").color(theme::TEXT_SECONDARY));
                ui.label(project.user_role.label());
                ui.end_row();

                ui.label(RichText::new("Cost").color(theme::TEXT_SECONDARY));
                ui.label(format!("${}", project.cost));
                ui.end_row();

                ui.label(RichText::new("Finish Date").color(theme::TEXT_SECONDARY));
                ui.label(project.finish_date.format("%Y-%m-%d").to_string());
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.add(
            egui::ProgressBar::new(project.progress as f32)
                .text(format!("{}%", project.progress_percent()))
                .fill(theme::ACCENT),
        );
    });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("To-Do").strong().size(15.0));
        ui.label(
            RichText::new(format!("({}/{} done)", project.done_count(), project.todos.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(4.0);

    // Add row
    ui.horizontal(|ui| {
        let input = ui.add_sized(
            [ui.available_width() - 90.0, 24.0],
            egui::TextEdit::singleline(&mut *new_todo_text).hint_text("Enter to-do text..."),
        );
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let btn = egui::Button::new(
            RichText::new(format!("{} Add", icons::PLUS)).color(Color32::WHITE),
        )
        .fill(theme::ACCENT);
        if (ui.add_sized([80.0, 24.0], btn).clicked() || submitted)
            && !new_todo_text.trim().is_empty()
        {
            action = DetailsAction::AddTodo(std::mem::take(&mut *new_todo_text));
        }
    });
    ui.add_space(6.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if project.todos.is_empty() {
                ui.label(RichText::new("Nothing to do yet.").color(theme::TEXT_DIM));
            }
            for todo in &project.todos {
                ui.horizontal(|ui| {
                    let mut status = todo.status;
                    egui::ComboBox::from_id_salt(("todo_status", &todo.id))
                        .selected_text(status.label())
                        .width(90.0)
                        .show_ui(ui, |ui| {
                            for s in TodoStatus::all() {
                                ui.selectable_value(&mut status, *s, s.label());
                            }
                        });
                    if status != todo.status {
                        action = DetailsAction::SetTodoStatus(todo.id.clone(), status);
                    }

                    let mut text = RichText::new(&todo.text).color(theme::todo_color(todo.status));
                    if todo.is_done() {
                        text = text.strikethrough();
                    }
                    ui.label(text);
                });
                ui.separator();
            }
        });

    action
}
