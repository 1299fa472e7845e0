use crate::ui::theme;
use egui::{Color32, RichText, Sense, Ui};
use egui_phosphor::regular as icons;
use project_tracker::model::ProjectSnapshot;
use uuid::Uuid;

/// Actions that the project list can request.
pub enum ProjectListAction {
    None,
    Open(Uuid),
    Edit(Uuid),
    Delete(Uuid),
    New,
}

/// Render the projects page: header plus a wrapped grid of cards.
pub fn show_project_list(projects: &[ProjectSnapshot], ui: &mut Ui) -> ProjectListAction {
    let mut action = ProjectListAction::None;

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Projects").strong().size(18.0));
        ui.label(
            RichText::new(format!("({})", projects.len()))
                .size(12.0)
                .color(theme::TEXT_DIM),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let btn = egui::Button::new(
                RichText::new(format!("{}  New Project", icons::PLUS)).color(Color32::WHITE),
            )
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(5.0));
            if ui.add_sized([130.0, 28.0], btn).clicked() {
                action = ProjectListAction::New;
            }
        });
    });
    ui.add_space(6.0);
    ui.separator();
    ui.add_space(6.0);

    if projects.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                RichText::new("No projects yet. Create one or import a projects.json file.")
                    .color(theme::TEXT_SECONDARY),
            );
        });
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let per_row = ((ui.available_width() + theme::CARD_GAP)
                / (theme::CARD_WIDTH + theme::CARD_GAP))
                .floor()
                .max(1.0) as usize;

            for row in projects.chunks(per_row) {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::CARD_GAP;
                    for project in row {
                        let card_action = show_card(project, ui);
                        if !matches!(card_action, ProjectListAction::None) {
                            action = card_action;
                        }
                    }
                });
                ui.add_space(theme::CARD_GAP);
            }
        });

    action
}

fn show_card(project: &ProjectSnapshot, ui: &mut Ui) -> ProjectListAction {
    let mut action = ProjectListAction::None;

    let frame = egui::Frame::none()
        .fill(theme::BG_CARD)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE));

    frame.show(ui, |ui| {
        ui.set_width(theme::CARD_WIDTH - 24.0);

        // Header: icon + title
        ui.horizontal(|ui| {
            let (icon_rect, icon_resp) = ui.allocate_exact_size(
                egui::vec2(theme::ICON_SIZE, theme::ICON_SIZE),
                Sense::click(),
            );
            let painter = ui.painter();
            painter.rect_filled(icon_rect, 8.0, theme::icon_color(project.id));
            painter.text(
                icon_rect.center(),
                egui::Align2::CENTER_CENTER,
                project.initials(),
                egui::FontId::proportional(15.0),
                Color32::WHITE,
            );
            if icon_resp.on_hover_text("Edit project").clicked() {
                action = ProjectListAction::Edit(project.id);
            }

            ui.vertical(|ui| {
                let title = ui.add(
                    egui::Label::new(RichText::new(&project.name).strong().size(14.0))
                        .truncate()
                        .sense(Sense::click()),
                );
                let description = if project.description.is_empty() {
                    RichText::new("No description").italics().color(theme::TEXT_DIM)
                } else {
                    RichText::new(&project.description).color(theme::TEXT_SECONDARY)
                };
                let desc = ui.add(
                    egui::Label::new(description.size(11.0))
                        .truncate()
                        .sense(Sense::click()),
                );
                if title.clicked() || desc.clicked() {
                    action = ProjectListAction::Open(project.id);
                }
            });
        });

        ui.add_space(6.0);

        egui::Grid::new(("card_props", project.id))
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                property(ui, "Status");
                ui.label(
                    RichText::new(project.status.label())
                        .size(12.0)
                        .color(theme::status_color(project.status)),
                );
                ui.end_row();

                property(ui, "Role");
                ui.label(RichText::new(project.user_role.label()).size(12.0));
                ui.end_row();

                property(ui, "Cost");
                ui.label(RichText::new(format!("${}", project.cost)).size(12.0));
                ui.end_row();

                property(ui, "Estimated Progress");
                ui.label(RichText::new(format!("{}%", project.progress_percent())).size(12.0));
                ui.end_row();
            });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let open = ui.add(
                egui::Button::new(
                    RichText::new(format!("{} Open", icons::ARROW_RIGHT)).size(11.0),
                )
                .frame(false),
            );
            if open.clicked() {
                action = ProjectListAction::Open(project.id);
            }
            ui.label(
                RichText::new(format!("{}/{} done", project.done_count(), project.todos.len()))
                    .size(10.0)
                    .color(theme::TEXT_DIM),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let del = ui.add(
                    egui::Button::new(RichText::new(icons::TRASH).size(12.0).color(theme::TEXT_DIM))
                        .frame(false),
                );
                if del.on_hover_text("Delete project").clicked() {
                    action = ProjectListAction::Delete(project.id);
                }
            });
        });
    });

    action
}

fn property(ui: &mut Ui, name: &str) {
    ui.label(RichText::new(name).size(11.0).color(theme::TEXT_SECONDARY));
}
