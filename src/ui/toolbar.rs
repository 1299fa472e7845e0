use crate::app::TrackerApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut TrackerApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button("  New Project...").clicked() {
                app.open_new_project_dialog();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Import Projects...").clicked() {
                app.import_projects();
                ui.close_menu();
            }
            if ui.button("  Export Projects...").clicked() {
                app.export_projects();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned selection
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(project) = app.manager.selected_project() {
                ui.label(RichText::new(&project.name).size(11.0).weak());
            }
        });
    });
}
