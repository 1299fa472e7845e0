use egui::{Color32, FontId, Rounding, Stroke, Visuals};
use project_tracker::model::{ProjectStatus, TodoStatus};
use uuid::Uuid;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(22, 24, 30);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 32, 40);
pub const BG_CARD: Color32 = Color32::from_rgb(38, 41, 52);
pub const BG_FIELD: Color32 = Color32::from_rgb(20, 21, 27);
pub const STATUS_BAR_BG: Color32 = Color32::from_rgb(26, 28, 35);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(52, 55, 68);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(150, 150, 150);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);

pub const ACCENT: Color32 = Color32::from_rgb(2, 154, 224);
pub const DANGER: Color32 = Color32::from_rgb(214, 69, 65);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const CARD_WIDTH: f32 = 280.0;
pub const CARD_GAP: f32 = 12.0;
pub const ICON_SIZE: f32 = 40.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const DIALOG_WIDTH: f32 = 360.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Project icon colours ─────────────────────────────────────────────────────

pub const ICON_COLORS: &[Color32] = &[
    Color32::from_rgb(0xca, 0x81, 0x34),
    Color32::from_rgb(0x02, 0x9a, 0xe0),
    Color32::from_rgb(0x50, 0xb6, 0xe6),
    Color32::from_rgb(0x07, 0x30, 0x44),
    Color32::from_rgb(0x41, 0x5a, 0x66),
    Color32::from_rgb(0x01, 0x7c, 0xb3),
];

/// Stable icon colour for a project, so a card keeps its colour between frames.
pub fn icon_color(id: Uuid) -> Color32 {
    let idx = id.as_bytes()[0] as usize % ICON_COLORS.len();
    ICON_COLORS[idx]
}

pub fn status_color(status: ProjectStatus) -> Color32 {
    match status {
        ProjectStatus::Pending => Color32::from_rgb(230, 170, 60),
        ProjectStatus::Active => Color32::from_rgb(80, 180, 110),
        ProjectStatus::Finished => Color32::from_rgb(120, 140, 170),
    }
}

pub fn todo_color(status: TodoStatus) -> Color32 {
    match status {
        TodoStatus::Pending => TEXT_PRIMARY,
        TodoStatus::Done => TEXT_DIM,
    }
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_FIELD;
    visuals.faint_bg_color = BG_CARD;

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(44, 47, 60);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(54, 58, 72);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = Color32::from_rgb(62, 66, 80);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
