use eframe::egui;
use egui::Color32;
use shared::domain::ToastKind;

pub const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);
pub const PRIMARY_DARK: Color32 = Color32::from_rgb(29, 78, 216);
pub const ACCENT_WARNING: Color32 = Color32::from_rgb(245, 158, 11);
pub const SUCCESS: Color32 = Color32::from_rgb(16, 185, 129);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const TEXT: Color32 = Color32::from_rgb(17, 24, 39);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(75, 85, 99);
pub const SURFACE: Color32 = Color32::from_rgb(255, 255, 255);
pub const SURFACE_ALT: Color32 = Color32::from_rgb(243, 246, 251);
pub const FOOTER_BG: Color32 = Color32::from_rgb(17, 24, 39);
pub const FOOTER_TEXT: Color32 = Color32::from_rgb(209, 213, 219);

pub const HEADER_HEIGHT: f32 = 80.0;
pub const HEADER_HEIGHT_COMPACT: f32 = 64.0;
/// Below this window width the desktop navigation collapses into the
/// mobile menu.
pub const MOBILE_BREAKPOINT: f32 = 900.0;
pub const MOBILE_MENU_WIDTH: f32 = 300.0;
pub const CONTENT_MAX_WIDTH: f32 = 1120.0;
pub const ITEM_SPACING: f32 = 10.0;

pub fn toast_fill(kind: ToastKind) -> Color32 {
    match kind {
        ToastKind::Success => SUCCESS,
        ToastKind::Error => ERROR,
    }
}

pub fn toast_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✔",
        ToastKind::Error => "⚠",
    }
}

pub fn header_fill(compact: bool) -> Color32 {
    if compact {
        SURFACE
    } else {
        Color32::from_rgba_unmultiplied(255, 255, 255, 217)
    }
}

pub fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    color.gamma_multiply(alpha.clamp(0.0, 1.0))
}

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = SURFACE;
    visuals.window_fill = SURFACE;
    visuals.override_text_color = Some(TEXT);
    visuals.hyperlink_color = PRIMARY;
    visuals.selection.bg_fill = PRIMARY.gamma_multiply(0.35);
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(ITEM_SPACING, ITEM_SPACING);
    style.spacing.button_padding = egui::vec2(16.0, 10.0);
    ctx.set_style(style);
}

pub fn primary_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(label.to_string()).strong().color(Color32::WHITE))
        .fill(PRIMARY)
        .corner_radius(8.0)
}

pub fn secondary_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(label.to_string()).strong().color(PRIMARY))
        .fill(SURFACE)
        .stroke(egui::Stroke::new(1.5, PRIMARY))
        .corner_radius(8.0)
}

pub fn filled_button(label: &str, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(label.to_string()).strong().color(Color32::WHITE))
        .fill(fill)
        .corner_radius(8.0)
}
