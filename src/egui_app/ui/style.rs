//! Colors and strokes for the prediction form.

use std::time::Instant;

use crate::egui_app::state::{DecorationState, FieldHighlight, ResultKind};
use eframe::egui::{
    Color32, Frame, Margin, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub window: Color32,
    pub panel: Color32,
    pub input: Color32,
    pub outline: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub error_fill: Color32,
    pub success: Color32,
    pub success_fill: Color32,
}

pub fn palette() -> Palette {
    Palette {
        window: Color32::from_rgb(14, 15, 18),
        panel: Color32::from_rgb(24, 26, 30),
        input: Color32::from_rgb(36, 39, 44),
        outline: Color32::from_rgb(48, 52, 60),
        text: Color32::from_rgb(206, 210, 216),
        text_muted: Color32::from_rgb(138, 144, 153),
        accent: Color32::from_rgb(102, 126, 234),
        error: Color32::from_rgb(244, 67, 54),
        error_fill: Color32::from_rgb(58, 26, 28),
        success: Color32::from_rgb(76, 175, 80),
        success_fill: Color32::from_rgb(24, 44, 32),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.window;
    visuals.panel_fill = palette.panel;
    visuals.override_text_color = Some(palette.text);
    visuals.extreme_bg_color = palette.input;
    visuals.error_fg_color = palette.error;
    visuals.warn_fg_color = palette.error;
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.5);
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
    for widgets in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        input_widget(widgets, palette);
    }
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.accent);
}

fn input_widget(widgets: &mut WidgetVisuals, palette: Palette) {
    widgets.corner_radius = CornerRadius::same(3);
    widgets.bg_fill = palette.input;
    widgets.weak_bg_fill = palette.input;
    widgets.bg_stroke = Stroke::new(1.0, palette.outline);
    widgets.fg_stroke = Stroke::new(1.0, palette.text);
}

/// Frame around one field group.
pub fn group_frame() -> Frame {
    let palette = palette();
    Frame::new()
        .fill(palette.window)
        .stroke(Stroke::new(1.0, palette.outline))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(10))
}

/// Border drawn around an input flagged by the blur check.
pub fn highlight_stroke(highlight: FieldHighlight) -> Stroke {
    let palette = palette();
    match highlight {
        FieldHighlight::Valid => Stroke::new(2.0, palette.success),
        FieldHighlight::Invalid => Stroke::new(2.0, palette.error),
    }
}

/// `(fill, accent)` for the result panel; error fills fade back once the flash ends.
pub fn result_colors(
    kind: ResultKind,
    decorations: &DecorationState,
    now: Instant,
) -> (Color32, Color32) {
    let palette = palette();
    if !kind.is_error() {
        return (palette.success_fill, palette.success);
    }
    let fill = if decorations.error_flash_active(now) {
        palette.error_fill
    } else {
        palette.window
    };
    (fill, palette.error)
}

/// Severity of the footer status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Error,
}

pub fn status_badge(tone: StatusTone) -> (&'static str, Color32) {
    match tone {
        StatusTone::Idle => ("Idle", Color32::from_rgb(42, 42, 42)),
        StatusTone::Busy => ("Predicting", Color32::from_rgb(31, 139, 255)),
        StatusTone::Info => ("Info", Color32::from_rgb(64, 140, 112)),
        StatusTone::Error => ("Error", Color32::from_rgb(192, 57, 43)),
    }
}
