use std::time::Instant;

use super::style;
use super::*;
use eframe::egui::{self, RichText, Stroke};

impl EguiApp {
    pub(super) fn render_result(&mut self, ui: &mut egui::Ui, now: Instant) {
        let Some(result) = self.controller.ui.result.as_ref() else {
            return;
        };
        let palette = style::palette();
        let (fill, accent) = style::result_colors(result.kind, &self.controller.ui.decorations, now);
        ui.add_space(16.0);
        egui::Frame::new()
            .fill(fill)
            .stroke(Stroke::new(1.0, accent))
            .corner_radius(4)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(result.kind.heading()).color(accent).strong());
                ui.add_space(4.0);
                ui.label(RichText::new(&result.text).color(palette.text).size(16.0));
                if let Some(info) = result.model_info() {
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("Model used: {info}"))
                            .color(palette.text_muted)
                            .italics(),
                    );
                }
            });
    }
}
