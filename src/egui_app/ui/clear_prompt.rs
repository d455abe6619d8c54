use super::style;
use super::*;
use eframe::egui::{self, Align2, RichText};

impl EguiApp {
    pub(super) fn render_clear_prompt(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.clear_prompt_open {
            return;
        }
        let mut open = true;
        let mut answer = None;
        egui::Window::new("Clear form")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .collapsible(false)
            .resizable(false)
            .auto_sized()
            .open(&mut open)
            .show(ctx, |ui| {
                let palette = style::palette();
                ui.label(
                    RichText::new("Clear the form and start over?").color(palette.text),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                });
            });
        if !open {
            answer = Some(false);
        }
        if let Some(confirmed) = answer {
            self.pending.push(FormMessage::ConfirmClear(confirmed));
        }
    }
}
