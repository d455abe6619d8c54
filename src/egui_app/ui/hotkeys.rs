use super::*;
use eframe::egui::{self, Key, Modifiers};

impl EguiApp {
    /// Ctrl/Cmd+Enter submits; Escape asks to clear the form.
    pub(super) fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        let submit = ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Enter));
        if submit && self.controller.can_submit() {
            self.pending.push(FormMessage::Submit);
        }
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            let message = if self.controller.ui.clear_prompt_open {
                FormMessage::ConfirmClear(false)
            } else {
                FormMessage::RequestClear
            };
            self.pending.push(message);
        }
    }
}
