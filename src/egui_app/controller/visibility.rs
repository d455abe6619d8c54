use super::*;

impl EguiController {
    /// Switch the active model and the groups shown for it.
    pub(super) fn select_model(&mut self, selection: Option<ModelKind>, now: Instant) {
        if selection == self.ui.form.selected_model {
            return;
        }
        self.ui.form.selected_model = selection;
        self.ui.form.visible = VisibleGroups::for_selection(selection);
        self.ui.form.reset_values();
        self.ui.result = None;
        self.ui.decorations.celebration = None;
        self.ui.decorations.error_flash_until = None;
        self.ui.decorations.field_flags.clear();
        self.ui.decorations.tooltip = None;
        self.ui.decorations.reveal = match selection {
            Some(_) if self.ui.decorations.settings.animations => Some(Reveal { started: now }),
            _ => None,
        };
        match selection {
            Some(model) => {
                tracing::debug!(model = %model, "Model selected");
                self.set_status(model.description(), StatusTone::Info);
            }
            None => {
                let idle = StatusBarState::idle();
                self.set_status(idle.text, idle.tone);
            }
        }
    }

    /// Return the form to its initial state.
    pub(super) fn clear_form(&mut self, now: Instant) {
        self.select_model(None, now);
        self.ui.form.reset_values();
        self.ui.result = None;
        self.ui.decorations.clear();
        tracing::info!("Form cleared");
    }
}
