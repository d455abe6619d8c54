use super::*;
use crate::prediction::fields::{self, REQUIRED_FIELDS};

impl EguiController {
    pub(super) fn show_tooltip(&mut self, key: &'static str, now: Instant) {
        let decorations = &mut self.ui.decorations;
        if !decorations.settings.tooltips {
            return;
        }
        decorations.tooltip = fields::help_text(key).map(|text| Tooltip {
            field: key,
            text,
            shown_at: now,
        });
    }

    pub(super) fn check_input_on_blur(&mut self, key: &'static str, now: Instant) {
        if !self.ui.decorations.settings.field_feedback || !REQUIRED_FIELDS.contains(&key) {
            return;
        }
        let flag = if self.input_valid(key) {
            FieldFlag::Valid {
                until: now + VALID_FLASH,
            }
        } else {
            FieldFlag::Invalid
        };
        self.ui.decorations.field_flags.insert(key, flag);
    }

    /// Re-check an input already flagged invalid after it was edited.
    pub(super) fn recheck_flagged_input(&mut self, key: &'static str) {
        let flagged = matches!(
            self.ui.decorations.field_flags.get(key),
            Some(FieldFlag::Invalid)
        );
        if flagged && self.input_valid(key) {
            self.ui.decorations.field_flags.remove(key);
        }
    }

    pub(super) fn start_error_flash(&mut self, now: Instant) {
        if self.ui.decorations.settings.animations {
            self.ui.decorations.error_flash_until = Some(now + ERROR_FLASH);
        }
    }

    pub(super) fn celebrate_if_warranted(&mut self, text: &str, now: Instant) {
        let decorations = &mut self.ui.decorations;
        decorations.celebration = (decorations.settings.celebrations && celebrates(text))
            .then(|| Celebration::new(now, &mut rand::rng()));
    }

    fn input_valid(&self, key: &str) -> bool {
        fields::input_kind(key)
            .is_some_and(|kind| input_is_valid(kind, self.ui.form.input_value(key)))
    }
}
