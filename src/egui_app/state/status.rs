use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Rolling log entries kept for the footer tooltip.
const MAX_LOG_ENTRIES: usize = 50;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    /// Tone of the current message.
    pub tone: StatusTone,
    /// Rolling status log entries.
    pub log: Vec<String>,
}

impl StatusBarState {
    /// Default status shown before any model is selected.
    pub fn idle() -> Self {
        let (label, color) = style::status_badge(StatusTone::Idle);
        Self {
            text: "Choose a model to get started".into(),
            badge_label: label.into(),
            badge_color: color,
            tone: StatusTone::Idle,
            log: Vec::new(),
        }
    }

    /// Replace the current message and append it to the log.
    pub fn set(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = style::status_badge(tone);
        self.text = text.into();
        self.badge_label = label.into();
        self.badge_color = color;
        self.tone = tone;
        self.log.push(format!("[{label}] {}", self.text));
        if self.log.len() > MAX_LOG_ENTRIES {
            let excess = self.log.len() - MAX_LOG_ENTRIES;
            self.log.drain(..excess);
        }
    }

    /// Concatenate log entries into a single displayable string.
    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_bounded() {
        let mut status = StatusBarState::idle();
        for idx in 0..(MAX_LOG_ENTRIES + 5) {
            status.set(format!("entry {idx}"), StatusTone::Info);
        }
        assert_eq!(status.log.len(), MAX_LOG_ENTRIES);
        assert_eq!(status.log[0], "[Info] entry 5");
        assert_eq!(status.text, format!("entry {}", MAX_LOG_ENTRIES + 4));
    }
}
