//! Shared state types for the egui UI.

mod decorations;
mod form;
mod result;
mod status;

pub use decorations::*;
pub use form::{FormState, VisibleGroups};
pub use result::{ResultKind, ResultView, SubmitState};
pub use status::StatusBarState;

use crate::config::DecorationSettings;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub status: StatusBarState,
    pub form: FormState,
    /// Result panel content; `None` hides the panel.
    pub result: Option<ResultView>,
    pub submit: SubmitState,
    pub decorations: DecorationState,
    /// Whether the "clear the form" confirmation is open.
    pub clear_prompt_open: bool,
}

impl UiState {
    pub fn new(decorations: DecorationSettings) -> Self {
        Self {
            status: StatusBarState::idle(),
            form: FormState::default(),
            result: None,
            submit: SubmitState::default(),
            decorations: DecorationState::new(decorations),
            clear_prompt_open: false,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(DecorationSettings::default())
    }
}
