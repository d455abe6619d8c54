//! Prediction form controller: turns UI messages into state changes and
//! background prediction jobs.

mod background_jobs;
mod decorations;
mod jobs;
mod messages;
mod submit;
mod visibility;

pub use jobs::{PredictionJob, PredictionJobResult};
pub use messages::{Command, FormMessage};

use std::time::Instant;

use crate::config::{AppConfig, ConfigError, DecorationSettings};
use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::prediction::ModelKind;
use crate::prediction::api::Endpoint;
use jobs::ControllerJobs;

/// Owns the form state for one window and bridges it to the prediction endpoint.
pub struct EguiController {
    pub ui: UiState,
    endpoint: Endpoint,
    jobs: ControllerJobs,
}

impl EguiController {
    /// Build a controller from loaded configuration.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_endpoint(config.endpoint()?, config.decorations))
    }

    pub fn with_endpoint(endpoint: Endpoint, decorations: DecorationSettings) -> Self {
        Self {
            ui: UiState::new(decorations),
            endpoint,
            jobs: ControllerJobs::new(),
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Apply one UI message, returning the side effect it asks for.
    ///
    /// No I/O happens here; [`EguiController::dispatch`] runs the command.
    pub fn handle(&mut self, message: FormMessage) -> Option<Command> {
        let now = Instant::now();
        match message {
            FormMessage::SelectModel(selection) => {
                self.select_model(selection, now);
                None
            }
            FormMessage::EditField { name, value } => {
                if self.ui.form.set_field(name, value) {
                    self.recheck_flagged_input(name);
                }
                None
            }
            FormMessage::EditControl { id, value } => {
                if self.ui.form.set_control(id, value) {
                    self.recheck_flagged_input(id);
                }
                None
            }
            FormMessage::FocusInput(key) => {
                self.show_tooltip(key, now);
                None
            }
            FormMessage::BlurInput(key) => {
                self.ui.decorations.tooltip = None;
                self.check_input_on_blur(key, now);
                None
            }
            FormMessage::Submit => self.submit(),
            FormMessage::RequestClear => {
                self.ui.clear_prompt_open = true;
                None
            }
            FormMessage::ConfirmClear(confirmed) => {
                self.ui.clear_prompt_open = false;
                if confirmed {
                    self.clear_form(now);
                }
                None
            }
            FormMessage::PredictionFinished(result) => {
                self.finish_prediction(result, now);
                None
            }
        }
    }

    /// Handle a message and run whatever command it produces.
    pub fn dispatch(&mut self, message: FormMessage) {
        if let Some(command) = self.handle(message) {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Predict(job) => {
                if !self.jobs.begin_prediction(self.endpoint.clone(), job) {
                    tracing::warn!("Prediction already running; dropping duplicate job");
                }
            }
        }
    }

    pub fn selected_model(&self) -> Option<ModelKind> {
        self.ui.form.selected_model
    }

    pub fn is_prediction_in_flight(&self) -> bool {
        self.ui.submit.in_flight
    }

    /// Whether the submit control is on screen and accepting input.
    pub fn can_submit(&self) -> bool {
        self.ui.form.visible.submit && self.ui.submit.enabled()
    }

    /// True while the UI must keep redrawing without input.
    pub fn needs_repaint(&self, now: Instant) -> bool {
        self.ui.submit.in_flight || self.ui.decorations.is_animating(now)
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }
}
