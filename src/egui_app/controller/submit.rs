use super::*;
use crate::prediction::api::PredictErrorKind;
use crate::prediction::build_request;

impl EguiController {
    pub(super) fn submit(&mut self) -> Option<Command> {
        let model = self.ui.form.selected_model?;
        if self.ui.submit.in_flight {
            tracing::debug!("Ignoring submit while a prediction is in flight");
            return None;
        }
        self.ui.submit.in_flight = true;

        let snapshot = self.ui.form.snapshot();
        match build_request(Some(model), &snapshot) {
            Ok(request) => {
                let status = format!("Requesting {} prediction", model.label());
                self.set_status(status, StatusTone::Busy);
                Some(Command::Predict(PredictionJob { model, request }))
            }
            Err(err) => {
                self.ui.submit.in_flight = false;
                self.show_error(ResultKind::ValidationError, err.to_string(), Instant::now());
                self.set_status("Fill in the missing fields", StatusTone::Error);
                None
            }
        }
    }

    pub(super) fn finish_prediction(&mut self, finished: PredictionJobResult, now: Instant) {
        self.ui.submit.in_flight = false;
        match finished.result {
            Ok(prediction) => {
                tracing::info!(model = %finished.model, "Prediction received");
                let view = ResultView::success(finished.model, prediction.text);
                let status = format!("{} prediction ready", finished.model.label());
                self.set_status(status, StatusTone::Info);
                self.celebrate_if_warranted(&view.text, now);
                self.ui.decorations.error_flash_until = None;
                self.ui.result = Some(view);
            }
            Err(err) => {
                tracing::warn!(model = %finished.model, "Prediction failed: {err}");
                let (kind, text) = match err.kind() {
                    PredictErrorKind::Application => {
                        (ResultKind::ApplicationError, err.to_string())
                    }
                    PredictErrorKind::Transport => {
                        (ResultKind::TransportError, format!("Network error: {err}"))
                    }
                };
                self.show_error(kind, text, now);
                self.set_status("Prediction failed", StatusTone::Error);
            }
        }
    }

    fn show_error(&mut self, kind: ResultKind, text: String, now: Instant) {
        self.ui.decorations.celebration = None;
        self.start_error_flash(now);
        self.ui.result = Some(ResultView::error(kind, text));
    }
}
