use super::jobs::JobMessage;
use super::*;

impl EguiController {
    /// Drain finished background jobs into the controller. Call once per frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::PredictionFinished(result) => {
                    self.jobs.clear_prediction();
                    self.dispatch(FormMessage::PredictionFinished(result));
                }
            }
        }
        self.ui.decorations.prune(Instant::now());
    }
}
