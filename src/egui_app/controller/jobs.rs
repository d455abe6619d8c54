use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::prediction::api::{self, Endpoint, PredictError, Prediction};
use crate::prediction::{ModelKind, PredictionRequest};

pub(crate) enum JobMessage {
    PredictionFinished(PredictionJobResult),
}

/// Request to send for one submission.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionJob {
    pub model: ModelKind,
    pub request: PredictionRequest,
}

/// Outcome of a [`PredictionJob`].
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionJobResult {
    pub model: ModelKind,
    pub result: Result<Prediction, PredictError>,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    prediction_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            prediction_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    /// Send the request on a worker thread; refuses while one is running.
    pub(super) fn begin_prediction(&mut self, endpoint: Endpoint, job: PredictionJob) -> bool {
        if self.prediction_in_progress {
            return false;
        }
        self.prediction_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::submit_prediction(&endpoint, job.model, &job.request);
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult {
                model: job.model,
                result,
            }));
        });
        true
    }

    pub(super) fn clear_prediction(&mut self) {
        self.prediction_in_progress = false;
    }
}
