use super::jobs::{PredictionJob, PredictionJobResult};
use crate::prediction::ModelKind;

/// A UI event delivered to the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum FormMessage {
    /// The model selector changed; `None` is the empty choice.
    SelectModel(Option<ModelKind>),
    /// A shared field was edited.
    EditField { name: &'static str, value: String },
    /// A model-specific control was edited.
    EditControl { id: &'static str, value: String },
    /// An input (field name or control id) gained focus.
    FocusInput(&'static str),
    /// An input lost focus.
    BlurInput(&'static str),
    Submit,
    /// Ask whether to clear the whole form.
    RequestClear,
    /// Answer to the clear prompt.
    ConfirmClear(bool),
    /// A background prediction finished.
    PredictionFinished(PredictionJobResult),
}

/// Side effect requested by [`super::EguiController::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Send a request to the prediction endpoint.
    Predict(PredictionJob),
}
