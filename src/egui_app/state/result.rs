use crate::prediction::ModelKind;

/// How a finished submission is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultKind {
    Success,
    ValidationError,
    TransportError,
    ApplicationError,
}

impl ResultKind {
    pub fn is_error(self) -> bool {
        !matches!(self, Self::Success)
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Success => "Prediction",
            Self::ValidationError => "Missing information",
            Self::TransportError => "Network error",
            Self::ApplicationError => "Prediction error",
        }
    }
}

/// Content of the result panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub kind: ResultKind,
    pub text: String,
    /// Model whose description accompanies a successful result.
    pub model: Option<ModelKind>,
}

impl ResultView {
    pub fn success(model: ModelKind, text: impl Into<String>) -> Self {
        Self {
            kind: ResultKind::Success,
            text: text.into(),
            model: Some(model),
        }
    }

    pub fn error(kind: ResultKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            model: None,
        }
    }

    pub fn model_info(&self) -> Option<&'static str> {
        self.model.map(ModelKind::description)
    }
}

/// Submit control state; only one prediction may be in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub in_flight: bool,
}

impl SubmitState {
    pub fn enabled(&self) -> bool {
        !self.in_flight
    }
}
