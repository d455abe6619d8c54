//! Client for the external `/predict` endpoint.

use serde::Deserialize;
use url::Url;

use super::model::ModelKind;
use super::request::PredictionRequest;
use crate::http_client;

const MAX_PREDICTION_RESPONSE_BYTES: usize = 64 * 1024;

/// Successful prediction as reported by the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prediction {
    pub text: String,
}

/// Failure of a dispatched prediction request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// The server answered with a non-2xx status; the body is ignored.
    #[error("HTTP error status: {0}")]
    Status(u16),
    /// The request never got a response (connection refused, timeout, ...).
    #[error("{0}")]
    Transport(String),
    /// A 2xx response whose body is not a usable prediction payload.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The server reported a semantic `error` for the request.
    #[error("{0}")]
    Application(String),
}

/// Coarse classification used when presenting a [`PredictError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredictErrorKind {
    Transport,
    Application,
}

impl PredictError {
    pub fn kind(&self) -> PredictErrorKind {
        match self {
            Self::Application(_) => PredictErrorKind::Application,
            Self::Status(_) | Self::Transport(_) | Self::InvalidResponse(_) => {
                PredictErrorKind::Transport
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unsupported endpoint scheme `{0}` (expected http or https)")]
    UnsupportedScheme(String),
}

/// Base address of the prediction server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    pub fn parse(base_url: &str) -> Result<Self, EndpointError> {
        let mut base = Url::parse(base_url.trim())?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(EndpointError::UnsupportedScheme(base.scheme().to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self { base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `POST` target for `model`, e.g. `http://host/predict?model=model2`.
    pub fn predict_url(&self, model: ModelKind) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}predict", self.base.path());
        url.set_path(&path);
        url.query_pairs_mut().append_pair("model", model.as_str());
        url
    }
}

/// Send one prediction request and decode the outcome.
pub fn submit_prediction(
    endpoint: &Endpoint,
    model: ModelKind,
    request: &PredictionRequest,
) -> Result<Prediction, PredictError> {
    let url = endpoint.predict_url(model);
    tracing::info!(%model, fields = request.len(), "Sending prediction request to {url}");
    let req = http_client::agent()
        .post(url.as_str())
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    let response = match req.send_json(request) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            tracing::warn!(%model, "Prediction endpoint returned HTTP {code}");
            return Err(PredictError::Status(code));
        }
        Err(ureq::Error::Transport(err)) => {
            tracing::warn!(%model, "Prediction request failed: {err}");
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let body = http_client::read_text_body(response, MAX_PREDICTION_RESPONSE_BYTES)
        .map_err(|err| PredictError::InvalidResponse(err.to_string()))?;
    parse_prediction_response(&body)
}

#[derive(Debug, Deserialize)]
struct PredictionResponseWire {
    prediction: Option<String>,
    error: Option<String>,
}

fn parse_prediction_response(body: &str) -> Result<Prediction, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::InvalidResponse("Empty response body".to_string()));
    }
    let parsed: PredictionResponseWire = serde_json::from_str(trimmed)
        .map_err(|err| PredictError::InvalidResponse(format!("{err}: {trimmed}")))?;
    if let Some(error) = parsed.error.filter(|error| !error.is_empty()) {
        return Err(PredictError::Application(error));
    }
    parsed
        .prediction
        .map(|text| Prediction { text })
        .ok_or_else(|| PredictError::InvalidResponse("Missing prediction in response".to_string()))
}
