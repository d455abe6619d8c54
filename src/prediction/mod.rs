//! Prediction domain: model catalog, request building and the `/predict` client.

pub mod api;
pub mod fields;
mod model;
mod request;

pub use model::{ModelKind, OptionalField, UnknownModel};
pub use request::{
    FieldValue, FormValues, PredictionRequest, ValidationError, build_request,
    parse_lenient_number,
};
