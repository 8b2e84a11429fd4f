use folio_protocol::ElementId;
use thiserror::Error;

use crate::model::FieldErrors;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{name} threshold {value} is outside [0, 1]")]
    Threshold { name: &'static str, value: f64 },
    #[error("{name} = {value} ms is outside {min}..={max} ms")]
    OutOfRange {
        name: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
    #[error("markup id for {0} is empty")]
    EmptyMarkupId(&'static str),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("contact form is invalid: {0}")]
    Validation(FieldErrors),
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("no layout box for `{0}`")]
    MissingLayout(ElementId),
}

/// A browser capability the page wanted but could not use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("clipboard write is unavailable")]
    ClipboardUnavailable,
    #[error("clipboard write failed: {0}")]
    ClipboardRejected(String),
    #[error("intersection observation is unavailable")]
    IntersectionUnavailable,
}
