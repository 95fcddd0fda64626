use thiserror::Error;

use super::{RequestError, TemplateError, ValidationError};

/// Failure of a single flow execution.
///
/// Every mid-flow failure is folded into this type so the scheduler can
/// treat them uniformly.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Request error: {0}")]
    Request(#[from] RequestError),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid http method '{method}'.")]
    UnsupportedMethod { method: String },
}

impl FlowError {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            FlowError::Template(_) => "template",
            FlowError::Request(_) => "request",
            FlowError::Validation(_) => "validation",
            FlowError::UnsupportedMethod { .. } => "unsupported_method",
        }
    }
}
