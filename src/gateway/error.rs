//! Gateway error taxonomy and wire translation.

use crate::task::{domain::TaskDomainError, ports::TaskRepositoryError};
use thiserror::Error;

/// Errors surfaced by gateway operations.
///
/// Each variant maps to a stable, machine-distinguishable wire code.
/// Storage failures stay opaque on the wire; the cause is logged locally.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// A request argument is malformed (non-numeric id, wrong JSON type,
    /// missing required argument, unknown operation). Raised before any
    /// repository call.
    #[error("{0}")]
    BadRequest(String),

    /// Caller-supplied data failed a domain rule.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The operation targeted an identifier with no matching record.
    #[error("{0}")]
    NotFound(String),

    /// The storage engine failed; detail is never sent to the caller.
    #[error("internal error")]
    Storage(#[source] TaskRepositoryError),
}

impl GatewayError {
    /// Returns the stable wire code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Storage(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<TaskRepositoryError> for GatewayError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(format!("task not found: {id}")),
            TaskRepositoryError::Persistence(_) => {
                tracing::error!(error = %err, "storage failure during gateway operation");
                Self::Storage(err)
            }
        }
    }
}
