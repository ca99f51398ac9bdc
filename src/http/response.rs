//! Error responses.
//!
//! # Responsibilities
//! - Map each `ResolveError` to one HTTP status code
//! - Render failures as `{error, message}` JSON (plus `beadId` on 404)
//!
//! # Design Decisions
//! - Ledger error text is logged here and replaced by a generic message
//! - `error` strings are stable; clients may match on them

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::resolver::ResolveError;

/// JSON body of every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bead_id: Option<String>,
}

impl ErrorBody {
    fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            bead_id: None,
        }
    }
}

/// Status code a resolution failure is served with.
pub fn status_for(err: &ResolveError) -> StatusCode {
    match err {
        ResolveError::InvalidFormat { .. } => StatusCode::BAD_REQUEST,
        ResolveError::NotFound { .. } => StatusCode::NOT_FOUND,
        ResolveError::Unconfigured => StatusCode::SERVICE_UNAVAILABLE,
        ResolveError::Ledger(_) | ResolveError::Overflow { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<&ResolveError> for ErrorBody {
    fn from(err: &ResolveError) -> Self {
        match err {
            ResolveError::InvalidFormat { .. } => ErrorBody::new(
                "Invalid BeadId format",
                "BeadId must be 8 characters of uppercase letters and digits",
            ),
            ResolveError::Unconfigured => {
                ErrorBody::new("Service not configured", "Contract address not set")
            }
            ResolveError::NotFound { bead_id } => ErrorBody {
                bead_id: Some(bead_id.clone()),
                ..ErrorBody::new("Bead not found", format!("No bead registered as {}", bead_id))
            },
            ResolveError::Ledger(_) => ErrorBody::new(
                "Internal server error",
                "Failed to read bead data from the blockchain",
            ),
            ResolveError::Overflow { field } => ErrorBody::new(
                "Value out of range",
                format!("On-chain value for {} is out of range", field),
            ),
        }
    }
}

impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "Bead resolution failed");
        } else {
            tracing::debug!(kind = self.kind(), error = %self, "Bead request rejected");
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
