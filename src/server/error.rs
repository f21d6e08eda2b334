//! Mapping from gateway errors to HTTP responses.
//!
//! Client errors are echoed back with 422 (or the extractor's own status
//! for malformed bodies). Everything else becomes a 500 with a fixed,
//! per-operation message; the cause only reaches the log.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::GatewayError;
use crate::telemetry;

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Operation an error was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Analyze,
    Optimize,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Analyze => "analyze",
            Operation::Optimize => "optimize",
        }
    }

    /// Message returned to the client on internal failure.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Analyze => "Erreur lors de l'analyse",
            Operation::Optimize => "Erreur lors de l'optimisation",
        }
    }
}

/// Error returned by HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be extracted.
    Rejected {
        operation: Operation,
        status: StatusCode,
        detail: String,
    },
    /// The gateway returned an error.
    Failed {
        operation: Operation,
        error: GatewayError,
    },
}

impl ApiError {
    pub fn rejected(operation: Operation, rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            operation,
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }

    pub fn failed(operation: Operation, error: GatewayError) -> Self {
        ApiError::Failed { operation, error }
    }

    /// Status code and client-visible message.
    pub fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            ApiError::Rejected { status, detail, .. } => (*status, detail.clone()),
            ApiError::Failed { error, .. } if error.is_client_error() => {
                (StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
            }
            ApiError::Failed { operation, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                operation.failure_message().to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        match &self {
            ApiError::Rejected { operation, .. } => {
                warn!(operation = operation.as_str(), %detail, "request rejected");
                metrics::counter!(telemetry::REJECTED_TOTAL, "operation" => operation.as_str())
                    .increment(1);
            }
            ApiError::Failed { operation, error } if error.is_client_error() => {
                warn!(operation = operation.as_str(), %error, "request rejected");
                metrics::counter!(telemetry::REJECTED_TOTAL, "operation" => operation.as_str())
                    .increment(1);
            }
            ApiError::Failed { operation, error } => {
                error!(operation = operation.as_str(), %error, "request failed");
            }
        }
        (status, Json(ErrorBody { detail })).into_response()
    }
}
