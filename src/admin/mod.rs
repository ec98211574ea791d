//! Admin HTTP surface
//!
//! The back-office console talks to the numbering subsystem through these
//! endpoints: a conformance status readout and a trigger for the batch
//! backfill, plus a health probe. Responses are plain JSON so the console
//! can render the counts and the per-record failure list verbatim.

pub mod routes;

use crate::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use routes::router;

/// Shared state for the admin endpoints
#[derive(Debug, Clone)]
pub struct AdminState<S> {
    store: S,
    write_delay: Duration,
}

impl<S> AdminState<S> {
    pub fn new(store: S, write_delay: Duration) -> Self {
        Self { store, write_delay }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn write_delay(&self) -> Duration {
        self.write_delay
    }
}

/// Standard error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Unique error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error adapted for the HTTP boundary
#[derive(Debug)]
pub struct AdminError(Error);

impl From<Error> for AdminError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            Error::Database(_) | Error::Migrate(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = ErrorResponse::new(code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}
