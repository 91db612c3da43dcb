//! Domain-specific error types for landing-forge

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::clients::ClientError;
use crate::form::RequestError;
use crate::validator::ResponseError;
use crate::wizard::WizardError;

/// Message shown to callers for every generation failure, whatever the cause.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate page";

/// Internal reason a generative call failed. Kept for logging only.
#[derive(Error, Debug)]
pub enum FailureKind {
    #[error("external call failed: {0}")]
    ExternalCall(#[from] ClientError),

    #[error("response malformed: {0}")]
    MalformedResponse(#[from] ResponseError),
}

/// The single caller-visible generation outcome.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to generate page")]
    Failed { cause: FailureKind },
}

impl GenerationError {
    pub fn cause(&self) -> &FailureKind {
        match self {
            GenerationError::Failed { cause } => cause,
        }
    }
}

impl From<FailureKind> for GenerationError {
    fn from(cause: FailureKind) -> Self {
        GenerationError::Failed { cause }
    }
}

/// Main error type for the landing-forge service and CLI
#[derive(Error, Debug)]
pub enum LandingForgeError {
    #[error("HTTP server error: {message}")]
    Http { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl From<std::io::Error> for LandingForgeError {
    fn from(err: std::io::Error) -> Self {
        LandingForgeError::Io {
            message: err.to_string(),
        }
    }
}

/// Convert LandingForgeError into the `{ "error": ... }` wire shape
impl IntoResponse for LandingForgeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            LandingForgeError::Request(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LandingForgeError::Wizard(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LandingForgeError::Generation(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERATION_FAILED_MESSAGE.to_string(),
            ),
            LandingForgeError::Http { .. }
            | LandingForgeError::Io { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for landing-forge operations
pub type Result<T> = std::result::Result<T, LandingForgeError>;
