use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Server is missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Document could not be read: {0}")]
    DocumentExtraction(String),

    #[error("Unsupported document type: {0}")]
    UnsupportedDocument(String),

    /// The AI provider is overloaded or unreachable; the user may resubmit.
    #[error("Upstream unavailable ({code}): {message}")]
    UpstreamUnavailable { code: &'static str, message: String },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingInput(_)
            | AppError::Validation(_)
            | AppError::DocumentExtraction(_)
            | AppError::UnsupportedDocument(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::MissingConfiguration(_) | AppError::Llm(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingInput(_) => "MISSING_INPUT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::MissingConfiguration(_) => "CONFIGURATION_ERROR",
            AppError::DocumentExtraction(_) => "DOCUMENT_UNREADABLE",
            AppError::UnsupportedDocument(_) => "UNSUPPORTED_DOCUMENT",
            AppError::UpstreamUnavailable { code, .. } => *code,
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::UpstreamUnavailable { .. })
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        if !err.is_retryable() {
            return AppError::Llm(err.to_string());
        }
        let code = match err.status() {
            Some(429) | Some(503) => "MODEL_OVERLOADED",
            _ => "SERVICE_UNAVAILABLE",
        };
        AppError::UpstreamUnavailable {
            code,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::MissingInput(msg)
            | AppError::Validation(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::DocumentExtraction(msg)
            | AppError::UnsupportedDocument(msg) => msg.clone(),
            AppError::MissingConfiguration(msg) => {
                tracing::error!("Configuration error: {msg}");
                "API key not configured".to_string()
            }
            AppError::UpstreamUnavailable { code, message } => {
                tracing::warn!("Upstream AI service unavailable ({code}): {message}");
                "The AI service is temporarily unavailable. Please try again in a moment."
                    .to_string()
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                "Failed to analyze resume".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "Failed to analyze resume".to_string()
            }
        };

        let body = Json(json!({
            "error": message,
            "code": self.code(),
            "retryable": self.is_retryable(),
        }));

        (self.status(), body).into_response()
    }
}
