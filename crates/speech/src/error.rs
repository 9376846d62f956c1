use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpeechError>;

/// Speech relay errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Request carried no text to synthesize
    #[error("No text provided")]
    MissingInput,

    /// Provider API returned a non-success status
    #[error("TTS provider returned status {0}")]
    Upstream(u16),

    /// Network or connection error reaching the provider
    #[error("Connection error: {0}")]
    Connection(String),

    /// Failed to persist the audio artifact
    #[error("Failed to persist audio artifact: {0}")]
    Artifact(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error
    /// If Some(message), it came from the provider and can be shown
    /// If None, it's an internal error and should not leak details
    #[error("Internal server error")]
    Internal(Option<String>),
}

impl SpeechError {
    /// Get the appropriate HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingInput => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::Connection(_) | Self::Artifact(_) | Self::Config(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error response format exposed to API consumers
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

impl IntoResponse for SpeechError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            Self::MissingInput => ErrorBody {
                error: "No text provided".to_string(),
                status: None,
            },
            Self::Upstream(code) => ErrorBody {
                error: "TTS failed".to_string(),
                status: Some(code),
            },
            // Transport faults carry no upstream status; report a synthesized 502
            Self::Connection(_) => ErrorBody {
                error: "TTS failed".to_string(),
                status: Some(StatusCode::BAD_GATEWAY.as_u16()),
            },
            Self::Internal(Some(provider_msg)) => ErrorBody {
                error: provider_msg,
                status: None,
            },
            Self::Artifact(_) | Self::Config(_) | Self::Internal(None) => ErrorBody {
                error: "Internal server error".to_string(),
                status: None,
            },
        };

        (status, Json(body)).into_response()
    }
}
