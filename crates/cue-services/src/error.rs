//! Error types for the collaborator services.

use cue_core::CueError;

/// Errors from the external-service clients.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("API key is required")]
    MissingCredential,
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("model returned no content")]
    EmptyResponse,
    #[error("capability unavailable: {0}")]
    Unavailable(String),
    #[error("extraction failed: {0}")]
    Extraction(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Http(err.to_string())
    }
}

impl From<ServiceError> for CueError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unavailable(msg) => CueError::Transcription(msg),
            ServiceError::Extraction(msg) => CueError::Extraction(msg),
            other => CueError::Generation(other.to_string()),
        }
    }
}
