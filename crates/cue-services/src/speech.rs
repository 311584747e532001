//! Speech transcription contract.
//!
//! Capturing audio and turning it into text is platform glue, not core
//! logic. The trait is the narrow contract the app programs against; the
//! in-tree implementation reports the capability as unavailable, which is
//! exactly what a platform without a speech backend must surface.

use async_trait::async_trait;

use crate::error::ServiceError;

/// Produces raw text from a single spoken utterance.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    /// Listen for one utterance and return its transcript.
    ///
    /// Fails with `ServiceError::Unavailable` when no speech backend exists
    /// on this platform, or when capture itself fails.
    async fn listen(&self) -> Result<String, ServiceError>;
}

/// Transcription backend for platforms without speech capture.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableTranscription;

#[async_trait]
impl TranscriptionService for UnavailableTranscription {
    async fn listen(&self) -> Result<String, ServiceError> {
        Err(ServiceError::Unavailable(
            "speech recognition is not supported on this platform".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_transcription_errors() {
        let service = UnavailableTranscription;
        let err = service.listen().await.unwrap_err();
        assert!(matches!(err, ServiceError::Unavailable(_)));
        assert!(err.to_string().contains("not supported"));
    }

    #[tokio::test]
    async fn test_trait_object_usable() {
        let service: Box<dyn TranscriptionService> = Box::new(UnavailableTranscription);
        assert!(service.listen().await.is_err());
    }
}
