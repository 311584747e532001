//! Document text extraction contract.
//!
//! Decoding document formats (PDF and friends) is an external collaborator;
//! the app only needs bytes-in, text-out. `PlainTextExtractor` handles plain
//! UTF-8 files; richer formats are further implementations of the trait.

use async_trait::async_trait;

use crate::error::ServiceError;

/// Extracts readable text from raw document bytes.
#[async_trait]
pub trait TextExtraction: Send + Sync {
    /// Extract the text content of a document.
    async fn extract_text(&self, bytes: &[u8]) -> Result<String, ServiceError>;
}

/// Extractor for plain UTF-8 text files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtraction for PlainTextExtractor {
    async fn extract_text(&self, bytes: &[u8]) -> Result<String, ServiceError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ServiceError::Extraction(format!("document is not valid UTF-8: {e}")))?;
        Ok(text.trim().to_string())
    }
}
