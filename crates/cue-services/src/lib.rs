//! Cue services crate - external collaborators.
//!
//! Thin clients over the systems the core treats as black boxes: the remote
//! chat-completion API (script humanization and voice Q&A), speech
//! transcription, and document text extraction. None of these touch pacing
//! state; they only produce or consume plain text.

pub mod error;
pub mod extract;
pub mod llm;
pub mod speech;

pub use error::ServiceError;
pub use extract::{PlainTextExtractor, TextExtraction};
pub use llm::GenerationClient;
pub use speech::{TranscriptionService, UnavailableTranscription};
