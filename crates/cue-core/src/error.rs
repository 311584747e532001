use thiserror::Error;

/// Top-level error type for the Cue system.
///
/// Each variant wraps a subsystem-specific failure. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for CueError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CueError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Text generation error: {0}")]
    Generation(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for CueError {
    fn from(err: toml::de::Error) -> Self {
        CueError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CueError {
    fn from(err: toml::ser::Error) -> Self {
        CueError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CueError {
    fn from(err: serde_json::Error) -> Self {
        CueError::Serialization(err.to_string())
    }
}

/// Convenience result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CueError::Config("missing section".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing section");

        let err = CueError::Generation("model refused".to_string());
        assert_eq!(err.to_string(), "Text generation error: model refused");

        let err = CueError::Transcription("no microphone".to_string());
        assert_eq!(err.to_string(), "Transcription error: no microphone");

        let err = CueError::Extraction("not valid UTF-8".to_string());
        assert_eq!(err.to_string(), "Extraction error: not valid UTF-8");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CueError = io.into();
        assert!(matches!(err, CueError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_from_toml_error() {
        let bad: std::result::Result<toml::Value, _> = toml::from_str("not [ valid");
        let err: CueError = bad.unwrap_err().into();
        assert!(matches!(err, CueError::Config(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let bad: std::result::Result<serde_json::Value, _> = serde_json::from_str("{broken");
        let err: CueError = bad.unwrap_err().into();
        assert!(matches!(err, CueError::Serialization(_)));
    }
}
