use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::types::{PacingMode, Speed};
use crate::CueError;

/// Top-level configuration for the Cue application.
///
/// Loaded from `~/.cue/config.toml` by default. Each section corresponds to
/// one crate's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CueConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub segmenter: SegmenterConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl CueConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CueConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| CueError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Playback defaults applied when the CLI does not override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Base reading speed tier.
    pub speed: Speed,
    /// Duration perturbation strategy.
    pub mode: PacingMode,
    /// Start revealing immediately once a script is loaded.
    pub autoplay: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: Speed::Normal,
            mode: PacingMode::Normal,
            autoplay: true,
        }
    }
}

/// Sentence segmentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Use Unicode sentence-break rules. When false, a punctuation
    /// heuristic is used instead.
    pub locale_aware: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self { locale_aware: true }
    }
}

/// Remote text-generation settings (humanize and Q&A).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Base URL of the chat-completion endpoint.
    pub base_url: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// API credential. Resolved in the app as: flag > CUE_OPENROUTER_KEY
    /// env var > this value.
    pub api_key: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "google/gemini-2.0-flash-001".to_string(),
            api_key: None,
        }
    }
}
