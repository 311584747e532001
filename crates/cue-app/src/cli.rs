//! CLI argument definitions for the Cue application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use cue_core::config::CueConfig;
use cue_core::{PacingMode, Speed};

/// Cue — a teleprompter trainer that reveals a script sentence by sentence
/// at a pace approximating natural speech.
#[derive(Parser, Debug)]
#[command(name = "cue", version, about)]
pub struct CliArgs {
    /// Script file to read. Reads from stdin when omitted.
    pub script: Option<PathBuf>,

    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Reading speed (slow, normal, fast).
    #[arg(short = 's', long = "speed")]
    pub speed: Option<Speed>,

    /// Pacing mode (normal, random, chunked).
    #[arg(short = 'm', long = "mode")]
    pub mode: Option<PacingMode>,

    /// Wait for Enter instead of starting playback immediately.
    #[arg(long = "no-autoplay")]
    pub no_autoplay: bool,

    /// Rewrite the script into imperfect human speech before playback.
    #[arg(long = "humanize")]
    pub humanize: bool,

    /// API key for the text-generation endpoint.
    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > CUE_CONFIG env var > ~/.cue/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("CUE_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the reading speed. Priority: --speed flag > config file.
    pub fn resolve_speed(&self, config: &CueConfig) -> Speed {
        self.speed.unwrap_or(config.playback.speed)
    }

    /// Resolve the pacing mode. Priority: --mode flag > config file.
    pub fn resolve_mode(&self, config: &CueConfig) -> PacingMode {
        self.mode.unwrap_or(config.playback.mode)
    }

    /// Resolve whether playback starts immediately.
    ///
    /// --no-autoplay always wins; otherwise the config value applies.
    pub fn resolve_autoplay(&self, config: &CueConfig) -> bool {
        !self.no_autoplay && config.playback.autoplay
    }

    /// Resolve the generation API key.
    ///
    /// Priority: --api-key flag > CUE_OPENROUTER_KEY env var > config file.
    pub fn resolve_api_key(&self, config: &CueConfig) -> Option<String> {
        if let Some(ref key) = self.api_key {
            return Some(key.clone());
        }
        if let Ok(key) = std::env::var("CUE_OPENROUTER_KEY") {
            if !key.trim().is_empty() {
                return Some(key);
            }
        }
        config.generation.api_key.clone()
    }

    /// Resolve the log level. Priority: --log-level flag > config file.
    pub fn resolve_log_level(&self, config: &CueConfig) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config.general.log_level.clone())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".cue").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".cue").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("cue").chain(argv.iter().copied()))
    }

    #[test]
    fn test_flag_overrides_config_speed() {
        let mut config = CueConfig::default();
        config.playback.speed = Speed::Slow;

        let parsed = args(&["--speed", "fast"]);
        assert_eq!(parsed.resolve_speed(&config), Speed::Fast);

        let parsed = args(&[]);
        assert_eq!(parsed.resolve_speed(&config), Speed::Slow);
    }

    #[test]
    fn test_flag_overrides_config_mode() {
        let mut config = CueConfig::default();
        config.playback.mode = PacingMode::Random;

        let parsed = args(&["--mode", "chunked"]);
        assert_eq!(parsed.resolve_mode(&config), PacingMode::Chunked);

        let parsed = args(&[]);
        assert_eq!(parsed.resolve_mode(&config), PacingMode::Random);
    }

    #[test]
    fn test_no_autoplay_always_wins() {
        let config = CueConfig::default();
        assert!(config.playback.autoplay);

        let parsed = args(&["--no-autoplay"]);
        assert!(!parsed.resolve_autoplay(&config));

        let parsed = args(&[]);
        assert!(parsed.resolve_autoplay(&config));
    }

    #[test]
    fn test_api_key_flag_beats_config() {
        let mut config = CueConfig::default();
        config.generation.api_key = Some("from-config".to_string());

        let parsed = args(&["--api-key", "from-flag"]);
        assert_eq!(parsed.resolve_api_key(&config).as_deref(), Some("from-flag"));
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        let config = CueConfig::default();
        let parsed = args(&["--log-level", "debug"]);
        assert_eq!(parsed.resolve_log_level(&config), "debug");

        let parsed = args(&[]);
        assert_eq!(parsed.resolve_log_level(&config), "info");
    }

    #[test]
    fn test_script_positional() {
        let parsed = args(&["talk.txt"]);
        assert_eq!(parsed.script.as_deref().unwrap().to_str(), Some("talk.txt"));

        let parsed = args(&[]);
        assert!(parsed.script.is_none());
    }

    #[test]
    fn test_invalid_speed_rejected() {
        let result = CliArgs::try_parse_from(["cue", "--speed", "ludicrous"]);
        assert!(result.is_err());
    }
}
