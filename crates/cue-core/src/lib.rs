//! Cue core crate - shared types, errors, and configuration.
//!
//! Everything the other Cue crates have in common lives here: the speed and
//! pacing-mode enums, the top-level `CueError`, and the TOML configuration
//! loaded from `~/.cue/config.toml`.

pub mod config;
pub mod error;
pub mod types;

pub use config::CueConfig;
pub use error::{CueError, Result};
pub use types::{PacingMode, Speed};
