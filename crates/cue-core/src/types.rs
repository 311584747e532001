use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Base reading-speed tier used before any perturbation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    /// ~180 words per minute.
    Slow,
    /// ~230 words per minute (default).
    #[default]
    Normal,
    /// ~300 words per minute.
    Fast,
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speed::Slow => write!(f, "slow"),
            Speed::Normal => write!(f, "normal"),
            Speed::Fast => write!(f, "fast"),
        }
    }
}

impl FromStr for Speed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slow" => Ok(Speed::Slow),
            "normal" => Ok(Speed::Normal),
            "fast" => Ok(Speed::Fast),
            other => Err(format!("unknown speed '{other}' (expected slow, normal, or fast)")),
        }
    }
}

/// Perturbation strategy applied to computed reveal durations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacingMode {
    /// Deterministic durations (default).
    #[default]
    Normal,
    /// Each duration varied uniformly by up to +/- 20%.
    Random,
    /// Occasional drastic speed-ups or slow-downs (x0.6 or x1.5, p = 0.3).
    Chunked,
}

impl fmt::Display for PacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacingMode::Normal => write!(f, "normal"),
            PacingMode::Random => write!(f, "random"),
            PacingMode::Chunked => write!(f, "chunked"),
        }
    }
}

impl FromStr for PacingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(PacingMode::Normal),
            "random" => Ok(PacingMode::Random),
            "chunked" => Ok(PacingMode::Chunked),
            other => Err(format!(
                "unknown pacing mode '{other}' (expected normal, random, or chunked)"
            )),
        }
    }
}
