//! Playback phase and session record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Observable phase of the pacing engine.
///
/// Derived from playback state rather than stored: `Idle` when there is
/// nothing to reveal, `Playing` while a reveal timer is pending, `Paused`
/// when holding a valid position with no timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackPhase {
    /// No sentence sequence, or the sequence was consumed and stopped.
    Idle,
    /// A reveal timer is pending.
    Playing,
    /// Valid position, no timer pending.
    Paused,
}

impl fmt::Display for PlaybackPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackPhase::Idle => write!(f, "Idle"),
            PlaybackPhase::Playing => write!(f, "Playing"),
            PlaybackPhase::Paused => write!(f, "Paused"),
        }
    }
}

/// Identifies one continuous run from script submission to reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSession {
    /// Unique identifier for this session.
    pub id: Uuid,
    /// When the session was started.
    pub started_at: DateTime<Utc>,
    /// Number of sentences in the sequence.
    pub sentence_count: usize,
}

impl PlaybackSession {
    /// Create a session record for a sequence of the given length.
    pub fn new(sentence_count: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            sentence_count,
        }
    }

    /// Elapsed seconds since the session started.
    pub fn elapsed_secs(&self) -> f32 {
        let elapsed = Utc::now() - self.started_at;
        elapsed.num_milliseconds() as f32 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(PlaybackPhase::Idle.to_string(), "Idle");
        assert_eq!(PlaybackPhase::Playing.to_string(), "Playing");
        assert_eq!(PlaybackPhase::Paused.to_string(), "Paused");
    }

    #[test]
    fn test_new_session() {
        let session = PlaybackSession::new(4);
        assert_eq!(session.sentence_count, 4);
        assert!(session.elapsed_secs() >= 0.0);
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let a = PlaybackSession::new(1);
        let b = PlaybackSession::new(1);
        assert_ne!(a.id, b.id);
    }
}
