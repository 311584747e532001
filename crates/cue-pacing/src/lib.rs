//! Cue pacing crate - the reveal-timing state machine.
//!
//! Converts a sentence sequence plus a speed/mode configuration into a timed
//! series of reveal events. The `PacingEngine` owns playback state (current
//! index, play/pause), computes per-sentence durations, schedules advances on
//! a single cancellable timer, and exposes play/pause/restart/seek commands
//! plus a derived progress value.

pub mod duration;
pub mod engine;
pub mod state;

pub use duration::{base_duration, reveal_duration, word_count};
pub use engine::{PacingEngine, PlaybackOptions, PlaybackSnapshot};
pub use state::{PlaybackPhase, PlaybackSession};
