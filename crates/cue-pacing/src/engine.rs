//! The pacing engine state machine.
//!
//! Owns playback state behind an `Arc<Mutex<..>>`, schedules one reveal timer
//! at a time on the tokio runtime, and publishes `PlaybackSnapshot`s over a
//! watch channel for the presentation layer to consume.
//!
//! Cancellation discipline: every command bumps the timer epoch and aborts
//! the stored `JoinHandle` while holding the state mutex. A timer callback
//! that already passed its sleep re-checks the epoch after acquiring the
//! mutex and returns without mutating state if it went stale. Abort alone is
//! not enough because a task cannot be interrupted between its final await
//! point and the state mutation.

use std::sync::{Arc, Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use cue_core::config::PlaybackConfig;
use cue_core::{PacingMode, Speed};

use crate::duration;
use crate::state::{PlaybackPhase, PlaybackSession};

/// Playback configuration the engine is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackOptions {
    /// Base reading speed tier.
    pub speed: Speed,
    /// Duration perturbation strategy.
    pub mode: PacingMode,
    /// Start in the playing state.
    pub autoplay: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            speed: Speed::Normal,
            mode: PacingMode::Normal,
            autoplay: false,
        }
    }
}

impl From<&PlaybackConfig> for PlaybackOptions {
    fn from(config: &PlaybackConfig) -> Self {
        Self {
            speed: config.speed,
            mode: config.mode,
            autoplay: config.autoplay,
        }
    }
}

/// Read-only view of playback state published after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaybackSnapshot {
    /// Index of the currently revealed sentence.
    pub index: usize,
    /// Whether the engine is in the playing state.
    pub playing: bool,
    /// Derived progress in `[0, 100]`; `0` when the sequence has at most
    /// one sentence.
    pub progress: f64,
}

struct EngineState {
    index: usize,
    playing: bool,
    speed: Speed,
    mode: PacingMode,
    /// The single pending reveal timer, if any.
    timer: Option<JoinHandle<()>>,
    /// Bumped on every invalidation; stale timer callbacks compare against
    /// the value they captured at schedule time.
    epoch: u64,
    /// Set when an advance was attempted at the last index.
    completed: bool,
    rng: StdRng,
}

struct EngineInner {
    sentences: Vec<String>,
    session: PlaybackSession,
    state: Mutex<EngineState>,
    watch_tx: watch::Sender<PlaybackSnapshot>,
}

/// The reveal-timing state machine.
///
/// Cheap to clone; clones share the same playback state. All commands are
/// synchronous and infallible. Constructing with `autoplay = true` (or
/// toggling play later) requires a tokio runtime, since the reveal timer is
/// a spawned task.
#[derive(Clone)]
pub struct PacingEngine {
    inner: Arc<EngineInner>,
}

impl PacingEngine {
    /// Create an engine over a sentence sequence with an OS-seeded RNG.
    ///
    /// An empty sequence yields a static engine: index 0, no timer, no
    /// forward motion, regardless of `autoplay`.
    pub fn new(sentences: Vec<String>, options: PlaybackOptions) -> Self {
        Self::with_rng(sentences, options, StdRng::from_os_rng())
    }

    /// Create an engine with an explicit RNG so perturbed durations are
    /// deterministic under test.
    pub fn with_rng(sentences: Vec<String>, options: PlaybackOptions, rng: StdRng) -> Self {
        let playing = options.autoplay && !sentences.is_empty();
        let session = PlaybackSession::new(sentences.len());

        let initial = PlaybackSnapshot {
            index: 0,
            playing,
            progress: Self::progress_for(0, sentences.len()),
        };
        let (watch_tx, _) = watch::channel(initial);

        let engine = Self {
            inner: Arc::new(EngineInner {
                sentences,
                session,
                state: Mutex::new(EngineState {
                    index: 0,
                    playing,
                    speed: options.speed,
                    mode: options.mode,
                    timer: None,
                    epoch: 0,
                    completed: false,
                    rng,
                }),
                watch_tx,
            }),
        };

        tracing::info!(
            session_id = %engine.inner.session.id,
            sentence_count = engine.inner.session.sentence_count,
            speed = %options.speed,
            mode = %options.mode,
            autoplay = options.autoplay,
            "Playback session started"
        );

        if playing {
            let mut state = engine.lock();
            engine.schedule(&mut state);
        }
        engine
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Index of the currently revealed sentence.
    pub fn current_index(&self) -> usize {
        self.lock().index
    }

    /// Whether the engine is in the playing state.
    pub fn is_playing(&self) -> bool {
        self.lock().playing
    }

    /// Progress through the sequence in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        let state = self.lock();
        Self::progress_for(state.index, self.inner.sentences.len())
    }

    /// Observable phase derived from current state.
    pub fn phase(&self) -> PlaybackPhase {
        let state = self.lock();
        if self.inner.sentences.is_empty() {
            PlaybackPhase::Idle
        } else if state.timer.is_some() {
            PlaybackPhase::Playing
        } else if state.completed {
            PlaybackPhase::Idle
        } else {
            PlaybackPhase::Paused
        }
    }

    /// The sentence sequence this engine owns.
    pub fn sentences(&self) -> &[String] {
        &self.inner.sentences
    }

    /// Number of sentences in the sequence.
    pub fn sentence_count(&self) -> usize {
        self.inner.sentences.len()
    }

    /// The session record created at construction.
    pub fn session(&self) -> &PlaybackSession {
        &self.inner.session
    }

    /// Subscribe to playback snapshots. The receiver always holds the most
    /// recent state; a new value is published after every transition.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.inner.watch_tx.subscribe()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Flip between playing and paused. Entering the playing state schedules
    /// the next reveal; leaving it cancels the pending timer.
    pub fn toggle_play(&self) {
        let mut state = self.lock();
        Self::cancel_timer(&mut state);
        state.playing = !state.playing && !self.inner.sentences.is_empty();
        if state.playing {
            state.completed = false;
            self.schedule(&mut state);
        }
        tracing::debug!(playing = state.playing, index = state.index, "Playback toggled");
        self.publish(&state);
    }

    /// Stop playback and return to the first sentence. Cancels any pending
    /// timer; no advance fires afterwards without a subsequent
    /// `toggle_play`.
    pub fn restart(&self) {
        let mut state = self.lock();
        Self::cancel_timer(&mut state);
        state.playing = false;
        state.index = 0;
        state.completed = false;
        tracing::debug!("Playback restarted");
        self.publish(&state);
    }

    /// Jump to a sentence without changing the play/pause flag.
    ///
    /// The index is trusted to be in range; this is a caller contract, not a
    /// runtime-checked invariant. While playing, the pending timer is
    /// replaced by one for the new position.
    pub fn set_sentence(&self, index: usize) {
        let mut state = self.lock();
        Self::cancel_timer(&mut state);
        state.index = index;
        state.completed = false;
        if state.playing {
            self.schedule(&mut state);
        }
        tracing::debug!(index, "Jumped to sentence");
        self.publish(&state);
    }

    /// Replace the speed and mode used for duration computation.
    ///
    /// Takes effect at the next scheduling decision only; an in-flight timer
    /// keeps its already-computed duration.
    pub fn set_options(&self, speed: Speed, mode: PacingMode) {
        let mut state = self.lock();
        state.speed = speed;
        state.mode = mode;
        tracing::debug!(speed = %speed, mode = %mode, "Playback options updated");
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn lock(&self) -> MutexGuard<'_, EngineState> {
        self.inner.state.lock().expect("state mutex poisoned")
    }

    fn progress_for(index: usize, len: usize) -> f64 {
        index as f64 / (len.saturating_sub(1)).max(1) as f64 * 100.0
    }

    /// Invalidate the pending timer: bump the epoch so an already-fired
    /// callback returns without effect, and abort the task if it is still
    /// sleeping.
    fn cancel_timer(state: &mut EngineState) {
        state.epoch = state.epoch.wrapping_add(1);
        if let Some(handle) = state.timer.take() {
            handle.abort();
        }
    }

    /// Schedule the reveal timer for the current sentence. No-op unless
    /// playing with a sentence left to reveal.
    fn schedule(&self, state: &mut EngineState) {
        debug_assert!(state.timer.is_none(), "timer must be invalidated first");
        if !state.playing || state.index >= self.inner.sentences.len() {
            return;
        }

        let sentence = &self.inner.sentences[state.index];
        let delay = duration::reveal_duration(sentence, state.speed, state.mode, &mut state.rng);
        let epoch = state.epoch;
        let engine = self.clone();

        tracing::trace!(
            index = state.index,
            delay_ms = delay.as_millis() as u64,
            "Reveal scheduled"
        );
        state.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            engine.advance(epoch);
        }));
    }

    /// Timer-triggered advance. At the last index this is an idempotent
    /// stop: the index stays put and playback ends.
    fn advance(&self, epoch: u64) {
        let mut state = self.lock();
        if state.epoch != epoch {
            tracing::trace!("Stale reveal timer ignored");
            return;
        }
        state.timer = None;
        state.epoch = state.epoch.wrapping_add(1);

        let last = self.inner.sentences.len().saturating_sub(1);
        if state.index >= last {
            state.playing = false;
            state.completed = true;
            tracing::info!(
                session_id = %self.inner.session.id,
                elapsed_secs = self.inner.session.elapsed_secs(),
                "End of sequence, playback stopped"
            );
        } else {
            state.index += 1;
            tracing::trace!(index = state.index, "Sentence revealed");
            self.schedule(&mut state);
        }
        self.publish(&state);
    }

    fn publish(&self, state: &EngineState) {
        self.inner.watch_tx.send_replace(PlaybackSnapshot {
            index: state.index,
            playing: state.playing,
            progress: Self::progress_for(state.index, self.inner.sentences.len()),
        });
    }
}

impl std::fmt::Debug for PacingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("PacingEngine")
            .field("session_id", &self.inner.session.id)
            .field("sentence_count", &self.inner.sentences.len())
            .field("index", &state.index)
            .field("playing", &state.playing)
            .field("timer_pending", &state.timer.is_some())
            .finish()
    }
}
