//! Per-sentence reveal duration.
//!
//! Base duration is word count times a per-speed millisecond cost, floored so
//! short sentences stay legible, with a fixed pause added per mid-sentence
//! punctuation mark. Random and chunked modes then perturb the result with a
//! caller-supplied RNG so tests can seed it.

use std::time::Duration;

use rand::Rng;

use cue_core::{PacingMode, Speed};

/// Minimum reveal duration regardless of word count or speed.
pub const MIN_REVEAL: Duration = Duration::from_millis(1500);

/// Added once per `,`, `;`, or `:` in the sentence.
pub const PUNCTUATION_PAUSE: Duration = Duration::from_millis(200);

/// Milliseconds per word for each speed tier.
///
/// Derived from average reading speeds: slow ~180 wpm, normal ~230 wpm,
/// fast ~300 wpm.
pub fn ms_per_word(speed: Speed) -> u64 {
    match speed {
        Speed::Slow => 330,
        Speed::Normal => 260,
        Speed::Fast => 200,
    }
}

/// Count words by splitting on runs of whitespace.
///
/// Zero-length tokens are not counted, so an empty or all-whitespace
/// sentence has a word count of 0. The `MIN_REVEAL` floor keeps such a
/// sentence on screen regardless.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Deterministic duration for a sentence at a given speed: word cost,
/// floored to `MIN_REVEAL`, plus punctuation pauses.
pub fn base_duration(text: &str, speed: Speed) -> Duration {
    let words = word_count(text) as u64;
    let base = Duration::from_millis(words * ms_per_word(speed)).max(MIN_REVEAL);

    let pauses = text.chars().filter(|c| matches!(c, ',' | ';' | ':')).count() as u32;
    base + PUNCTUATION_PAUSE * pauses
}

/// Apply the pacing-mode perturbation to a base duration.
///
/// Sampled fresh on every call; the same sentence gets a new factor each
/// time it is about to be revealed.
pub fn perturb<R: Rng>(base: Duration, mode: PacingMode, rng: &mut R) -> Duration {
    match mode {
        PacingMode::Normal => base,
        PacingMode::Random => base.mul_f64(rng.random_range(0.8..=1.2)),
        PacingMode::Chunked => {
            if rng.random_bool(0.3) {
                let factor = if rng.random_bool(0.5) { 0.6 } else { 1.5 };
                base.mul_f64(factor)
            } else {
                base
            }
        }
    }
}

/// Full reveal duration for a sentence: base computation plus mode
/// perturbation.
pub fn reveal_duration<R: Rng>(
    text: &str,
    speed: Speed,
    mode: PacingMode,
    rng: &mut R,
) -> Duration {
    perturb(base_duration(text, speed), mode, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count("  spaced   out  "), 2);
        assert_eq!(word_count("single"), 1);
    }

    #[test]
    fn test_word_count_whitespace_only_is_zero() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \t\n"), 0);
    }

    #[test]
    fn test_base_duration_deterministic_example() {
        // 5 words, 1 comma, normal speed: max(5*260, 1500) + 200 = 1700 ms.
        let d = base_duration("one two three, four five", Speed::Normal);
        assert_eq!(d, Duration::from_millis(1700));
    }

    #[test]
    fn test_base_duration_floor() {
        // 1 word at fast speed would be 200 ms without the floor.
        assert_eq!(base_duration("hi", Speed::Fast), MIN_REVEAL);
        assert_eq!(base_duration("", Speed::Slow), MIN_REVEAL);
    }

    #[test]
    fn test_base_duration_above_floor_scales_with_words() {
        // 10 words at slow speed: 3300 ms, no punctuation.
        let text = "a b c d e f g h i j";
        assert_eq!(base_duration(text, Speed::Slow), Duration::from_millis(3300));
        assert_eq!(
            base_duration(text, Speed::Normal),
            Duration::from_millis(2600)
        );
        assert_eq!(base_duration(text, Speed::Fast), Duration::from_millis(2000));
    }

    #[test]
    fn test_punctuation_pause_is_additive_and_unconditional() {
        // Punctuation is added even when the floor applied.
        let d = base_duration("well, yes; maybe: no", Speed::Fast);
        assert_eq!(d, MIN_REVEAL + PUNCTUATION_PAUSE * 3);
    }

    #[test]
    fn test_normal_mode_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let base = Duration::from_millis(2000);
        for _ in 0..10 {
            assert_eq!(perturb(base, PacingMode::Normal, &mut rng), base);
        }
    }

    #[test]
    fn test_random_mode_stays_within_20_percent() {
        let mut rng = StdRng::seed_from_u64(42);
        let base = Duration::from_millis(2000);
        let lo = Duration::from_millis(1600);
        let hi = Duration::from_millis(2400);
        for _ in 0..1000 {
            let d = perturb(base, PacingMode::Random, &mut rng);
            assert!(d >= lo && d <= hi, "out of range: {:?}", d);
        }
    }

    #[test]
    fn test_chunked_mode_only_known_multipliers() {
        let mut rng = StdRng::seed_from_u64(42);
        let base = Duration::from_millis(2000);
        let allowed = [
            base,
            Duration::from_millis(1200),
            Duration::from_millis(3000),
        ];
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let d = perturb(base, PacingMode::Chunked, &mut rng);
            let idx = allowed
                .iter()
                .position(|a| *a == d)
                .unwrap_or_else(|| panic!("unexpected multiplier: {:?}", d));
            seen[idx] = true;
        }
        // With 1000 samples all three outcomes occur.
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_reveal_duration_composes() {
        let mut rng = StdRng::seed_from_u64(1);
        let d = reveal_duration(
            "one two three, four five",
            Speed::Normal,
            PacingMode::Normal,
            &mut rng,
        );
        assert_eq!(d, Duration::from_millis(1700));
    }

    #[test]
    fn test_never_below_floor_in_normal_mode() {
        for speed in [Speed::Slow, Speed::Normal, Speed::Fast] {
            for text in ["", "a", "a b", "hi!"] {
                assert!(base_duration(text, speed) >= MIN_REVEAL);
            }
        }
    }
}
