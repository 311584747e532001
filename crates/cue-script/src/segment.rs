//! Sentence-boundary segmentation.
//!
//! The primary path applies Unicode sentence-break rules (UAX #29). The
//! heuristic path splits on terminal punctuation and exists for callers that
//! want the simpler, punctuation-only behavior. Both trim each sentence and
//! drop empty results, preserving original order.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use cue_core::config::SegmenterConfig;

/// A run of non-terminal characters followed by terminal punctuation and an
/// optional closing quote, or a trailing fragment with no terminator.
static SENTENCE_HEURISTIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^.!?]+[.!?]+["']?|[^.!?]+"#).expect("Invalid sentence regex"));

/// How sentence boundaries are detected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SegmentStrategy {
    /// Unicode sentence-break rules (default).
    #[default]
    Unicode,
    /// Regex split on `.`, `!`, `?` with an optional closing quote.
    Heuristic,
}

impl SegmentStrategy {
    /// Pick the strategy selected by the segmenter configuration.
    pub fn from_config(config: &SegmenterConfig) -> Self {
        if config.locale_aware {
            SegmentStrategy::Unicode
        } else {
            SegmentStrategy::Heuristic
        }
    }
}

/// Split raw text into an ordered sequence of trimmed, non-empty sentences
/// using Unicode sentence-break rules.
///
/// Empty or whitespace-only input yields an empty vec. A single word with no
/// terminal punctuation yields a one-element vec.
pub fn segment(text: &str) -> Vec<String> {
    segment_with(text, SegmentStrategy::Unicode)
}

/// Split raw text into sentences with an explicit boundary strategy.
pub fn segment_with(text: &str, strategy: SegmentStrategy) -> Vec<String> {
    let sentences: Vec<String> = match strategy {
        SegmentStrategy::Unicode => text
            .unicode_sentences()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        SegmentStrategy::Heuristic => SENTENCE_HEURISTIC
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
    };
    tracing::debug!(
        strategy = ?strategy,
        input_len = text.len(),
        sentence_count = sentences.len(),
        "Script segmented"
    );
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(text: &str) -> [Vec<String>; 2] {
        [
            segment_with(text, SegmentStrategy::Unicode),
            segment_with(text, SegmentStrategy::Heuristic),
        ]
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        for result in both("") {
            assert!(result.is_empty());
        }
    }

    #[test]
    fn test_whitespace_only_yields_empty_sequence() {
        for result in both("   \n\t  ") {
            assert!(result.is_empty());
        }
    }

    #[test]
    fn test_three_sentences() {
        for result in both("Hello world. How are you? Fine!") {
            assert_eq!(result, vec!["Hello world.", "How are you?", "Fine!"]);
        }
    }

    #[test]
    fn test_single_word_no_punctuation() {
        for result in both("Hello") {
            assert_eq!(result, vec!["Hello"]);
        }
    }

    #[test]
    fn test_trailing_fragment_kept() {
        for result in both("First sentence. And then some") {
            assert_eq!(result, vec!["First sentence.", "And then some"]);
        }
    }

    #[test]
    fn test_sentences_are_trimmed() {
        for result in both("  One.   Two.  ") {
            assert_eq!(result, vec!["One.", "Two."]);
        }
    }

    #[test]
    fn test_heuristic_keeps_closing_quote() {
        let result = segment_with(r#"He said "stop!" Then he left."#, SegmentStrategy::Heuristic);
        assert_eq!(result, vec![r#"He said "stop!""#, "Then he left."]);
    }

    #[test]
    fn test_exclamation_runs() {
        let result = segment_with("Wow!! Really?", SegmentStrategy::Heuristic);
        assert_eq!(result, vec!["Wow!!", "Really?"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let text = "Alpha. Bravo. Charlie. Delta.";
        for result in both(text) {
            assert_eq!(result, vec!["Alpha.", "Bravo.", "Charlie.", "Delta."]);
        }
    }

    #[test]
    fn test_newlines_between_sentences() {
        for result in both("First line.\nSecond line.") {
            assert_eq!(result, vec!["First line.", "Second line."]);
        }
    }

    #[test]
    fn test_strategy_from_config() {
        let locale_aware = SegmenterConfig { locale_aware: true };
        assert_eq!(
            SegmentStrategy::from_config(&locale_aware),
            SegmentStrategy::Unicode
        );
        let heuristic = SegmenterConfig {
            locale_aware: false,
        };
        assert_eq!(
            SegmentStrategy::from_config(&heuristic),
            SegmentStrategy::Heuristic
        );
    }

    #[test]
    fn test_default_segment_uses_unicode_rules() {
        assert_eq!(segment("Hi there. Bye."), vec!["Hi there.", "Bye."]);
    }
}
