//! Cue script crate - sentence segmentation.
//!
//! Turns raw script text into the ordered sentence sequence the pacing
//! engine consumes. Pure functions, no side effects.

pub mod segment;

pub use segment::{segment, segment_with, SegmentStrategy};
