//! Guard pattern detection
//!
//! Locates the fixed start, middle and end guards of a UPC/EAN symbol in a
//! binarized row. The search is exposed for any family that brings its own
//! guard tables.

/// Tolerant guard search with quiet-zone checks
pub mod guard;

pub use guard::{find_guard_pattern, find_start_guard_pattern, pattern_match_variance};
