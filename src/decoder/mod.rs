//! UPC/EAN row decoding
//!
//! This module contains everything that runs after a row has been binarized:
//! - Digit correlation against L and G templates
//! - Weighted mod-10 checksum
//! - Per-family middle-section decoders (EAN-13, EAN-8, UPC-A, UPC-E)
//! - The row reader state machine tying them together

/// Weighted mod-10 check digit and UPC-E expansion
pub mod checksum;
/// Tolerances and decode hints
pub mod config;
/// Four-run digit correlation
pub mod digit;
/// Family strategies plugged into the reader
pub mod formats;
/// Row decode state machine
pub mod reader;
/// Digit encodings and parity tables
pub mod tables;
