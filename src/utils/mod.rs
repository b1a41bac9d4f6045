//! Utility functions for turning pixels into row signals
//!
//! - Binarization (Otsu's method and fixed threshold) of a single luminance row

/// Otsu and fixed-threshold row binarization
pub mod binarization;
