//! RustUPCEAN - single-row UPC/EAN barcode decoding
//!
//! Decodes one binarized scan line into an EAN-13, EAN-8, UPC-A or UPC-E digit
//! string. Guards are located with tolerant ratio correlation, each digit is
//! matched against module-width templates with an ambiguity margin, and the
//! result is accepted only if its mod-10 check digit agrees.
//!
//! ```
//! use rust_upcean::{BarcodeFormat, DecodeHints, UpcEanReader};
//! use rust_upcean::tools::synth::synth_row;
//!
//! let row = synth_row(BarcodeFormat::Ean13, "5901234123457", 2).unwrap();
//! let result = UpcEanReader::ean13().decode_row(&row, &DecodeHints::default()).unwrap();
//! assert_eq!(result.text, "5901234123457");
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// UPC/EAN decoding (digits, checksum, family strategies, row reader)
pub mod decoder;
/// Guard pattern detection
pub mod detector;
/// Decode failures
pub mod error;
/// Core data structures (RowSignal, UpcEanResult, GuardSpan, etc.)
pub mod models;
/// Image loading, row scanning and synthetic symbols
pub mod tools;
/// Row binarization
pub mod utils;

pub use decoder::config::{DecodeHints, Tolerances};
pub use decoder::formats::{RowFormat, UpcEanFormat};
pub use decoder::reader::UpcEanReader;
pub use error::{DecodeError, DecodeResult, ErrorKind};
pub use models::{BarcodeFormat, GuardSpan, RowSignal, UpcEanResult};

use utils::binarization::otsu_binarize_row;

/// Decode one row as the given family
pub fn decode_row(
    row: &RowSignal,
    format: UpcEanFormat,
    hints: &DecodeHints,
) -> DecodeResult<UpcEanResult> {
    UpcEanReader::new(format).decode_row(row, hints)
}

/// Binarize a luminance row with Otsu's threshold, then decode it
pub fn decode_luma_row(
    luma: &[u8],
    format: UpcEanFormat,
    hints: &DecodeHints,
) -> DecodeResult<UpcEanResult> {
    decode_row(&otsu_binarize_row(luma), format, hints)
}
