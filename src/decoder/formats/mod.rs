//! Per-family middle-section decoders
//!
//! The row reader only knows the [`RowFormat`] capability. The built-in families
//! are selected with the [`UpcEanFormat`] tag, which dispatches to the plain
//! functions in each submodule.

pub mod ean13;
pub mod ean8;
pub mod upca;
pub mod upce;

use std::borrow::Cow;

use crate::decoder::config::Tolerances;
use crate::detector::guard::{START_END_PATTERN, UPCE_END_PATTERN};
use crate::error::{DecodeError, DecodeResult};
use crate::models::{BarcodeFormat, GuardSpan, RowSignal};

/// Guard that closes a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndGuard {
    /// Module widths of the guard
    pub pattern: &'static [u32],
    /// Whether the guard starts with a space
    pub white_first: bool,
}

/// Capability a barcode family plugs into the row reader
pub trait RowFormat {
    /// Format tag reported on success
    fn expected_format(&self) -> BarcodeFormat;

    /// Decode everything between the start and end guards
    ///
    /// Appends the digits to `out` and returns the first pixel after the consumed region.
    fn decode_middle(
        &self,
        row: &RowSignal,
        start_guard: GuardSpan,
        out: &mut String,
        tolerances: &Tolerances,
    ) -> DecodeResult<usize>;

    /// Guard searched for after the middle section
    fn end_guard(&self) -> EndGuard;

    /// Digits the generic mod-10 check runs on
    fn checksum_input<'a>(&self, text: &'a str) -> DecodeResult<Cow<'a, str>>;

    /// Family rule applied after the generic checksum passed
    fn validate(&self, text: &str) -> DecodeResult<()>;
}

/// Built-in UPC/EAN families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpcEanFormat {
    /// EAN-13
    Ean13,
    /// EAN-8
    Ean8,
    /// UPC-A
    UpcA,
    /// UPC-E
    UpcE,
}

impl UpcEanFormat {
    /// Every built-in family, UPC-A ahead of EAN-13 so zero-led codes report as UPC-A
    pub const ALL: [UpcEanFormat; 4] = [
        UpcEanFormat::UpcA,
        UpcEanFormat::Ean13,
        UpcEanFormat::Ean8,
        UpcEanFormat::UpcE,
    ];
}

impl From<BarcodeFormat> for UpcEanFormat {
    fn from(format: BarcodeFormat) -> Self {
        match format {
            BarcodeFormat::Ean13 => UpcEanFormat::Ean13,
            BarcodeFormat::Ean8 => UpcEanFormat::Ean8,
            BarcodeFormat::UpcA => UpcEanFormat::UpcA,
            BarcodeFormat::UpcE => UpcEanFormat::UpcE,
        }
    }
}

const STANDARD_END: EndGuard = EndGuard {
    pattern: &START_END_PATTERN,
    white_first: false,
};

impl RowFormat for UpcEanFormat {
    fn expected_format(&self) -> BarcodeFormat {
        match self {
            UpcEanFormat::Ean13 => BarcodeFormat::Ean13,
            UpcEanFormat::Ean8 => BarcodeFormat::Ean8,
            UpcEanFormat::UpcA => BarcodeFormat::UpcA,
            UpcEanFormat::UpcE => BarcodeFormat::UpcE,
        }
    }

    fn decode_middle(
        &self,
        row: &RowSignal,
        start_guard: GuardSpan,
        out: &mut String,
        tolerances: &Tolerances,
    ) -> DecodeResult<usize> {
        match self {
            UpcEanFormat::Ean13 => ean13::decode_middle(row, start_guard, out, tolerances),
            UpcEanFormat::Ean8 => ean8::decode_middle(row, start_guard, out, tolerances),
            UpcEanFormat::UpcA => upca::decode_middle(row, start_guard, out, tolerances),
            UpcEanFormat::UpcE => upce::decode_middle(row, start_guard, out, tolerances),
        }
    }

    fn end_guard(&self) -> EndGuard {
        match self {
            UpcEanFormat::UpcE => EndGuard {
                pattern: &UPCE_END_PATTERN,
                white_first: true,
            },
            _ => STANDARD_END,
        }
    }

    fn checksum_input<'a>(&self, text: &'a str) -> DecodeResult<Cow<'a, str>> {
        match self {
            UpcEanFormat::UpcE => upce::checksum_input(text).map(Cow::Owned),
            _ => Ok(Cow::Borrowed(text)),
        }
    }

    fn validate(&self, text: &str) -> DecodeResult<()> {
        if text.len() != self.expected_format().digit_count() {
            return Err(DecodeError::Format("wrong digit count"));
        }
        Ok(())
    }
}
