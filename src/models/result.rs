use std::fmt;

/// Pixel span `[begin, end)` inside a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuardSpan {
    /// First pixel of the span
    pub begin: usize,
    /// One past the last pixel of the span
    pub end: usize,
}

impl GuardSpan {
    /// Create a span
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }
}

/// Symbologies this crate can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarcodeFormat {
    /// EAN-13 (13 digits)
    Ean13,
    /// EAN-8 (8 digits)
    Ean8,
    /// UPC-A (12 digits)
    UpcA,
    /// UPC-E (8 digits, zero-suppressed UPC-A)
    UpcE,
}

impl BarcodeFormat {
    /// Number of digits in a complete decode
    pub fn digit_count(&self) -> usize {
        match self {
            BarcodeFormat::Ean13 => 13,
            BarcodeFormat::UpcA => 12,
            BarcodeFormat::Ean8 | BarcodeFormat::UpcE => 8,
        }
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BarcodeFormat::Ean13 => "EAN-13",
            BarcodeFormat::Ean8 => "EAN-8",
            BarcodeFormat::UpcA => "UPC-A",
            BarcodeFormat::UpcE => "UPC-E",
        };
        f.write_str(name)
    }
}

/// Successful decode of one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcEanResult {
    /// Decoded digits, check digit included
    pub text: String,
    /// Pixels from the start of the start guard to the end of the end guard
    pub span: GuardSpan,
    /// Where the start guard was found
    pub start_guard: GuardSpan,
    /// Where the end guard was found
    pub end_guard: GuardSpan,
    /// Symbology of the reader that produced this result
    pub format: BarcodeFormat,
}
