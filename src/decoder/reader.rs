//! Row decode state machine
//!
//! One call walks `SearchStart → DecodeMiddle → SearchEnd → ValidateChecksum → Done`.
//! The first failing state ends the call with its error; there is no partial
//! result and no retry. Retrying on other rows or with wider tolerances is up
//! to the caller.

use crate::decoder::checksum::check_standard_checksum;
use crate::decoder::config::{DecodeHints, Tolerances};
use crate::decoder::formats::{RowFormat, UpcEanFormat};
use crate::detector::guard::{find_guard_pattern, find_start_guard_pattern};
use crate::error::{DecodeError, DecodeResult};
use crate::models::{GuardSpan, RowSignal, UpcEanResult};

/// Where the decoder is inside one call
#[derive(Debug, Clone, PartialEq, Eq)]
enum DecodeState {
    SearchStart,
    DecodeMiddle {
        start: GuardSpan,
    },
    SearchEnd {
        start: GuardSpan,
        middle_end: usize,
    },
    ValidateChecksum {
        start: GuardSpan,
        end: GuardSpan,
    },
    Done(UpcEanResult),
}

impl DecodeState {
    fn name(&self) -> &'static str {
        match self {
            DecodeState::SearchStart => "search_start",
            DecodeState::DecodeMiddle { .. } => "decode_middle",
            DecodeState::SearchEnd { .. } => "search_end",
            DecodeState::ValidateChecksum { .. } => "validate_checksum",
            DecodeState::Done(_) => "done",
        }
    }
}

/// Single-row reader for one barcode family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcEanReader<F = UpcEanFormat> {
    format: F,
}

impl UpcEanReader<UpcEanFormat> {
    /// EAN-13 reader
    pub fn ean13() -> Self {
        Self::new(UpcEanFormat::Ean13)
    }

    /// EAN-8 reader
    pub fn ean8() -> Self {
        Self::new(UpcEanFormat::Ean8)
    }

    /// UPC-A reader
    pub fn upca() -> Self {
        Self::new(UpcEanFormat::UpcA)
    }

    /// UPC-E reader
    pub fn upce() -> Self {
        Self::new(UpcEanFormat::UpcE)
    }
}

impl<F: RowFormat> UpcEanReader<F> {
    /// Reader driven by any [`RowFormat`]
    pub fn new(format: F) -> Self {
        Self { format }
    }

    /// Decode a row, searching for the start guard from pixel 0
    pub fn decode_row(&self, row: &RowSignal, hints: &DecodeHints) -> DecodeResult<UpcEanResult> {
        self.run(row, DecodeState::SearchStart, hints)
    }

    /// Decode a row whose start guard is already known
    ///
    /// Lets a caller locate the start guard once and try several families on it.
    pub fn decode_row_with_start(
        &self,
        row: &RowSignal,
        start_guard: GuardSpan,
        hints: &DecodeHints,
    ) -> DecodeResult<UpcEanResult> {
        self.run(row, DecodeState::DecodeMiddle { start: start_guard }, hints)
    }

    fn run(
        &self,
        row: &RowSignal,
        initial: DecodeState,
        hints: &DecodeHints,
    ) -> DecodeResult<UpcEanResult> {
        let tolerances = hints.tolerances();
        let mut text = String::with_capacity(13);
        let mut state = initial;
        loop {
            state = match state {
                DecodeState::Done(result) => {
                    tracing::debug!(
                        format = %result.format,
                        text = %result.text,
                        begin = result.span.begin,
                        end = result.span.end,
                        "row decoded"
                    );
                    return Ok(result);
                }
                current => {
                    let name = current.name();
                    self.step(row, current, &mut text, &tolerances)
                        .inspect_err(|err| {
                            tracing::trace!(state = name, error = %err, "row decode failed");
                        })?
                }
            };
        }
    }

    fn step(
        &self,
        row: &RowSignal,
        state: DecodeState,
        text: &mut String,
        tolerances: &Tolerances,
    ) -> DecodeResult<DecodeState> {
        match state {
            DecodeState::SearchStart => {
                let start = find_start_guard_pattern(row, tolerances)?;
                Ok(DecodeState::DecodeMiddle { start })
            }
            DecodeState::DecodeMiddle { start } => {
                let middle_end = self.format.decode_middle(row, start, text, tolerances)?;
                Ok(DecodeState::SearchEnd { start, middle_end })
            }
            DecodeState::SearchEnd { start, middle_end } => {
                let guard = self.format.end_guard();
                let end = find_guard_pattern(row, middle_end, guard.white_first, guard.pattern, tolerances)
                    .map_err(|_| DecodeError::NotFound("end guard"))?;
                check_trailing_quiet_zone(row, end)?;
                Ok(DecodeState::ValidateChecksum { start, end })
            }
            DecodeState::ValidateChecksum { start, end } => {
                check_standard_checksum(&self.format.checksum_input(text)?)?;
                self.format.validate(text)?;
                Ok(DecodeState::Done(UpcEanResult {
                    text: std::mem::take(text),
                    span: GuardSpan::new(start.begin, end.end),
                    start_guard: start,
                    end_guard: end,
                    format: self.format.expected_format(),
                }))
            }
            DecodeState::Done(result) => Ok(DecodeState::Done(result)),
        }
    }
}

/// White margin after the end guard, as wide as the guard and inside the row
fn check_trailing_quiet_zone(row: &RowSignal, end: GuardSpan) -> DecodeResult<()> {
    let quiet_end = end.end + end.width();
    if quiet_end >= row.size() || !row.is_range(end.end, quiet_end, false) {
        return Err(DecodeError::NotFound("no quiet zone after end guard"));
    }
    Ok(())
}
