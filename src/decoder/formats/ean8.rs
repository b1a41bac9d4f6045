//! EAN-8 middle section: 4 L digits, middle guard, 4 L digits

use crate::decoder::config::Tolerances;
use crate::decoder::digit::decode_digit;
use crate::decoder::tables::L_PATTERNS;
use crate::detector::guard::{MIDDLE_PATTERN, find_guard_pattern};
use crate::error::DecodeResult;
use crate::models::{GuardSpan, RowSignal};

/// Decode 8 digits; returns the offset after the last one
pub fn decode_middle(
    row: &RowSignal,
    start_guard: GuardSpan,
    out: &mut String,
    tolerances: &Tolerances,
) -> DecodeResult<usize> {
    let mut counters = [0u32; 4];
    let mut offset = start_guard.end;

    for _ in 0..4 {
        let m = decode_digit(row, offset, &L_PATTERNS, &mut counters, tolerances)?;
        out.push(m.as_char());
        offset = m.next_offset;
    }

    let middle = find_guard_pattern(row, offset, true, &MIDDLE_PATTERN, tolerances)?;
    offset = middle.end;

    for _ in 0..4 {
        let m = decode_digit(row, offset, &L_PATTERNS, &mut counters, tolerances)?;
        out.push(m.as_char());
        offset = m.next_offset;
    }

    Ok(offset)
}
