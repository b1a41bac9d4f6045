//! EAN-13 middle section: 6 L/G digits, middle guard, 6 L digits

use crate::decoder::config::Tolerances;
use crate::decoder::digit::{Parity, decode_digit};
use crate::decoder::tables::{FIRST_DIGIT_ENCODINGS, L_AND_G_PATTERNS, L_PATTERNS};
use crate::detector::guard::{MIDDLE_PATTERN, find_guard_pattern};
use crate::error::{DecodeError, DecodeResult};
use crate::models::{GuardSpan, RowSignal};

/// Decode 12 digits (first digit from parity) and return the offset past the right half
pub fn decode_middle(
    row: &RowSignal,
    start_guard: GuardSpan,
    out: &mut String,
    tolerances: &Tolerances,
) -> DecodeResult<usize> {
    let mut counters = [0u32; 4];
    let mut offset = start_guard.end;
    let first_digit_at = out.len();

    let mut lg_pattern = 0u8;
    for x in 0..6 {
        let m = decode_digit(row, offset, &L_AND_G_PATTERNS, &mut counters, tolerances)?;
        out.push(m.as_char());
        offset = m.next_offset;
        if m.parity == Parity::Even {
            lg_pattern |= 1 << (5 - x);
        }
    }

    let first = first_digit(lg_pattern)?;
    out.insert(first_digit_at, char::from(b'0' + first));

    let middle = find_guard_pattern(row, offset, true, &MIDDLE_PATTERN, tolerances)?;
    offset = middle.end;

    for _ in 0..6 {
        let m = decode_digit(row, offset, &L_PATTERNS, &mut counters, tolerances)?;
        out.push(m.as_char());
        offset = m.next_offset;
    }

    Ok(offset)
}

/// Leading digit implied by the parity of the six left-half digits
pub fn first_digit(lg_pattern: u8) -> DecodeResult<u8> {
    FIRST_DIGIT_ENCODINGS
        .iter()
        .position(|&p| p == lg_pattern)
        .map(|d| d as u8)
        .ok_or(DecodeError::NotFound("no leading digit for parity pattern"))
}
