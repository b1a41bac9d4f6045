//! UPC-E: six L/G digits whose parity carries the number system and check digit

use crate::decoder::checksum::expand_upce_to_upca;
use crate::decoder::config::Tolerances;
use crate::decoder::digit::{Parity, decode_digit};
use crate::decoder::tables::{L_AND_G_PATTERNS, NUMSYS_AND_CHECK_DIGIT_PATTERNS};
use crate::error::{DecodeError, DecodeResult};
use crate::models::{GuardSpan, RowSignal};

/// Decode the six digits and frame them with number system and check digit
pub fn decode_middle(
    row: &RowSignal,
    start_guard: GuardSpan,
    out: &mut String,
    tolerances: &Tolerances,
) -> DecodeResult<usize> {
    let mut counters = [0u32; 4];
    let mut offset = start_guard.end;
    let number_system_at = out.len();

    let mut lg_pattern = 0u8;
    for x in 0..6 {
        let m = decode_digit(row, offset, &L_AND_G_PATTERNS, &mut counters, tolerances)?;
        out.push(m.as_char());
        offset = m.next_offset;
        if m.parity == Parity::Even {
            lg_pattern |= 1 << (5 - x);
        }
    }

    let (number_system, check_digit) = number_system_and_check_digit(lg_pattern)?;
    out.insert(number_system_at, char::from(b'0' + number_system));
    out.push(char::from(b'0' + check_digit));

    Ok(offset)
}

/// Number system (0 or 1) and check digit implied by the six digit parities
pub fn number_system_and_check_digit(lg_pattern: u8) -> DecodeResult<(u8, u8)> {
    for (number_system, row) in NUMSYS_AND_CHECK_DIGIT_PATTERNS.iter().enumerate() {
        if let Some(check) = row.iter().position(|&p| p == lg_pattern) {
            return Ok((number_system as u8, check as u8));
        }
    }
    Err(DecodeError::NotFound("no number system for parity pattern"))
}

/// UPC-E check digits are defined over the expanded UPC-A form
pub fn checksum_input(text: &str) -> DecodeResult<String> {
    expand_upce_to_upca(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::guard::find_start_guard_pattern;
    use crate::models::BarcodeFormat;
    use crate::tools::synth::synth_row;

    #[test]
    fn test_parity_lookup() {
        assert_eq!(number_system_and_check_digit(0x38).unwrap(), (0, 0));
        assert_eq!(number_system_and_check_digit(0x1A).unwrap(), (1, 9));
        assert!(number_system_and_check_digit(0x00).is_err());
    }

    #[test]
    fn test_decode_middle_recovers_number_system_and_check() {
        let row = synth_row(BarcodeFormat::UpcE, "01234565", 2).unwrap();
        let start = find_start_guard_pattern(&row, &Tolerances::DEFAULT).unwrap();
        let mut out = String::new();
        let end = decode_middle(&row, start, &mut out, &Tolerances::DEFAULT).unwrap();
        assert_eq!(out, "01234565");
        assert_eq!(end, start.end + 6 * 7 * 2);
    }
}
