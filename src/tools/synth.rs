//! Synthetic UPC/EAN rows
//!
//! Renders a digit string into ideal module widths and then into a [`RowSignal`].
//! The check digit is encoded as given and never corrected, so rows with a bad
//! checksum can be produced on purpose.

use crate::decoder::tables::{FIRST_DIGIT_ENCODINGS, L_PATTERNS, NUMSYS_AND_CHECK_DIGIT_PATTERNS};
use crate::detector::guard::{MIDDLE_PATTERN, START_END_PATTERN, UPCE_END_PATTERN};
use crate::error::{DecodeError, DecodeResult};
use crate::models::{BarcodeFormat, RowSignal};

/// Quiet zone on each side, in modules
pub const QUIET_ZONE_MODULES: usize = 9;

fn push_pattern(modules: &mut Vec<usize>, pattern: &[u32]) {
    modules.extend(pattern.iter().map(|&m| m as usize));
}

fn push_digit(modules: &mut Vec<usize>, digit: u8, even: bool) {
    let pattern = L_PATTERNS[usize::from(digit)];
    if even {
        modules.extend(pattern.iter().rev().map(|&m| m as usize));
    } else {
        push_pattern(modules, &pattern);
    }
}

fn parse_digits(text: &str, format: BarcodeFormat) -> DecodeResult<Vec<u8>> {
    if text.len() != format.digit_count() {
        return Err(DecodeError::Format("wrong digit count"));
    }
    text.bytes()
        .map(|b| {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(DecodeError::Format("non-digit character"))
            }
        })
        .collect()
}

/// Module widths of a complete symbol, quiet zones included, starting with white
pub fn encode_modules(format: BarcodeFormat, text: &str) -> DecodeResult<Vec<usize>> {
    let digits = parse_digits(text, format)?;
    let mut modules = Vec::with_capacity(80);
    modules.push(QUIET_ZONE_MODULES);
    push_pattern(&mut modules, &START_END_PATTERN);

    match format {
        BarcodeFormat::Ean13 | BarcodeFormat::UpcA => {
            let ean: Vec<u8> = if format == BarcodeFormat::UpcA {
                std::iter::once(0).chain(digits).collect()
            } else {
                digits
            };
            let parity = FIRST_DIGIT_ENCODINGS[usize::from(ean[0])];
            for (x, &d) in ean[1..7].iter().enumerate() {
                push_digit(&mut modules, d, parity & (1 << (5 - x)) != 0);
            }
            push_pattern(&mut modules, &MIDDLE_PATTERN);
            for &d in &ean[7..] {
                push_digit(&mut modules, d, false);
            }
            push_pattern(&mut modules, &START_END_PATTERN);
        }
        BarcodeFormat::Ean8 => {
            for &d in &digits[..4] {
                push_digit(&mut modules, d, false);
            }
            push_pattern(&mut modules, &MIDDLE_PATTERN);
            for &d in &digits[4..] {
                push_digit(&mut modules, d, false);
            }
            push_pattern(&mut modules, &START_END_PATTERN);
        }
        BarcodeFormat::UpcE => {
            let number_system = usize::from(digits[0]);
            if number_system > 1 {
                return Err(DecodeError::Format("UPC-E number system must be 0 or 1"));
            }
            let parity = NUMSYS_AND_CHECK_DIGIT_PATTERNS[number_system][usize::from(digits[7])];
            for (x, &d) in digits[1..7].iter().enumerate() {
                push_digit(&mut modules, d, parity & (1 << (5 - x)) != 0);
            }
            push_pattern(&mut modules, &UPCE_END_PATTERN);
        }
    }

    modules.push(QUIET_ZONE_MODULES);
    Ok(modules)
}

/// Scale module widths by `unit` pixels; the first run is white
pub fn render_row(modules: &[usize], unit: usize) -> RowSignal {
    let runs: Vec<usize> = modules.iter().map(|&m| m * unit).collect();
    RowSignal::from_runs(&runs, false)
}

/// Ideal row for `text` at `unit` pixels per module
pub fn synth_row(format: BarcodeFormat, text: &str, unit: usize) -> DecodeResult<RowSignal> {
    Ok(render_row(&encode_modules(format, text)?, unit))
}

/// Luminance pixels (black 0, white 255) of an ideal row
pub fn synth_luma_row(format: BarcodeFormat, text: &str, unit: usize) -> DecodeResult<Vec<u8>> {
    let row = synth_row(format, text, unit)?;
    Ok((0..row.size()).map(|x| if row.get(x) { 0 } else { 255 }).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_widths() {
        let total = |f, t| encode_modules(f, t).unwrap().iter().sum::<usize>() - 2 * QUIET_ZONE_MODULES;
        assert_eq!(total(BarcodeFormat::Ean13, "5901234123457"), 95);
        assert_eq!(total(BarcodeFormat::UpcA, "036000291452"), 95);
        assert_eq!(total(BarcodeFormat::Ean8, "96385074"), 67);
        assert_eq!(total(BarcodeFormat::UpcE, "01234565"), 51);
    }

    #[test]
    fn test_run_counts() {
        // quiet + guard + 12 digits + middle + guard + quiet
        assert_eq!(encode_modules(BarcodeFormat::Ean13, "5901234123457").unwrap().len(), 1 + 3 + 48 + 5 + 3 + 1);
        assert_eq!(encode_modules(BarcodeFormat::UpcE, "01234565").unwrap().len(), 1 + 3 + 24 + 6 + 1);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(encode_modules(BarcodeFormat::Ean8, "1234").is_err());
        assert!(encode_modules(BarcodeFormat::Ean8, "9638507X").is_err());
        assert!(encode_modules(BarcodeFormat::UpcE, "21234565").is_err());
    }

    #[test]
    fn test_luma_row_colours() {
        let luma = synth_luma_row(BarcodeFormat::Ean8, "96385074", 1).unwrap();
        assert_eq!(luma.len(), 67 + 2 * QUIET_ZONE_MODULES);
        assert_eq!(luma[QUIET_ZONE_MODULES - 1], 255);
        assert_eq!(luma[QUIET_ZONE_MODULES], 0);
    }
}
