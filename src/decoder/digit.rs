/// Per-digit correlation against a table of 4-run module templates
use crate::decoder::config::Tolerances;
use crate::detector::guard::pattern_match_variance;
use crate::error::{DecodeError, DecodeResult};
use crate::models::RowSignal;

/// Which of the two alternate encodings a digit used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// L set (odd number of dark modules)
    Odd,
    /// G set (even number of dark modules)
    Even,
}

/// One decoded digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitMatch {
    /// Digit value 0-9
    pub digit: u8,
    /// Encoding set the digit came from; templates at index 10+ are `Even`
    pub parity: Parity,
    /// First pixel after the consumed runs
    pub next_offset: usize,
}

impl DigitMatch {
    /// ASCII character of the digit
    pub fn as_char(&self) -> char {
        char::from(b'0' + self.digit)
    }
}

/// Count the next `counters.len()` runs starting at `start`
///
/// The first run takes the colour of the pixel at `start`. The last run may be cut
/// off by the end of the row; anything shorter is `NotFound`.
pub fn record_pattern(row: &RowSignal, start: usize, counters: &mut [u32]) -> DecodeResult<()> {
    counters.fill(0);
    let num_counters = counters.len();
    let end = row.size();
    if start >= end || num_counters == 0 {
        return Err(DecodeError::NotFound("no runs left"));
    }

    let mut is_white = !row.get(start);
    let mut counter_position = 0usize;
    let mut i = start;
    while i < end {
        if row.get(i) != is_white {
            counters[counter_position] += 1;
        } else {
            counter_position += 1;
            if counter_position == num_counters {
                break;
            }
            counters[counter_position] = 1;
            is_white = !is_white;
        }
        i += 1;
    }

    let complete = counter_position == num_counters
        || (counter_position == num_counters - 1 && i == end);
    if complete {
        Ok(())
    } else {
        Err(DecodeError::NotFound("row ended inside a digit"))
    }
}

/// Decode one digit from the 4 runs at `offset`
///
/// The best template must be within `max_avg_variance` and lead the runner-up by
/// at least `min_digit_margin`; ties and near-ties are `NotFound`.
pub fn decode_digit(
    row: &RowSignal,
    offset: usize,
    templates: &[[u32; 4]],
    counters: &mut [u32; 4],
    tolerances: &Tolerances,
) -> DecodeResult<DigitMatch> {
    record_pattern(row, offset, counters)?;

    let mut best: Option<(usize, f32)> = None;
    let mut second_variance = f32::INFINITY;
    for (i, template) in templates.iter().enumerate() {
        let variance = pattern_match_variance(counters, template, tolerances.max_individual_variance);
        match best {
            Some((_, best_variance)) if variance >= best_variance => {
                second_variance = second_variance.min(variance);
            }
            Some((_, best_variance)) => {
                second_variance = best_variance;
                best = Some((i, variance));
            }
            None => best = Some((i, variance)),
        }
    }

    let Some((index, variance)) = best else {
        return Err(DecodeError::NotFound("empty template set"));
    };
    if variance >= tolerances.max_avg_variance {
        return Err(DecodeError::NotFound("no digit template within tolerance"));
    }
    if second_variance - variance < tolerances.min_digit_margin {
        tracing::trace!(offset, index, variance, second_variance, "ambiguous digit");
        return Err(DecodeError::NotFound("ambiguous digit"));
    }

    let width: u32 = counters.iter().sum();
    Ok(DigitMatch {
        digit: (index % 10) as u8,
        parity: if index >= 10 { Parity::Even } else { Parity::Odd },
        next_offset: offset + width as usize,
    })
}
