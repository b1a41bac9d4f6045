/// Guard pattern search using tolerant module-ratio correlation
use crate::decoder::config::Tolerances;
use crate::error::{DecodeError, DecodeResult};
use crate::models::{GuardSpan, RowSignal};

/// Start and end guard: bar, space, bar
pub const START_END_PATTERN: [u32; 3] = [1, 1, 1];

/// Middle guard: space, bar, space, bar, space
pub const MIDDLE_PATTERN: [u32; 5] = [1, 1, 1, 1, 1];

/// UPC-E end guard: middle guard followed by one more bar
pub const UPCE_END_PATTERN: [u32; 6] = [1, 1, 1, 1, 1, 1];

/// Average deviation of `counters` from `pattern`, as a fraction of total width
///
/// Observed widths are scaled by the unit module width `sum(counters) / sum(pattern)`.
/// Returns `f32::INFINITY` when the window is narrower than one pixel per module
/// or when any single run deviates by more than `max_individual_variance` modules.
pub fn pattern_match_variance(counters: &[u32], pattern: &[u32], max_individual_variance: f32) -> f32 {
    debug_assert_eq!(counters.len(), pattern.len());
    let total: u32 = counters.iter().sum();
    let pattern_length: u32 = pattern.iter().sum();
    if total < pattern_length || pattern_length == 0 {
        // Less than one pixel per module: too small to judge
        return f32::INFINITY;
    }

    let unit = total as f32 / pattern_length as f32;
    let max_individual = max_individual_variance * unit;

    let mut total_variance = 0.0f32;
    for (&counter, &expected) in counters.iter().zip(pattern) {
        let variance = (counter as f32 - expected as f32 * unit).abs();
        if variance > max_individual {
            return f32::INFINITY;
        }
        total_variance += variance;
    }
    total_variance / total as f32
}

/// Find the next span at or after `offset` whose runs match `pattern`
///
/// `white_first` says whether the first run of the pattern is a space. The window
/// slides by one bar/space pair on a miss so run colours stay aligned.
pub fn find_guard_pattern(
    row: &RowSignal,
    offset: usize,
    white_first: bool,
    pattern: &[u32],
    tolerances: &Tolerances,
) -> DecodeResult<GuardSpan> {
    let len = pattern.len();
    if len < 2 {
        return Err(DecodeError::NotFound("guard pattern needs a bar and a space"));
    }

    let width = row.size();
    let start = if white_first {
        row.next_unset(offset)
    } else {
        row.next_set(offset)
    };

    let mut counters = vec![0u32; len];
    let mut counter_position = 0usize;
    let mut pattern_start = start;
    let mut is_white = white_first;

    for x in start..width {
        if row.get(x) != is_white {
            counters[counter_position] += 1;
            continue;
        }

        if counter_position == len - 1 {
            let variance =
                pattern_match_variance(&counters, pattern, tolerances.max_individual_variance);
            if variance < tolerances.max_avg_variance {
                return Ok(GuardSpan::new(pattern_start, x));
            }
            pattern_start += (counters[0] + counters[1]) as usize;
            counters.copy_within(2.., 0);
            counters[len - 2] = 0;
            counters[len - 1] = 0;
            counter_position -= 1;
        } else {
            counter_position += 1;
        }
        counters[counter_position] = 1;
        is_white = !is_white;
    }

    Err(DecodeError::NotFound("guard pattern"))
}

/// Find the start guard, requiring a white quiet zone before it
///
/// The quiet zone must be at least as wide as the matched guard itself. Candidates
/// without one are skipped and the search continues after them.
pub fn find_start_guard_pattern(row: &RowSignal, tolerances: &Tolerances) -> DecodeResult<GuardSpan> {
    let mut next_start = 0usize;
    loop {
        let span = find_guard_pattern(row, next_start, false, &START_END_PATTERN, tolerances)
            .map_err(|_| DecodeError::NotFound("start guard"))?;
        next_start = span.end;

        let has_quiet_zone = span
            .begin
            .checked_sub(span.width())
            .is_some_and(|quiet_start| row.is_range(quiet_start, span.begin, false));
        if has_quiet_zone {
            return Ok(span);
        }
        tracing::trace!(begin = span.begin, end = span.end, "start guard rejected: no quiet zone");
    }
}
