//! UPC-A: an EAN-13 symbol whose leading digit is 0, reported without it

use crate::decoder::config::Tolerances;
use crate::decoder::formats::ean13;
use crate::error::{DecodeError, DecodeResult};
use crate::models::{GuardSpan, RowSignal};

/// Decode as EAN-13 and drop the leading 0
pub fn decode_middle(
    row: &RowSignal,
    start_guard: GuardSpan,
    out: &mut String,
    tolerances: &Tolerances,
) -> DecodeResult<usize> {
    let mut ean = String::with_capacity(13);
    let offset = ean13::decode_middle(row, start_guard, &mut ean, tolerances)?;
    match ean.strip_prefix('0') {
        Some(upc) => {
            out.push_str(upc);
            Ok(offset)
        }
        None => Err(DecodeError::Format("UPC-A requires a leading 0 in EAN-13 form")),
    }
}
