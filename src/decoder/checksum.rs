/// UPC/EAN weighted mod-10 check digit validation
use crate::error::{DecodeError, DecodeResult};

/// Verify the standard UPC/EAN check digit of `digits`
///
/// Walking from the right, the check digit is weighted 1, the digit before it 3,
/// and so on alternately; the weighted sum must be a multiple of 10.
pub fn check_standard_checksum(digits: &str) -> DecodeResult<()> {
    if digits.is_empty() {
        return Err(DecodeError::Format("empty digit string"));
    }

    let mut sum = 0u32;
    for (i, b) in digits.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return Err(DecodeError::Format("non-digit character"));
        }
        let weight = if i % 2 == 0 { 1 } else { 3 };
        sum += u32::from(b - b'0') * weight;
    }

    if sum % 10 == 0 {
        Ok(())
    } else {
        Err(DecodeError::Checksum("weighted sum is not a multiple of 10"))
    }
}

/// Check digit that completes `payload` (digits without their check digit)
pub fn compute_check_digit(payload: &str) -> DecodeResult<u8> {
    let mut sum = 0u32;
    for (i, b) in payload.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return Err(DecodeError::Format("non-digit character"));
        }
        let weight = if i % 2 == 0 { 3 } else { 1 };
        sum += u32::from(b - b'0') * weight;
    }
    Ok(((10 - sum % 10) % 10) as u8)
}

/// Expand a zero-suppressed UPC-E string into the equivalent UPC-A digits
///
/// Accepts 7 digits (number system + 6) or 8 (with the check digit, which is
/// carried over unchanged).
pub fn expand_upce_to_upca(upce: &str) -> DecodeResult<String> {
    if !(7..=8).contains(&upce.len()) || !upce.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::Format("UPC-E needs 7 or 8 digits"));
    }

    let body = &upce[1..7];
    let last = body.as_bytes()[5];
    let mut out = String::with_capacity(12);
    out.push_str(&upce[..1]);
    match last {
        b'0' | b'1' | b'2' => {
            out.push_str(&body[..2]);
            out.push(char::from(last));
            out.push_str("0000");
            out.push_str(&body[2..5]);
        }
        b'3' => {
            out.push_str(&body[..3]);
            out.push_str("00000");
            out.push_str(&body[3..5]);
        }
        b'4' => {
            out.push_str(&body[..4]);
            out.push_str("00000");
            out.push_str(&body[4..5]);
        }
        _ => {
            out.push_str(&body[..5]);
            out.push_str("0000");
            out.push(char::from(last));
        }
    }
    if upce.len() == 8 {
        out.push_str(&upce[7..]);
    }
    Ok(out)
}
