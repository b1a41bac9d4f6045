// UPC/EAN digit encodings as module widths (space, bar, space, bar for the left
// half; the right half uses the same widths with colours swapped).

/// "Odd" or "L" encodings of digits 0-9
pub const L_PATTERNS: [[u32; 4]; 10] = [
    [3, 2, 1, 1], // 0
    [2, 2, 2, 1], // 1
    [2, 1, 2, 2], // 2
    [1, 4, 1, 1], // 3
    [1, 1, 3, 2], // 4
    [1, 2, 3, 1], // 5
    [1, 1, 1, 4], // 6
    [1, 3, 1, 2], // 7
    [1, 2, 1, 3], // 8
    [3, 1, 1, 2], // 9
];

/// L encodings followed by the "even" or "G" encodings (index 10 + digit)
///
/// A G pattern is its L pattern read backwards.
pub const L_AND_G_PATTERNS: [[u32; 4]; 20] = [
    [3, 2, 1, 1],
    [2, 2, 2, 1],
    [2, 1, 2, 2],
    [1, 4, 1, 1],
    [1, 1, 3, 2],
    [1, 2, 3, 1],
    [1, 1, 1, 4],
    [1, 3, 1, 2],
    [1, 2, 1, 3],
    [3, 1, 1, 2],
    [1, 1, 2, 3],
    [1, 2, 2, 2],
    [2, 2, 1, 2],
    [1, 1, 4, 1],
    [2, 3, 1, 1],
    [1, 3, 2, 1],
    [4, 1, 1, 1],
    [2, 1, 3, 1],
    [3, 1, 2, 1],
    [2, 1, 1, 3],
];

/// EAN-13 leading digit by parity of the six left digits (bit 5 = first digit, 1 = G)
pub const FIRST_DIGIT_ENCODINGS: [u8; 10] = [0x00, 0x0B, 0x0D, 0x0E, 0x13, 0x19, 0x1C, 0x15, 0x16, 0x1A];

/// UPC-E parity of the six digits, indexed by number system (0/1) then check digit
pub const NUMSYS_AND_CHECK_DIGIT_PATTERNS: [[u8; 10]; 2] = [
    [0x38, 0x34, 0x32, 0x31, 0x2C, 0x26, 0x23, 0x2A, 0x29, 0x25],
    [0x07, 0x0B, 0x0D, 0x0E, 0x13, 0x19, 0x1C, 0x15, 0x16, 0x1A],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_is_seven_modules() {
        for p in L_AND_G_PATTERNS {
            assert_eq!(p.iter().sum::<u32>(), 7);
        }
    }

    #[test]
    fn test_g_is_reversed_l() {
        for d in 0..10 {
            let mut l = L_PATTERNS[d];
            l.reverse();
            assert_eq!(L_AND_G_PATTERNS[10 + d], l);
            assert_eq!(L_AND_G_PATTERNS[d], L_PATTERNS[d]);
        }
    }

    #[test]
    fn test_parity_tables_are_distinct() {
        for (i, a) in FIRST_DIGIT_ENCODINGS.iter().enumerate() {
            for b in &FIRST_DIGIT_ENCODINGS[i + 1..] {
                assert_ne!(a, b);
            }
        }
        let all: Vec<u8> = NUMSYS_AND_CHECK_DIGIT_PATTERNS.iter().flatten().copied().collect();
        for (i, a) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(a));
        }
    }
}
