// ============================================================================
// Six-Digit Group Converter
// Thai text for up to six digits, without any million suffix
// ============================================================================

use super::lexicon::{digit_word, unit_word, ONES_ED, TWENTY_YI};
use crate::numeric::GROUP_WIDTH;
use arrayvec::ArrayVec;

/// Append the Thai text of a group of at most six digits to `out`.
///
/// Zeros are positional and produce no words; an all-zero group appends
/// nothing. Digits are expected in 0-9 (checked in debug builds).
pub fn write_group(out: &mut String, digits: &[u8]) {
    debug_assert!(digits.len() <= GROUP_WIDTH, "group wider than six digits");
    debug_assert!(digits.iter().all(|&d| d <= 9), "digit out of range");

    // At most a digit word and a unit word per position
    let mut tokens: ArrayVec<&'static str, { GROUP_WIDTH * 2 }> = ArrayVec::new();
    let count = digits.len();

    for (i, &digit) in digits.iter().enumerate() {
        if digit == 0 {
            continue;
        }
        let position = count - i - 1;
        match (position, digit) {
            (0, 1) if count > 1 => tokens.push(ONES_ED),
            (0, _) => tokens.push(digit_word(digit)),
            (1, 1) => tokens.push(unit_word(1)),
            (1, 2) => {
                tokens.push(TWENTY_YI);
                tokens.push(unit_word(1));
            }
            _ => {
                tokens.push(digit_word(digit));
                tokens.push(unit_word(position));
            }
        }
    }

    for token in tokens {
        out.push_str(token);
    }
}

/// Thai text of a group of at most six digits.
pub fn convert_group(digits: &[u8]) -> String {
    let mut out = String::with_capacity(digits.len() * 18);
    write_group(&mut out, digits);
    out
}
