// ============================================================================
// Amount Formatter
// Rounds the fraction, applies any carry and assembles the baht text
// ============================================================================

use super::group::write_group;
use super::grouping::write_integer;
use super::lexicon::{digit_word, BAHT, EXACT, ONES_ED, SATANG, TWENTY_YI, UNIT_WORDS, ZERO};
use crate::domain::ConversionResult;
use crate::numeric::{
    round_satang, BahtResult, BahtTextError, DigitSequence, OverflowPolicy, RoundingMode, Satang,
};
use std::borrow::Cow;

/// Convert a validated integer part and fractional digits into baht text.
///
/// Output form: `<integer|ศูนย์>บาท` followed by `ถ้วน` when satang is zero,
/// otherwise by `<satang>สตางค์`. A rounding carry increments the integer
/// part digit by digit before it is rendered.
///
/// `fraction` must hold ASCII digits only. A violation trips a debug assertion
/// and is reported as `InvalidInput` in release builds.
///
/// # Example
/// ```
/// use thai_baht_text::engine::convert;
/// use thai_baht_text::numeric::{OverflowPolicy, RoundingMode};
///
/// let integer = "100".parse().unwrap();
/// let result = convert(&integer, "995", RoundingMode::Nearest, OverflowPolicy::Carry).unwrap();
/// assert_eq!(result.text, "หนึ่งร้อยเอ็ดบาทถ้วน");
/// ```
pub fn convert(
    integer: &DigitSequence,
    fraction: &str,
    mode: RoundingMode,
    overflow: OverflowPolicy,
) -> BahtResult<ConversionResult> {
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        debug_assert!(false, "fraction {fraction:?} was not sanitized");
        return Err(BahtTextError::invalid_input(format!(
            "fraction {fraction:?} contains non-digit characters"
        )));
    }

    let rounded = round_satang(fraction, mode, overflow);

    let integer = if rounded.carry {
        tracing::debug!(%integer, fraction, "satang carried into baht");
        Cow::Owned(integer.incremented())
    } else {
        Cow::Borrowed(integer)
    };

    let mut text = String::with_capacity((integer.len() + 4) * 18);
    write_integer(&mut text, &integer);
    if text.is_empty() {
        text.push_str(ZERO);
    }
    text.push_str(BAHT);

    if rounded.satang.is_zero() {
        text.push_str(EXACT);
    } else {
        write_satang(&mut text, rounded.satang);
        text.push_str(SATANG);
    }

    Ok(ConversionResult {
        text,
        clamped: rounded.clamped,
    })
}

/// Append the Thai text of a non-zero satang value.
///
/// Satang is read as a tens/ones pair, so a lone 1 stays "หนึ่ง" where the
/// group rules would say "เอ็ด".
fn write_satang(out: &mut String, satang: Satang) {
    let [tens, ones] = satang.digits();
    match (tens, ones) {
        (0, 1) => out.push_str(digit_word(1)),
        (1, 1) => {
            out.push_str(UNIT_WORDS[1]);
            out.push_str(ONES_ED);
        }
        (1, 2..=9) => {
            out.push_str(UNIT_WORDS[1]);
            out.push_str(digit_word(ones));
        }
        (2..=9, 1) => {
            out.push_str(if tens == 2 { TWENTY_YI } else { digit_word(tens) });
            out.push_str(UNIT_WORDS[1]);
            out.push_str(ONES_ED);
        }
        _ => write_group(out, &[tens, ones]),
    }
}
