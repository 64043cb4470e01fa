// ============================================================================
// Input Sanitization
// Canonical decimal string to validated integer digits and fraction digits
// ============================================================================

use crate::numeric::{BahtResult, BahtTextError, DigitSequence};

/// An amount split into parts the formatter accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedAmount {
    /// Integer part with leading zeros removed
    pub integer: DigitSequence,
    /// Fractional digits, possibly empty
    pub fraction: String,
    /// A leading minus sign was dropped
    pub sign_discarded: bool,
}

/// Normalize a decimal amount string.
///
/// Whitespace, `_` and `,` are removed anywhere, one leading `+`/`-` is
/// dropped, `.5` reads as `0.5` and `5.` as `5`.
///
/// # Errors
/// `InvalidInput` for empty input, more than one decimal point or any other
/// non-digit character.
///
/// # Example
/// ```
/// use thai_baht_text::domain::sanitize;
///
/// let amount = sanitize(" 1,234_567.89 ").unwrap();
/// assert_eq!(amount.integer.to_string(), "1234567");
/// assert_eq!(amount.fraction, "89");
/// ```
pub fn sanitize(raw: &str) -> BahtResult<SanitizedAmount> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != ',')
        .collect();

    let (sign_discarded, unsigned) = match cleaned.as_bytes().first() {
        Some(b'-') => (true, &cleaned[1..]),
        Some(b'+') => (false, &cleaned[1..]),
        _ => (false, cleaned.as_str()),
    };

    if unsigned.is_empty() {
        return Err(BahtTextError::invalid_input(format!("no digits in {raw:?}")));
    }
    if unsigned.matches('.').count() > 1 {
        return Err(BahtTextError::invalid_input(format!(
            "multiple decimal points in {raw:?}"
        )));
    }

    let (integer_str, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if integer_str.is_empty() && fraction.is_empty() {
        return Err(BahtTextError::invalid_input(format!("no digits in {raw:?}")));
    }
    if let Some(bad) = unsigned.chars().find(|c| !c.is_ascii_digit() && *c != '.') {
        return Err(BahtTextError::invalid_input(format!(
            "unexpected character {bad:?} in {raw:?}"
        )));
    }

    let integer = if integer_str.is_empty() {
        DigitSequence::zero()
    } else {
        integer_str.parse::<DigitSequence>()?.trimmed()
    };

    Ok(SanitizedAmount {
        integer,
        fraction: fraction.to_owned(),
        sign_discarded,
    })
}

/// Reject integer parts longer than `max_digits`.
///
/// Expects leading zeros to be trimmed already, as [`sanitize`] does.
pub fn check_bounds(integer: &DigitSequence, max_digits: usize) -> BahtResult<()> {
    if integer.len() > max_digits {
        return Err(BahtTextError::exceeds_max_value(integer.len(), max_digits));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ErrorKind;

    fn parts(raw: &str) -> (String, String) {
        let amount = sanitize(raw).unwrap();
        (amount.integer.to_string(), amount.fraction)
    }

    fn kind(raw: &str) -> ErrorKind {
        sanitize(raw).unwrap_err().kind()
    }

    #[test]
    fn test_clean_input() {
        assert_eq!(parts("123.45"), ("123".into(), "45".into()));
        assert_eq!(parts("42"), ("42".into(), "".into()));
    }

    #[test]
    fn test_separators_and_whitespace() {
        assert_eq!(parts("  123.45  "), ("123".into(), "45".into()));
        assert_eq!(parts("1,234,567.89"), ("1234567".into(), "89".into()));
        assert_eq!(parts("1_000_000.50"), ("1000000".into(), "50".into()));
        assert_eq!(parts("  1,234_567.89  "), ("1234567".into(), "89".into()));
        assert_eq!(parts("1 000\t000"), ("1000000".into(), "".into()));
    }

    #[test]
    fn test_decimal_point_normalization() {
        assert_eq!(parts(".5"), ("0".into(), "5".into()));
        assert_eq!(parts("5."), ("5".into(), "".into()));
        assert_eq!(parts("0.995"), ("0".into(), "995".into()));
    }

    #[test]
    fn test_leading_zeros_trimmed() {
        assert_eq!(parts("000123"), ("123".into(), "".into()));
        assert_eq!(parts("000"), ("0".into(), "".into()));
    }

    #[test]
    fn test_sign_stripped() {
        let amount = sanitize("-12.50").unwrap();
        assert_eq!(amount.integer.to_string(), "12");
        assert!(amount.sign_discarded);

        let amount = sanitize("+12").unwrap();
        assert!(!amount.sign_discarded);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(kind(""), ErrorKind::InvalidInput);
        assert_eq!(kind("   "), ErrorKind::InvalidInput);
        assert_eq!(kind("-"), ErrorKind::InvalidInput);
        assert_eq!(kind("."), ErrorKind::InvalidInput);
        assert_eq!(kind("1.2.3"), ErrorKind::InvalidInput);
        assert_eq!(kind("12a"), ErrorKind::InvalidInput);
        assert_eq!(kind("--1"), ErrorKind::InvalidInput);
        assert_eq!(kind("1e5"), ErrorKind::InvalidInput);
        assert_eq!(kind("฿100"), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_bounds() {
        let ok: DigitSequence = "9999999999999999999".parse().unwrap();
        assert!(check_bounds(&ok, 19).is_ok());

        let too_long: DigitSequence = "10000000000000000000".parse().unwrap();
        let err = check_bounds(&too_long, 19).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExceedsMaxValue);

        assert!(check_bounds(&ok, 12).is_err());
    }

    #[test]
    fn test_leading_zeros_do_not_count_toward_bound() {
        let amount = sanitize("00000000000000000000001").unwrap();
        assert!(check_bounds(&amount.integer, 19).is_ok());
    }
}
