// ============================================================================
// Digit Sequence
// Arbitrary-length decimal integer stored as digits, most significant first
// ============================================================================

use super::errors::{BahtResult, BahtTextError};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Width of a Thai numeral group; positions beyond it recurse through "ล้าน".
pub const GROUP_WIDTH: usize = 6;

/// Integer part of an amount as a non-empty sequence of digits 0-9.
///
/// Stored most-significant-first. The sequence is never mutated once parsed;
/// arithmetic returns a new sequence. Twenty inline digits cover the largest
/// supported amount plus one digit of carry growth without a heap allocation.
///
/// # Example
/// ```
/// use thai_baht_text::numeric::DigitSequence;
///
/// let seq: DigitSequence = "999".parse().unwrap();
/// assert_eq!(seq.incremented().to_string(), "1000");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DigitSequence(SmallVec<[u8; 20]>);

impl DigitSequence {
    /// Build from digit values.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `digits` is empty or holds a value above 9.
    pub fn from_digits(digits: &[u8]) -> BahtResult<Self> {
        if digits.is_empty() {
            return Err(BahtTextError::invalid_input("integer part has no digits"));
        }
        if let Some(bad) = digits.iter().find(|&&d| d > 9) {
            return Err(BahtTextError::invalid_input(format!(
                "digit value {bad} is out of range 0-9"
            )));
        }
        Ok(Self(SmallVec::from_slice(digits)))
    }

    /// The single digit zero.
    pub fn zero() -> Self {
        Self(SmallVec::from_slice(&[0]))
    }

    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether every digit is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&d| d == 0)
    }

    /// Return the sequence representing this value plus one.
    ///
    /// Works digit by digit from the right, so the length is unbounded and an
    /// all-nines sequence grows by one digit.
    pub fn incremented(&self) -> Self {
        let mut digits = self.0.clone();
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                return Self(digits);
            }
        }
        digits.insert(0, 1);
        Self(digits)
    }

    /// Copy with leading zeros removed, keeping at least one digit.
    pub fn trimmed(&self) -> Self {
        let first = self
            .0
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(self.0.len() - 1);
        Self(SmallVec::from_slice(&self.0[first..]))
    }

    /// Split into six-digit groups, rightmost group first.
    ///
    /// The leftmost group may be shorter than [`GROUP_WIDTH`].
    pub fn groups(&self) -> impl DoubleEndedIterator<Item = DigitGroup<'_>> + ExactSizeIterator {
        self.0
            .rchunks(GROUP_WIDTH)
            .enumerate()
            .map(|(index, digits)| DigitGroup { digits, index })
    }
}

// ============================================================================
// Digit Group
// ============================================================================

/// A window of at most six digits cut from a [`DigitSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGroup<'a> {
    digits: &'a [u8],
    index: usize,
}

impl<'a> DigitGroup<'a> {
    /// Digits of the group, most significant first, zeros preserved.
    #[inline]
    pub fn digits(&self) -> &'a [u8] {
        self.digits
    }

    /// Distance from the right: 0 for the rightmost group.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitSequence({self})")
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for DigitSequence {
    type Err = BahtTextError;

    /// Parse ASCII digits. No sign, separators or whitespace are accepted;
    /// those are stripped by sanitization before this point.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(BahtTextError::invalid_input("integer part has no digits"));
        }
        let mut digits = SmallVec::with_capacity(s.len());
        for c in s.chars() {
            let digit = c.to_digit(10).ok_or_else(|| {
                BahtTextError::invalid_input(format!("unexpected character {c:?}"))
            })?;
            digits.push(digit as u8);
        }
        Ok(Self(digits))
    }
}
