// ============================================================================
// Satang Rounding
// Reduces fractional digits to two satang digits plus a carry flag
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How digits beyond the second fractional place are folded into satang.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Round half up on the third fractional digit (default)
    #[default]
    Nearest,
    /// Truncate
    TowardZero,
    /// Round up whenever the third fractional digit is non-zero
    AwayFromZero,
}

/// What happens when rounding reaches 100 satang.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Keep the baht amount and cap satang at 99 (default)
    #[default]
    Clamp,
    /// Carry one baht into the integer part and reset satang to 00
    Carry,
}

impl OverflowPolicy {
    #[inline]
    pub fn allows_carry(self) -> bool {
        matches!(self, OverflowPolicy::Carry)
    }
}

impl From<bool> for OverflowPolicy {
    fn from(allow_overflow: bool) -> Self {
        if allow_overflow {
            OverflowPolicy::Carry
        } else {
            OverflowPolicy::Clamp
        }
    }
}

// ============================================================================
// Satang Value
// ============================================================================

/// Two-digit satang value, 0-99.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Satang(u8);

impl Satang {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(99);

    /// Create from a value; `None` above 99.
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value < 100 {
            Some(Self(value))
        } else {
            None
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Tens and ones digits.
    #[inline]
    pub const fn digits(self) -> [u8; 2] {
        [self.0 / 10, self.0 % 10]
    }
}

impl fmt::Display for Satang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Outcome of rounding a fractional-digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedSatang {
    pub satang: Satang,
    /// One baht must be added to the integer part
    pub carry: bool,
    /// Rounding reached 100 but the policy forced 99
    pub clamped: bool,
}

impl RoundedSatang {
    const fn exact(value: u8) -> Self {
        Self {
            satang: Satang(value),
            carry: false,
            clamped: false,
        }
    }
}

/// Round a string of fractional digits to satang.
///
/// Up to two digits are taken verbatim (one digit is right-padded). With more
/// digits only the third one decides; later digits are ignored.
///
/// The input must contain only ASCII digits. This is checked with a debug
/// assertion only; callers validate fractions before rounding.
pub fn round_satang(fraction: &str, mode: RoundingMode, overflow: OverflowPolicy) -> RoundedSatang {
    let digits = fraction.as_bytes();
    debug_assert!(digits.iter().all(u8::is_ascii_digit), "non-digit fraction {fraction:?}");

    let digit = |i: usize| digits[i] - b'0';
    match digits.len() {
        0 => RoundedSatang::exact(0),
        1 => RoundedSatang::exact(digit(0) * 10),
        2 => RoundedSatang::exact(digit(0) * 10 + digit(1)),
        _ => {
            let value = digit(0) * 10 + digit(1);
            let decider = digit(2);
            let round_up = match mode {
                RoundingMode::TowardZero => false,
                RoundingMode::AwayFromZero => decider > 0,
                RoundingMode::Nearest => decider >= 5,
            };

            let rounded = value + u8::from(round_up);
            if rounded < 100 {
                return RoundedSatang::exact(rounded);
            }

            match overflow {
                OverflowPolicy::Carry => RoundedSatang {
                    satang: Satang::ZERO,
                    carry: true,
                    clamped: false,
                },
                // Only .99x reaches 100, so clamping always changes the outcome
                OverflowPolicy::Clamp => RoundedSatang {
                    satang: Satang::MAX,
                    carry: false,
                    clamped: true,
                },
            }
        }
    }
}
