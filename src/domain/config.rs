// ============================================================================
// Converter Configuration
// Rounding, overflow and reporting settings passed explicitly to every call
// ============================================================================

use crate::numeric::{BahtResult, BahtTextError, OverflowPolicy, RoundingMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest supported integer part, in digits.
pub const MAX_INTEGER_DIGITS: usize = 19;

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Settings for one conversion or for a [`BahtConverter`](crate::engine::BahtConverter).
///
/// The value is `Copy` and never shared mutably; every call receives its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterConfig {
    /// How digits beyond the second fractional place are rounded
    pub rounding_mode: RoundingMode,

    /// Whether a rounding carry may add one baht
    pub overflow: OverflowPolicy,

    /// Emit a `SatangClamped` event when the clamp policy holds satang at 99
    pub report_clamps: bool,

    /// Longest accepted integer part (1..=19)
    pub max_integer_digits: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(RoundingMode::Nearest, OverflowPolicy::Clamp)
    }
}

impl ConverterConfig {
    /// Create a configuration with the given rounding behavior
    pub fn new(rounding_mode: RoundingMode, overflow: OverflowPolicy) -> Self {
        Self {
            rounding_mode,
            overflow,
            report_clamps: true,
            max_integer_digits: MAX_INTEGER_DIGITS,
        }
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    /// Builder method: Set overflow policy
    pub fn with_overflow(mut self, overflow: impl Into<OverflowPolicy>) -> Self {
        self.overflow = overflow.into();
        self
    }

    /// Builder method: Enable or disable clamp reporting
    pub fn with_clamp_reporting(mut self, enabled: bool) -> Self {
        self.report_clamps = enabled;
        self
    }

    /// Builder method: Lower the accepted integer digit count
    pub fn with_max_integer_digits(mut self, digits: usize) -> Self {
        self.max_integer_digits = digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> BahtResult<()> {
        if self.max_integer_digits == 0 {
            return Err(BahtTextError::invalid_config(
                "max_integer_digits must be at least 1",
            ));
        }
        if self.max_integer_digits > MAX_INTEGER_DIGITS {
            return Err(BahtTextError::invalid_config(format!(
                "max_integer_digits {} exceeds the supported {MAX_INTEGER_DIGITS}",
                self.max_integer_digits
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Round half up, satang capped at 99 (default)
    pub fn round_half() -> Self {
        Self::new(RoundingMode::Nearest, OverflowPolicy::Clamp)
    }

    /// Round half up, .995 and above carry into the next baht
    pub fn round_half_overflow() -> Self {
        Self::new(RoundingMode::Nearest, OverflowPolicy::Carry)
    }

    /// Truncate to two fractional digits
    pub fn round_down() -> Self {
        Self::new(RoundingMode::TowardZero, OverflowPolicy::Clamp)
    }

    /// Round up on any non-zero third digit, satang capped at 99
    pub fn round_up() -> Self {
        Self::new(RoundingMode::AwayFromZero, OverflowPolicy::Clamp)
    }

    /// Round up on any non-zero third digit, carrying into the next baht
    pub fn round_up_overflow() -> Self {
        Self::new(RoundingMode::AwayFromZero, OverflowPolicy::Carry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ErrorKind;

    #[test]
    fn test_config_creation() {
        let config = ConverterConfig::default();

        assert_eq!(config.rounding_mode, RoundingMode::Nearest);
        assert_eq!(config.overflow, OverflowPolicy::Clamp);
        assert!(config.report_clamps);
        assert_eq!(config.max_integer_digits, 19);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ConverterConfig::round_down()
            .with_overflow(true)
            .with_clamp_reporting(false)
            .with_max_integer_digits(12);

        assert_eq!(config.rounding_mode, RoundingMode::TowardZero);
        assert_eq!(config.overflow, OverflowPolicy::Carry);
        assert!(!config.report_clamps);
        assert_eq!(config.max_integer_digits, 12);
    }

    #[test]
    fn test_validation() {
        let err = ConverterConfig::default()
            .with_max_integer_digits(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);

        let err = ConverterConfig::default()
            .with_max_integer_digits(20)
            .validate()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_preset_configs() {
        let presets = [
            (ConverterConfig::round_half(), RoundingMode::Nearest, OverflowPolicy::Clamp),
            (ConverterConfig::round_half_overflow(), RoundingMode::Nearest, OverflowPolicy::Carry),
            (ConverterConfig::round_down(), RoundingMode::TowardZero, OverflowPolicy::Clamp),
            (ConverterConfig::round_up(), RoundingMode::AwayFromZero, OverflowPolicy::Clamp),
            (
                ConverterConfig::round_up_overflow(),
                RoundingMode::AwayFromZero,
                OverflowPolicy::Carry,
            ),
        ];
        for (config, mode, overflow) in presets {
            assert_eq!(config.rounding_mode, mode);
            assert_eq!(config.overflow, overflow);
        }
        assert_eq!(ConverterConfig::round_half(), ConverterConfig::default());
    }
}
