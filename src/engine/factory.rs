// ============================================================================
// Converter Factory
// Creates baht converters with proper configuration
// ============================================================================

use crate::domain::ConverterConfig;
use crate::engine::BahtConverter;
use crate::interfaces::EventHandler;
use crate::numeric::{BahtResult, OverflowPolicy, RoundingMode};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a converter from configuration
///
/// # Arguments
/// * `config` - Rounding, overflow and reporting settings
/// * `event_handler` - Receives clamp and sign events
///
/// # Example
/// ```
/// use thai_baht_text::prelude::*;
/// use std::sync::Arc;
///
/// let config = ConverterConfig::round_half_overflow();
/// let converter = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(converter.convert_text("999.995").unwrap(), "หนึ่งพันบาทถ้วน");
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> BahtResult<BahtConverter> {
    BahtConverter::new(config, event_handler)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use thai_baht_text::prelude::*;
/// use std::sync::Arc;
///
/// let converter = ConverterBuilder::new()
///     .rounding(RoundingMode::AwayFromZero)
///     .allow_overflow(true)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(converter.convert_text("50.996").unwrap(), "ห้าสิบเอ็ดบาทถ้วน");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    config: ConverterConfig,
}

impl ConverterBuilder {
    /// Create a builder starting from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Rounding Configuration
    // ========================================================================

    /// Set the rounding mode
    pub fn rounding(mut self, mode: RoundingMode) -> Self {
        self.config.rounding_mode = mode;
        self
    }

    /// Allow or forbid a rounding carry into the baht amount
    pub fn allow_overflow(mut self, allow: bool) -> Self {
        self.config.overflow = OverflowPolicy::from(allow);
        self
    }

    /// Set the overflow policy
    pub fn overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.config.overflow = overflow;
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Enable or disable clamp events
    pub fn report_clamps(mut self, enabled: bool) -> Self {
        self.config.report_clamps = enabled;
        self
    }

    /// Lower the accepted integer digit count
    pub fn max_integer_digits(mut self, digits: usize) -> Self {
        self.config.max_integer_digits = digits;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Round half up, satang capped at 99
    pub fn round_half() -> Self {
        Self::from_config(ConverterConfig::round_half())
    }

    /// Round half up with carry into baht
    pub fn round_half_overflow() -> Self {
        Self::from_config(ConverterConfig::round_half_overflow())
    }

    /// Truncate
    pub fn round_down() -> Self {
        Self::from_config(ConverterConfig::round_down())
    }

    /// Round up, satang capped at 99
    pub fn round_up() -> Self {
        Self::from_config(ConverterConfig::round_up())
    }

    /// Round up with carry into baht
    pub fn round_up_overflow() -> Self {
        Self::from_config(ConverterConfig::round_up_overflow())
    }

    /// Start from an existing configuration
    pub fn from_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> BahtResult<BahtConverter> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;
    use crate::numeric::ErrorKind;

    #[test]
    fn test_create_default_converter() {
        let converter =
            create_from_config(ConverterConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(converter.config(), &ConverterConfig::default());
        assert_eq!(
            converter.convert_text("147521").unwrap(),
            "หนึ่งแสนสี่หมื่นเจ็ดพันห้าร้อยยี่สิบเอ็ดบาทถ้วน"
        );
    }

    #[test]
    fn test_builder_pattern() {
        let builder = ConverterBuilder::new()
            .rounding(RoundingMode::TowardZero)
            .allow_overflow(true)
            .report_clamps(false)
            .max_integer_digits(15);

        let config = builder.get_config();
        assert_eq!(config.rounding_mode, RoundingMode::TowardZero);
        assert_eq!(config.overflow, OverflowPolicy::Carry);
        assert!(!config.report_clamps);
        assert_eq!(config.max_integer_digits, 15);

        let converter = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(
            converter.convert_text("123.459").unwrap(),
            "หนึ่งร้อยยี่สิบสามบาทสี่สิบห้าสตางค์"
        );
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let err = ConverterBuilder::new()
            .max_integer_digits(0)
            .build(Arc::new(NoOpEventHandler))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_preset_builders() {
        let cases = [
            (ConverterBuilder::round_half(), "หนึ่งร้อยบาทเก้าสิบเก้าสตางค์"),
            (ConverterBuilder::round_half_overflow(), "หนึ่งร้อยเอ็ดบาทถ้วน"),
            (ConverterBuilder::round_down(), "หนึ่งร้อยบาทเก้าสิบเก้าสตางค์"),
            (ConverterBuilder::round_up(), "หนึ่งร้อยบาทเก้าสิบเก้าสตางค์"),
            (ConverterBuilder::round_up_overflow(), "หนึ่งร้อยเอ็ดบาทถ้วน"),
        ];
        for (builder, expected) in cases {
            let converter = builder.build(Arc::new(NoOpEventHandler)).unwrap();
            assert_eq!(converter.convert_text("100.995").unwrap(), expected);
        }
    }
}
