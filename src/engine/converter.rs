// ============================================================================
// Baht Converter
// Full pipeline: coercion, sanitization, bound check, formatting
// ============================================================================

use super::formatter;
use crate::domain::{
    check_bounds, sanitize, AmountSource, ConversionResult, ConverterConfig, SanitizedAmount,
};
use crate::interfaces::{ConversionEvent, EventHandler, LoggingEventHandler};
use crate::numeric::BahtResult;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// Convert any supported amount with an explicit configuration.
///
/// No event handler is involved; clamping shows up only in
/// [`ConversionResult::clamped`]. `config` is validated on every call, so an
/// out-of-range digit limit fails with `InvalidConfig`.
///
/// # Example
/// ```
/// use thai_baht_text::prelude::*;
///
/// let result = convert_amount("100.995", &ConverterConfig::round_half()).unwrap();
/// assert_eq!(result.text, "หนึ่งร้อยบาทเก้าสิบเก้าสตางค์");
/// assert!(result.clamped);
/// ```
pub fn convert_amount<A: AmountSource + ?Sized>(
    amount: &A,
    config: &ConverterConfig,
) -> BahtResult<ConversionResult> {
    let canonical = amount.to_canonical()?;
    run_pipeline(&canonical, config).map(|(result, _)| result)
}

/// Convert with the default configuration and return only the text.
///
/// # Example
/// ```
/// assert_eq!(thai_baht_text::to_baht_text(&21).unwrap(), "ยี่สิบเอ็ดบาทถ้วน");
/// ```
pub fn to_baht_text<A: AmountSource + ?Sized>(amount: &A) -> BahtResult<String> {
    convert_amount(amount, &ConverterConfig::default()).map(ConversionResult::into_text)
}

fn run_pipeline(
    canonical: &str,
    config: &ConverterConfig,
) -> BahtResult<(ConversionResult, SanitizedAmount)> {
    config.validate()?;
    let sanitized = sanitize(canonical)?;
    check_bounds(&sanitized.integer, config.max_integer_digits)?;

    tracing::debug!(
        integer = %sanitized.integer,
        fraction = %sanitized.fraction,
        rounding_mode = ?config.rounding_mode,
        overflow = ?config.overflow,
        "converting amount"
    );

    let result = formatter::convert(
        &sanitized.integer,
        &sanitized.fraction,
        config.rounding_mode,
        config.overflow,
    )?;
    Ok((result, sanitized))
}

// ============================================================================
// Configured Converter
// ============================================================================

/// Immutable converter bound to one configuration and one event handler.
///
/// Built once and shared freely between threads; nothing inside changes after
/// construction. Clamps (when `report_clamps` is set) and discarded minus signs
/// are passed to the event handler after the text is produced.
///
/// # Example
/// ```
/// use thai_baht_text::prelude::*;
/// use std::sync::Arc;
///
/// let events = Arc::new(RecordingEventHandler::new());
/// let converter = BahtConverter::new(ConverterConfig::round_half(), events.clone()).unwrap();
///
/// assert_eq!(converter.convert_text("50.996").unwrap(), "ห้าสิบบาทเก้าสิบเก้าสตางค์");
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Clone)]
pub struct BahtConverter {
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl BahtConverter {
    /// Create a converter after validating `config`.
    pub fn new(config: ConverterConfig, event_handler: Arc<dyn EventHandler>) -> BahtResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            event_handler,
        })
    }

    /// Default configuration, events logged through `tracing`.
    pub fn with_defaults() -> Self {
        Self {
            config: ConverterConfig::default(),
            event_handler: Arc::new(LoggingEventHandler),
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert an amount, reporting events to the handler.
    pub fn convert<A: AmountSource + ?Sized>(&self, amount: &A) -> BahtResult<ConversionResult> {
        let canonical = amount.to_canonical()?;
        let (result, sanitized) = run_pipeline(&canonical, &self.config)?;

        let mut events = Vec::new();
        if sanitized.sign_discarded {
            events.push(ConversionEvent::SignDiscarded {
                input: canonical.into_owned(),
                timestamp: Utc::now(),
            });
        }
        if result.clamped && self.config.report_clamps {
            events.push(ConversionEvent::SatangClamped {
                fraction: sanitized.fraction,
                rounding_mode: self.config.rounding_mode,
                timestamp: Utc::now(),
            });
        }
        if !events.is_empty() {
            self.event_handler.on_events(events);
        }

        Ok(result)
    }

    /// Convert an amount and return only the text.
    pub fn convert_text<A: AmountSource + ?Sized>(&self, amount: &A) -> BahtResult<String> {
        self.convert(amount).map(ConversionResult::into_text)
    }
}

impl Default for BahtConverter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for BahtConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BahtConverter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
