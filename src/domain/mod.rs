// ============================================================================
// Domain Models Module
// Amount inputs, configuration and conversion results
// ============================================================================

pub mod amount;
pub mod config;
pub mod conversion;
pub mod sanitize;

pub use amount::AmountSource;
pub use config::{ConverterConfig, MAX_INTEGER_DIGITS};
pub use conversion::ConversionResult;
pub use sanitize::{check_bounds, sanitize, SanitizedAmount};
