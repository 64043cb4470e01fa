// ============================================================================
// Conversion Errors
// Error kinds, messages and hints for baht text conversion
// ============================================================================

use std::fmt;

/// Category of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed digits, multiple decimal points or empty input
    InvalidInput,
    /// Integer part longer than the supported digit count
    ExceedsMaxValue,
    /// Value cannot be coerced into a decimal string
    UnsupportedType,
    /// Converter configuration is out of range
    InvalidConfig,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid input"),
            ErrorKind::ExceedsMaxValue => write!(f, "exceeds maximum value"),
            ErrorKind::UnsupportedType => write!(f, "unsupported type"),
            ErrorKind::InvalidConfig => write!(f, "invalid configuration"),
        }
    }
}

/// Error returned by every fallible operation in the crate.
///
/// Carries the [`ErrorKind`], a message describing what was rejected and a
/// hint telling the caller how to fix it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message} (hint: {hint})")]
pub struct BahtTextError {
    kind: ErrorKind,
    message: String,
    hint: &'static str,
}

impl BahtTextError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, hint: &'static str) -> Self {
        Self {
            kind,
            message: message.into(),
            hint,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidInput,
            message,
            "use digits 0-9 with at most one '.' as the decimal point",
        )
    }

    pub fn exceeds_max_value(digits: usize, max_digits: usize) -> Self {
        Self::new(
            ErrorKind::ExceedsMaxValue,
            format!("integer part has {digits} digits, at most {max_digits} are supported"),
            "split the amount or reduce its magnitude",
        )
    }

    pub fn unsupported_type(message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::UnsupportedType,
            message,
            "pass a string, an integer, a finite float or a Decimal",
        )
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidConfig,
            message,
            "check the converter configuration before building",
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hint(&self) -> &'static str {
        self.hint
    }
}

/// Result type alias for conversion operations
pub type BahtResult<T> = Result<T, BahtTextError>;
