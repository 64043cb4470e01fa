// ============================================================================
// Conversion Result
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Baht text produced for one amount.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionResult {
    /// Full Thai text, e.g. "หนึ่งร้อยบาทถ้วน"
    pub text: String,
    /// Satang would have rounded to 100 but was held at 99 by the clamp policy
    pub clamped: bool,
}

impl ConversionResult {
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<ConversionResult> for String {
    fn from(result: ConversionResult) -> Self {
        result.text
    }
}
