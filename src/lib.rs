// ============================================================================
// Thai Baht Text Library
// Decimal monetary amounts as spoken Thai text
// ============================================================================

//! # Thai Baht Text
//!
//! Converts non-negative decimal amounts into the Thai wording used on
//! cheques and receipts, e.g. `1234567.89` becomes
//! "หนึ่งล้านสองแสนสามหมื่นสี่พันห้าร้อยหกสิบเจ็ดบาทแปดสิบเก้าสตางค์".
//!
//! ## Features
//!
//! - **Thai numeral grammar**: "เอ็ด" and "ยี่" exceptions, recursive "ล้าน"
//! - **Up to 19 integer digits** handled as digit arrays, never native integers
//! - **Configurable rounding** of satang with an explicit overflow policy
//! - **No global state**: configuration travels with every call
//! - **Clamp reporting** through a pluggable event handler
//!
//! ## Example
//!
//! ```rust
//! use thai_baht_text::prelude::*;
//! use std::sync::Arc;
//!
//! // One-off conversion with the default (round half, clamp) settings
//! assert_eq!(
//!     to_baht_text("147521.19").unwrap(),
//!     "หนึ่งแสนสี่หมื่นเจ็ดพันห้าร้อยยี่สิบเอ็ดบาทสิบเก้าสตางค์"
//! );
//!
//! // Explicit configuration per call
//! let result = convert_amount("100.995", &ConverterConfig::round_half_overflow()).unwrap();
//! assert_eq!(result.text, "หนึ่งร้อยเอ็ดบาทถ้วน");
//!
//! // Reusable converter handle
//! let converter = ConverterBuilder::round_half()
//!     .build(Arc::new(LoggingEventHandler))
//!     .unwrap();
//! println!("{}", converter.convert_text(&1_000_000u64).unwrap());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

pub use engine::{convert_amount, to_baht_text};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{AmountSource, ConversionResult, ConverterConfig, MAX_INTEGER_DIGITS};
    pub use crate::engine::{
        convert_amount, create_from_config, to_baht_text, BahtConverter, ConverterBuilder,
    };
    pub use crate::interfaces::{
        ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{
        BahtResult, BahtTextError, DigitSequence, ErrorKind, OverflowPolicy, RoundingMode,
    };
}
