// ============================================================================
// Numeric Module
// Digit-level arithmetic and rounding for monetary amounts
// ============================================================================
//
// This module provides:
// - DigitSequence: arbitrary-length integer part as digits
// - DigitGroup: six-digit windows used by the Thai grouping rules
// - round_satang: fractional digits to satang with carry/clamp outcome
// - BahtTextError: error kinds with message and hint
//
// Design principles:
// - No floating-point operations
// - No fixed-width integer arithmetic on amounts (carry grows the digit array)
// - Everything is immutable and free of shared state

mod digits;
mod errors;
mod rounding;

pub use digits::{DigitGroup, DigitSequence, GROUP_WIDTH};
pub use errors::{BahtResult, BahtTextError, ErrorKind};
pub use rounding::{round_satang, OverflowPolicy, RoundedSatang, RoundingMode, Satang};
