// ============================================================================
// Amount Sources
// Coercion of numeric types into a canonical decimal string
// ============================================================================

use crate::numeric::{BahtResult, BahtTextError};
use rust_decimal::Decimal;
use std::borrow::Cow;

/// A value that can be written as a decimal amount string.
///
/// Integers keep their exact digits, floats are fixed to two fractional
/// digits and strings pass through untouched for sanitization.
pub trait AmountSource {
    /// Canonical decimal representation of the amount.
    ///
    /// # Errors
    /// `UnsupportedType` when the value is not a finite number.
    fn to_canonical(&self) -> BahtResult<Cow<'_, str>>;
}

impl AmountSource for str {
    fn to_canonical(&self) -> BahtResult<Cow<'_, str>> {
        Ok(Cow::Borrowed(self))
    }
}

impl AmountSource for String {
    fn to_canonical(&self) -> BahtResult<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl<T: AmountSource + ?Sized> AmountSource for &T {
    fn to_canonical(&self) -> BahtResult<Cow<'_, str>> {
        (**self).to_canonical()
    }
}

macro_rules! integer_amount_source {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AmountSource for $ty {
                fn to_canonical(&self) -> BahtResult<Cow<'_, str>> {
                    Ok(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

integer_amount_source!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_amount_source {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AmountSource for $ty {
                fn to_canonical(&self) -> BahtResult<Cow<'_, str>> {
                    if !self.is_finite() {
                        return Err(BahtTextError::unsupported_type(format!(
                            "{} value {} is not a finite amount",
                            stringify!($ty),
                            self
                        )));
                    }
                    Ok(Cow::Owned(format!("{:.2}", self)))
                }
            }
        )*
    };
}

float_amount_source!(f32, f64);

impl AmountSource for Decimal {
    fn to_canonical(&self) -> BahtResult<Cow<'_, str>> {
        Ok(Cow::Owned(self.to_string()))
    }
}

#[cfg(feature = "serde")]
impl AmountSource for serde_json::Value {
    fn to_canonical(&self) -> BahtResult<Cow<'_, str>> {
        use serde_json::Value;

        match self {
            Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
            Value::Number(n) if n.is_f64() => match n.as_f64() {
                Some(f) => f.to_canonical().map(|s| Cow::Owned(s.into_owned())),
                None => Err(BahtTextError::unsupported_type(format!(
                    "JSON number {n} is not representable"
                ))),
            },
            Value::Number(n) => Ok(Cow::Owned(n.to_string())),
            other => Err(BahtTextError::unsupported_type(format!(
                "JSON {} is not an amount",
                json_type_name(other)
            ))),
        }
    }
}

#[cfg(feature = "serde")]
fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ErrorKind;

    fn canonical<A: AmountSource + ?Sized>(amount: &A) -> String {
        amount.to_canonical().unwrap().into_owned()
    }

    #[test]
    fn test_strings_pass_through() {
        assert_eq!(canonical("  1,234.5 "), "  1,234.5 ");
        assert_eq!(canonical(&String::from("123.45")), "123.45");
    }

    #[test]
    fn test_integers_are_exact() {
        assert_eq!(canonical(&123i32), "123");
        assert_eq!(canonical(&50i8), "50");
        assert_eq!(canonical(&u64::MAX), "18446744073709551615");
        assert_eq!(canonical(&i64::MAX), "9223372036854775807");
        assert_eq!(canonical(&-5i64), "-5");
    }

    #[test]
    fn test_floats_have_two_digits() {
        assert_eq!(canonical(&123.45f32), "123.45");
        assert_eq!(canonical(&999.99f64), "999.99");
        assert_eq!(canonical(&100.5f64), "100.50");
        assert_eq!(canonical(&50f64), "50.00");
        assert_eq!(canonical(&0.0f64), "0.00");
    }

    #[test]
    fn test_non_finite_floats_unsupported() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = value.to_canonical().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedType);
        }
        assert!(f32::NAN.to_canonical().is_err());
    }

    #[test]
    fn test_decimal_keeps_scale() {
        assert_eq!(canonical(&Decimal::new(12345, 2)), "123.45");
        assert_eq!(canonical(&Decimal::new(100995, 3)), "100.995");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_values() {
        use serde_json::json;

        assert_eq!(canonical(&json!("12.5")), "12.5");
        assert_eq!(canonical(&json!(1000000)), "1000000");
        assert_eq!(canonical(&json!(100.5)), "100.50");

        for value in [json!(null), json!(true), json!([1, 2, 3]), json!({ "test": 1 })] {
            let err = value.to_canonical().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedType);
        }
    }
}
