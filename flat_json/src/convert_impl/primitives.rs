use std::str::FromStr;

use crate::{
    convert::{ConvertErrKind, FromScalar},
    scalar_value::ScalarValue,
};

// Define a trait so we can specify which number types we want to be convertible
pub trait ScalarNumber: Sized + FromStr {}

impl ScalarNumber for i128 {}
impl ScalarNumber for i64 {}
impl ScalarNumber for i32 {}
impl ScalarNumber for i16 {}
impl ScalarNumber for i8 {}

impl ScalarNumber for u128 {}
impl ScalarNumber for u64 {}
impl ScalarNumber for u32 {}
impl ScalarNumber for u16 {}
impl ScalarNumber for u8 {}

impl ScalarNumber for f64 {}
impl ScalarNumber for f32 {}

impl<T: ScalarNumber> FromScalar for T {
    fn from_scalar(value: &ScalarValue) -> Result<Self, ConvertErrKind> {
        match value {
            ScalarValue::Number(text) => text
                .parse::<T>()
                .map_err(|_| ConvertErrKind::InvalidNumber),
            _ => Err(ConvertErrKind::unexpected("number", value)),
        }
    }
}

// NOTE: documents from the scanner never hold a bool, this only accepts hand-built values
impl FromScalar for bool {
    fn from_scalar(value: &ScalarValue) -> Result<Self, ConvertErrKind> {
        value
            .as_bool()
            .ok_or_else(|| ConvertErrKind::unexpected("bool", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(text: &str) -> ScalarValue {
        ScalarValue::Number(text.to_string())
    }

    #[test]
    fn test_integers() {
        assert_eq!(Ok(30), i64::from_scalar(&number("30")));
        assert_eq!(Ok(255), u8::from_scalar(&number("255")));
        assert_eq!(Err(ConvertErrKind::InvalidNumber), u8::from_scalar(&number("256")));
        assert_eq!(Err(ConvertErrKind::InvalidNumber), i32::from_scalar(&number("1.5")));
    }

    #[test]
    fn test_floats() {
        assert_eq!(Ok(16.9), f64::from_scalar(&number("16.9")));
        assert_eq!(Ok(5.0), f32::from_scalar(&number("5")));
        assert_eq!(Err(ConvertErrKind::InvalidNumber), f64::from_scalar(&number("1.2.3")));
    }

    #[test]
    fn test_number_from_string() {
        let result = i64::from_scalar(&ScalarValue::String("30".to_string()));
        assert_eq!(
            Err(ConvertErrKind::UnexpectedType {
                expected: "number",
                found: "string",
            }),
            result
        );
    }

    #[test]
    fn test_bool() {
        assert_eq!(Ok(true), bool::from_scalar(&ScalarValue::Bool(true)));
        assert_eq!(
            Err(ConvertErrKind::UnexpectedType {
                expected: "bool",
                found: "number",
            }),
            bool::from_scalar(&number("1"))
        );
    }
}
