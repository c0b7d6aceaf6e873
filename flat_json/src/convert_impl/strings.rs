use crate::{
    convert::{ConvertErrKind, FromScalar},
    scalar_value::ScalarValue,
};

impl FromScalar for String {
    fn from_scalar(value: &ScalarValue) -> Result<Self, ConvertErrKind> {
        // Numbers are not coerced, a string field must have been quoted
        match value {
            ScalarValue::String(s) => Ok(s.clone()),
            _ => Err(ConvertErrKind::unexpected("string", value)),
        }
    }
}

// Keeps the value as-is, so a `Document` converts into itself
impl FromScalar for ScalarValue {
    fn from_scalar(value: &ScalarValue) -> Result<Self, ConvertErrKind> {
        Ok(value.clone())
    }
}
