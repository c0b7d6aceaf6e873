use crate::{
    convert::{ConvertErrKind, FromScalar},
    scalar_value::ScalarValue,
};

// No null literal exists, so an absent field is the only way to get `None`
impl<T: FromScalar> FromScalar for Option<T> {
    fn from_scalar(value: &ScalarValue) -> Result<Self, ConvertErrKind> {
        Ok(Some(T::from_scalar(value)?))
    }

    fn from_missing() -> Option<Self> {
        Some(None)
    }
}
