use thiserror::Error;

use crate::scalar_value::{Document, ScalarValue};

#[derive(Debug, Clone, PartialEq, Error)]
#[error("field `{field}`: {kind}")]
pub struct ConvertErr {
    pub kind: ConvertErrKind,
    pub field: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertErrKind {
    #[error("missing field")]
    MissingField,
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid number")]
    InvalidNumber,
}

impl ConvertErrKind {
    pub(crate) fn unexpected(expected: &'static str, found: &ScalarValue) -> Self {
        Self::UnexpectedType {
            expected,
            found: found.type_name(),
        }
    }
}

/// Conversion from a single document value.
pub trait FromScalar: Sized {
    fn from_scalar(value: &ScalarValue) -> Result<Self, ConvertErrKind>;

    /// Value to use when the field is absent. `None` makes the field required.
    fn from_missing() -> Option<Self> {
        None
    }
}

/// Conversion from a whole document, usually derived with `#[derive(FromDocument)]`.
pub trait FromDocument: Sized {
    fn from_document(document: &Document) -> Result<Self, ConvertErr>;
}

/// Looks up `name` and converts it, attaching the field name to any error.
pub fn field<T: FromScalar>(document: &Document, name: &str) -> Result<T, ConvertErr> {
    let make_err = |kind| ConvertErr {
        kind,
        field: name.to_string(),
    };

    match document.get(name) {
        Some(value) => T::from_scalar(value).map_err(make_err),
        None => T::from_missing().ok_or_else(|| make_err(ConvertErrKind::MissingField)),
    }
}
