use std::{collections::HashMap, fmt};

/// Field name to value mapping produced by one parse. Duplicate names keep the last value.
pub type Document = HashMap<String, ScalarValue>;

/// A value stored in a [`Document`].
///
/// Numbers keep their literal text, since a digit run such as `1.2.3` is accepted by the scanner
/// but is not a valid number. `Bool` is part of the value domain but the scanner rejects `true`
/// and `false`, so parsed documents never contain it.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    String(String),
    Number(String),
    Bool(bool),
}

impl ScalarValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(text) => text.parse().ok(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(text) => text.parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Number(text) => f.write_str(text),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
