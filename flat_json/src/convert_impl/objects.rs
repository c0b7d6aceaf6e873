use std::collections::HashMap;

use crate::{
    convert::{ConvertErr, FromDocument, FromScalar},
    scalar_value::Document,
};

impl<T: FromScalar> FromDocument for HashMap<String, T> {
    fn from_document(document: &Document) -> Result<Self, ConvertErr> {
        document
            .iter()
            .map(|(name, value)| {
                let converted = T::from_scalar(value).map_err(|kind| ConvertErr {
                    kind,
                    field: name.clone(),
                })?;

                Ok((name.clone(), converted))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Parser, ScalarValue, convert::ConvertErrKind};

    use super::*;

    #[test]
    fn test_empty() {
        let result = HashMap::<String, ScalarValue>::from_document(&Document::new());
        assert_eq!(Ok(HashMap::new()), result);
    }

    #[test]
    fn test_number_only() {
        let document = Parser::parse(r#"{"prop1": 5, "prop2": 300, "prop3": 16.9}"#).unwrap();
        let result = HashMap::<String, f64>::from_document(&document);

        let expected = HashMap::from([
            ("prop1".to_string(), 5.0),
            ("prop2".to_string(), 300.0),
            ("prop3".to_string(), 16.9),
        ]);

        assert_eq!(Ok(expected), result);
    }

    #[test]
    fn test_mixed_into_numbers() {
        let document = Parser::parse(r#"{"prop1": 5, "prop2": "test"}"#).unwrap();
        let result = HashMap::<String, u32>::from_document(&document);

        assert_eq!(
            Err(ConvertErr {
                kind: ConvertErrKind::UnexpectedType {
                    expected: "number",
                    found: "string",
                },
                field: "prop2".to_string(),
            }),
            result
        );
    }

    #[test]
    fn test_document_into_itself() {
        let document = Parser::parse(r#"{"name": "Jane Doe", "age": 32}"#).unwrap();
        assert_eq!(Ok(document.clone()), Document::from_document(&document));
    }
}
