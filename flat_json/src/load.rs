use std::{fs, path::Path};

use tracing::debug;

use crate::{
    convert::FromDocument,
    error::Error,
    parser::{ParseOptions, Parser},
    scalar_value::Document,
};

fn read_source(path: &Path) -> Result<String, Error> {
    let source = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = source.len(), "read document");

    Ok(source)
}

/// Reads the whole file at `path` and parses it as one document.
pub fn load_file(path: impl AsRef<Path>, options: ParseOptions) -> Result<Document, Error> {
    let source = read_source(path.as_ref())?;
    Ok(Parser::new(options).parse_document(&source)?)
}

pub fn load_file_into<T: FromDocument>(
    path: impl AsRef<Path>,
    options: ParseOptions,
) -> Result<T, Error> {
    let source = read_source(path.as_ref())?;
    Parser::new(options).parse_into(&source)
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf, process};

    use super::*;
    use crate::{ParserErrKind, ScalarValue};

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("flat_json_{}_{name}", process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_file() {
        let path = write_temp("load.json", "{\"name\": \"ann\", \"age\": 30}\n");
        let result = load_file(&path, ParseOptions::default());
        fs::remove_file(&path).unwrap();

        let expected = Document::from([
            ("name".to_string(), ScalarValue::String("ann".to_string())),
            ("age".to_string(), ScalarValue::Number("30".to_string())),
        ]);
        assert_eq!(expected, result.unwrap());
    }

    #[test]
    fn test_missing_file() {
        let path = env::temp_dir().join("flat_json_does_not_exist.json");
        let result = load_file(&path, ParseOptions::default());

        assert!(matches!(result, Err(Error::Io { path: p, .. }) if p == path));
    }

    #[test]
    fn test_invalid_file() {
        let path = write_temp("invalid.json", "{\"flag\": true}\n");
        let result = load_file(&path, ParseOptions::default());
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(Error::Parse(err))
                if err.kind == ParserErrKind::UnrecognizedValueStart && err.offset == 9
        ));
    }
}
