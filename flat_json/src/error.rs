use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{convert::ConvertErr, parser::ParserErr};

/// Everything that can go wrong between a path on disk and a typed value.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid document: {0}")]
    Parse(#[from] ParserErr),
    #[error("failed to convert document: {0}")]
    Convert(#[from] ConvertErr),
}
