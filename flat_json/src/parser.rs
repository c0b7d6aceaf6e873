use thiserror::Error;

use crate::{
    assembler::{Assembler, AssemblerErr, Pairing},
    convert::FromDocument,
    error::Error as CrateError,
    scalar_value::Document,
    scanner::{Scanner, ScannerErr, ScannerErrKind},
};

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at byte offset {offset} (line {line})")]
pub struct ParserErr {
    pub kind: ParserErrKind,
    pub offset: usize,
    pub line: usize,
    pub lexeme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserErrKind {
    // Scanner specific errors
    #[error("malformed document")]
    MalformedDocument,
    #[error("unrecognized value start")]
    UnrecognizedValueStart,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    // Assembler specific errors
    #[error("unpaired token ({fields} field(s) but {values} value(s))")]
    UnpairedToken { fields: usize, values: usize },
}

impl From<ScannerErr> for ParserErr {
    fn from(err: ScannerErr) -> Self {
        let kind = match err.kind {
            ScannerErrKind::MalformedDocument => ParserErrKind::MalformedDocument,
            ScannerErrKind::UnrecognizedValueStart => ParserErrKind::UnrecognizedValueStart,
            ScannerErrKind::UnexpectedEndOfInput => ParserErrKind::UnexpectedEndOfInput,
        };

        Self {
            kind,
            offset: err.offset,
            line: err.line,
            lexeme: err.lexeme,
        }
    }
}

impl From<AssemblerErr> for ParserErr {
    fn from(err: AssemblerErr) -> Self {
        match err {
            AssemblerErr::UnpairedToken {
                fields,
                values,
                token,
            } => Self {
                kind: ParserErrKind::UnpairedToken { fields, values },
                offset: token.offset,
                line: token.line,
                lexeme: token.lexeme,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub pairing: Pairing,
}

/// Runs the scanner and then the assembler over one source buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parses with the default options.
    pub fn parse(source: &str) -> Result<Document, ParserErr> {
        Self::default().parse_document(source)
    }

    pub fn parse_document(&self, source: &str) -> Result<Document, ParserErr> {
        let tokens = Scanner::init(source).scan()?;
        let document = Assembler::new(self.options.pairing).assemble(&tokens)?;

        Ok(document)
    }

    pub fn parse_into<T: FromDocument>(&self, source: &str) -> Result<T, CrateError> {
        let document = self.parse_document(source)?;
        Ok(T::from_document(&document)?)
    }
}
