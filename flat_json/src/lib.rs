// Lets the derive output name `::flat_json` from inside this crate too
extern crate self as flat_json;

mod assembler;
mod convert;
mod convert_impl;
mod error;
mod load;
mod parser;
mod scalar_value;
mod scanner;
mod token;

pub use assembler::{Assembler, AssemblerErr, Pairing};
pub use convert::{ConvertErr, ConvertErrKind, FromDocument, FromScalar, field};
pub use convert_impl::ScalarNumber;
pub use error::Error;
pub use flat_json_macros::FromDocument;
pub use load::{load_file, load_file_into};
pub use parser::{ParseOptions, Parser, ParserErr, ParserErrKind};
pub use scalar_value::{Document, ScalarValue};
pub use scanner::{Scanner, ScannerErr, ScannerErrKind};
pub use token::{Token, TokenKind, ValueKind};
