use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    scalar_value::{Document, ScalarValue},
    token::{Token, TokenKind, ValueKind},
};

static BUG_NO_UNPAIRED_TOKEN: &str = "[BUG] Counts differ but no token is left unpaired";

/// What to do when the number of field tokens and value tokens differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pairing {
    /// Pair up to the shorter sequence and drop the rest, logging a warning.
    #[default]
    Truncate,
    /// Fail with [`AssemblerErr::UnpairedToken`].
    Strict,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssemblerErr {
    /// `token` is the first token left without a partner.
    #[error("{fields} field(s) but {values} value(s)")]
    UnpairedToken {
        fields: usize,
        values: usize,
        token: Token,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler {
    pairing: Pairing,
}

impl Assembler {
    pub fn new(pairing: Pairing) -> Self {
        Self { pairing }
    }

    /// Pairs the nth field token with the nth value token.
    ///
    /// Tokens are not checked for alternation; only their relative order within each kind
    /// matters. In [`Pairing::Truncate`] mode this never fails.
    pub fn assemble(&self, tokens: &[Token]) -> Result<Document, AssemblerErr> {
        let fields: Vec<&Token> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Field)
            .collect();
        let values: Vec<&Token> = tokens
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::Value(_)))
            .collect();

        if fields.len() != values.len() {
            match self.pairing {
                Pairing::Strict => {
                    let paired = fields.len().min(values.len());
                    let unpaired = fields.get(paired).or(values.get(paired));

                    return Err(AssemblerErr::UnpairedToken {
                        fields: fields.len(),
                        values: values.len(),
                        token: unpaired.map(|t| (*t).clone()).expect(BUG_NO_UNPAIRED_TOKEN),
                    });
                }
                Pairing::Truncate => {
                    warn!(
                        fields = fields.len(),
                        values = values.len(),
                        dropped = fields.len().abs_diff(values.len()),
                        "unpaired tokens dropped"
                    );
                }
            }
        }

        let mut document = Document::new();
        for (field, value) in fields.into_iter().zip(values) {
            document.insert(field.lexeme.clone(), to_scalar(value));
        }

        debug!(entries = document.len(), "assembled document");

        Ok(document)
    }
}

fn to_scalar(token: &Token) -> ScalarValue {
    match token.kind {
        TokenKind::Value(ValueKind::Number) => ScalarValue::Number(token.lexeme.clone()),
        _ => ScalarValue::String(token.lexeme.clone()),
    }
}
