use thiserror::Error;
use tracing::debug;

use crate::token::{Token, TokenKind, ValueKind};

static BUG_END_OF_SOURCE: &str = "[BUG] Reached end of source when shouldn't be possible";

const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at byte offset {offset} (line {line})")]
pub struct ScannerErr {
    pub kind: ScannerErrKind,
    pub offset: usize,
    pub line: usize,
    pub lexeme: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScannerErrKind {
    #[error("malformed document")]
    MalformedDocument,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unrecognized value start")]
    UnrecognizedValueStart,
}

/// Splits a flat object into `Field` and `Value` tokens.
///
/// Offsets are byte offsets into the source. Structural characters (`{`, `}`, `:`, `,`) and
/// whitespace are consumed without producing tokens.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    token_start: usize,
    token_line: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub fn init(source: &'a str) -> Self {
        Self {
            source,
            token_start: 0,
            token_line: 1,
            current: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    fn start_token(&mut self) {
        self.token_start = self.current;
        self.token_line = self.line;
    }

    fn push_token(&mut self, kind: TokenKind) {
        let lexeme = &self.source[self.token_start..self.current];
        self.tokens
            .push(Token::init(kind, self.token_start, self.token_line, lexeme));
    }

    fn make_err(&self, kind: ScannerErrKind) -> ScannerErr {
        ScannerErr {
            kind,
            offset: self.current,
            line: self.line,
            lexeme: self.source[self.token_start..self.current].to_string(),
        }
    }

    // Error pointing at the character under the cursor rather than the token so far
    fn make_err_here(&self, kind: ScannerErrKind) -> ScannerErr {
        let lexeme = self.source[self.current..]
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();

        ScannerErr {
            kind,
            offset: self.current,
            line: self.line,
            lexeme,
        }
    }

    fn peek(&self) -> Result<u8, ScannerErr> {
        self.source
            .as_bytes()
            .get(self.current)
            .copied()
            .ok_or_else(|| self.make_err(ScannerErrKind::UnexpectedEndOfInput))
    }

    fn advance(&mut self) -> Result<char, ScannerErr> {
        // Step over the whole character so the cursor always stays on a char boundary
        let c = self
            .source
            .get(self.current..)
            .and_then(|rest| rest.chars().next())
            .ok_or_else(|| self.make_err(ScannerErrKind::UnexpectedEndOfInput))?;
        self.current += c.len_utf8();

        if c == '\n' {
            self.line += 1;
        }

        Ok(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Ok(b' ' | b'\t' | b'\r' | b'\n')) {
            self.advance().expect(BUG_END_OF_SOURCE);
        }
    }

    fn check_shape(&self) -> Result<(), ScannerErr> {
        let closed = self.source.trim_end_matches(WHITESPACE).ends_with('}');

        if self.source.len() < 2 || !self.source.starts_with('{') || !closed {
            return Err(self.make_err(ScannerErrKind::MalformedDocument));
        }

        Ok(())
    }

    /// Scans from an opening quote to the next quote. There are no escape sequences, so an
    /// embedded `"` ends the text early.
    fn quoted(&mut self, kind: TokenKind) -> Result<(), ScannerErr> {
        self.advance()?;
        self.start_token();

        while self.peek()? != b'"' {
            self.advance()?;
        }

        self.push_token(kind);
        self.advance().expect(BUG_END_OF_SOURCE);

        Ok(())
    }

    fn number(&mut self) {
        self.start_token();

        while matches!(self.peek(), Ok(c) if c.is_ascii_digit() || c == b'.') {
            self.advance().expect(BUG_END_OF_SOURCE);
        }

        self.push_token(TokenKind::Value(ValueKind::Number));
    }

    fn value(&mut self) -> Result<(), ScannerErr> {
        match self.peek()? {
            c if c.is_ascii_digit() => {
                self.number();
                Ok(())
            }
            b'"' => self.quoted(TokenKind::Value(ValueKind::String)),
            _ => Err(self.make_err_here(ScannerErrKind::UnrecognizedValueStart)),
        }
    }

    pub fn scan(mut self) -> Result<Vec<Token>, ScannerErr> {
        self.check_shape()?;

        // Skip the opening brace
        self.advance().expect(BUG_END_OF_SOURCE);

        while self.peek()? != b'}' {
            self.skip_whitespace();
            self.start_token();

            if self.peek()? == b'}' {
                break;
            }

            if self.peek()? == b'"' {
                self.quoted(TokenKind::Field)?;
                self.skip_whitespace();
            }

            if self.peek()? != b':' {
                return Err(self.make_err_here(ScannerErrKind::MalformedDocument));
            }
            self.advance().expect(BUG_END_OF_SOURCE);

            self.skip_whitespace();
            self.value()?;

            // Step over the character after the value, but never over the closing brace
            if self.peek()? != b'}' {
                self.advance().expect(BUG_END_OF_SOURCE);
            }

            self.skip_whitespace();
            if self.peek()? == b',' {
                self.advance().expect(BUG_END_OF_SOURCE);
            }
        }

        debug!(
            tokens = self.tokens.len(),
            bytes = self.source.len(),
            "scanned document"
        );

        Ok(self.tokens)
    }
}
