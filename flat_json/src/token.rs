#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
    pub line: usize,
    pub lexeme: String,
}

impl Token {
    pub fn init(kind: TokenKind, offset: usize, line: usize, lexeme: &str) -> Self {
        Self {
            kind,
            offset,
            line,
            lexeme: lexeme.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Field,
    Value(ValueKind),
}

/// Literal form a value was written in. Decides which `ScalarValue` the assembler builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
}
