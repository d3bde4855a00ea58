use crate::CellAddress;

/// Represents the various possible parser error-kinds.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A numeric-form line that is not a plain decimal integer.
    #[error("Invalid number \"{0}\"")]
    InvalidNumber(String),
    /// Symbolic-form source that is not a sequence of separator terminated meow groups.
    #[error("Syntax error")]
    SyntaxError,
}

/// An error reported by the parser (e.g. syntax error).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    kind: ParseErrorKind,
    position: CellAddress,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, position: CellAddress) -> ParseError {
        Self { kind, position }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &ParseErrorKind {
        &self.kind
    }
    /// Byte offset of the error in the original source.
    pub fn position(self: &Self) -> CellAddress {
        self.position
    }
    /// Compute 1-based line/column number in string.
    pub fn loc(self: &Self, input: &str) -> (u32, u32) {
        let mut line = 1;
        let mut column = 1;
        for (offset, c) in input.char_indices() {
            if offset >= self.position {
                break;
            }
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }
}

pub type ParseResult<T = ()> = Result<T, ParseError>;
