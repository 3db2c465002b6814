use super::tokenizer::{Token, TokenKind};
use std::fmt;

/// The first grammar violation found while parsing. Parsing does not recover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParseError {
    /// A grammar rule required one of `expected` but saw `found`.
    UnexpectedToken { expected: Vec<TokenKind>, found: Token },
    /// The leading token does not start any supported statement.
    UnknownStatement(Token),
    /// A numeric literal that does not fit the value types (e.g. integer overflow).
    InvalidNumber(Token),
}

impl SqlParseError {
    /// The offending token, for diagnostics.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::UnexpectedToken { found, .. } => found,
            Self::UnknownStatement(token) | Self::InvalidNumber(token) => token,
        }
    }

    /// Kinds that would have been accepted at the failure point; empty when
    /// the failure is not about a token kind.
    #[must_use]
    pub fn expected(&self) -> &[TokenKind] {
        match self {
            Self::UnexpectedToken { expected, .. } => expected,
            Self::UnknownStatement(_) | Self::InvalidNumber(_) => &[],
        }
    }
}

impl fmt::Display for SqlParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.token();
        write!(f, "Parse error at line {}, column {}: ", token.line, token.column)?;
        match self {
            Self::UnexpectedToken { expected, found } => {
                let expected: Vec<&str> = expected.iter().map(|k| k.name()).collect();
                write!(f, "Expected {}, got {}", expected.join(" or "), found)
            }
            Self::UnknownStatement(found) => write!(f, "Unexpected token: {found}"),
            Self::InvalidNumber(found) => write!(f, "Invalid numeric literal '{}'", found.value),
        }
    }
}

impl std::error::Error for SqlParseError {}
