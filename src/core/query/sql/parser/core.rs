use crate::core::query::sql::errors::SqlParseError;
use crate::core::query::sql::tokenizer::{Token, TokenKind};

#[derive(Debug)]
pub struct SqlParser {
    pub(super) tokens: Vec<Token>,
    pub(super) current: usize,
}

impl SqlParser {
    /// Creates a parser over `tokens`.
    ///
    /// The sequence is expected to come from the tokenizer and end in an EOF
    /// token; one is appended if it does not.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let (line, column) = tokens.last().map_or((1, 1), |t| (t.line, t.column));
            tokens.push(Token::new(TokenKind::Eof, "", line, column));
        }
        SqlParser { tokens, current: 0 }
    }

    pub(super) fn peek(&self) -> &Token {
        // `new` guarantees a trailing EOF and `advance` never moves past it.
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(super) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.current += 1;
        }
        token
    }

    /// Consumes the current token if it is one of `kinds`.
    pub(super) fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.contains(&self.peek().kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes and returns the current token, which must be one of `kinds`.
    pub(super) fn expect(&mut self, kinds: &[TokenKind]) -> Result<Token, SqlParseError> {
        if kinds.contains(&self.peek().kind) {
            Ok(self.advance())
        } else {
            Err(SqlParseError::UnexpectedToken { expected: kinds.to_vec(), found: self.peek().clone() })
        }
    }

    pub(super) fn expect_identifier(&mut self) -> Result<String, SqlParseError> {
        self.expect(&[TokenKind::Identifier]).map(|token| token.value)
    }
}
