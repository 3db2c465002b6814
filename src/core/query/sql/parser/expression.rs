use super::core::SqlParser;
use crate::core::query::sql::ast::{BinaryOperator, Expression, Literal, SelectColumn};
use crate::core::query::sql::errors::SqlParseError;
use crate::core::query::sql::tokenizer::{Token, TokenKind};

const PRIMARY_START: &[TokenKind] =
    &[TokenKind::Identifier, TokenKind::String, TokenKind::Number, TokenKind::LeftParen];

const LITERAL_START: &[TokenKind] = &[TokenKind::String, TokenKind::Number];

fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    Some(match kind {
        TokenKind::Equal => BinaryOperator::Equal,
        TokenKind::NotEqual => BinaryOperator::NotEqual,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
        TokenKind::LessEqual => BinaryOperator::LessEqual,
        TokenKind::And => BinaryOperator::And,
        TokenKind::Or => BinaryOperator::Or,
        _ => return None,
    })
}

// The token text still carries its quotes.
fn unquote(token: &Token) -> String {
    let text = token.value.as_str();
    text.get(1..text.len().saturating_sub(1)).unwrap_or_default().to_string()
}

fn number_literal(token: Token) -> Result<Literal, SqlParseError> {
    let parsed = if token.value.contains('.') {
        token.value.parse::<f64>().ok().map(Literal::Float)
    } else {
        token.value.parse::<i64>().ok().map(Literal::Integer)
    };
    parsed.ok_or(SqlParseError::InvalidNumber(token))
}

impl SqlParser {
    /// `*` or a comma-separated list of column names.
    pub(super) fn parse_select_column_list(&mut self) -> Result<Vec<SelectColumn>, SqlParseError> {
        let first = self.expect(&[TokenKind::Identifier, TokenKind::Asterisk])?;
        if first.kind == TokenKind::Asterisk {
            return Ok(vec![SelectColumn::Asterisk]);
        }

        let mut columns = vec![SelectColumn::Column(first.value)];
        while self.match_token(&[TokenKind::Comma]) {
            columns.push(SelectColumn::Column(self.expect_identifier()?));
        }
        Ok(columns)
    }

    pub(super) fn parse_identifier_list(&mut self) -> Result<Vec<String>, SqlParseError> {
        let mut names = vec![self.expect_identifier()?];
        while self.match_token(&[TokenKind::Comma]) {
            names.push(self.expect_identifier()?);
        }
        Ok(names)
    }

    /// Parses a WHERE-clause expression.
    ///
    /// There is one precedence level and composition is right-associative: a
    /// primary is read, and if an operator follows, the whole remainder is
    /// parsed as the right operand. `a > 1 AND b < 2` therefore groups as
    /// `a > (1 AND (b < 2))`. This is not standard SQL precedence; use
    /// parentheses to get the conventional grouping.
    pub(super) fn parse_expression(&mut self) -> Result<Expression, SqlParseError> {
        let left = self.parse_primary()?;
        match binary_operator(self.peek().kind) {
            Some(op) => {
                self.advance();
                let right = self.parse_expression()?;
                Ok(Expression::binary(left, op, right))
            }
            None => Ok(left),
        }
    }

    fn parse_primary(&mut self) -> Result<Expression, SqlParseError> {
        let token = self.expect(PRIMARY_START)?;
        match token.kind {
            TokenKind::Identifier => Ok(Expression::Column(token.value)),
            TokenKind::LeftParen => {
                let inner = self.parse_expression()?;
                self.expect(&[TokenKind::RightParen])?;
                Ok(inner)
            }
            _ => Self::literal_from(token).map(Expression::Literal),
        }
    }

    /// A string or numeric literal, as used in VALUES and SET.
    pub(super) fn parse_literal(&mut self) -> Result<Literal, SqlParseError> {
        let token = self.expect(LITERAL_START)?;
        Self::literal_from(token)
    }

    fn literal_from(token: Token) -> Result<Literal, SqlParseError> {
        if token.kind == TokenKind::String {
            Ok(Literal::String(unquote(&token)))
        } else {
            number_literal(token)
        }
    }
}
