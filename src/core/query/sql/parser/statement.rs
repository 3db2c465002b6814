use super::core::SqlParser;
use crate::core::query::sql::ast::{
    Assignment, ColumnDef, CreateTableStatement, DeleteStatement, DropTableStatement, Expression,
    InsertStatement, SelectStatement, Statement, UpdateStatement,
};
use crate::core::query::sql::errors::SqlParseError;
use crate::core::query::sql::tokenizer::TokenKind;

impl SqlParser {
    /// Parses exactly one statement.
    ///
    /// A trailing `;` is optional; anything after it other than the end of
    /// input is rejected.
    pub fn parse(&mut self) -> Result<Statement, SqlParseError> {
        let statement = match self.peek().kind {
            TokenKind::Select => Statement::Select(self.parse_select_statement()?),
            TokenKind::Insert => Statement::Insert(self.parse_insert_statement()?),
            TokenKind::Update => Statement::Update(self.parse_update_statement()?),
            TokenKind::Delete => Statement::Delete(self.parse_delete_statement()?),
            TokenKind::Create => Statement::CreateTable(self.parse_create_table_statement()?),
            TokenKind::Drop => Statement::DropTable(self.parse_drop_table_statement()?),
            _ => return Err(SqlParseError::UnknownStatement(self.peek().clone())),
        };

        self.match_token(&[TokenKind::Semicolon]);
        self.expect(&[TokenKind::Eof])?;
        tracing::trace!(kind = statement.kind(), table = statement.table(), "parsed statement");
        Ok(statement)
    }

    fn parse_where_clause(&mut self) -> Result<Option<Expression>, SqlParseError> {
        if self.match_token(&[TokenKind::Where]) {
            Ok(Some(self.parse_expression()?))
        } else {
            Ok(None)
        }
    }

    fn parse_select_statement(&mut self) -> Result<SelectStatement, SqlParseError> {
        self.expect(&[TokenKind::Select])?;
        let columns = self.parse_select_column_list()?;
        self.expect(&[TokenKind::From])?;
        let table = self.expect_identifier()?;
        let condition = self.parse_where_clause()?;
        Ok(SelectStatement { columns, table, condition })
    }

    fn parse_insert_statement(&mut self) -> Result<InsertStatement, SqlParseError> {
        self.expect(&[TokenKind::Insert])?;
        self.expect(&[TokenKind::Into])?;
        let table = self.expect_identifier()?;

        let columns = if self.match_token(&[TokenKind::LeftParen]) {
            let columns = self.parse_identifier_list()?;
            self.expect(&[TokenKind::RightParen])?;
            columns
        } else {
            Vec::new()
        };

        self.expect(&[TokenKind::Values])?;
        self.expect(&[TokenKind::LeftParen])?;
        let mut values = vec![self.parse_literal()?];
        while self.match_token(&[TokenKind::Comma]) {
            values.push(self.parse_literal()?);
        }
        self.expect(&[TokenKind::RightParen])?;

        Ok(InsertStatement { table, columns, values })
    }

    fn parse_update_statement(&mut self) -> Result<UpdateStatement, SqlParseError> {
        self.expect(&[TokenKind::Update])?;
        let table = self.expect_identifier()?;
        self.expect(&[TokenKind::Set])?;

        let mut assignments = vec![self.parse_assignment()?];
        while self.match_token(&[TokenKind::Comma]) {
            assignments.push(self.parse_assignment()?);
        }

        let condition = self.parse_where_clause()?;
        Ok(UpdateStatement { table, assignments, condition })
    }

    fn parse_assignment(&mut self) -> Result<Assignment, SqlParseError> {
        let column = self.expect_identifier()?;
        self.expect(&[TokenKind::Equal])?;
        let value = self.parse_literal()?;
        Ok(Assignment { column, value })
    }

    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, SqlParseError> {
        self.expect(&[TokenKind::Delete])?;
        self.expect(&[TokenKind::From])?;
        let table = self.expect_identifier()?;
        let condition = self.parse_where_clause()?;
        Ok(DeleteStatement { table, condition })
    }

    fn parse_create_table_statement(&mut self) -> Result<CreateTableStatement, SqlParseError> {
        self.expect(&[TokenKind::Create])?;
        self.expect(&[TokenKind::Table])?;
        let table = self.expect_identifier()?;

        self.expect(&[TokenKind::LeftParen])?;
        let mut columns = vec![self.parse_column_def()?];
        while self.match_token(&[TokenKind::Comma]) {
            columns.push(self.parse_column_def()?);
        }
        self.expect(&[TokenKind::RightParen])?;

        Ok(CreateTableStatement { table, columns })
    }

    // Duplicate names are kept so the analyzer can report them.
    fn parse_column_def(&mut self) -> Result<ColumnDef, SqlParseError> {
        let name = self.expect_identifier()?;
        let data_type = self.expect_identifier()?;
        Ok(ColumnDef { name, data_type })
    }

    fn parse_drop_table_statement(&mut self) -> Result<DropTableStatement, SqlParseError> {
        self.expect(&[TokenKind::Drop])?;
        self.expect(&[TokenKind::Table])?;
        let table = self.expect_identifier()?;
        Ok(DropTableStatement { table })
    }
}
