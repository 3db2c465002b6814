//! The SQL pipeline: text to tokens to statement, checked against the
//! catalog, then executed.

pub mod analyzer;
pub mod executor;
pub mod sql;

use crate::core::catalog::SchemaCatalog;
use crate::core::common::SqlcError;
use analyzer::SemanticAnalyzer;
use sql::ast::Statement;
use sql::{SqlParser, Tokenizer};

/// Tokenizes, parses and analyzes one statement.
///
/// The returned statement has passed semantic analysis against `catalog`
/// and is ready for [`executor::Executor::execute`].
///
/// # Errors
/// `SqlcError::Parse` or `SqlcError::Semantic`, whichever stage fails first.
pub fn compile(sql: &str, catalog: &SchemaCatalog) -> Result<Statement, SqlcError> {
    let tokens = Tokenizer::new(sql).tokenize();
    let mut statement = SqlParser::new(tokens).parse()?;
    SemanticAnalyzer::new(catalog).analyze(&mut statement)?;
    Ok(statement)
}
