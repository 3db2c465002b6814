use crate::core::catalog::CatalogError;
use crate::core::query::sql::ast::BinaryOperator;
use std::fmt;

/// A failure while running a statement that passed semantic analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    TableNotFound { table: String },
    TableAlreadyExists { table: String },
    /// A row, projection or assignment names a column the table never declared.
    UnknownColumn { column: String, table: String },
    /// A filter referenced a key the row does not carry.
    ColumnNotInRow { column: String },
    TypeMismatch { op: BinaryOperator, left: &'static str, right: &'static str },
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Execution error: ")?;
        match self {
            Self::TableNotFound { table } => write!(f, "Table '{table}' does not exist"),
            Self::TableAlreadyExists { table } => write!(f, "Table '{table}' already exists"),
            Self::UnknownColumn { column, table } => {
                write!(f, "Column '{column}' does not exist in table '{table}'")
            }
            Self::ColumnNotInRow { column } => write!(f, "Column '{column}' does not exist in row"),
            Self::TypeMismatch { op, left, right } => {
                write!(f, "Cannot apply '{op}' to {left} and {right}")
            }
        }
    }
}

impl std::error::Error for ExecutionError {}

impl From<CatalogError> for ExecutionError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::TableExists(table) => Self::TableAlreadyExists { table },
            CatalogError::TableNotFound(table) => Self::TableNotFound { table },
        }
    }
}
