use crate::core::catalog::CatalogError;
use std::fmt;

/// A statement that is well-formed but does not fit the current schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    TableNotFound { table: String },
    TableAlreadyExists { table: String },
    ColumnNotFound { column: String, table: String },
    DuplicateColumn { column: String },
    ValueCountMismatch { values: usize, columns: usize },
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Semantic error: ")?;
        match self {
            Self::TableNotFound { table } => write!(f, "Table '{table}' does not exist"),
            Self::TableAlreadyExists { table } => write!(f, "Table '{table}' already exists"),
            Self::ColumnNotFound { column, table } => {
                write!(f, "Column '{column}' does not exist in table '{table}'")
            }
            Self::DuplicateColumn { column } => write!(f, "Duplicate column name: '{column}'"),
            Self::ValueCountMismatch { values, columns } => write!(
                f,
                "Number of values ({values}) does not match number of columns ({columns})"
            ),
        }
    }
}

impl std::error::Error for SemanticError {}

impl From<CatalogError> for SemanticError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::TableExists(table) => Self::TableAlreadyExists { table },
            CatalogError::TableNotFound(table) => Self::TableNotFound { table },
        }
    }
}
