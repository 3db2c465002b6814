//! Schema catalog: table name to ordered column declarations.
//!
//! The catalog is the authority the semantic analyzer consults. It is only
//! changed by executing CREATE TABLE and DROP TABLE (or by restoring a snapshot).

use crate::core::common::types::OrderedMap;
use std::fmt;

/// Column name to declared type name, in declaration order.
pub type TableColumns = OrderedMap<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    TableExists(String),
    TableNotFound(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TableExists(table) => write!(f, "Table '{table}' already exists"),
            Self::TableNotFound(table) => write!(f, "Table '{table}' does not exist"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaCatalog {
    tables: OrderedMap<TableColumns>,
}

impl SchemaCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_table(&mut self, table: &str, columns: TableColumns) -> Result<(), CatalogError> {
        if self.tables.contains_key(table) {
            return Err(CatalogError::TableExists(table.to_string()));
        }
        self.tables.insert(table, columns);
        Ok(())
    }

    pub fn drop_table(&mut self, table: &str) -> Result<TableColumns, CatalogError> {
        self.tables.remove(table).ok_or_else(|| CatalogError::TableNotFound(table.to_string()))
    }

    #[must_use]
    pub fn table_exists(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    pub fn columns(&self, table: &str) -> Result<&TableColumns, CatalogError> {
        self.tables.get(table).ok_or_else(|| CatalogError::TableNotFound(table.to_string()))
    }

    pub fn column_exists(&self, table: &str, column: &str) -> Result<bool, CatalogError> {
        Ok(self.columns(table)?.contains_key(column))
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_columns() -> TableColumns {
        [("id", "INTEGER".to_string()), ("name", "STRING".to_string())].into_iter().collect()
    }

    #[test]
    fn create_and_lookup() {
        let mut catalog = SchemaCatalog::new();
        catalog.create_table("users", users_columns()).unwrap();
        assert!(catalog.table_exists("users"));
        assert_eq!(catalog.column_exists("users", "name"), Ok(true));
        assert_eq!(catalog.column_exists("users", "age"), Ok(false));
        assert_eq!(catalog.columns("users").unwrap().keys().collect::<Vec<_>>(), vec!["id", "name"]);
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let mut catalog = SchemaCatalog::new();
        catalog.create_table("users", users_columns()).unwrap();
        assert_eq!(
            catalog.create_table("users", TableColumns::new()),
            Err(CatalogError::TableExists("users".into()))
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn drop_missing_table_fails() {
        let mut catalog = SchemaCatalog::new();
        assert_eq!(catalog.drop_table("ghost"), Err(CatalogError::TableNotFound("ghost".into())));
        assert_eq!(
            catalog.column_exists("ghost", "id"),
            Err(CatalogError::TableNotFound("ghost".into()))
        );
        catalog.create_table("users", users_columns()).unwrap();
        assert!(catalog.drop_table("users").is_ok());
        assert!(catalog.is_empty());
    }
}
