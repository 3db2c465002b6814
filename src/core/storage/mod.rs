//! In-memory row storage.
//!
//! [`RowStore`] owns one [`Table`] per created table. It knows nothing about
//! SQL; the executor drives it with already-evaluated rows and predicates.

pub mod snapshot;
mod table;

pub use snapshot::{Snapshot, TableSnapshot};
pub use table::Table;

use crate::core::catalog::TableColumns;
use crate::core::common::types::OrderedMap;
use crate::core::query::executor::ExecutionError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowStore {
    tables: OrderedMap<Table>,
}

impl RowStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_table(&mut self, name: &str, columns: TableColumns) -> Result<(), ExecutionError> {
        if self.tables.contains_key(name) {
            return Err(ExecutionError::TableAlreadyExists { table: name.to_string() });
        }
        self.tables.insert(name, Table::new(name, columns));
        Ok(())
    }

    pub fn drop_table(&mut self, name: &str) -> Result<Table, ExecutionError> {
        self.tables
            .remove(name)
            .ok_or_else(|| ExecutionError::TableNotFound { table: name.to_string() })
    }

    pub fn table(&self, name: &str) -> Result<&Table, ExecutionError> {
        self.tables.get(name).ok_or_else(|| ExecutionError::TableNotFound { table: name.to_string() })
    }

    pub fn table_mut(&mut self, name: &str) -> Result<&mut Table, ExecutionError> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| ExecutionError::TableNotFound { table: name.to_string() })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Tables in creation order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
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
