//! Statement execution against the schema catalog and row store.
//!
//! The executor trusts that statements have been through the semantic
//! analyzer, but still reports an [`ExecutionError`] for anything it cannot
//! do (a missing table, a filter that trips over a row) instead of panicking.

mod ddl_handlers;
mod dml_handlers;
mod errors;
pub mod evaluator;
mod result;
mod select_execution;

pub use errors::ExecutionError;
pub use result::ExecutionResult;

use crate::core::catalog::SchemaCatalog;
use crate::core::query::sql::ast::{ColumnDef, CreateTableStatement, Statement};
use crate::core::storage::{RowStore, Snapshot, TableSnapshot};

/// Owns the catalog and the row store; the two always describe the same set
/// of tables.
#[derive(Debug, Default)]
pub struct Executor {
    pub(crate) catalog: SchemaCatalog,
    pub(crate) store: RowStore,
}

impl Executor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn store(&self) -> &RowStore {
        &self.store
    }

    /// Runs one statement.
    ///
    /// # Errors
    /// Returns an [`ExecutionError`]; a failed statement leaves the catalog
    /// and store as they were.
    pub fn execute(&mut self, statement: &Statement) -> Result<ExecutionResult, ExecutionError> {
        let result = match statement {
            Statement::Select(select) => self.handle_select(select),
            Statement::Insert(insert) => self.handle_insert(insert),
            Statement::Update(update) => self.handle_update(update),
            Statement::Delete(delete) => self.handle_delete(delete),
            Statement::CreateTable(create) => self.handle_create_table(create),
            Statement::DropTable(drop) => self.handle_drop_table(drop),
        }?;
        tracing::debug!(
            kind = result.kind(),
            table = statement.table(),
            count = result.count(),
            "statement executed"
        );
        Ok(result)
    }

    /// Captures every table with its declared columns and rows.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for table in self.store.tables() {
            snapshot.tables.insert(
                table.name(),
                TableSnapshot { columns: table.columns().clone(), rows: table.rows().to_vec() },
            );
        }
        snapshot
    }

    /// Rebuilds an executor from a snapshot, creating each table and then
    /// inserting its rows in file order.
    ///
    /// # Errors
    /// Fails on a repeated table name or on a row key that the table does
    /// not declare.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, ExecutionError> {
        let mut executor = Self::new();
        for (name, table) in snapshot.tables {
            let create = CreateTableStatement {
                table: name.clone(),
                columns: table
                    .columns
                    .iter()
                    .map(|(column, data_type)| ColumnDef {
                        name: column.to_string(),
                        data_type: data_type.clone(),
                    })
                    .collect(),
            };
            executor.handle_create_table(&create)?;
            let target = executor.store.table_mut(&name)?;
            for row in table.rows {
                target.insert(row)?;
            }
        }
        Ok(executor)
    }
}
