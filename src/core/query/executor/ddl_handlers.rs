use super::{ExecutionError, ExecutionResult, Executor};
use crate::core::catalog::TableColumns;
use crate::core::query::sql::ast::{CreateTableStatement, DropTableStatement};

impl Executor {
    pub(crate) fn handle_create_table(
        &mut self,
        statement: &CreateTableStatement,
    ) -> Result<ExecutionResult, ExecutionError> {
        let table = &statement.table;
        if self.store.contains(table) {
            return Err(ExecutionError::TableAlreadyExists { table: table.clone() });
        }
        let columns: TableColumns = statement
            .columns
            .iter()
            .map(|column| (column.name.as_str(), column.data_type.clone()))
            .collect();
        self.catalog.create_table(table, columns.clone())?;
        self.store.create_table(table, columns)?;
        Ok(ExecutionResult::CreateTable { table: table.clone() })
    }

    pub(crate) fn handle_drop_table(
        &mut self,
        statement: &DropTableStatement,
    ) -> Result<ExecutionResult, ExecutionError> {
        let table = &statement.table;
        // Both sides must know the table before either is touched.
        if !self.store.contains(table) || !self.catalog.table_exists(table) {
            return Err(ExecutionError::TableNotFound { table: table.clone() });
        }
        self.catalog.drop_table(table)?;
        self.store.drop_table(table)?;
        Ok(ExecutionResult::DropTable { table: table.clone() })
    }
}
