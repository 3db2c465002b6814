use super::evaluator;
use super::{ExecutionError, ExecutionResult, Executor};
use crate::core::common::types::{Row, Value};
use crate::core::query::sql::ast::{DeleteStatement, InsertStatement, UpdateStatement};

impl Executor {
    /// Appends one row built by pairing columns with values.
    ///
    /// An empty column list means every declared column in order. Surplus
    /// columns (more columns than values) are left out of the row rather than
    /// rejected; the analyzer normally prevents that case from reaching here.
    pub(crate) fn handle_insert(
        &mut self,
        statement: &InsertStatement,
    ) -> Result<ExecutionResult, ExecutionError> {
        let declared;
        let columns: Vec<&str> = if statement.columns.is_empty() {
            declared = self.catalog.columns(&statement.table)?.clone();
            declared.keys().collect()
        } else {
            statement.columns.iter().map(String::as_str).collect()
        };

        let row: Row = columns
            .into_iter()
            .zip(&statement.values)
            .map(|(column, literal)| (column, literal.to_value()))
            .collect();

        self.store.table_mut(&statement.table)?.insert(row)?;
        Ok(ExecutionResult::Insert { count: 1 })
    }

    pub(crate) fn handle_update(
        &mut self,
        statement: &UpdateStatement,
    ) -> Result<ExecutionResult, ExecutionError> {
        let assignments: Vec<(String, Value)> = statement
            .assignments
            .iter()
            .map(|assignment| (assignment.column.clone(), assignment.value.to_value()))
            .collect();
        let filter = statement.condition.as_ref();
        let count = self
            .store
            .table_mut(&statement.table)?
            .update(&assignments, |row: &Row| evaluator::matches(filter, row))?;
        Ok(ExecutionResult::Update { count })
    }

    pub(crate) fn handle_delete(
        &mut self,
        statement: &DeleteStatement,
    ) -> Result<ExecutionResult, ExecutionError> {
        let table = self.store.table_mut(&statement.table)?;
        let count = match statement.condition.as_ref() {
            None => table.clear(),
            Some(filter) => table.delete(|row: &Row| evaluator::matches(Some(filter), row))?,
        };
        Ok(ExecutionResult::Delete { count })
    }
}
