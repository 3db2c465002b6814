use super::evaluator;
use super::{ExecutionError, ExecutionResult, Executor};
use crate::core::common::types::{Row, Value};
use crate::core::query::sql::ast::{SelectColumn, SelectStatement};

impl Executor {
    /// Filters in storage order, then projects.
    ///
    /// With `*` the stored row is returned as is. Otherwise each requested
    /// column becomes a key of the output row, `NULL` when the stored row
    /// lacks it.
    pub(crate) fn handle_select(
        &self,
        statement: &SelectStatement,
    ) -> Result<ExecutionResult, ExecutionError> {
        let table = self.store.table(&statement.table)?;

        let projection: Option<Vec<&str>> = if statement.is_wildcard() {
            None
        } else {
            let mut names = Vec::with_capacity(statement.columns.len());
            for column in &statement.columns {
                if let SelectColumn::Column(name) = column {
                    if !table.columns().contains_key(name) {
                        return Err(ExecutionError::UnknownColumn {
                            column: name.clone(),
                            table: statement.table.clone(),
                        });
                    }
                    names.push(name.as_str());
                }
            }
            Some(names)
        };

        let filter = statement.condition.as_ref();
        let matched = table.scan(|row: &Row| evaluator::matches(filter, row))?;

        let rows: Vec<Row> = match projection {
            None => matched.into_iter().cloned().collect(),
            Some(names) => matched
                .into_iter()
                .map(|row| {
                    names
                        .iter()
                        .map(|name| (*name, row.get(name).cloned().unwrap_or(Value::Null)))
                        .collect()
                })
                .collect(),
        };
        Ok(ExecutionResult::Select { count: rows.len(), rows })
    }
}
