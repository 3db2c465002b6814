use crate::core::catalog::TableColumns;
use crate::core::common::types::{Row, Value};
use crate::core::query::executor::ExecutionError;

/// An in-memory table: its declared columns and its rows in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: TableColumns,
    rows: Vec<Row>,
}

impl Table {
    #[must_use]
    pub fn new(name: impl Into<String>, columns: TableColumns) -> Self {
        Self { name: name.into(), columns, rows: Vec::new() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn columns(&self) -> &TableColumns {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn require_declared<'k>(&self, mut keys: impl Iterator<Item = &'k str>) -> Result<(), ExecutionError> {
        match keys.find(|key| !self.columns.contains_key(key)) {
            Some(column) => Err(ExecutionError::UnknownColumn {
                column: column.to_string(),
                table: self.name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Appends `row`. Every key must be a declared column; declared columns
    /// may be left out.
    pub fn insert(&mut self, row: Row) -> Result<(), ExecutionError> {
        self.require_declared(row.keys())?;
        self.rows.push(row);
        Ok(())
    }

    /// Rows accepted by `predicate`, in storage order. A predicate error
    /// aborts the scan.
    pub fn scan(
        &self,
        mut predicate: impl FnMut(&Row) -> Result<bool, ExecutionError>,
    ) -> Result<Vec<&Row>, ExecutionError> {
        let mut matched = Vec::new();
        for row in &self.rows {
            if predicate(row)? {
                matched.push(row);
            }
        }
        Ok(matched)
    }

    /// Overwrites `assignments` in every row accepted by `predicate` and
    /// returns how many rows were touched.
    ///
    /// Rows are only modified once every row has been evaluated, so a failing
    /// predicate leaves the table unchanged.
    pub fn update(
        &mut self,
        assignments: &[(String, Value)],
        mut predicate: impl FnMut(&Row) -> Result<bool, ExecutionError>,
    ) -> Result<usize, ExecutionError> {
        self.require_declared(assignments.iter().map(|(column, _)| column.as_str()))?;

        let mut targets = Vec::new();
        for (index, row) in self.rows.iter().enumerate() {
            if predicate(row)? {
                targets.push(index);
            }
        }
        for &index in &targets {
            let row = &mut self.rows[index];
            for (column, value) in assignments {
                row.insert(column.as_str(), value.clone());
            }
        }
        Ok(targets.len())
    }

    /// Removes every row accepted by `predicate` and returns how many were
    /// removed. Like [`Table::update`], nothing changes if evaluation fails.
    pub fn delete(
        &mut self,
        mut predicate: impl FnMut(&Row) -> Result<bool, ExecutionError>,
    ) -> Result<usize, ExecutionError> {
        let mut keep = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            keep.push(!predicate(row)?);
        }
        let before = self.rows.len();
        let mut flags = keep.into_iter();
        self.rows.retain(|_| flags.next().unwrap_or(true));
        Ok(before - self.rows.len())
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.rows.len();
        self.rows.clear();
        removed
    }
}
