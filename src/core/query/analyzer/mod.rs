//! Schema-aware validation of parsed statements.
//!
//! Every statement passes through [`SemanticAnalyzer::analyze`] before it is
//! executed. The analyzer reads the catalog but never changes it; the only
//! mutation it performs is filling in the implicit column list of an INSERT.

mod errors;

pub use errors::SemanticError;

use crate::core::catalog::SchemaCatalog;
use crate::core::query::sql::ast::{
    CreateTableStatement, Expression, InsertStatement, SelectColumn, SelectStatement, Statement,
};
use std::collections::HashSet;

pub struct SemanticAnalyzer<'a> {
    catalog: &'a SchemaCatalog,
}

impl<'a> SemanticAnalyzer<'a> {
    #[must_use]
    pub const fn new(catalog: &'a SchemaCatalog) -> Self {
        Self { catalog }
    }

    /// Validates `statement` against the catalog.
    ///
    /// # Errors
    /// Returns the first [`SemanticError`] found.
    pub fn analyze(&self, statement: &mut Statement) -> Result<(), SemanticError> {
        match statement {
            Statement::Select(select) => self.analyze_select(select),
            Statement::Insert(insert) => self.analyze_insert(insert),
            Statement::Update(update) => {
                self.require_table(&update.table)?;
                for assignment in &update.assignments {
                    self.require_column(&update.table, &assignment.column)?;
                }
                self.analyze_condition(update.condition.as_ref(), &update.table)
            }
            Statement::Delete(delete) => {
                self.require_table(&delete.table)?;
                self.analyze_condition(delete.condition.as_ref(), &delete.table)
            }
            Statement::CreateTable(create) => self.analyze_create_table(create),
            Statement::DropTable(drop) => self.require_table(&drop.table),
        }?;
        tracing::trace!(kind = statement.kind(), "analysis ok");
        Ok(())
    }

    fn require_table(&self, table: &str) -> Result<(), SemanticError> {
        if self.catalog.table_exists(table) {
            Ok(())
        } else {
            Err(SemanticError::TableNotFound { table: table.to_string() })
        }
    }

    fn require_column(&self, table: &str, column: &str) -> Result<(), SemanticError> {
        if self.catalog.column_exists(table, column)? {
            Ok(())
        } else {
            Err(SemanticError::ColumnNotFound { column: column.to_string(), table: table.to_string() })
        }
    }

    fn analyze_select(&self, select: &SelectStatement) -> Result<(), SemanticError> {
        self.require_table(&select.table)?;
        for column in &select.columns {
            if let SelectColumn::Column(name) = column {
                self.require_column(&select.table, name)?;
            }
        }
        self.analyze_condition(select.condition.as_ref(), &select.table)
    }

    fn analyze_insert(&self, insert: &mut InsertStatement) -> Result<(), SemanticError> {
        let declared = self.catalog.columns(&insert.table)?;
        if insert.columns.is_empty() {
            insert.columns = declared.keys().map(str::to_string).collect();
        }
        for column in &insert.columns {
            self.require_column(&insert.table, column)?;
        }
        if insert.values.len() != insert.columns.len() {
            return Err(SemanticError::ValueCountMismatch {
                values: insert.values.len(),
                columns: insert.columns.len(),
            });
        }
        Ok(())
    }

    fn analyze_create_table(&self, create: &CreateTableStatement) -> Result<(), SemanticError> {
        if self.catalog.table_exists(&create.table) {
            return Err(SemanticError::TableAlreadyExists { table: create.table.clone() });
        }
        let mut seen = HashSet::new();
        for column in &create.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(SemanticError::DuplicateColumn { column: column.name.clone() });
            }
        }
        Ok(())
    }

    fn analyze_condition(&self, condition: Option<&Expression>, table: &str) -> Result<(), SemanticError> {
        condition.map_or(Ok(()), |expression| self.analyze_expression(expression, table))
    }

    // Every column reference in the tree must exist; literals are not checked.
    fn analyze_expression(&self, expression: &Expression, table: &str) -> Result<(), SemanticError> {
        match expression {
            Expression::Column(name) => self.require_column(table, name),
            Expression::Literal(_) => Ok(()),
            Expression::Binary { left, right, .. } => {
                self.analyze_expression(left, table)?;
                self.analyze_expression(right, table)
            }
        }
    }
}
