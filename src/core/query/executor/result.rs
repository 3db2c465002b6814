use crate::core::common::types::Row;
use serde::Serialize;

/// Outcome of one executed statement.
///
/// Serializes with a `type` tag, e.g. `{"type":"select","rows":[...],"count":1}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExecutionResult {
    Select { rows: Vec<Row>, count: usize },
    Insert { count: usize },
    Update { count: usize },
    Delete { count: usize },
    CreateTable { table: String },
    DropTable { table: String },
}

impl ExecutionResult {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Select { .. } => "select",
            Self::Insert { .. } => "insert",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::CreateTable { .. } => "create_table",
            Self::DropTable { .. } => "drop_table",
        }
    }

    /// Rows returned (select) or affected (insert, update, delete).
    #[must_use]
    pub const fn count(&self) -> Option<usize> {
        match self {
            Self::Select { count, .. }
            | Self::Insert { count }
            | Self::Update { count }
            | Self::Delete { count } => Some(*count),
            Self::CreateTable { .. } | Self::DropTable { .. } => None,
        }
    }

    #[must_use]
    pub fn rows(&self) -> Option<&[Row]> {
        match self {
            Self::Select { rows, .. } => Some(rows),
            _ => None,
        }
    }
}
