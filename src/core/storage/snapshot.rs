//! JSON snapshot of the row store.
//!
//! Shape: `{ "<table>": { "columns": { "<name>": "<type>", ... }, "rows": [ {...}, ... ] } }`,
//! with tables, columns and row keys all kept in their original order.

use crate::core::catalog::TableColumns;
use crate::core::common::types::{OrderedMap, Row};
use crate::core::common::SqlcError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub columns: TableColumns,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub tables: OrderedMap<TableSnapshot>,
}

impl Snapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, SqlcError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, SqlcError> {
        let json = if pretty { serde_json::to_string_pretty(self)? } else { serde_json::to_string(self)? };
        Ok(json)
    }

    /// Reads a snapshot file.
    ///
    /// # Errors
    /// `SqlcError::Io` if the file cannot be read, `SqlcError::Json` if it is
    /// not a valid snapshot.
    pub fn load(path: &Path) -> Result<Self, SqlcError> {
        let contents = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), tables = snapshot.tables.len(), "snapshot loaded");
        Ok(snapshot)
    }

    /// Writes the snapshot as pretty-printed JSON, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), SqlcError> {
        fs::write(path, self.to_json(true)?)?;
        tracing::info!(path = %path.display(), tables = self.tables.len(), "snapshot saved");
        Ok(())
    }
}
