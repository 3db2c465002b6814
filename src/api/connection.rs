use crate::core::common::SqlcError;
use crate::core::config::Config;
use crate::core::query::compile;
use crate::core::query::executor::{ExecutionResult, Executor};
use crate::core::query::analyzer::SemanticAnalyzer;
use crate::core::query::sql::ast::Statement;
use crate::core::query::sql::{SqlParser, Token, TokenKind, Tokenizer};
use crate::core::storage::Snapshot;
use std::path::{Path, PathBuf};

/// A handle on one in-memory database.
///
/// Owns the executor (and with it the catalog and row store) plus the path
/// of the snapshot it was opened from, if any. Every mutating call takes
/// `&mut self`; sharing a connection between threads needs an outer lock.
#[derive(Debug)]
pub struct Connection {
    executor: Executor,
    snapshot_path: Option<PathBuf>,
}

impl Connection {
    /// Opens an empty database with nowhere to persist to.
    #[must_use]
    pub fn open_in_memory() -> Self {
        Self { executor: Executor::new(), snapshot_path: None }
    }

    /// Opens the snapshot at `path`, or an empty database if the file does
    /// not exist yet. [`Connection::persist`] writes back to the same path.
    ///
    /// # Errors
    /// Returns `SqlcError` if the file exists but cannot be read, is not a
    /// valid snapshot, or describes tables that cannot be rebuilt.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SqlcError> {
        let config = Config::builder().snapshot_path(path.as_ref()).build()?;
        Self::open_with_config(&config)
    }

    /// Opens a connection using `config.snapshot_path`.
    pub fn open_with_config(config: &Config) -> Result<Self, SqlcError> {
        let Some(path) = config.snapshot_path.clone() else {
            return Ok(Self::open_in_memory());
        };
        let executor = if path.exists() {
            Executor::from_snapshot(Snapshot::load(&path)?)?
        } else {
            tracing::debug!(path = %path.display(), "no snapshot yet, starting empty");
            Executor::new()
        };
        Ok(Self { executor, snapshot_path: Some(path) })
    }

    /// Compiles and executes a single statement.
    ///
    /// # Errors
    /// The first failing stage, tagged by [`SqlcError::kind`]. Parse and
    /// semantic failures never reach the executor.
    pub fn execute(&mut self, sql: &str) -> Result<ExecutionResult, SqlcError> {
        let statement = self.prepare(sql)?;
        Ok(self.executor.execute(&statement)?)
    }

    /// Runs the front end only and returns the analyzed statement.
    pub fn prepare(&self, sql: &str) -> Result<Statement, SqlcError> {
        compile(sql, self.executor.catalog())
    }

    /// Executes every `;`-separated statement in `sql`, in order.
    ///
    /// Each statement is analyzed against the catalog as left by the ones
    /// before it. Empty statements are skipped. Execution stops at the first
    /// failure; statements that already ran stay applied.
    pub fn execute_batch(&mut self, sql: &str) -> Result<Vec<ExecutionResult>, SqlcError> {
        let mut results = Vec::new();
        for tokens in split_statements(Tokenizer::new(sql).tokenize()) {
            let mut statement = SqlParser::new(tokens).parse()?;
            SemanticAnalyzer::new(self.executor.catalog()).analyze(&mut statement)?;
            results.push(self.executor.execute(&statement)?);
        }
        Ok(results)
    }

    /// Writes the snapshot to the path this connection was opened with.
    ///
    /// # Errors
    /// `SqlcError::Configuration` for an in-memory connection, otherwise any
    /// I/O or serialization failure.
    pub fn persist(&self) -> Result<(), SqlcError> {
        let path = self.snapshot_path.as_deref().ok_or_else(|| {
            SqlcError::Configuration("connection has no snapshot path to persist to".to_string())
        })?;
        self.executor.snapshot().save(path)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.executor.snapshot()
    }

    #[must_use]
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    #[must_use]
    pub const fn executor(&self) -> &Executor {
        &self.executor
    }
}

// Splits at `;`, keeping the terminator with its statement. Segments with
// nothing but a terminator are dropped.
fn split_statements(tokens: Vec<Token>) -> Vec<Vec<Token>> {
    let mut statements = Vec::new();
    let mut current = Vec::new();
    for token in tokens {
        match token.kind {
            TokenKind::Semicolon | TokenKind::Eof => {
                if !current.is_empty() {
                    current.push(token);
                    statements.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(token),
        }
    }
    statements
}
