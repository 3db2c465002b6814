use crate::core::query::analyzer::SemanticError;
use crate::core::query::executor::ExecutionError;
use crate::core::query::sql::SqlParseError;
use std::fmt;

/// Top-level error for everything the crate does.
///
/// The pipeline stages keep their own error types; this enum wraps them so
/// callers can use `?` across stages and still tell the stages apart through
/// [`SqlcError::kind`].
#[derive(Debug)]
pub enum SqlcError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Configuration(String),
    Parse(SqlParseError),
    Semantic(SemanticError),
    Execution(ExecutionError),
}

impl SqlcError {
    /// Stable lowercase tag for the failing stage.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::Configuration(_) => "configuration",
            Self::Parse(_) => "parse",
            Self::Semantic(_) => "semantic",
            Self::Execution(_) => "execution",
        }
    }
}

impl fmt::Display for SqlcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO Error: {e}"),
            Self::Json(e) => write!(f, "JSON Error: {e}"),
            Self::Configuration(s) => write!(f, "Configuration error: {s}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Semantic(e) => write!(f, "{e}"),
            Self::Execution(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SqlcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Execution(e) => Some(e),
            Self::Configuration(_) => None,
        }
    }
}

impl From<std::io::Error> for SqlcError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SqlcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<SqlParseError> for SqlcError {
    fn from(err: SqlParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<SemanticError> for SqlcError {
    fn from(err: SemanticError) -> Self {
        Self::Semantic(err)
    }
}

impl From<ExecutionError> for SqlcError {
    fn from(err: ExecutionError) -> Self {
        Self::Execution(err)
    }
}
