use crate::core::common::SqlcError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings shared by the CLI and embedding applications.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// JSON snapshot to load on open and write back on persist.
    pub snapshot_path: Option<PathBuf>,
    pub pretty_output: bool,
    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Write the snapshot after every successful run of the CLI.
    pub persist_after_execute: bool,
}

/// Builder for [`Config`]. Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    snapshot_path: Option<PathBuf>,
    pretty_output: Option<bool>,
    log_filter: Option<String>,
    persist_after_execute: Option<bool>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn pretty_output(mut self, pretty: bool) -> Self {
        self.pretty_output = Some(pretty);
        self
    }

    #[must_use]
    pub fn log_filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn persist_after_execute(mut self, persist: bool) -> Self {
        self.persist_after_execute = Some(persist);
        self
    }

    /// Builds the Config instance with validation
    pub fn build(self) -> Result<Config, SqlcError> {
        let defaults = Config::default();
        let config = Config {
            snapshot_path: self.snapshot_path.or(defaults.snapshot_path),
            pretty_output: self.pretty_output.unwrap_or(defaults.pretty_output),
            log_filter: self.log_filter.unwrap_or(defaults.log_filter),
            persist_after_execute: self.persist_after_execute.unwrap_or(defaults.persist_after_execute),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            pretty_output: true,
            log_filter: "warn".to_string(),
            persist_after_execute: true,
        }
    }
}

impl Config {
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<(), SqlcError> {
        if self.log_filter.trim().is_empty() {
            return Err(SqlcError::Configuration("log_filter must not be empty".to_string()));
        }

        if self.snapshot_path.as_ref().is_some_and(|path| path.as_os_str().is_empty()) {
            return Err(SqlcError::Configuration(
                "snapshot_path must not be empty when set".to_string(),
            ));
        }

        Ok(())
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `SqlcError::Configuration` if parsing or validation fails and
    /// `SqlcError::Io` if the file exists but cannot be read.
    pub fn load_from_file(path: &Path) -> Result<Self, SqlcError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Self = toml::from_str(&contents).map_err(|e| {
                    SqlcError::Configuration(format!(
                        "Failed to parse config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                config.validate()?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(SqlcError::Io(e)),
        }
    }

    /// Loads configuration from an optional TOML file path; `None` gives the defaults.
    pub fn load_or_default(optional_path: Option<&Path>) -> Result<Self, SqlcError> {
        match optional_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}
