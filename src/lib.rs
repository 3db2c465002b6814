#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # sqlc: a small SQL compiler and in-memory executor
//!
//! `sqlc` takes one statement of a SQL subset through four stages:
//! - tokenizing into positioned tokens
//! - recursive-descent parsing into a typed statement tree
//! - semantic analysis against the schema catalog
//! - execution against an in-memory row store
//!
//! Supported statements are `SELECT`, `INSERT`, `UPDATE`, `DELETE`,
//! `CREATE TABLE` and `DROP TABLE`. The database can be saved to and loaded
//! from a JSON snapshot.
//!
//! Two deliberate departures from standard SQL: `WHERE` expressions have a
//! single precedence level and group to the right (`a > 1 AND b < 2` means
//! `a > (1 AND (b < 2))`, use parentheses), and `AND`/`OR` always evaluate
//! both operands.

pub mod api;
pub mod core;

pub use api::Connection;
pub use crate::core::common::SqlcError;
pub use crate::core::config::{Config, ConfigBuilder};

/// Core result type for the library
pub type Result<T> = std::result::Result<T, SqlcError>;
