pub mod catalog;
pub mod common;
pub mod config;
pub mod query;
pub mod storage;

pub use self::config::Config;
