//! Public API for embedding the SQL engine.
//!
//! The main entry point is [`Connection`], which runs statements end to end
//! and optionally persists the database as a JSON snapshot.

pub mod connection;

pub use connection::Connection;

#[cfg(test)]
mod tests;
