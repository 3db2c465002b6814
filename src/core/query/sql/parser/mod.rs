//! SQL Parser module.
//!
//! Recursive descent over the token stream produced by the tokenizer.
//! `core` holds the cursor primitives, `statement` the six statement grammars
//! and `expression` the WHERE-clause, column-list and literal rules.

mod core;
mod expression;
mod statement;

pub use self::core::SqlParser;
