pub mod ast;
pub mod errors;
pub mod parser;
pub mod tokenizer;

pub use errors::SqlParseError;
pub use parser::SqlParser;
pub use tokenizer::{Token, TokenKind, Tokenizer};

#[cfg(test)]
mod tests;
