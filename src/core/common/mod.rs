pub mod error;
pub mod types;

pub use error::SqlcError;
