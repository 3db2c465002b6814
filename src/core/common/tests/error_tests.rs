use crate::core::common::error::SqlcError;
use crate::core::query::analyzer::SemanticError;
use crate::core::query::executor::ExecutionError;
use crate::core::query::sql::{SqlParser, Tokenizer};
use std::error::Error;
use std::io;

#[test]
fn test_error_display_and_source() {
    let io_err = SqlcError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
    assert_eq!(format!("{}", io_err), "IO Error: file not found");
    assert!(io_err.source().is_some());

    let serde_err = serde_json::from_str::<serde_json::Value>("{\"a\":").unwrap_err();
    let json_err = SqlcError::Json(serde_err);
    assert!(format!("{}", json_err).starts_with("JSON Error: "));
    assert!(json_err.source().is_some());

    let config_err = SqlcError::Configuration("bad filter".to_string());
    assert_eq!(format!("{}", config_err), "Configuration error: bad filter");
    assert!(config_err.source().is_none());
}

#[test]
fn test_stage_errors_keep_their_message() {
    let parse_err = SqlParser::new(Tokenizer::new("SELECT FROM users;").tokenize()).parse().unwrap_err();
    let message = parse_err.to_string();
    let err: SqlcError = parse_err.into();
    assert_eq!(err.kind(), "parse");
    assert_eq!(err.to_string(), message);

    let err: SqlcError = SemanticError::TableNotFound { table: "t".into() }.into();
    assert_eq!(err.kind(), "semantic");
    assert_eq!(err.to_string(), "Semantic error: Table 't' does not exist");

    let err: SqlcError = ExecutionError::ColumnNotInRow { column: "age".into() }.into();
    assert_eq!(err.kind(), "execution");
    assert_eq!(err.to_string(), "Execution error: Column 'age' does not exist in row");
    assert!(err.source().is_some());
}

#[test]
fn test_from_std_io_error() {
    let std_io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
    let err: SqlcError = std_io_err.into();
    match err {
        SqlcError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
        _ => panic!("Expected SqlcError::Io variant"),
    }
}

#[test]
fn test_from_serde_json_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("[1, 2").unwrap_err();
    let original_kind = serde_err.classify();

    let err: SqlcError = serde_err.into();
    assert_eq!(err.kind(), "json");
    match err {
        SqlcError::Json(e) => assert_eq!(e.classify(), original_kind),
        _ => panic!("Expected SqlcError::Json variant"),
    }
}
