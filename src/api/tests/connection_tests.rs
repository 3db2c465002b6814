use crate::api::Connection;
use crate::core::common::types::{Row, Value};
use crate::core::common::SqlcError;
use crate::core::query::executor::ExecutionResult;
use crate::core::query::sql::ast::Statement;
use crate::core::query::sql::TokenKind;
use tempfile::tempdir;

const CREATE_USERS: &str = "CREATE TABLE users (id INTEGER, name STRING, age INTEGER);";

fn users_connection() -> Connection {
    let mut conn = Connection::open_in_memory();
    conn.execute(CREATE_USERS).unwrap();
    conn
}

fn user(id: i64, name: &str, age: i64) -> Row {
    [("id", Value::Integer(id)), ("name", Value::Text(name.into())), ("age", Value::Integer(age))]
        .into_iter()
        .collect()
}

#[test]
fn test_create_insert_select_scenario() {
    let mut conn = users_connection();
    let inserted = conn.execute("INSERT INTO users (id, name, age) VALUES (1, 'John', 30);").unwrap();
    assert_eq!(inserted, ExecutionResult::Insert { count: 1 });

    let result = conn.execute("SELECT * FROM users WHERE age > 25;").unwrap();
    assert_eq!(result, ExecutionResult::Select { rows: vec![user(1, "John", 30)], count: 1 });
}

#[test]
fn test_update_delete_scenario() {
    let mut conn = users_connection();
    conn.execute("INSERT INTO users (id, name, age) VALUES (1, 'John', 30);").unwrap();

    let updated = conn.execute("UPDATE users SET name = 'Jane', age = 25 WHERE id = 1;").unwrap();
    assert_eq!(updated.count(), Some(1));
    let selected = conn.execute("SELECT * FROM users WHERE id = 1;").unwrap();
    assert_eq!(selected.rows(), Some(&[user(1, "Jane", 25)][..]));

    let deleted = conn.execute("DELETE FROM users WHERE id = 1;").unwrap();
    assert_eq!(deleted, ExecutionResult::Delete { count: 1 });
    let remaining = conn.execute("SELECT * FROM users;").unwrap();
    assert_eq!(remaining.count(), Some(0));
}

#[test]
fn test_semantic_failure_does_not_execute() {
    let mut conn = users_connection();
    let err = conn.execute("SELECT missing_col FROM users;").unwrap_err();
    assert_eq!(err.kind(), "semantic");
    assert_eq!(err.to_string(), "Semantic error: Column 'missing_col' does not exist in table 'users'");

    // A rejected insert leaves no trace in the store.
    let err = conn.execute("INSERT INTO users (id, name) VALUES (1)").unwrap_err();
    assert_eq!(err.kind(), "semantic");
    assert_eq!(conn.execute("SELECT * FROM users").unwrap().count(), Some(0));
}

#[test]
fn test_parse_failure_points_at_from() {
    let mut conn = users_connection();
    match conn.execute("SELECT FROM users;") {
        Err(SqlcError::Parse(err)) => {
            assert_eq!(err.token().kind, TokenKind::From);
            assert_eq!((err.token().line, err.token().column), (1, 8));
            assert_eq!(err.expected(), &[TokenKind::Identifier, TokenKind::Asterisk]);
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_duplicate_table_scenario() {
    let mut conn = users_connection();
    let err = conn.execute(CREATE_USERS).unwrap_err();
    assert!(
        matches!(err, SqlcError::Semantic(_)),
        "Result was: {:?}",
        err
    );
    assert_eq!(err.to_string(), "Semantic error: Table 'users' already exists");
}

#[test]
fn test_pipeline_is_deterministic() {
    let script = [
        CREATE_USERS,
        "INSERT INTO users VALUES (1, 'John', 30)",
        "INSERT INTO users VALUES (2, 'Kate', 22)",
        "UPDATE users SET age = 31 WHERE name = 'John'",
        "SELECT name, age FROM users WHERE age >= 22",
    ];
    let run = || {
        let mut conn = Connection::open_in_memory();
        script.iter().map(|sql| conn.execute(sql).unwrap()).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());

    let mut conn = Connection::open_in_memory();
    for sql in &script[..4] {
        conn.execute(sql).unwrap();
    }
    let first = conn.execute(script[4]).unwrap();
    let second = conn.execute(script[4]).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.count(), Some(2));
}

#[test]
fn test_prepare_fills_insert_columns_without_executing() {
    let conn = users_connection();
    let statement = conn.prepare("INSERT INTO users VALUES (1, 'John', 30)").unwrap();
    let Statement::Insert(insert) = statement else { panic!("Expected Insert") };
    assert_eq!(insert.columns, vec!["id", "name", "age"]);
    assert!(conn.executor().store().table("users").unwrap().is_empty());
}

#[test]
fn test_execute_batch_runs_in_order() {
    let mut conn = Connection::open_in_memory();
    let results = conn
        .execute_batch(
            "CREATE TABLE t (a INTEGER, b STRING);\n\
             INSERT INTO t VALUES (1, 'x');\n\
             INSERT INTO t VALUES (2, 'semi;colon');\n\
             SELECT b FROM t WHERE a = 2;",
        )
        .unwrap();
    let kinds: Vec<_> = results.iter().map(ExecutionResult::kind).collect();
    assert_eq!(kinds, vec!["create_table", "insert", "insert", "select"]);
    let expected: Row = [("b", Value::Text("semi;colon".into()))].into_iter().collect();
    assert_eq!(results[3].rows(), Some(&[expected][..]));
}

#[test]
fn test_execute_batch_stops_at_first_failure() {
    let mut conn = Connection::open_in_memory();
    let err = conn
        .execute_batch("CREATE TABLE t (a INTEGER); INSERT INTO t VALUES (1, 2); INSERT INTO t VALUES (3);")
        .unwrap_err();
    assert_eq!(err.kind(), "semantic");
    // The statement before the failure stays applied, the one after never runs.
    assert!(conn.executor().catalog().table_exists("t"));
    assert!(conn.executor().store().table("t").unwrap().is_empty());
}

#[test]
fn test_persist_and_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.json");
    {
        let mut conn = Connection::open(&path).unwrap();
        assert!(conn.executor().catalog().is_empty());
        conn.execute(CREATE_USERS).unwrap();
        conn.execute("INSERT INTO users (name, id) VALUES ('John', 1)").unwrap();
        conn.persist().unwrap();
    }

    let mut conn = Connection::open(&path).unwrap();
    assert_eq!(conn.snapshot_path(), Some(path.as_path()));
    let result = conn.execute("SELECT * FROM users").unwrap();
    let expected: Row = [("name", Value::Text("John".into())), ("id", Value::Integer(1))]
        .into_iter()
        .collect();
    assert_eq!(result.rows(), Some(&[expected][..]));
}

#[test]
fn test_in_memory_persist_is_configuration_error() {
    let conn = Connection::open_in_memory();
    let err = conn.persist().unwrap_err();
    assert_eq!(err.kind(), "configuration");
}

#[test]
fn test_open_rejects_corrupt_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"t\": {\"columns\": {\"a\": \"INTEGER\"}, \"rows\": [{\"zzz\": 1}]}}").unwrap();
    let err = Connection::open(&path).unwrap_err();
    assert_eq!(err.kind(), "execution");
    std::fs::write(&path, "not json").unwrap();
    assert_eq!(Connection::open(&path).unwrap_err().kind(), "json");
}
