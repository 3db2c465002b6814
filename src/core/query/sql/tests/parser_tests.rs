use crate::core::query::sql::ast::{
    Assignment, BinaryOperator, ColumnDef, Expression, Literal, SelectColumn, Statement,
};
use crate::core::query::sql::errors::SqlParseError;
use crate::core::query::sql::parser::SqlParser;
use crate::core::query::sql::tokenizer::{TokenKind, Tokenizer};

fn parse_str(input: &str) -> Result<Statement, SqlParseError> {
    let tokens = Tokenizer::new(input).tokenize();
    SqlParser::new(tokens).parse()
}

fn col(name: &str) -> Expression {
    Expression::Column(name.to_string())
}

fn int(value: i64) -> Expression {
    Expression::Literal(Literal::Integer(value))
}

#[test]
fn test_select_star() {
    let statement = parse_str("SELECT * FROM users;").unwrap();
    match statement {
        Statement::Select(select) => {
            assert_eq!(select.columns, vec![SelectColumn::Asterisk]);
            assert_eq!(select.table, "users");
            assert!(select.condition.is_none());
            assert!(select.is_wildcard());
        }
        other => panic!("Expected Select, got {:?}", other),
    }
}

#[test]
fn test_select_columns_with_where() {
    let statement = parse_str("SELECT id, name FROM users WHERE age >= 21").unwrap();
    let Statement::Select(select) = statement else { panic!("Expected Select") };
    assert_eq!(
        select.columns,
        vec![SelectColumn::Column("id".into()), SelectColumn::Column("name".into())]
    );
    assert_eq!(
        select.condition,
        Some(Expression::binary(col("age"), BinaryOperator::GreaterEqual, int(21)))
    );
}

#[test]
fn test_where_is_right_associative_with_uniform_precedence() {
    let statement = parse_str("SELECT * FROM t WHERE a > 1 AND b < 2").unwrap();
    let Statement::Select(select) = statement else { panic!("Expected Select") };
    let expected = Expression::binary(
        col("a"),
        BinaryOperator::Greater,
        Expression::binary(
            int(1),
            BinaryOperator::And,
            Expression::binary(col("b"), BinaryOperator::Less, int(2)),
        ),
    );
    assert_eq!(select.condition, Some(expected));
}

#[test]
fn test_parentheses_override_grouping() {
    let statement = parse_str("DELETE FROM t WHERE (a > 1) AND (b < 2)").unwrap();
    let Statement::Delete(delete) = statement else { panic!("Expected Delete") };
    let expected = Expression::binary(
        Expression::binary(col("a"), BinaryOperator::Greater, int(1)),
        BinaryOperator::And,
        Expression::binary(col("b"), BinaryOperator::Less, int(2)),
    );
    assert_eq!(delete.condition, Some(expected));
}

#[test]
fn test_where_literals_strip_quotes_and_classify_numbers() {
    let statement =
        parse_str("SELECT * FROM t WHERE name = 'John' OR score <> 2.5 OR tag != \"x\"").unwrap();
    let Statement::Select(select) = statement else { panic!("Expected Select") };
    let expected = Expression::binary(
        col("name"),
        BinaryOperator::Equal,
        Expression::binary(
            Expression::Literal(Literal::String("John".into())),
            BinaryOperator::Or,
            Expression::binary(
                col("score"),
                BinaryOperator::NotEqual,
                Expression::binary(
                    Expression::Literal(Literal::Float(2.5)),
                    BinaryOperator::Or,
                    Expression::binary(
                        col("tag"),
                        BinaryOperator::NotEqual,
                        Expression::Literal(Literal::String("x".into())),
                    ),
                ),
            ),
        ),
    );
    assert_eq!(select.condition, Some(expected));
}

#[test]
fn test_insert_with_columns() {
    let statement =
        parse_str("INSERT INTO users (id, name, age) VALUES (1, 'John', 30);").unwrap();
    let Statement::Insert(insert) = statement else { panic!("Expected Insert") };
    assert_eq!(insert.table, "users");
    assert_eq!(insert.columns, vec!["id", "name", "age"]);
    assert_eq!(
        insert.values,
        vec![Literal::Integer(1), Literal::String("John".into()), Literal::Integer(30)]
    );
}

#[test]
fn test_insert_without_columns_and_mismatched_counts() {
    // Arity is a semantic concern, not a grammar one.
    let statement = parse_str("INSERT INTO users VALUES (1, 'John')").unwrap();
    let Statement::Insert(insert) = statement else { panic!("Expected Insert") };
    assert!(insert.columns.is_empty());
    assert_eq!(insert.values.len(), 2);

    assert!(parse_str("INSERT INTO users (a, b, c) VALUES (1)").is_ok());
}

#[test]
fn test_insert_rejects_wildcard_column_list() {
    let result = parse_str("INSERT INTO users (*) VALUES (1)");
    assert!(
        matches!(result, Err(SqlParseError::UnexpectedToken { ref expected, .. }) if expected == &vec![TokenKind::Identifier]),
        "Result was: {:?}",
        result
    );
}

#[test]
fn test_update_statement() {
    let statement = parse_str("UPDATE users SET name = 'Jane', age = 25 WHERE id = 1;").unwrap();
    let Statement::Update(update) = statement else { panic!("Expected Update") };
    assert_eq!(update.table, "users");
    assert_eq!(
        update.assignments,
        vec![
            Assignment { column: "name".into(), value: Literal::String("Jane".into()) },
            Assignment { column: "age".into(), value: Literal::Integer(25) },
        ]
    );
    assert_eq!(update.condition, Some(Expression::binary(col("id"), BinaryOperator::Equal, int(1))));
}

#[test]
fn test_update_missing_set_keyword() {
    let result = parse_str("UPDATE users name = 'value';");
    match result {
        Err(SqlParseError::UnexpectedToken { expected, found }) => {
            assert_eq!(expected, vec![TokenKind::Set]);
            assert_eq!(found.kind, TokenKind::Identifier);
            assert_eq!(found.value, "name");
        }
        other => panic!("Wrong result: {:?}", other),
    }
}

#[test]
fn test_update_value_must_be_literal() {
    let result = parse_str("UPDATE users SET name = other");
    assert!(
        matches!(result, Err(SqlParseError::UnexpectedToken { ref found, .. }) if found.value == "other"),
        "Result was: {:?}",
        result
    );
}

#[test]
fn test_delete_without_where() {
    let statement = parse_str("delete from users").unwrap();
    assert_eq!(
        statement,
        Statement::Delete(crate::core::query::sql::ast::DeleteStatement {
            table: "users".into(),
            condition: None,
        })
    );
}

#[test]
fn test_create_table_keeps_duplicate_columns() {
    let statement = parse_str("CREATE TABLE t (id INTEGER, id STRING)").unwrap();
    let Statement::CreateTable(create) = statement else { panic!("Expected CreateTable") };
    assert_eq!(
        create.columns,
        vec![
            ColumnDef { name: "id".into(), data_type: "INTEGER".into() },
            ColumnDef { name: "id".into(), data_type: "STRING".into() },
        ]
    );
}

#[test]
fn test_drop_table() {
    let statement = parse_str("DROP TABLE users;").unwrap();
    assert_eq!(statement.kind(), "drop_table");
    assert_eq!(statement.table(), "users");
}

#[test]
fn test_select_without_columns_points_at_from() {
    let result = parse_str("SELECT FROM users;");
    let err = result.unwrap_err();
    assert_eq!(err.expected(), &[TokenKind::Identifier, TokenKind::Asterisk]);
    let token = err.token();
    assert_eq!(token.kind, TokenKind::From);
    assert_eq!((token.line, token.column), (1, 8));
    assert_eq!(
        err.to_string(),
        "Parse error at line 1, column 8: Expected IDENTIFIER or ASTERISK, got FROM 'FROM'"
    );
}

#[test]
fn test_unknown_statement() {
    let result = parse_str("EXPLAIN SELECT * FROM t");
    assert!(
        matches!(result, Err(SqlParseError::UnknownStatement(ref token)) if token.value == "EXPLAIN"),
        "Result was: {:?}",
        result
    );
}

#[test]
fn test_empty_input() {
    let result = parse_str("   ");
    assert!(
        matches!(result, Err(SqlParseError::UnknownStatement(ref token)) if token.kind == TokenKind::Eof),
        "Result was: {:?}",
        result
    );
}

#[test]
fn test_trailing_tokens_rejected() {
    let result = parse_str("SELECT * FROM t; DROP TABLE t;");
    match result {
        Err(SqlParseError::UnexpectedToken { expected, found }) => {
            assert_eq!(expected, vec![TokenKind::Eof]);
            assert_eq!(found.kind, TokenKind::Drop);
        }
        other => panic!("Wrong result: {:?}", other),
    }
}

#[test]
fn test_unknown_character_surfaces_as_parse_error() {
    let result = parse_str("SELECT * FROM users WHERE id = #");
    match result {
        Err(SqlParseError::UnexpectedToken { found, .. }) => {
            assert_eq!(found.kind, TokenKind::Unknown);
            assert_eq!(found.value, "#");
        }
        other => panic!("Wrong result: {:?}", other),
    }
}

#[test]
fn test_unclosed_parenthesis() {
    let result = parse_str("SELECT * FROM t WHERE (a = 1");
    match result {
        Err(SqlParseError::UnexpectedToken { expected, found }) => {
            assert_eq!(expected, vec![TokenKind::RightParen]);
            assert_eq!(found.kind, TokenKind::Eof);
        }
        other => panic!("Wrong result: {:?}", other),
    }
}

#[test]
fn test_integer_overflow_is_invalid_number() {
    let result = parse_str("INSERT INTO t VALUES (99999999999999999999)");
    assert!(
        matches!(result, Err(SqlParseError::InvalidNumber(ref token)) if token.value == "99999999999999999999"),
        "Result was: {:?}",
        result
    );
}
