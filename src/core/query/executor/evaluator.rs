//! Filter evaluation against a single row.

use super::ExecutionError;
use crate::core::common::types::{Row, Value};
use crate::core::query::sql::ast::{BinaryOperator, Expression};
use std::cmp::Ordering;

/// Evaluates `expression` against `row`.
///
/// Column references must be present as keys in the row; a key holding
/// `NULL` is fine, a missing key is [`ExecutionError::ColumnNotInRow`].
/// Both operands of a binary expression are always evaluated, including for
/// `AND` and `OR`.
pub fn evaluate(expression: &Expression, row: &Row) -> Result<Value, ExecutionError> {
    match expression {
        Expression::Column(name) => row
            .get(name)
            .cloned()
            .ok_or_else(|| ExecutionError::ColumnNotInRow { column: name.clone() }),
        Expression::Literal(literal) => Ok(literal.to_value()),
        Expression::Binary { left, op, right } => {
            let left = evaluate(left, row)?;
            let right = evaluate(right, row)?;
            apply(*op, &left, &right)
        }
    }
}

/// Whether `row` passes an optional filter; no filter accepts every row.
pub fn matches(filter: Option<&Expression>, row: &Row) -> Result<bool, ExecutionError> {
    match filter {
        Some(expression) => Ok(evaluate(expression, row)?.is_truthy()),
        None => Ok(true),
    }
}

fn apply(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, ExecutionError> {
    let result = match op {
        BinaryOperator::Equal => left.sql_eq(right),
        BinaryOperator::NotEqual => !left.sql_eq(right),
        BinaryOperator::Greater => order(op, left, right)? == Ordering::Greater,
        BinaryOperator::Less => order(op, left, right)? == Ordering::Less,
        BinaryOperator::GreaterEqual => order(op, left, right)? != Ordering::Less,
        BinaryOperator::LessEqual => order(op, left, right)? != Ordering::Greater,
        BinaryOperator::And => left.is_truthy() && right.is_truthy(),
        BinaryOperator::Or => left.is_truthy() || right.is_truthy(),
    };
    Ok(Value::Boolean(result))
}

fn order(op: BinaryOperator, left: &Value, right: &Value) -> Result<Ordering, ExecutionError> {
    left.partial_cmp(right).ok_or(ExecutionError::TypeMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}
