use crate::core::common::types::Value;
use std::fmt;

/// A literal as written in the query text.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    String(String),
    Integer(i64),
    Float(f64),
}

impl Literal {
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::String(s) => Value::Text(s.clone()),
            Self::Integer(i) => Value::Integer(*i),
            Self::Float(f) => Value::Float(*f),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    And,
    Or,
}

impl BinaryOperator {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A filter expression tree.
///
/// Binary expressions are built right-associatively with a single precedence
/// level (see the parser), so the shape of the tree is exactly the shape the
/// evaluator walks.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Column(String),
    Literal(Literal),
    Binary { left: Box<Expression>, op: BinaryOperator, right: Box<Expression> },
}

impl Expression {
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary { left: Box::new(left), op, right: Box::new(right) }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(name) => f.write_str(name),
            Self::Literal(literal) => write!(f, "{}", literal.to_value()),
            Self::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SelectColumn {
    /// `*`: every column of the target table.
    Asterisk,
    Column(String),
}

#[derive(Debug, PartialEq, Clone)]
pub struct SelectStatement {
    pub columns: Vec<SelectColumn>,
    pub table: String,
    pub condition: Option<Expression>,
}

impl SelectStatement {
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.columns.contains(&SelectColumn::Asterisk)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct InsertStatement {
    pub table: String,
    /// Empty means "every column in schema order"; filled in by the analyzer.
    pub columns: Vec<String>,
    pub values: Vec<Literal>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Assignment {
    pub column: String,
    pub value: Literal,
}

#[derive(Debug, PartialEq, Clone)]
pub struct UpdateStatement {
    pub table: String,
    pub assignments: Vec<Assignment>,
    pub condition: Option<Expression>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct DeleteStatement {
    pub table: String,
    pub condition: Option<Expression>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ColumnDef {
    pub name: String,
    /// Free-form type name; not checked against any type system.
    pub data_type: String,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CreateTableStatement {
    pub table: String,
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DropTableStatement {
    pub table: String,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    CreateTable(CreateTableStatement),
    DropTable(DropTableStatement),
}

impl Statement {
    /// Stable lowercase tag, matching the `type` field of the execution result.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::Insert(_) => "insert",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
            Self::CreateTable(_) => "create_table",
            Self::DropTable(_) => "drop_table",
        }
    }

    #[must_use]
    pub fn table(&self) -> &str {
        match self {
            Self::Select(s) => &s.table,
            Self::Insert(s) => &s.table,
            Self::Update(s) => &s.table,
            Self::Delete(s) => &s.table,
            Self::CreateTable(s) => &s.table,
            Self::DropTable(s) => &s.table,
        }
    }
}
