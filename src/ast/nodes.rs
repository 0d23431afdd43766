//! Expression nodes for SQL SELECT trees.
//!
//! Every node is an immutable value; composite nodes hold their children
//! behind `Arc` so extending a tree shares the unchanged subtrees instead
//! of deep-copying them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ast::Value;
use crate::table::Table;

/// A raw SQL fragment inserted into the output verbatim.
///
/// Never quoted, never escaped. The caller owns the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlLiteral(String);

impl SqlLiteral {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A column reference derived from a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// The relation this attribute belongs to.
    pub relation: Table,
    pub name: AttributeName,
}

/// How an attribute name is rendered: quoted as an identifier, or raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeName {
    /// A plain column name, double-quoted when rendered.
    Named(String),
    /// Raw text emitted as-is, e.g. `*`.
    Raw(SqlLiteral),
}

impl From<&str> for AttributeName {
    fn from(name: &str) -> Self {
        AttributeName::Named(name.to_string())
    }
}

impl From<String> for AttributeName {
    fn from(name: String) -> Self {
        AttributeName::Named(name)
    }
}

impl From<SqlLiteral> for AttributeName {
    fn from(literal: SqlLiteral) -> Self {
        AttributeName::Raw(literal)
    }
}

/// A generic `left OP right` expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfixOperation {
    pub operator: String,
    pub left: Arc<Node>,
    pub right: Arc<Node>,
}

/// A single expression node.
///
/// The set of variants is closed: the SQL generator matches on it
/// exhaustively, so a new variant without a rendering rule is a compile
/// error rather than a render-time surprise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A table reference used as an expression.
    Table(Table),
    /// A column reference.
    Attribute(Attribute),
    /// A parenthesised sub-expression.
    Grouping(Arc<Node>),
    /// Boolean conjunction. Chains nest as built; there is no flattening.
    And(Arc<Node>, Arc<Node>),
    /// Boolean disjunction.
    Or(Arc<Node>, Arc<Node>),
    /// `left OP right` with an arbitrary operator.
    Infix(InfixOperation),
    /// Raw SQL text, emitted verbatim.
    SqlLiteral(SqlLiteral),
    /// A value rendered as a single-quoted literal.
    Quoted(Value),
}

impl Node {
    /// Build a `left OP right` expression. Both operands go through value
    /// coercion.
    pub fn infix(operator: impl Into<String>, left: impl Into<Node>, right: impl Into<Node>) -> Node {
        Node::Infix(InfixOperation {
            operator: operator.into(),
            left: Arc::new(left.into()),
            right: Arc::new(right.into()),
        })
    }

    /// Build `left = right`.
    pub fn equality(left: impl Into<Node>, right: impl Into<Node>) -> Node {
        Node::infix("=", left, right)
    }

    /// Wrap an expression in parentheses.
    pub fn grouping(expr: impl Into<Node>) -> Node {
        Node::Grouping(Arc::new(expr.into()))
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Node::Table(table)
    }
}

impl From<Attribute> for Node {
    fn from(attribute: Attribute) -> Self {
        Node::Attribute(attribute)
    }
}

impl From<SqlLiteral> for Node {
    fn from(literal: SqlLiteral) -> Self {
        Node::SqlLiteral(literal)
    }
}
