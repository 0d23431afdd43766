//! Scalar values and the value-to-node coercion policy.

use serde::{Deserialize, Serialize};

use crate::ast::{Node, SqlLiteral};

/// A scalar value appearing in a predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// String
    String(String),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// The raw textual form of the value. No quoting here: single-quoting a
/// string value is the SQL generator's job.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

/// Value coercion: numbers become raw (unquoted) literals, everything
/// else is wrapped for single-quoted rendering. Expression nodes never
/// reach this point; their `From` impls convert them structurally.
impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Int(n) => Node::SqlLiteral(SqlLiteral::new(n.to_string())),
            Value::Float(n) => Node::SqlLiteral(SqlLiteral::new(n.to_string())),
            other => Node::Quoted(other),
        }
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::from(Value::from(b))
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Node::from(Value::from(n))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::from(Value::from(n))
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::from(Value::from(n))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::from(Value::from(s))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::from(Value::from(s))
    }
}
