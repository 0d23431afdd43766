//! Table references, the entry point for building queries.

use serde::{Deserialize, Serialize};

use crate::ast::{Attribute, AttributeName, Node};
use crate::select::{ProjectExpr, Select};

/// A named relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    name: String,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference a column of this table. Pass a [`SqlLiteral`] to get a
    /// raw attribute name that renders unquoted.
    ///
    /// [`SqlLiteral`]: crate::ast::SqlLiteral
    pub fn attr(&self, name: impl Into<AttributeName>) -> Attribute {
        Attribute {
            relation: self.clone(),
            name: name.into(),
        }
    }

    /// Start a query on this table, filtered by `expr`.
    pub fn filter(&self, expr: impl Into<Node>) -> Select {
        Select::new().from(self.clone()).filter(expr)
    }

    /// Start a query on this table, projecting the given expressions.
    pub fn project<I>(&self, exprs: I) -> Select
    where
        I: IntoIterator,
        I::Item: Into<ProjectExpr>,
    {
        Select::new().from(self.clone()).project(exprs)
    }
}
