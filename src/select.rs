//! The immutable SELECT builder.
//!
//! Every transforming operation takes `&self` and returns a new tree; the
//! receiver stays usable unchanged. Filter subtrees are `Arc`-shared, so
//! deriving a new tree never deep-copies what both trees have in common.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ast::{Attribute, Node, SqlLiteral};
use crate::table::Table;

/// One entry handed to `project`: a bare column name resolved against the
/// query's table, or an expression used as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectExpr {
    Name(String),
    Expr(Node),
}

impl From<&str> for ProjectExpr {
    fn from(name: &str) -> Self {
        ProjectExpr::Name(name.to_string())
    }
}

impl From<String> for ProjectExpr {
    fn from(name: String) -> Self {
        ProjectExpr::Name(name)
    }
}

impl From<Node> for ProjectExpr {
    fn from(node: Node) -> Self {
        ProjectExpr::Expr(node)
    }
}

impl From<Attribute> for ProjectExpr {
    fn from(attribute: Attribute) -> Self {
        ProjectExpr::Expr(attribute.into())
    }
}

impl From<SqlLiteral> for ProjectExpr {
    fn from(literal: SqlLiteral) -> Self {
        ProjectExpr::Expr(literal.into())
    }
}

impl From<Table> for ProjectExpr {
    fn from(table: Table) -> Self {
        ProjectExpr::Expr(table.into())
    }
}

/// Ordered list of select-list expressions. Order is preserved verbatim
/// into the rendered SQL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection(Vec<Node>);

impl Projection {
    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Root of the filter tree: empty, or a single expression representing
/// the whole boolean condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Where(Option<Arc<Node>>);

impl Where {
    pub fn expr(&self) -> Option<&Node> {
        self.0.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Combine via conjunction: an empty filter becomes `other`; a
    /// non-empty one is replaced by `And(existing, other)`. The existing
    /// subtree is shared, not copied.
    pub fn and(&self, other: impl Into<Node>) -> Where {
        let other = Arc::new(other.into());
        Where(Some(match &self.0 {
            Some(expr) => Arc::new(Node::And(expr.clone(), other)),
            None => other,
        }))
    }

    /// Combine via disjunction; same replace-or-set rule as [`Where::and`].
    pub fn or(&self, other: impl Into<Node>) -> Where {
        let other = Arc::new(other.into());
        Where(Some(match &self.0 {
            Some(expr) => Arc::new(Node::Or(expr.clone(), other)),
            None => other,
        }))
    }
}

/// An immutable SELECT statement under construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Select {
    table: Option<Table>,
    projections: Projection,
    wheres: Where,
}

impl Select {
    /// An empty query: no table, no projections, no filter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn projections(&self) -> &Projection {
        &self.projections
    }

    pub fn wheres(&self) -> &Where {
        &self.wheres
    }

    /// Replace the source table, keeping projections and filter.
    pub fn from(&self, table: Table) -> Select {
        Select {
            table: Some(table),
            projections: self.projections.clone(),
            wheres: self.wheres.clone(),
        }
    }

    /// Append expressions to the projection list, in the given order.
    /// Bare names resolve to attributes of the current table.
    pub fn project<I>(&self, exprs: I) -> Select
    where
        I: IntoIterator,
        I::Item: Into<ProjectExpr>,
    {
        let mut projections = self.projections.clone();
        for expr in exprs {
            projections.0.push(self.resolve(expr.into()));
        }
        Select {
            table: self.table.clone(),
            projections,
            wheres: self.wheres.clone(),
        }
    }

    /// Add a condition to the filter via conjunction.
    pub fn filter(&self, expr: impl Into<Node>) -> Select {
        Select {
            table: self.table.clone(),
            projections: self.projections.clone(),
            wheres: self.wheres.and(expr),
        }
    }

    /// Add a condition to the filter via disjunction.
    pub fn or_filter(&self, expr: impl Into<Node>) -> Select {
        Select {
            table: self.table.clone(),
            projections: self.projections.clone(),
            wheres: self.wheres.or(expr),
        }
    }

    fn resolve(&self, expr: ProjectExpr) -> Node {
        match expr {
            ProjectExpr::Expr(node) => node,
            ProjectExpr::Name(name) => match &self.table {
                Some(table) => table.attr(name.as_str()).into(),
                // No table to bind against: degrade to a bare identifier.
                None => Node::SqlLiteral(SqlLiteral::new(name)),
            },
        }
    }
}
