//! Relational query builder - immutable SELECT ASTs, zero string concatenation.
//!
//! Queries are built as expression trees through a fluent, side-effect-free
//! API and rendered once by a visitor that owns every quoting decision:
//!
//! ```
//! use rql::prelude::*;
//!
//! let users = Table::new("users");
//! let query = users
//!     .project(["id", "name"])
//!     .filter(users.attr("id").eq(1));
//!
//! assert_eq!(
//!     render(&query).unwrap(),
//!     r#"SELECT "users"."id", "users"."name" FROM "users" WHERE "users"."id" = 1"#
//! );
//! ```
//!
//! Every builder operation returns a new tree and leaves the receiver
//! untouched; shared subtrees are reference-counted, not copied. Nothing
//! here executes SQL - the crate stops at the string.

pub mod ast;
pub mod error;
pub mod select;
pub mod table;
pub mod visitor;

pub use ast::{Attribute, AttributeName, InfixOperation, Node, Predications, SqlLiteral, Value};
pub use error::{RqlError, RqlResult};
pub use select::{ProjectExpr, Projection, Select, Where};
pub use table::Table;
pub use visitor::sql::SqlVisitor;
pub use visitor::{Collector, Visitor};

/// Wrap raw SQL text for verbatim insertion into the output.
pub fn sql(text: impl Into<String>) -> SqlLiteral {
    SqlLiteral::new(text)
}

/// The `*` select-list literal.
pub fn star() -> SqlLiteral {
    sql("*")
}

/// Render a query tree to its SQL string. The sole emission entry point.
pub fn render(tree: &Select) -> RqlResult<String> {
    SqlVisitor::new().render(tree)
}

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::select::{ProjectExpr, Select};
    pub use crate::table::Table;
    pub use crate::visitor::{Visitor, sql::SqlVisitor};
    pub use crate::{render, sql, star};
}
