//! Predicate constructors available on every expression-capable type.

use std::sync::Arc;

use crate::ast::{Attribute, Node, SqlLiteral};
use crate::table::Table;

/// Builds composite predicate nodes out of expressions.
///
/// `eq` coerces its argument (numbers become raw literals, strings become
/// quoted values); `and`/`or` combine two expression subtrees as given.
/// All three are pure constructors.
pub trait Predications: Into<Node> + Sized {
    /// `self = other`.
    fn eq(self, other: impl Into<Node>) -> Node {
        Node::equality(self, other)
    }

    /// `self AND other`.
    fn and(self, other: impl Into<Node>) -> Node {
        Node::And(Arc::new(self.into()), Arc::new(other.into()))
    }

    /// `self OR other`.
    fn or(self, other: impl Into<Node>) -> Node {
        Node::Or(Arc::new(self.into()), Arc::new(other.into()))
    }
}

impl Predications for Node {}
impl Predications for Attribute {}
impl Predications for Table {}
impl Predications for SqlLiteral {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Value;

    #[test]
    fn test_eq_coerces_value() {
        let users = Table::new("users");
        let node = users.attr("name").eq("bob");

        match node {
            Node::Infix(op) => {
                assert_eq!(op.operator, "=");
                assert_eq!(*op.right, Node::Quoted(Value::from("bob")));
            }
            other => panic!("expected infix node, got {:?}", other),
        }
    }

    #[test]
    fn test_and_combines_subtrees() {
        let users = Table::new("users");
        let a = users.attr("id").eq(1);
        let b = users.attr("name").eq("bob");
        let node = a.clone().and(b.clone());

        assert_eq!(node, Node::And(Arc::new(a), Arc::new(b)));
    }

    #[test]
    fn test_or_combines_subtrees() {
        let users = Table::new("users");
        let a = users.attr("id").eq(1);
        let b = users.attr("id").eq(2);

        assert_eq!(
            a.clone().or(b.clone()),
            Node::Or(Arc::new(a), Arc::new(b))
        );
    }

    #[test]
    fn test_chains_nest_rather_than_flatten() {
        let t = Table::new("t");
        let a = t.attr("a").eq(1);
        let b = t.attr("b").eq(2);
        let c = t.attr("c").eq(3);

        let chained = a.clone().and(b.clone()).and(c.clone());
        let expected = Node::And(
            Arc::new(Node::And(Arc::new(a), Arc::new(b))),
            Arc::new(c),
        );
        assert_eq!(chained, expected);
    }
}
