//! Visitor dispatch over query trees.

pub mod sql;

use crate::ast::{Attribute, InfixOperation, Node, SqlLiteral, Value};
use crate::error::{RqlError, RqlResult};
use crate::select::{Projection, Select, Where};
use crate::table::Table;

/// The mutable text buffer one render pass accumulates into.
pub type Collector = String;

/// Double dispatch over the node variants.
///
/// The provided `visit` routes each variant to its handler method. Every
/// handler defaults to an [`RqlError::UnsupportedNode`] failure, so a
/// visitor that forgets a variant fails loudly at render time instead of
/// emitting incomplete output. The statement-level roots (`Select`,
/// `Projection`, `Where`) have their own entry points since they are not
/// expression nodes.
pub trait Visitor {
    fn visit(&mut self, node: &Node, collector: &mut Collector) -> RqlResult<()> {
        match node {
            Node::Table(table) => self.visit_table(table, collector),
            Node::Attribute(attribute) => self.visit_attribute(attribute, collector),
            Node::Grouping(expr) => self.visit_grouping(expr, collector),
            Node::And(left, right) => self.visit_and(left, right, collector),
            Node::Or(left, right) => self.visit_or(left, right, collector),
            Node::Infix(operation) => self.visit_infix(operation, collector),
            Node::SqlLiteral(literal) => self.visit_sql_literal(literal, collector),
            Node::Quoted(value) => self.visit_quoted(value, collector),
        }
    }

    fn visit_select(&mut self, _select: &Select, _collector: &mut Collector) -> RqlResult<()> {
        Err(RqlError::unsupported("Select"))
    }

    fn visit_projection(
        &mut self,
        _projection: &Projection,
        _collector: &mut Collector,
    ) -> RqlResult<()> {
        Err(RqlError::unsupported("Projection"))
    }

    fn visit_where(&mut self, _wheres: &Where, _collector: &mut Collector) -> RqlResult<()> {
        Err(RqlError::unsupported("Where"))
    }

    fn visit_table(&mut self, _table: &Table, _collector: &mut Collector) -> RqlResult<()> {
        Err(RqlError::unsupported("Table"))
    }

    fn visit_attribute(
        &mut self,
        _attribute: &Attribute,
        _collector: &mut Collector,
    ) -> RqlResult<()> {
        Err(RqlError::unsupported("Attribute"))
    }

    fn visit_grouping(&mut self, _expr: &Node, _collector: &mut Collector) -> RqlResult<()> {
        Err(RqlError::unsupported("Grouping"))
    }

    fn visit_and(
        &mut self,
        _left: &Node,
        _right: &Node,
        _collector: &mut Collector,
    ) -> RqlResult<()> {
        Err(RqlError::unsupported("And"))
    }

    fn visit_or(
        &mut self,
        _left: &Node,
        _right: &Node,
        _collector: &mut Collector,
    ) -> RqlResult<()> {
        Err(RqlError::unsupported("Or"))
    }

    fn visit_infix(
        &mut self,
        _operation: &InfixOperation,
        _collector: &mut Collector,
    ) -> RqlResult<()> {
        Err(RqlError::unsupported("Infix"))
    }

    fn visit_sql_literal(
        &mut self,
        _literal: &SqlLiteral,
        _collector: &mut Collector,
    ) -> RqlResult<()> {
        Err(RqlError::unsupported("SqlLiteral"))
    }

    fn visit_quoted(&mut self, _value: &Value, _collector: &mut Collector) -> RqlResult<()> {
        Err(RqlError::unsupported("Quoted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Predications;

    struct BlindVisitor;
    impl Visitor for BlindVisitor {}

    #[test]
    fn test_unhandled_variant_fails_dispatch() {
        let users = Table::new("users");
        let node = users.attr("id").eq(1);

        let mut collector = Collector::new();
        let err = BlindVisitor.visit(&node, &mut collector).unwrap_err();
        assert!(matches!(err, RqlError::UnsupportedNode { kind: "Infix" }));
        assert!(collector.is_empty());
    }
}
