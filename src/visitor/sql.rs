//! SQL text generation.

use crate::ast::{Attribute, AttributeName, InfixOperation, Node, SqlLiteral, Value};
use crate::error::{RqlError, RqlResult};
use crate::select::{Projection, Select, Where};
use crate::table::Table;
use crate::visitor::{Collector, Visitor};

/// Renders a query tree to ANSI-ish SQL text.
///
/// Identifiers are double-quoted with embedded quotes and control
/// characters escaped. Quoted values are single-quoted with no escaping
/// of the value text itself: untrusted input must be sanitized by the
/// caller before it reaches a [`Node::Quoted`].
#[derive(Debug, Default)]
pub struct SqlVisitor;

impl SqlVisitor {
    pub fn new() -> Self {
        Self
    }

    /// Render a full query tree to its SQL string.
    pub fn render(&mut self, tree: &Select) -> RqlResult<String> {
        let mut collector = Collector::new();
        self.visit_select(tree, &mut collector)?;
        Ok(collector)
    }

    /// Double-quoted, escaped identifier text.
    fn quoted(&self, name: &str) -> String {
        format!("{:?}", name)
    }

    fn inject_join(
        &mut self,
        items: &[Node],
        collector: &mut Collector,
        separator: &str,
    ) -> RqlResult<()> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                collector.push_str(separator);
            }
            self.visit(item, collector)?;
        }
        Ok(())
    }
}

impl Visitor for SqlVisitor {
    fn visit_select(&mut self, select: &Select, collector: &mut Collector) -> RqlResult<()> {
        collector.push_str("SELECT ");
        self.visit_projection(select.projections(), collector)?;
        collector.push_str(" FROM ");
        let table = select.table().ok_or(RqlError::MissingTable)?;
        self.visit_table(table, collector)?;
        self.visit_where(select.wheres(), collector)
    }

    fn visit_projection(
        &mut self,
        projection: &Projection,
        collector: &mut Collector,
    ) -> RqlResult<()> {
        self.inject_join(projection.nodes(), collector, ", ")
    }

    fn visit_where(&mut self, wheres: &Where, collector: &mut Collector) -> RqlResult<()> {
        match wheres.expr() {
            Some(expr) => {
                collector.push_str(" WHERE ");
                self.visit(expr, collector)
            }
            None => Ok(()),
        }
    }

    fn visit_table(&mut self, table: &Table, collector: &mut Collector) -> RqlResult<()> {
        collector.push_str(&self.quoted(table.name()));
        Ok(())
    }

    fn visit_attribute(
        &mut self,
        attribute: &Attribute,
        collector: &mut Collector,
    ) -> RqlResult<()> {
        collector.push_str(&self.quoted(attribute.relation.name()));
        collector.push('.');
        match &attribute.name {
            AttributeName::Raw(literal) => collector.push_str(literal.as_str()),
            AttributeName::Named(name) => collector.push_str(&self.quoted(name)),
        }
        Ok(())
    }

    fn visit_grouping(&mut self, expr: &Node, collector: &mut Collector) -> RqlResult<()> {
        collector.push('(');
        self.visit(expr, collector)?;
        collector.push(')');
        Ok(())
    }

    fn visit_and(&mut self, left: &Node, right: &Node, collector: &mut Collector) -> RqlResult<()> {
        self.visit(left, collector)?;
        collector.push_str(" AND ");
        self.visit(right, collector)
    }

    fn visit_or(&mut self, left: &Node, right: &Node, collector: &mut Collector) -> RqlResult<()> {
        self.visit(left, collector)?;
        collector.push_str(" OR ");
        self.visit(right, collector)
    }

    fn visit_infix(
        &mut self,
        operation: &InfixOperation,
        collector: &mut Collector,
    ) -> RqlResult<()> {
        self.visit(&operation.left, collector)?;
        collector.push(' ');
        collector.push_str(&operation.operator);
        collector.push(' ');
        self.visit(&operation.right, collector)
    }

    fn visit_sql_literal(
        &mut self,
        literal: &SqlLiteral,
        collector: &mut Collector,
    ) -> RqlResult<()> {
        collector.push_str(literal.as_str());
        Ok(())
    }

    fn visit_quoted(&mut self, value: &Value, collector: &mut Collector) -> RqlResult<()> {
        collector.push('\'');
        collector.push_str(&value.to_string());
        collector.push('\'');
        Ok(())
    }
}
