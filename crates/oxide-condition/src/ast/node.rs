//! Runtime-typed expression nodes.
//!
//! Builders are looked up by the concrete type of a node, so every node
//! (built-in or custom) is reachable as `&dyn ExpressionNode` and can be
//! downcast back to its type. Equality of shared nodes is structural.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Upcast to `&dyn Any`, implemented for every `'static` type.
pub trait AsAny {
    /// Returns `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Structural equality across type-erased nodes, implemented for every
/// `'static` type with `PartialEq`.
pub trait DynEq {
    /// Returns `true` if `other` has the same type and compares equal.
    fn dyn_eq(&self, other: &dyn Any) -> bool;
}

impl<T: Any + PartialEq> DynEq for T {
    fn dyn_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}

/// A node that compiles to a SQL fragment through a registered builder.
pub trait ExpressionNode: AsAny + DynEq + fmt::Debug + Send + Sync {
    /// Returns the name used for this node in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A node that produces rows and can be used as a sub-query operand.
pub trait QueryExpression: ExpressionNode {
    /// Returns `self` as an expression node.
    fn as_node(&self) -> &dyn ExpressionNode;

    /// Returns how many columns the query selects, if known.
    fn column_count(&self) -> Option<usize> {
        None
    }
}

/// A shared handle to a sub-query.
#[derive(Clone)]
pub struct SubQuery(Arc<dyn QueryExpression>);

impl SubQuery {
    /// Wraps a query node.
    #[must_use]
    pub fn new(query: impl QueryExpression + 'static) -> Self {
        Self(Arc::new(query))
    }

    /// Returns the query as an expression node.
    #[must_use]
    pub fn node(&self) -> &dyn ExpressionNode {
        self.0.as_node()
    }

    /// Returns how many columns the query selects, if known.
    #[must_use]
    pub fn column_count(&self) -> Option<usize> {
        self.0.column_count()
    }
}

impl fmt::Debug for SubQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubQuery").field(&self.0).finish()
    }
}

impl PartialEq for SubQuery {
    fn eq(&self, other: &Self) -> bool {
        self.node().dyn_eq(other.node().as_any())
    }
}

/// A shared handle to an application-defined condition node.
#[derive(Clone)]
pub struct CustomCondition(Arc<dyn ExpressionNode>);

impl CustomCondition {
    /// Wraps a custom node.
    #[must_use]
    pub fn new(node: impl ExpressionNode + 'static) -> Self {
        Self(Arc::new(node))
    }

    /// Returns the wrapped node.
    #[must_use]
    pub fn node(&self) -> &dyn ExpressionNode {
        &*self.0
    }
}

impl fmt::Debug for CustomCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Custom").field(&self.0).finish()
    }
}

impl PartialEq for CustomCondition {
    fn eq(&self, other: &Self) -> bool {
        self.node().dyn_eq(other.node().as_any())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Select, col};

    #[derive(Debug, PartialEq)]
    struct Marker(u8);

    impl ExpressionNode for Marker {}

    #[test]
    fn test_sub_queries_compare_structurally() {
        let orders = || Select::new().columns(&["user_id"]).from("orders");
        assert_eq!(SubQuery::new(orders()), SubQuery::new(orders()));
        assert_ne!(SubQuery::new(orders()), SubQuery::new(orders().limit(1)));
        assert_eq!(col("id").in_query(orders()), col("id").in_query(orders()));
    }

    #[test]
    fn test_custom_conditions_compare_structurally() {
        assert_eq!(CustomCondition::new(Marker(1)), CustomCondition::new(Marker(1)));
        assert_ne!(CustomCondition::new(Marker(1)), CustomCondition::new(Marker(2)));
        assert_ne!(
            CustomCondition::new(Marker(1)),
            CustomCondition::new(Select::new())
        );
    }
}
