//! Builder registry.
//!
//! Maps the concrete type of an expression node to the builder that emits
//! SQL for it. The registry ships with builders for every built-in node and
//! accepts builders for application-defined nodes; it is read-only once
//! shared.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::trace;

use super::context::BuildContext;
use super::{between, compare, conjunction, exists, expression, hash, in_list, like, not, select};
use crate::ast::ExpressionNode;
use crate::error::{ConditionError, Result};

/// Emits SQL for one kind of expression node.
pub trait ExpressionBuilder: Send + Sync {
    /// Builds `node`, binding values through `ctx`.
    fn build(&self, node: &dyn ExpressionNode, ctx: &mut BuildContext<'_>) -> Result<String>;
}

/// Adapts a function over a concrete node type into an [`ExpressionBuilder`].
struct TypedBuilder<T, F> {
    build: F,
    _node: PhantomData<fn(&T)>,
}

impl<T, F> ExpressionBuilder for TypedBuilder<T, F>
where
    T: ExpressionNode + 'static,
    F: Fn(&T, &mut BuildContext<'_>) -> Result<String> + Send + Sync,
{
    fn build(&self, node: &dyn ExpressionNode, ctx: &mut BuildContext<'_>) -> Result<String> {
        let typed = node
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| ConditionError::UnsupportedExpression(String::from(node.type_name())))?;
        (self.build)(typed, ctx)
    }
}

/// A dispatch table from node type to builder.
#[derive(Clone)]
pub struct BuilderRegistry {
    builders: HashMap<TypeId, Arc<dyn ExpressionBuilder>>,
}

impl BuilderRegistry {
    /// Creates a registry with builders for all built-in nodes.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry
            .register(compare::build_compare)
            .register(hash::build_hash)
            .register(in_list::build_in)
            .register(like::build_like)
            .register(between::build_between)
            .register(between::build_between_columns)
            .register(exists::build_exists)
            .register(not::build_not)
            .register(conjunction::build_conjunction)
            .register(expression::build_expression)
            .register(select::build_sub_query);
        registry
    }

    /// Creates a registry without any builders.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Registers (or replaces) the builder for node type `T`.
    pub fn register<T, F>(&mut self, build: F) -> &mut Self
    where
        T: ExpressionNode + 'static,
        F: Fn(&T, &mut BuildContext<'_>) -> Result<String> + Send + Sync + 'static,
    {
        trace!(node = type_name::<T>(), "Registering builder");
        self.register_builder(
            TypeId::of::<T>(),
            Arc::new(TypedBuilder {
                build,
                _node: PhantomData,
            }),
        )
    }

    /// Registers (or replaces) a builder under an explicit type id.
    pub fn register_builder(
        &mut self,
        type_id: TypeId,
        builder: Arc<dyn ExpressionBuilder>,
    ) -> &mut Self {
        self.builders.insert(type_id, builder);
        self
    }

    /// Returns the builder for the node's runtime type.
    pub fn lookup(&self, node: &dyn ExpressionNode) -> Result<&Arc<dyn ExpressionBuilder>> {
        let any: &dyn Any = node.as_any();
        self.builders
            .get(&any.type_id())
            .ok_or_else(|| ConditionError::UnsupportedExpression(String::from(node.type_name())))
    }

    /// Returns `true` if a builder is registered for `T`.
    #[must_use]
    pub fn contains<T: ExpressionNode + 'static>(&self) -> bool {
        self.builders.contains_key(&TypeId::of::<T>())
    }

    /// Returns the number of registered builders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Returns `true` if no builders are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BuilderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderRegistry")
            .field("builders", &self.builders.len())
            .finish()
    }
}
