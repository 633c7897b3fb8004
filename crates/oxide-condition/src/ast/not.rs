//! NOT conditions.

use super::{Condition, ExpressionNode};

/// `NOT (inner)`.
///
/// An absent inner condition, or one that builds to an empty string,
/// makes the whole condition vanish.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotCondition {
    /// The negated condition.
    pub inner: Option<Box<Condition>>,
}

impl NotCondition {
    /// Negates `inner`.
    #[must_use]
    pub fn new(inner: impl Into<Condition>) -> Self {
        Self {
            inner: Some(Box::new(inner.into())),
        }
    }

    /// Creates a NOT with nothing to negate.
    #[must_use]
    pub const fn empty() -> Self {
        Self { inner: None }
    }
}

impl ExpressionNode for NotCondition {}
