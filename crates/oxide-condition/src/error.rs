//! Error types for condition construction and compilation.

use thiserror::Error;

/// Errors raised while building condition nodes or compiling them to SQL.
#[derive(Debug, Error)]
pub enum ConditionError {
    /// An array-definition has the wrong operand count or operand types.
    #[error("operator '{operator}' {reason}")]
    MalformedCondition {
        /// The (upper-cased) operator keyword.
        operator: String,
        /// What the operator expected.
        reason: String,
    },

    /// An operator string does not match the grammar of its condition.
    #[error("invalid operator in {context} condition: \"{operator}\"")]
    InvalidOperator {
        /// The condition family the operator was given to.
        context: &'static str,
        /// The rejected operator.
        operator: String,
    },

    /// No builder is registered for the node's runtime type.
    #[error("no builder registered for expression type '{0}'")]
    UnsupportedExpression(String),

    /// The parameter binder refused another value.
    #[error("parameter limit of {limit} exceeded")]
    TooManyParams {
        /// The configured limit.
        limit: usize,
    },

    /// A surface definition (e.g. decoded from JSON) has an invalid shape.
    #[error("invalid condition definition: {0}")]
    InvalidDefinition(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConditionError {
    /// Creates a [`ConditionError::MalformedCondition`].
    pub fn malformed(operator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedCondition {
            operator: operator.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`ConditionError::InvalidOperator`].
    pub fn invalid_operator(context: &'static str, operator: impl Into<String>) -> Self {
        Self::InvalidOperator {
            context,
            operator: operator.into(),
        }
    }
}

/// Result type for condition operations.
pub type Result<T> = std::result::Result<T, ConditionError>;
