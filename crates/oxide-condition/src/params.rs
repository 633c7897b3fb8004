//! Parameter binding.
//!
//! Builders never interpolate values into SQL. They hand each value to a
//! [`ParamBinder`] and splice the placeholder token it returns.

use crate::error::{ConditionError, Result};
use crate::value::{Param, SqlValue};

/// Default placeholder prefix.
pub const DEFAULT_PARAM_PREFIX: &str = ":qp";

/// Allocates placeholders for bound values.
///
/// Tokens must be unique within one build pass.
pub trait ParamBinder {
    /// Records `param` and returns the placeholder standing in for it.
    fn bind(&mut self, param: Param) -> Result<String>;
}

/// The accumulator of `(placeholder, value)` bindings for one build pass.
///
/// Placeholders are `<prefix>0`, `<prefix>1`, ... in binding order. The sink
/// is deliberately not `Clone`: one top-level build owns one sink.
#[derive(Debug)]
pub struct ParamSink {
    prefix: String,
    limit: Option<usize>,
    params: Vec<(String, Param)>,
}

impl ParamSink {
    /// Creates an empty sink using the `:qp` prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PARAM_PREFIX)
    }

    /// Creates an empty sink with a custom placeholder prefix.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            limit: None,
            params: vec![],
        }
    }

    /// Caps the number of values this sink accepts.
    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Returns the number of bound values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if nothing has been bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the bindings in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[(String, Param)] {
        &self.params
    }

    /// Looks up the param bound to `placeholder`.
    #[must_use]
    pub fn get(&self, placeholder: &str) -> Option<&Param> {
        self.params
            .iter()
            .find(|(name, _)| name == placeholder)
            .map(|(_, param)| param)
    }

    /// Returns the bound values in placeholder order.
    pub fn values(&self) -> impl Iterator<Item = &SqlValue> {
        self.params.iter().map(|(_, param)| &param.value)
    }

    /// Consumes the sink and returns its bindings.
    #[must_use]
    pub fn into_params(self) -> Vec<(String, Param)> {
        self.params
    }
}

impl Default for ParamSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamBinder for ParamSink {
    fn bind(&mut self, param: Param) -> Result<String> {
        if let Some(limit) = self.limit {
            if self.params.len() >= limit {
                return Err(ConditionError::TooManyParams { limit });
            }
        }
        let name = format!("{}{}", self.prefix, self.params.len());
        self.params.push((name.clone(), param));
        Ok(name)
    }
}
