//! Array-definition surface syntax.
//!
//! Conditions can be described as operator lists such as
//! `["BETWEEN", "age", 18, 30]` or as column maps such as
//! `{"status": 1, "deleted_at": null}`. [`DefinitionParser`] turns those
//! descriptions into [`Condition`] nodes, validating operand counts and
//! types per operator.
//!
//! # Example
//!
//! ```rust
//! use oxide_condition::ast::Condition;
//! use oxide_condition::definition::{from_array_definition, Term};
//!
//! let cond = from_array_definition("IN", vec![Term::from("id"), Term::list([1, 2, 3])]).unwrap();
//! assert!(matches!(cond, Condition::In(_)));
//!
//! let err = from_array_definition("BETWEEN", vec![]).unwrap_err();
//! assert_eq!(err.to_string(), "operator 'BETWEEN' requires three operands");
//! ```

mod json;
mod operators;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::trace;

use crate::ast::{
    CompareCondition, Condition, ConjunctionCondition, Expression, HashCondition, Select,
    SubQuery,
};
use crate::error::{ConditionError, Result};
use crate::value::{Param, SqlValue, ToSqlValue};

/// A dynamically-typed definition value.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A scalar (including NULL).
    Value(SqlValue),
    /// A scalar with an explicit type hint.
    Param(Param),
    /// A list: an operator definition when it starts with a string,
    /// otherwise a list of values or columns.
    List(Vec<Term>),
    /// An ordered column map, i.e. a hash definition or an IN row.
    Map(Vec<(String, Term)>),
    /// Raw SQL.
    Expression(Expression),
    /// A sub-query.
    Query(SubQuery),
    /// An already-built condition.
    Condition(Box<Condition>),
}

impl Term {
    /// The NULL term.
    pub const NULL: Self = Self::Value(SqlValue::Null);

    /// Creates a list term.
    #[must_use]
    pub fn list<T: Into<Self>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Creates a map term, keeping the given order.
    #[must_use]
    pub fn map<K: Into<String>, T: Into<Self>>(pairs: impl IntoIterator<Item = (K, T)>) -> Self {
        Self::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Creates an operator definition: `[operator, operands...]`.
    #[must_use]
    pub fn definition(operator: &str, operands: impl IntoIterator<Item = Self>) -> Self {
        let mut items = vec![Self::from(operator)];
        items.extend(operands);
        Self::List(items)
    }

    /// Returns `true` for NULL, typed or not.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        match self {
            Self::Value(value) => value.is_null(),
            Self::Param(param) => param.is_null(),
            _ => false,
        }
    }

    /// Returns the string, if this is a text scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(SqlValue::Text(s)) => Some(s),
            _ => None,
        }
    }
}

impl<T: ToSqlValue> From<T> for Term {
    fn from(value: T) -> Self {
        Self::Value(value.to_sql_value())
    }
}

impl From<Param> for Term {
    fn from(param: Param) -> Self {
        Self::Param(param)
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        Self::List(items)
    }
}

impl From<Expression> for Term {
    fn from(expr: Expression) -> Self {
        Self::Expression(expr)
    }
}

impl From<SubQuery> for Term {
    fn from(query: SubQuery) -> Self {
        Self::Query(query)
    }
}

impl From<Select> for Term {
    fn from(query: Select) -> Self {
        Self::Query(SubQuery::new(query))
    }
}

impl From<Condition> for Term {
    fn from(condition: Condition) -> Self {
        Self::Condition(Box::new(condition))
    }
}

/// Builds a condition from an operator keyword and its operands.
pub type OperatorFactory =
    Arc<dyn Fn(&DefinitionParser, &str, Vec<Term>) -> Result<Condition> + Send + Sync>;

/// Turns definitions into condition nodes.
///
/// Operator keywords are matched case-insensitively. Keywords without a
/// registered factory produce a [`CompareCondition`] with the operator
/// kept verbatim.
#[derive(Clone)]
pub struct DefinitionParser {
    operators: BTreeMap<String, OperatorFactory>,
}

impl DefinitionParser {
    /// Creates a parser that knows every built-in operator.
    #[must_use]
    pub fn new() -> Self {
        let mut parser = Self::empty();
        operators::register_defaults(&mut parser);
        parser
    }

    /// Creates a parser without operators; everything parses as a
    /// comparison.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            operators: BTreeMap::new(),
        }
    }

    /// Registers (or replaces) the factory for `keyword`.
    pub fn register_operator<F>(&mut self, keyword: &str, factory: F) -> &mut Self
    where
        F: Fn(&Self, &str, Vec<Term>) -> Result<Condition> + Send + Sync + 'static,
    {
        let keyword = keyword.trim().to_uppercase();
        trace!(keyword = %keyword, "Registering operator");
        self.operators.insert(keyword, Arc::new(factory));
        self
    }

    /// Returns the registered operator keywords, sorted.
    pub fn operators(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }

    /// Returns `true` if `keyword` has a registered factory.
    #[must_use]
    pub fn has_operator(&self, keyword: &str) -> bool {
        self.operators.contains_key(&keyword.trim().to_uppercase())
    }

    /// Builds the condition for `operator` applied to `operands`.
    pub fn from_array_definition(&self, operator: &str, operands: Vec<Term>) -> Result<Condition> {
        let keyword = operator.trim().to_uppercase();
        match self.operators.get(&keyword) {
            Some(factory) => factory(self, &keyword, operands),
            None => {
                CompareCondition::from_definition(operator.trim(), operands).map(Condition::Compare)
            }
        }
    }

    /// Turns any term into a condition.
    ///
    /// NULL and the empty list give a condition that builds to nothing; a
    /// string is raw SQL; a list starting with a string is an operator
    /// definition; a map is a hash condition.
    pub fn parse(&self, term: Term) -> Result<Condition> {
        match term {
            Term::Condition(condition) => Ok(*condition),
            Term::Expression(expr) => Ok(Condition::Expression(expr)),
            Term::Query(query) => Ok(Condition::Query(query)),
            Term::Value(SqlValue::Null) => Ok(vanishing()),
            Term::Value(SqlValue::Text(sql)) => Ok(Condition::raw(sql)),
            Term::Map(pairs) => HashCondition::from_definition(pairs).map(Condition::Hash),
            Term::List(items) => self.parse_list(items),
            Term::Value(_) | Term::Param(_) => Err(ConditionError::InvalidDefinition(String::from(
                "a condition must be a definition list, a map, SQL text or null",
            ))),
        }
    }

    fn parse_list(&self, items: Vec<Term>) -> Result<Condition> {
        let mut items = items.into_iter();
        match items.next() {
            None => Ok(vanishing()),
            Some(Term::Value(SqlValue::Text(operator))) => {
                self.from_array_definition(&operator, items.collect())
            }
            Some(_) => Err(ConditionError::InvalidDefinition(String::from(
                "a definition list must start with an operator string",
            ))),
        }
    }
}

impl Default for DefinitionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DefinitionParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefinitionParser")
            .field("operators", &self.operators.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// An empty AND, which builds to the empty string.
fn vanishing() -> Condition {
    Condition::Conjunction(ConjunctionCondition::new(crate::ast::LogicalOp::And, []))
}

/// Returns the shared parser with the built-in operators.
pub fn default_parser() -> &'static DefinitionParser {
    static PARSER: OnceLock<DefinitionParser> = OnceLock::new();
    PARSER.get_or_init(DefinitionParser::new)
}

/// Builds the condition for `operator` applied to `operands` with the
/// built-in operators.
pub fn from_array_definition(operator: &str, operands: Vec<Term>) -> Result<Condition> {
    default_parser().from_array_definition(operator, operands)
}
