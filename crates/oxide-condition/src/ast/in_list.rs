//! IN / NOT IN conditions.

use super::{ColumnRef, ExpressionNode, Operand, SubQuery};

/// A row of values keyed by column name, used by composite IN.
pub type Row = Vec<(String, Operand)>;

/// The value side of an IN condition.
#[derive(Debug, Clone, PartialEq)]
pub enum InValues {
    /// Plain values for a single column. NULLs are split into an
    /// `IS [NOT] NULL` branch.
    List(Vec<Operand>),
    /// Rows keyed by column name. Missing keys render as `NULL`.
    Rows(Vec<Row>),
    /// A sub-query selecting as many columns as the condition tests.
    Query(SubQuery),
}

impl InValues {
    /// Creates a value list.
    #[must_use]
    pub fn list<T: Into<Operand>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Creates a set of keyed rows.
    #[must_use]
    pub fn rows<K, V, R>(rows: impl IntoIterator<Item = R>) -> Self
    where
        K: Into<String>,
        V: Into<Operand>,
        R: IntoIterator<Item = (K, V)>,
    {
        Self::Rows(
            rows.into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|(k, v)| (k.into(), v.into()))
                        .collect()
                })
                .collect(),
        )
    }

    /// Returns `true` for an empty list or row set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(values) => values.is_empty(),
            Self::Rows(rows) => rows.is_empty(),
            Self::Query(_) => false,
        }
    }
}

impl From<SubQuery> for InValues {
    fn from(query: SubQuery) -> Self {
        Self::Query(query)
    }
}

/// `column [NOT] IN (...)`.
///
/// With two or more columns this is the composite form
/// `(c1, c2) IN ((v1, v2), ...)`; a single-element column list behaves like
/// a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct InCondition {
    /// The tested column(s).
    pub columns: Vec<ColumnRef>,
    /// Whether this is NOT IN.
    pub negated: bool,
    /// The candidate values.
    pub values: InValues,
}

impl InCondition {
    /// Creates `column IN (values)`.
    #[must_use]
    pub fn new(column: impl Into<ColumnRef>, values: impl Into<InValues>) -> Self {
        Self {
            columns: vec![column.into()],
            negated: false,
            values: values.into(),
        }
    }

    /// Creates `(columns...) IN (values)`.
    #[must_use]
    pub fn composite<C: Into<ColumnRef>>(
        columns: impl IntoIterator<Item = C>,
        values: impl Into<InValues>,
    ) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            negated: false,
            values: values.into(),
        }
    }

    /// Turns the condition into NOT IN.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Returns `IN` or `NOT IN`.
    #[must_use]
    pub const fn operator(&self) -> &'static str {
        if self.negated {
            "NOT IN"
        } else {
            "IN"
        }
    }

    /// Returns `true` for the composite (multi-column) form.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.columns.len() > 1
    }
}

impl ExpressionNode for InCondition {}
