//! SELECT query node.
//!
//! Conditions only need queries as operands (`IN (SELECT ...)`,
//! `EXISTS (SELECT ...)`), so this is a deliberately small SELECT: one
//! table, no joins. Its WHERE and HAVING clauses are conditions and share
//! the param sink of the enclosing build.

use super::{Condition, ExpressionNode, QueryExpression, SubQuery};

/// A SELECT statement usable as a sub-query.
///
/// # Example
///
/// ```rust
/// use oxide_condition::ast::{col, Select};
///
/// let query = Select::new()
///     .columns(&["user_id"])
///     .from("orders")
///     .where_clause(col("total").gt(100));
/// assert_eq!(query.column_count(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    /// Whether DISTINCT was specified.
    pub distinct: bool,
    /// Selected columns; empty means `*`.
    pub columns: Vec<String>,
    /// The source table.
    pub from: Option<String>,
    /// WHERE condition.
    pub where_clause: Option<Condition>,
    /// GROUP BY columns.
    pub group_by: Vec<String>,
    /// HAVING condition.
    pub having: Option<Condition>,
    /// ORDER BY terms, e.g. `name` or `name DESC`.
    pub order_by: Vec<String>,
    /// LIMIT.
    pub limit: Option<u64>,
    /// OFFSET.
    pub offset: Option<u64>,
}

impl Select {
    /// Creates a new SELECT builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Specifies the columns to select.
    #[must_use]
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns = cols.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Selects all columns (*).
    #[must_use]
    pub fn all(mut self) -> Self {
        self.columns = vec![String::from("*")];
        self
    }

    /// Sets DISTINCT.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Specifies the table to select from.
    #[must_use]
    pub fn from(mut self, table: &str) -> Self {
        self.from = Some(String::from(table));
        self
    }

    /// Adds a WHERE clause.
    #[must_use]
    pub fn where_clause(mut self, condition: impl Into<Condition>) -> Self {
        self.where_clause = Some(condition.into());
        self
    }

    /// Adds a GROUP BY clause.
    #[must_use]
    pub fn group_by(mut self, cols: &[&str]) -> Self {
        self.group_by = cols.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Adds a HAVING clause.
    #[must_use]
    pub fn having(mut self, condition: impl Into<Condition>) -> Self {
        self.having = Some(condition.into());
        self
    }

    /// Adds an ORDER BY clause.
    #[must_use]
    pub fn order_by(mut self, cols: &[&str]) -> Self {
        self.order_by = cols.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Adds an ORDER BY DESC clause.
    #[must_use]
    pub fn order_by_desc(mut self, cols: &[&str]) -> Self {
        self.order_by = cols.iter().map(|s| format!("{s} DESC")).collect();
        self
    }

    /// Adds a LIMIT clause.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Adds an OFFSET clause.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Returns how many columns are selected, or `None` for `*` forms.
    #[must_use]
    pub fn column_count(&self) -> Option<usize> {
        let wildcard = self.columns.is_empty()
            || self
                .columns
                .iter()
                .any(|c| c == "*" || c.ends_with(".*"));
        (!wildcard).then_some(self.columns.len())
    }
}

impl ExpressionNode for Select {}

impl QueryExpression for Select {
    fn as_node(&self) -> &dyn ExpressionNode {
        self
    }

    fn column_count(&self) -> Option<usize> {
        Self::column_count(self)
    }
}

impl From<Select> for SubQuery {
    fn from(query: Select) -> Self {
        Self::new(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count() {
        assert_eq!(Select::new().columns(&["a", "b"]).column_count(), Some(2));
        assert_eq!(Select::new().all().column_count(), None);
        assert_eq!(Select::new().columns(&["t.*"]).column_count(), None);
        assert_eq!(Select::new().column_count(), None);
    }

    #[test]
    fn test_sub_query_reports_column_count() {
        let sub = SubQuery::from(Select::new().columns(&["id"]).from("t"));
        assert_eq!(sub.column_count(), Some(1));
    }
}
