//! Fluent condition constructors.
//!
//! ```rust
//! use oxide_condition::ast::col;
//!
//! let filter = col("active")
//!     .eq(true)
//!     .and(col("age").between(18, 30).or(col("role").in_list(["admin", "staff"])));
//! ```

use super::{
    BetweenCondition, ColumnRef, CompareCondition, CompareOp, Condition, ExistsCondition,
    HashCondition, HashValue, InCondition, InValues, LikeCondition, Operand, SubQuery,
};
use crate::value::SqlValue;

/// Creates a column reference.
#[must_use]
pub fn col(name: &str) -> Column {
    Column {
        column: ColumnRef::Name(String::from(name)),
    }
}

/// Creates `EXISTS (query)`.
#[must_use]
pub fn exists(query: impl Into<SubQuery>) -> Condition {
    Condition::Exists(ExistsCondition::new(false, query))
}

/// Creates `NOT EXISTS (query)`.
#[must_use]
pub fn not_exists(query: impl Into<SubQuery>) -> Condition {
    Condition::Exists(ExistsCondition::new(true, query))
}

/// Creates a hash condition from `(column, value)` pairs.
#[must_use]
pub fn hash<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Condition
where
    K: Into<String>,
    V: Into<Operand>,
{
    Condition::Hash(HashCondition {
        pairs: pairs
            .into_iter()
            .map(|(column, value)| (column.into(), HashValue::Operand(value.into())))
            .collect(),
    })
}

/// A column (or column-like expression) conditions are built on.
#[derive(Debug, Clone)]
pub struct Column {
    column: ColumnRef,
}

impl Column {
    /// Wraps any column reference (name, expression or sub-query).
    #[must_use]
    pub fn new(column: impl Into<ColumnRef>) -> Self {
        Self {
            column: column.into(),
        }
    }

    fn compare(self, operator: CompareOp, value: impl Into<Operand>) -> Condition {
        Condition::Compare(CompareCondition::new(self.column, operator, value))
    }

    /// Creates an equality condition.
    #[must_use]
    pub fn eq(self, value: impl Into<Operand>) -> Condition {
        self.compare(CompareOp::Eq, value)
    }

    /// Creates an inequality condition.
    #[must_use]
    pub fn not_eq(self, value: impl Into<Operand>) -> Condition {
        self.compare(CompareOp::NotEq, value)
    }

    /// Creates a less-than condition.
    #[must_use]
    pub fn lt(self, value: impl Into<Operand>) -> Condition {
        self.compare(CompareOp::Lt, value)
    }

    /// Creates a less-than-or-equal condition.
    #[must_use]
    pub fn lt_eq(self, value: impl Into<Operand>) -> Condition {
        self.compare(CompareOp::LtEq, value)
    }

    /// Creates a greater-than condition.
    #[must_use]
    pub fn gt(self, value: impl Into<Operand>) -> Condition {
        self.compare(CompareOp::Gt, value)
    }

    /// Creates a greater-than-or-equal condition.
    #[must_use]
    pub fn gt_eq(self, value: impl Into<Operand>) -> Condition {
        self.compare(CompareOp::GtEq, value)
    }

    /// Creates a comparison with a free-form operator.
    #[must_use]
    pub fn op(self, operator: &str, value: impl Into<Operand>) -> Condition {
        self.compare(CompareOp::parse(operator), value)
    }

    /// Creates an IS NULL condition.
    ///
    /// Expressed through IN so that it renders `col IS NULL`; a plain
    /// `= NULL` comparison renders literally.
    #[must_use]
    pub fn is_null(self) -> Condition {
        let null = InValues::List(vec![Operand::from(SqlValue::Null)]);
        Condition::In(InCondition::new(self.column, null))
    }

    /// Creates an IS NOT NULL condition.
    #[must_use]
    pub fn is_not_null(self) -> Condition {
        let null = InValues::List(vec![Operand::from(SqlValue::Null)]);
        Condition::In(InCondition::new(self.column, null).negate())
    }

    /// Creates a LIKE condition; the pattern is escaped and `%`-wrapped.
    #[must_use]
    pub fn like(self, pattern: impl Into<Operand>) -> Condition {
        Condition::Like(LikeCondition::new(self.column, "LIKE", pattern))
    }

    /// Creates a NOT LIKE condition.
    #[must_use]
    pub fn not_like(self, pattern: impl Into<Operand>) -> Condition {
        Condition::Like(LikeCondition::new(self.column, "NOT LIKE", pattern))
    }

    /// Creates a case-insensitive ILIKE condition.
    #[must_use]
    pub fn ilike(self, pattern: impl Into<Operand>) -> Condition {
        Condition::Like(LikeCondition::new(self.column, "ILIKE", pattern))
    }

    /// Creates a BETWEEN condition.
    #[must_use]
    pub fn between(self, low: impl Into<Operand>, high: impl Into<Operand>) -> Condition {
        Condition::Between(BetweenCondition::new(self.column, false, low, high))
    }

    /// Creates a NOT BETWEEN condition.
    #[must_use]
    pub fn not_between(self, low: impl Into<Operand>, high: impl Into<Operand>) -> Condition {
        Condition::Between(BetweenCondition::new(self.column, true, low, high))
    }

    /// Creates an IN condition.
    #[must_use]
    pub fn in_list<T: Into<Operand>>(self, values: impl IntoIterator<Item = T>) -> Condition {
        Condition::In(InCondition::new(self.column, InValues::list(values)))
    }

    /// Creates a NOT IN condition.
    #[must_use]
    pub fn not_in_list<T: Into<Operand>>(self, values: impl IntoIterator<Item = T>) -> Condition {
        Condition::In(InCondition::new(self.column, InValues::list(values)).negate())
    }

    /// Creates an IN condition against a sub-query.
    #[must_use]
    pub fn in_query(self, query: impl Into<SubQuery>) -> Condition {
        Condition::In(InCondition::new(self.column, InValues::Query(query.into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Param;

    #[test]
    fn test_column_eq() {
        let c = col("name").eq("Alice");
        let Condition::Compare(cmp) = c else {
            panic!("Expected compare");
        };
        assert_eq!(cmp.column, ColumnRef::from("name"));
        assert_eq!(cmp.operator, CompareOp::Eq);
        assert_eq!(cmp.value, Operand::Value(Param::new("Alice")));
    }

    #[test]
    fn test_in_list_collects_values() {
        let Condition::In(cond) = col("id").not_in_list([1, 2]) else {
            panic!("Expected IN");
        };
        assert!(cond.negated);
        assert_eq!(cond.values, InValues::list([1, 2]));
    }

    #[test]
    fn test_hash_keeps_order() {
        let Condition::Hash(h) = hash([("b", 1), ("a", 2)]) else {
            panic!("Expected hash");
        };
        assert_eq!(h.pairs[0].0, "b");
        assert_eq!(h.pairs[1].1, HashValue::Operand(Operand::from(2)));
    }

    #[test]
    fn test_free_form_operator() {
        let Condition::Compare(cmp) = col("tags").op("@>", "x") else {
            panic!("Expected compare");
        };
        assert_eq!(cmp.operator.as_str(), "@>");
    }
}
