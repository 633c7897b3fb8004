use super::context::BuildContext;
use super::conjunction::join_parts;
use crate::ast::{Condition, HashCondition, HashValue, InCondition, InValues, Operand};
use crate::error::Result;

/// Builds a hash condition: `col=:qp0`, `col IS NULL` or a nested IN per
/// pair, joined with AND.
pub fn build_hash(condition: &HashCondition, ctx: &mut BuildContext<'_>) -> Result<String> {
    let mut parts = Vec::with_capacity(condition.pairs.len());
    for (column, value) in &condition.pairs {
        let part = match value {
            HashValue::List(values) => {
                let nested = InCondition::new(column.as_str(), InValues::List(values.clone()));
                ctx.build(&Condition::In(nested))?
            }
            HashValue::Operand(Operand::Query(query)) => {
                let nested = InCondition::new(column.as_str(), InValues::Query(query.clone()));
                ctx.build(&Condition::In(nested))?
            }
            HashValue::Operand(operand) if operand.is_null() => {
                format!("{} IS NULL", ctx.quote_column(column))
            }
            HashValue::Operand(operand) => {
                let quoted = ctx.quote_column(column);
                format!("{quoted}={}", ctx.operand(operand)?)
            }
        };
        parts.push(part);
    }
    Ok(join_parts(parts, "AND"))
}

#[cfg(test)]
mod tests {
    use super::super::testing::build;
    use crate::ast::{Condition, Expression, HashCondition, Select};
    use crate::value::SqlValue;

    #[test]
    fn test_single_pair_is_not_parenthesized() {
        let (sql, params) = build(&Condition::Hash(HashCondition::new().eq("status", 1)));
        assert_eq!(sql, "\"status\"=:qp0");
        assert_eq!(params, vec![SqlValue::Int(1)]);
    }

    #[test]
    fn test_pairs_in_insertion_order() {
        let hash = HashCondition::new()
            .eq("status", 1)
            .eq("deleted_at", SqlValue::Null)
            .is_in("id", [1, 2, 3]);
        let (sql, params) = build(&Condition::Hash(hash));
        assert_eq!(
            sql,
            "(\"status\"=:qp0) AND (\"deleted_at\" IS NULL) AND (\"id\" IN (:qp1, :qp2, :qp3))"
        );
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_sub_query_value_renders_in() {
        let query = Select::new().columns(&["id"]).from("users");
        let (sql, _) = build(&Condition::Hash(HashCondition::new().in_query("user_id", query)));
        assert_eq!(sql, "\"user_id\" IN (SELECT \"id\" FROM \"users\")");
    }

    #[test]
    fn test_expression_value_is_spliced() {
        let hash = HashCondition::new()
            .eq("updated_at", Expression::new("NOW()"))
            .eq("version", Expression::new("[[version]] + 1"));
        let (sql, params) = build(&Condition::Hash(hash));
        assert_eq!(
            sql,
            "(\"updated_at\"=NOW()) AND (\"version\"=\"version\" + 1)"
        );
        assert!(params.is_empty());
    }

    #[test]
    fn test_empty_hash_is_empty() {
        let (sql, params) = build(&Condition::Hash(HashCondition::new()));
        assert_eq!(sql, "");
        assert!(params.is_empty());
    }
}
