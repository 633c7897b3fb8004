use super::context::BuildContext;
use crate::ast::{BetweenColumnsCondition, BetweenCondition};
use crate::error::Result;

/// Builds `column [NOT] BETWEEN :start AND :end`.
pub fn build_between(condition: &BetweenCondition, ctx: &mut BuildContext<'_>) -> Result<String> {
    let column = ctx.column(&condition.column)?;
    let start = ctx.operand(&condition.start)?;
    let end = ctx.operand(&condition.end)?;
    Ok(format!("{column} {} {start} AND {end}", condition.operator()))
}

/// Builds `:value [NOT] BETWEEN start_column AND end_column`.
pub fn build_between_columns(
    condition: &BetweenColumnsCondition,
    ctx: &mut BuildContext<'_>,
) -> Result<String> {
    let value = ctx.operand(&condition.value)?;
    let start = ctx.column(&condition.start_column)?;
    let end = ctx.column(&condition.end_column)?;
    Ok(format!("{value} {} {start} AND {end}", condition.operator()))
}

#[cfg(test)]
mod tests {
    use super::super::testing::build;
    use crate::ast::{BetweenColumnsCondition, Condition, Expression, col};
    use crate::value::SqlValue;

    #[test]
    fn test_between() {
        let (sql, params) = build(&col("age").between(18, 30));
        assert_eq!(sql, "\"age\" BETWEEN :qp0 AND :qp1");
        assert_eq!(params, vec![SqlValue::Int(18), SqlValue::Int(30)]);
    }

    #[test]
    fn test_not_between() {
        let (sql, _) = build(&col("age").not_between(1, 2));
        assert_eq!(sql, "\"age\" NOT BETWEEN :qp0 AND :qp1");
    }

    #[test]
    fn test_between_columns() {
        let cond = BetweenColumnsCondition::new(42, false, "min_value", "max_value");
        let (sql, params) = build(&Condition::BetweenColumns(cond));
        assert_eq!(sql, ":qp0 BETWEEN \"min_value\" AND \"max_value\"");
        assert_eq!(params, vec![SqlValue::Int(42)]);
    }

    #[test]
    fn test_between_columns_with_expression_value() {
        let cond =
            BetweenColumnsCondition::new(Expression::new("NOW()"), true, "start_at", "end_at");
        let (sql, params) = build(&Condition::BetweenColumns(cond));
        assert_eq!(sql, "NOW() NOT BETWEEN \"start_at\" AND \"end_at\"");
        assert!(params.is_empty());
    }
}
