use super::context::BuildContext;
use crate::ast::NotCondition;
use crate::error::Result;

/// Builds `NOT (inner)`. Vanishes when there is nothing to negate.
pub fn build_not(condition: &NotCondition, ctx: &mut BuildContext<'_>) -> Result<String> {
    let Some(inner) = &condition.inner else {
        return Ok(String::new());
    };
    let sql = ctx.build(inner)?;
    if sql.trim().is_empty() {
        return Ok(String::new());
    }
    Ok(format!("NOT ({sql})"))
}

#[cfg(test)]
mod tests {
    use super::super::testing::build;
    use crate::ast::{Condition, NotCondition, col};

    #[test]
    fn test_not() {
        let (sql, _) = build(&col("a").eq(1).not());
        assert_eq!(sql, "NOT (\"a\" = :qp0)");
    }

    #[test]
    fn test_not_of_nothing_is_empty() {
        assert_eq!(build(&Condition::Not(NotCondition::empty())).0, "");
        assert_eq!(build(&Condition::raw("").not()).0, "");
    }

    #[test]
    fn test_not_of_conjunction() {
        let (sql, _) = build(&col("a").eq(1).or(col("b").eq(2)).not());
        assert_eq!(sql, "NOT ((\"a\" = :qp0) OR (\"b\" = :qp1))");
    }
}
