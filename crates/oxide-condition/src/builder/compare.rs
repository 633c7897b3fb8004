use super::context::BuildContext;
use crate::ast::CompareCondition;
use crate::error::Result;

/// Builds `column <op> value`.
///
/// A NULL value renders the literal `NULL` and binds nothing, so
/// `col("a").eq(None::<i64>)` yields `a = NULL`. Use `is_null()` for an
/// `IS NULL` test.
pub fn build_compare(condition: &CompareCondition, ctx: &mut BuildContext<'_>) -> Result<String> {
    let column = ctx.column(&condition.column)?;
    let operator = &condition.operator;
    if condition.value.is_null() {
        return Ok(format!("{column} {operator} NULL"));
    }
    let value = ctx.operand(&condition.value)?;
    Ok(format!("{column} {operator} {value}"))
}
