use super::context::BuildContext;
use crate::ast::ExistsCondition;
use crate::error::Result;

/// Builds `[NOT] EXISTS (SELECT ...)`.
pub fn build_exists(condition: &ExistsCondition, ctx: &mut BuildContext<'_>) -> Result<String> {
    let query = ctx.query(&condition.query)?;
    Ok(format!("{} {query}", condition.operator()))
}
