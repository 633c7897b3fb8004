use super::context::BuildContext;
use crate::ast::Expression;
use crate::error::Result;
use crate::lexer::rewrite_placeholders;

/// Splices a raw SQL expression.
///
/// Quoting markers (`[[col]]`, `{{table}}`) are rewritten by the dialect.
/// The expression's own named params are re-bound through the shared sink
/// and their placeholders renamed, so they cannot collide with generated
/// ones. Placeholders without a matching param are left alone.
pub fn build_expression(expr: &Expression, ctx: &mut BuildContext<'_>) -> Result<String> {
    let sql = ctx.quoter().quote_sql(expr.sql());
    if expr.params().is_empty() {
        return Ok(sql);
    }

    let mut rebound: Vec<(String, String)> = Vec::new();
    rewrite_placeholders(&sql, |name| {
        if let Some((_, token)) = rebound.iter().find(|(original, _)| original == name) {
            return Ok(Some(token.clone()));
        }
        let Some(param) = expr.param(name) else {
            return Ok(None);
        };
        let token = ctx.bind(param.clone())?;
        rebound.push((name.to_owned(), token.clone()));
        Ok(Some(token))
    })
}
