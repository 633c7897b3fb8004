use super::context::BuildContext;
use crate::ast::ConjunctionCondition;
use crate::error::Result;

/// Builds `(a) OP (b) ...`, skipping members that build to nothing.
pub fn build_conjunction(
    condition: &ConjunctionCondition,
    ctx: &mut BuildContext<'_>,
) -> Result<String> {
    let mut parts = Vec::with_capacity(condition.members.len());
    for member in &condition.members {
        let sql = ctx.build(member)?;
        if !sql.trim().is_empty() {
            parts.push(sql);
        }
    }
    Ok(join_parts(parts, condition.op.as_str()))
}

/// Joins built parts with `op`: nothing for no parts, the part itself for
/// one part, `(a) OP (b)` otherwise.
pub(crate) fn join_parts(parts: Vec<String>, op: &str) -> String {
    let mut parts: Vec<String> = parts.into_iter().filter(|p| !p.is_empty()).collect();
    match parts.len() {
        0 => String::new(),
        1 => parts.remove(0),
        _ => format!("({})", parts.join(&format!(") {op} ("))),
    }
}
