use std::sync::OnceLock;

use regex::Regex;

use super::context::BuildContext;
use crate::ast::{EscapeMap, LikeCondition, LogicalOp, Operand};
use crate::error::{ConditionError, Result};
use crate::value::{Param, SqlValue};

fn like_operator_regex() -> &'static Regex {
    static OPERATOR: OnceLock<Regex> = OnceLock::new();
    OPERATOR.get_or_init(|| {
        Regex::new(r"^(AND |OR |)((NOT |)I?LIKE)$").expect("Invalid LIKE operator regex")
    })
}

/// A decomposed LIKE operator such as `OR NOT ILIKE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeOperator {
    /// How several patterns are joined.
    pub join: LogicalOp,
    /// Whether the comparison is negated.
    pub negated: bool,
    /// The comparison keyword, e.g. `NOT ILIKE`.
    pub keyword: String,
}

impl LikeOperator {
    /// Parses a LIKE operator, case-insensitively.
    pub fn parse(operator: &str) -> Result<Self> {
        let upper = operator.trim().to_uppercase();
        let caps = like_operator_regex()
            .captures(&upper)
            .ok_or_else(|| ConditionError::invalid_operator("LIKE", operator))?;
        let join = if &caps[1] == "OR " {
            LogicalOp::Or
        } else {
            LogicalOp::And
        };
        Ok(Self {
            join,
            negated: !caps[3].is_empty(),
            keyword: caps[2].to_owned(),
        })
    }
}

/// Replaces every character of `pattern` found in `escape`.
#[must_use]
pub fn escape_like_pattern(pattern: &str, escape: &EscapeMap) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        match escape.get(&c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Builds `column [NOT] [I]LIKE pattern`, one comparison per pattern.
pub fn build_like(condition: &LikeCondition, ctx: &mut BuildContext<'_>) -> Result<String> {
    let operator = LikeOperator::parse(&condition.operator)?;
    let patterns: Vec<&Operand> = condition.values.iter().filter(|v| !v.is_null()).collect();
    if patterns.is_empty() {
        let empty = if operator.negated { "" } else { "0=1" };
        return Ok(String::from(empty));
    }

    let default_escape;
    let escape = match &condition.escape {
        Some(escape) => escape,
        None => {
            default_escape = ctx
                .like_escape_character()
                .map_or_else(LikeCondition::default_escape_map, LikeCondition::escape_map_for);
            &default_escape
        }
    };
    let escape_sql = ctx
        .like_escape_character()
        .map(|c| format!(" ESCAPE '{c}'"))
        .unwrap_or_default();

    let column = ctx.column(&condition.column)?;
    let mut parts = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let placeholder = match pattern {
            Operand::Value(param) if !escape.is_empty() => {
                let text = param.value.as_text().unwrap_or_default();
                ctx.bind(Param {
                    value: SqlValue::Text(format!("%{}%", escape_like_pattern(&text, escape))),
                    type_hint: param.type_hint,
                })?
            }
            other => ctx.operand(other)?,
        };
        parts.push(format!("{column} {} {placeholder}{escape_sql}", operator.keyword));
    }
    Ok(parts.join(&format!(" {} ", operator.join)))
}
