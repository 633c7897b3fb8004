use super::context::BuildContext;
use crate::ast::{ColumnRef, InCondition, InValues, Operand, Row, SubQuery};
use crate::error::{ConditionError, Result};

/// Builds IN / NOT IN in its single-column, composite and sub-query forms.
///
/// An empty value set builds to `0=1` for IN and to nothing for NOT IN; an
/// empty column list is malformed.
pub fn build_in(condition: &InCondition, ctx: &mut BuildContext<'_>) -> Result<String> {
    let operator = condition.operator();
    if condition.columns.is_empty() {
        return Err(ConditionError::malformed(operator, "requires at least one column"));
    }
    let empty = if condition.negated { "" } else { "0=1" };
    if let InValues::Query(query) = &condition.values {
        return build_sub_query_in(&condition.columns, operator, query, ctx);
    }
    if condition.values.is_empty() {
        return Ok(String::from(empty));
    }
    match condition.columns.as_slice() {
        [column] => build_single_in(column, condition.negated, &condition.values, ctx),
        columns => build_composite_in(columns, operator, &condition.values, ctx),
    }
}

fn lookup<'v>(row: &'v Row, key: Option<&str>) -> Option<&'v Operand> {
    let key = key?;
    row.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

fn build_single_in(
    column: &ColumnRef,
    negated: bool,
    values: &InValues,
    ctx: &mut BuildContext<'_>,
) -> Result<String> {
    let key = column.key();
    let candidates: Vec<Option<&Operand>> = match values {
        InValues::List(values) => values.iter().map(Some).collect(),
        InValues::Rows(rows) => rows.iter().map(|row| lookup(row, key)).collect(),
        InValues::Query(_) => Vec::new(),
    };

    let quoted = ctx.column(column)?;
    let mut has_null = false;
    let mut placeholders = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match candidate {
            Some(operand) if !operand.is_null() => placeholders.push(ctx.operand(operand)?),
            _ => has_null = true,
        }
    }

    let null_branch = has_null.then(|| {
        let test = if negated { "IS NOT NULL" } else { "IS NULL" };
        format!("{quoted} {test}")
    });

    let sql = match placeholders.as_slice() {
        [] => {
            let empty = if negated { "" } else { "0=1" };
            return Ok(null_branch.unwrap_or_else(|| String::from(empty)));
        }
        [single] => {
            let operator = if negated { "<>" } else { "=" };
            format!("{quoted} {operator} {single}")
        }
        many => {
            let operator = if negated { "NOT IN" } else { "IN" };
            format!("{quoted} {operator} ({})", many.join(", "))
        }
    };

    Ok(match null_branch {
        Some(null_sql) => {
            let joiner = if negated { "AND" } else { "OR" };
            format!("{sql} {joiner} {null_sql}")
        }
        None => sql,
    })
}

fn build_composite_in(
    columns: &[ColumnRef],
    operator: &str,
    values: &InValues,
    ctx: &mut BuildContext<'_>,
) -> Result<String> {
    let InValues::Rows(rows) = values else {
        return Err(ConditionError::malformed(
            operator,
            "requires rows keyed by column name for a composite column list",
        ));
    };

    let mut quoted = Vec::with_capacity(columns.len());
    for column in columns {
        quoted.push(ctx.column(column)?);
    }

    let mut tuples = Vec::with_capacity(rows.len());
    for row in rows {
        let mut items = Vec::with_capacity(columns.len());
        for column in columns {
            match lookup(row, column.key()) {
                Some(operand) if !operand.is_null() => items.push(ctx.operand(operand)?),
                _ => items.push(String::from("NULL")),
            }
        }
        tuples.push(format!("({})", items.join(", ")));
    }

    Ok(format!(
        "({}) {operator} ({})",
        quoted.join(", "),
        tuples.join(", ")
    ))
}

fn build_sub_query_in(
    columns: &[ColumnRef],
    operator: &str,
    query: &SubQuery,
    ctx: &mut BuildContext<'_>,
) -> Result<String> {
    if let Some(selected) = query.column_count() {
        if selected != columns.len() {
            return Err(ConditionError::malformed(
                operator,
                format!(
                    "requires the sub-query to select {} column(s), it selects {selected}",
                    columns.len()
                ),
            ));
        }
    }

    let mut quoted = Vec::with_capacity(columns.len());
    for column in columns {
        quoted.push(ctx.column(column)?);
    }
    let sub_query = ctx.query(query)?;

    if quoted.len() == 1 {
        Ok(format!("{} {operator} {sub_query}", quoted[0]))
    } else {
        Ok(format!("({}) {operator} {sub_query}", quoted.join(", ")))
    }
}
