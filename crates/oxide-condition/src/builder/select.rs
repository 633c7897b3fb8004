//! SELECT builder.

use super::context::BuildContext;
use crate::ast::Select;
use crate::error::Result;

/// Quotes `name` or `name alias`, leaving expressions alone.
fn quote_aliased(ctx: &BuildContext<'_>, name: &str, table: bool) -> String {
    let (name, alias) = match name.split_once(' ') {
        Some((name, alias)) if !name.contains('(') => (name, Some(alias.trim())),
        _ => (name, None),
    };
    let quoted = if table {
        ctx.quoter().quote_table_name(name)
    } else {
        ctx.quote_column(name)
    };
    match alias {
        Some(alias) => format!("{quoted} {alias}"),
        None => quoted,
    }
}

/// Builds a top-level SELECT statement.
pub fn build_select(select: &Select, ctx: &mut BuildContext<'_>) -> Result<String> {
    let mut sql = String::from("SELECT ");
    if select.distinct {
        sql.push_str("DISTINCT ");
    }

    if select.columns.is_empty() {
        sql.push('*');
    } else {
        let columns: Vec<String> = select
            .columns
            .iter()
            .map(|c| quote_aliased(ctx, c, false))
            .collect();
        sql.push_str(&columns.join(", "));
    }

    if let Some(table) = &select.from {
        sql.push_str(&format!(" FROM {}", quote_aliased(ctx, table, true)));
    }

    if let Some(condition) = &select.where_clause {
        let where_sql = ctx.build(condition)?;
        if !where_sql.is_empty() {
            sql.push_str(&format!(" WHERE {where_sql}"));
        }
    }

    if !select.group_by.is_empty() {
        let columns: Vec<String> = select.group_by.iter().map(|c| ctx.quote_column(c)).collect();
        sql.push_str(&format!(" GROUP BY {}", columns.join(", ")));
    }

    if let Some(condition) = &select.having {
        let having_sql = ctx.build(condition)?;
        if !having_sql.is_empty() {
            sql.push_str(&format!(" HAVING {having_sql}"));
        }
    }

    if !select.order_by.is_empty() {
        let terms: Vec<String> = select
            .order_by
            .iter()
            .map(|c| quote_aliased(ctx, c, false))
            .collect();
        sql.push_str(&format!(" ORDER BY {}", terms.join(", ")));
    }

    if let Some(limit) = select.limit {
        sql.push_str(&format!(" LIMIT {limit}"));
    }
    if let Some(offset) = select.offset {
        sql.push_str(&format!(" OFFSET {offset}"));
    }

    Ok(sql)
}

/// Builds a SELECT used as an operand: `(SELECT ...)`.
pub fn build_sub_query(select: &Select, ctx: &mut BuildContext<'_>) -> Result<String> {
    Ok(format!("({})", build_select(select, ctx)?))
}

#[cfg(test)]
mod tests {
    use super::super::testing::build;
    use super::*;
    use crate::ast::{Condition, SubQuery, col};

    fn build_top_level(select: Select) -> String {
        let cond = Condition::Query(SubQuery::from(select));
        build(&cond).0
    }

    #[test]
    fn test_full_select() {
        let select = Select::new()
            .distinct()
            .columns(&["u.id", "COUNT(o.id) AS orders"])
            .from("users u")
            .where_clause(col("u.active").eq(true))
            .group_by(&["u.id"])
            .having(col("COUNT(o.id)").gt(2))
            .order_by_desc(&["u.id"])
            .limit(10)
            .offset(20);
        assert_eq!(
            build_top_level(select),
            "(SELECT DISTINCT \"u\".\"id\", COUNT(o.id) AS orders FROM \"users\" u \
             WHERE \"u\".\"active\" = :qp0 GROUP BY \"u\".\"id\" HAVING COUNT(o.id) > :qp1 \
             ORDER BY \"u\".\"id\" DESC LIMIT 10 OFFSET 20)"
        );
    }

    #[test]
    fn test_select_star() {
        assert_eq!(build_top_level(Select::new().from("t")), "(SELECT * FROM \"t\")");
    }

    #[test]
    fn test_empty_where_is_omitted() {
        let select = Select::new().from("t").where_clause(Condition::all([]));
        assert_eq!(build_top_level(select), "(SELECT * FROM \"t\")");
    }
}
