//! Identifier quoting across dialects.

use oxide_condition::ast::{Condition, Expression, Select, col};
use oxide_condition::dialect::DialectKind;
use oxide_condition::{CompilerConfig, ConditionCompiler};

fn build_with(config: CompilerConfig, condition: &Condition) -> String {
    ConditionCompiler::from_config(config)
        .build_condition(condition)
        .unwrap_or_else(|e| panic!("Failed to build: {condition:?}\nError: {e}"))
        .0
}

fn dialect(kind: DialectKind) -> CompilerConfig {
    CompilerConfig::default().with_dialect(kind)
}

#[test]
fn qualified_columns_per_dialect() {
    let cond = col("u.name").eq("x");
    assert_eq!(build_with(dialect(DialectKind::Generic), &cond), "\"u\".\"name\" = :qp0");
    assert_eq!(build_with(dialect(DialectKind::MySql), &cond), "`u`.`name` = :qp0");
    assert_eq!(build_with(dialect(DialectKind::Plain), &cond), "u.name = :qp0");
}

#[test]
fn embedded_quotes_are_doubled() {
    assert_eq!(
        build_with(dialect(DialectKind::Generic), &col("we\"ird").eq(1)),
        "\"we\"\"ird\" = :qp0"
    );
    assert_eq!(
        build_with(dialect(DialectKind::MySql), &col("we`ird").eq(1)),
        "`we``ird` = :qp0"
    );
}

#[test]
fn already_quoted_and_expression_columns_are_kept() {
    let config = dialect(DialectKind::Generic);
    assert_eq!(build_with(config.clone(), &col("\"Mixed\"").eq(1)), "\"Mixed\" = :qp0");
    assert_eq!(build_with(config.clone(), &col("COUNT(*)").gt(1)), "COUNT(*) > :qp0");
    assert_eq!(build_with(config, &col("t.*").eq(1)), "\"t\".* = :qp0");
}

#[test]
fn markers_in_raw_sql_use_table_prefix() {
    let mut config = dialect(DialectKind::MySql);
    config.table_prefix = String::from("shop_");
    let cond = Condition::raw("[[id]] IN (SELECT [[o.user_id]] FROM {{%orders}} o)");
    assert_eq!(
        build_with(config, &cond),
        "`id` IN (SELECT `o`.`user_id` FROM `shop_orders` o)"
    );
}

#[test]
fn markers_in_bound_expressions() {
    let cond = col("id")
        .gt(0)
        .and(Condition::Expression(Expression::new("LOWER([[email]]) = :e").bind("e", "a@b.c")));
    assert_eq!(
        build_with(dialect(DialectKind::Generic), &cond),
        "(\"id\" > :qp0) AND (LOWER(\"email\") = :qp1)"
    );
}

#[test]
fn sub_query_is_quoted_with_the_same_dialect() {
    let query = Select::new().columns(&["user_id"]).from("orders");
    let cond = col("id").in_query(query);
    assert_eq!(
        build_with(dialect(DialectKind::MySql), &cond),
        "`id` IN (SELECT `user_id` FROM `orders`)"
    );
}

#[test]
fn like_escape_clause_follows_config() {
    let config = dialect(DialectKind::MySql).with_like_escape_character(Some('!'));
    assert_eq!(
        build_with(config, &col("name").like("a")),
        "`name` LIKE :qp0 ESCAPE '!'"
    );
}

#[test]
fn dialect_from_config_file_contents() {
    let config =
        CompilerConfig::from_json(r#"{"dialect": "mysql", "param_prefix": ":v"}"#).unwrap();
    assert_eq!(build_with(config, &col("a").lt(3)), "`a` < :v0");
}
