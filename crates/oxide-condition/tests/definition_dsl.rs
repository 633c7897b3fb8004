//! End-to-end tests of the array-definition and JSON surfaces.

mod common;
use common::*;

use oxide_condition::ast::{Condition, Expression, Select};
use oxide_condition::{ConditionError, Term, from_array_definition};

#[test]
fn compare_operators() {
    for op in ["=", "<>", ">", ">=", "<", "<="] {
        let (sql, params) = build_definition(op, vec![Term::from("age"), Term::from(18)]);
        assert_eq!(sql, format!("age {op} :qp0"));
        assert_eq!(params, vec![param(":qp0", 18)]);
    }
}

#[test]
fn free_form_operator_is_kept() {
    let (sql, _) = build_definition("@>", vec![Term::from("tags"), Term::from("{a}")]);
    assert_eq!(sql, "tags @> :qp0");
}

#[test]
fn compare_with_expression_column() {
    let (sql, _) = build_definition(
        "=",
        vec![Term::from(Expression::new("LOWER([[email]])")), Term::from("a@b.c")],
    );
    assert_eq!(sql, "LOWER(email) = :qp0");
}

#[test]
fn compare_rejects_list_column() {
    let err = definition_err("=", vec![Term::list(["a", "b"]), Term::from(1)]);
    assert_eq!(
        err.to_string(),
        "operator '=' requires column to be string, expression, or sub-query"
    );
}

#[test]
fn in_and_not_in() {
    let (sql, params) = build_definition("IN", vec![Term::from("id"), Term::list([1, 2, 3])]);
    assert_eq!(sql, "id IN (:qp0, :qp1, :qp2)");
    assert_eq!(params.len(), 3);

    let (sql, _) = build_definition("not in", vec![Term::from("id"), Term::list([1])]);
    assert_eq!(sql, "id <> :qp0");
}

#[test]
fn in_with_sub_query() {
    let query = Select::new().columns(&["user_id"]).from("orders");
    let (sql, _) = build_definition("IN", vec![Term::from("id"), Term::from(query)]);
    assert_eq!(sql, "id IN (SELECT user_id FROM orders)");
}

#[test]
fn in_rejects_numeric_column() {
    let err = definition_err("IN", vec![Term::from(1), Term::list([1])]);
    assert_eq!(
        err.to_string(),
        "operator 'IN' requires column to be string, expression, or iterable"
    );
}

#[test]
fn composite_in_from_definition() {
    let (sql, _) = build_definition(
        "IN",
        vec![
            Term::list(["a", "b"]),
            Term::list([Term::map([("a", 1), ("b", 2)]), Term::map([("b", 4), ("a", 3)])]),
        ],
    );
    assert_eq!(sql, "(a, b) IN ((:qp0, :qp1), (:qp2, :qp3))");
}

#[test]
fn like_variants() {
    let (sql, params) = build_definition("LIKE", vec![Term::from("name"), Term::from("foo")]);
    assert_eq!(sql, "name LIKE :qp0");
    assert_eq!(params, vec![param(":qp0", "%foo%")]);

    let (sql, _) = build_definition("OR LIKE", vec![Term::from("name"), Term::list(["a", "b"])]);
    assert_eq!(sql, "name LIKE :qp0 OR name LIKE :qp1");

    let (sql, _) = build_definition("NOT ILIKE", vec![Term::from("name"), Term::from("a")]);
    assert_eq!(sql, "name NOT ILIKE :qp0");

    let (sql, _) = build_definition("LIKE", vec![Term::from("name"), Term::List(vec![])]);
    assert_eq!(sql, "0=1");
}

#[test]
fn like_without_escaping() {
    let (_, params) = build_definition(
        "LIKE",
        vec![Term::from("name"), Term::from("a_%"), Term::from(false)],
    );
    assert_eq!(params, vec![param(":qp0", "a_%")]);
}

#[test]
fn between_and_between_columns() {
    let (sql, _) = build_definition(
        "NOT BETWEEN",
        vec![Term::from("age"), Term::from(18), Term::from(30)],
    );
    assert_eq!(sql, "age NOT BETWEEN :qp0 AND :qp1");

    let (sql, params) = build_definition(
        "BETWEEN COLUMNS",
        vec![Term::from("2024-01-01"), Term::from("valid_from"), Term::from("valid_to")],
    );
    assert_eq!(sql, ":qp0 BETWEEN valid_from AND valid_to");
    assert_eq!(params, vec![param(":qp0", "2024-01-01")]);
}

#[test]
fn exists_and_not() {
    let query = Select::new()
        .from("orders")
        .where_clause(Condition::raw("orders.user_id = users.id"));
    let (sql, _) = build_definition("NOT EXISTS", vec![Term::from(query)]);
    assert_eq!(sql, "NOT EXISTS (SELECT * FROM orders WHERE orders.user_id = users.id)");

    let (sql, _) = build_definition(
        "NOT",
        vec![Term::definition("=", [Term::from("a"), Term::from(1)])],
    );
    assert_eq!(sql, "NOT (a = :qp0)");
}

#[test]
fn nested_conjunctions() {
    let (sql, params) = build_definition(
        "AND",
        vec![
            Term::map([("status", 1)]),
            Term::definition(
                "OR",
                [
                    Term::definition(">", [Term::from("age"), Term::from(18)]),
                    Term::from("vip = 1"),
                ],
            ),
            Term::NULL,
        ],
    );
    assert_eq!(sql, "(status=:qp0) AND ((age > :qp1) OR (vip = 1))");
    assert_eq!(params, vec![param(":qp0", 1), param(":qp1", 18)]);
}

#[test]
fn hash_definition() {
    let (sql, params) = build(
        &compiler()
            .create_condition(Term::Map(vec![
                (String::from("status"), Term::from("active")),
                (String::from("deleted_at"), Term::NULL),
                (String::from("role"), Term::list(["admin", "staff"])),
            ]))
            .unwrap(),
    );
    assert_eq!(
        sql,
        "(status=:qp0) AND (deleted_at IS NULL) AND (role IN (:qp1, :qp2))"
    );
    assert_eq!(params.len(), 3);
}

#[test]
fn free_function_uses_default_operators() {
    let cond =
        from_array_definition("between", vec![Term::from("x"), Term::from(1), Term::from(2)])
            .unwrap();
    assert!(matches!(cond, Condition::Between(_)));
}

#[test]
fn json_definition() {
    let (sql, params) = build_json(
        r#"["AND",
            {"status": "paid", "archived": null},
            ["IN", "currency", ["EUR", "USD"]],
            ["LIKE", "note", "50%"],
            ["BETWEEN", "total", 10, 99.5]]"#,
    );
    assert_eq!(
        sql,
        "((status=:qp0) AND (archived IS NULL)) AND (currency IN (:qp1, :qp2)) \
         AND (note LIKE :qp3) AND (total BETWEEN :qp4 AND :qp5)"
    );
    assert_eq!(
        params,
        vec![
            param(":qp0", "paid"),
            param(":qp1", "EUR"),
            param(":qp2", "USD"),
            param(":qp3", "%50\\%%"),
            param(":qp4", 10),
            param(":qp5", 99.5),
        ]
    );
}

#[test]
fn json_expression_and_query() {
    let (sql, params) = build_json(
        r#"["OR",
            {"$expr": "created_at > NOW() - :days", "$params": {"days": 7}},
            ["EXISTS", {"$query": {"select": ["id"], "from": "flags", "where": {"user_id": 3}}}]]"#,
    );
    assert_eq!(
        sql,
        "(created_at > NOW() - :qp0) OR (EXISTS (SELECT id FROM flags WHERE user_id=:qp1))"
    );
    assert_eq!(params, vec![param(":qp0", 7), param(":qp1", 3)]);
}

#[test]
fn json_typed_param() {
    let (_, params) = build_json(r#"["=", "data", {"$param": "abc", "$type": "binary"}]"#);
    assert_eq!(params, vec![(String::from(":qp0"), text("abc"))]);
}

#[test]
fn json_rejects_scalar_condition() {
    let err = compiler().parser().parse_json_str("42").unwrap_err();
    assert!(matches!(err, ConditionError::InvalidDefinition(_)));
}

#[test]
fn nothing_builds_to_nothing() {
    let (sql, params) = build_json("null");
    assert_eq!(sql, "");
    assert!(params.is_empty());
    assert_eq!(build_json("[]").0, "");
}
