#![allow(dead_code)]

use oxide_condition::ast::Condition;
use oxide_condition::dialect::PlainDialect;
use oxide_condition::{ConditionCompiler, ConditionError, SqlValue, Term, ToSqlValue};

/// A compiler that leaves identifiers unquoted, so expected SQL reads
/// naturally.
pub fn compiler() -> ConditionCompiler {
    ConditionCompiler::new().with_quoter(PlainDialect::new())
}

pub fn build(condition: &Condition) -> (String, Vec<(String, SqlValue)>) {
    let (sql, params) = compiler()
        .build_condition(condition)
        .unwrap_or_else(|e| panic!("Failed to build: {condition:?}\nError: {e}"));
    let params = params
        .into_params()
        .into_iter()
        .map(|(name, param)| (name, param.value))
        .collect();
    (sql, params)
}

pub fn build_sql(condition: &Condition) -> String {
    build(condition).0
}

pub fn build_definition(operator: &str, operands: Vec<Term>) -> (String, Vec<(String, SqlValue)>) {
    let condition = compiler()
        .parser()
        .from_array_definition(operator, operands)
        .unwrap_or_else(|e| panic!("Failed to parse {operator}: {e}"));
    build(&condition)
}

pub fn definition_err(operator: &str, operands: Vec<Term>) -> ConditionError {
    compiler()
        .parser()
        .from_array_definition(operator, operands)
        .expect_err(&format!("Expected definition error for: {operator}"))
}

pub fn build_json(json: &str) -> (String, Vec<(String, SqlValue)>) {
    let condition = compiler()
        .parser()
        .parse_json_str(json)
        .unwrap_or_else(|e| panic!("Failed to parse: {json}\nError: {e}"));
    build(&condition)
}

pub fn param(name: &str, value: impl ToSqlValue) -> (String, SqlValue) {
    (String::from(name), value.to_sql_value())
}

pub fn text(s: &str) -> SqlValue {
    SqlValue::Text(String::from(s))
}
