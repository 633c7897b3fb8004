//! JSON decoding of definitions.
//!
//! Plain JSON maps onto [`Term`] directly (arrays are lists, objects are
//! maps). A few `$`-prefixed objects stand for the values JSON cannot
//! express:
//!
//! - `{"$expr": "NOW() - INTERVAL :d DAY", "$params": {"d": 7}}`: raw SQL
//! - `{"$param": "abc", "$type": "binary"}`: a typed parameter
//! - `{"$query": {"select": ["id"], "from": "users", "where": ...}}`: a
//!   sub-query

use serde_json::{Map, Value};

use super::{DefinitionParser, Term};
use crate::ast::{Condition, Expression, Select, SubQuery};
use crate::error::{ConditionError, Result};
use crate::value::{Param, ParamType, SqlValue};

fn invalid(message: impl Into<String>) -> ConditionError {
    ConditionError::InvalidDefinition(message.into())
}

fn scalar(value: &Value) -> Result<SqlValue> {
    match value {
        Value::Null => Ok(SqlValue::Null),
        Value::Bool(b) => Ok(SqlValue::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(SqlValue::Int(i))
            } else if n.is_f64() {
                n.as_f64()
                    .map(SqlValue::Float)
                    .ok_or_else(|| invalid(format!("unrepresentable number {n}")))
            } else {
                Err(invalid(format!("integer {n} is out of range")))
            }
        }
        Value::String(s) => Ok(SqlValue::Text(s.clone())),
        Value::Array(_) | Value::Object(_) => Err(invalid("expected a scalar value")),
    }
}

fn typed_param(map: &Map<String, Value>) -> Result<Param> {
    let value = scalar(map.get("$param").unwrap_or(&Value::Null))?;
    match map.get("$type") {
        None => Ok(Param::from(value)),
        Some(type_hint) => {
            let type_hint: ParamType = serde_json::from_value(type_hint.clone())?;
            Ok(Param {
                value,
                type_hint: Some(type_hint),
            })
        }
    }
}

fn param(value: &Value) -> Result<Param> {
    match value {
        Value::Object(map) if map.contains_key("$param") => typed_param(map),
        other => scalar(other).map(Param::from),
    }
}

fn expression(map: &Map<String, Value>) -> Result<Expression> {
    let Some(Value::String(sql)) = map.get("$expr") else {
        return Err(invalid("$expr must be a string"));
    };
    let mut expr = Expression::new(sql.as_str());
    match map.get("$params") {
        None | Some(Value::Null) => {}
        Some(Value::Object(params)) => {
            for (name, value) in params {
                expr = expr.with_param(name, param(value)?);
            }
        }
        Some(_) => return Err(invalid("$params must be an object")),
    }
    Ok(expr)
}

fn string(value: &Value, key: &str) -> Result<String> {
    value
        .as_str()
        .map(String::from)
        .ok_or_else(|| invalid(format!("$query.{key} must be a string")))
}

fn strings(value: &Value, key: &str) -> Result<Vec<String>> {
    match value {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items.iter().map(|item| string(item, key)).collect(),
        _ => Err(invalid(format!("$query.{key} must be a string or a list of strings"))),
    }
}

fn count(value: &Value, key: &str) -> Result<u64> {
    value
        .as_u64()
        .ok_or_else(|| invalid(format!("$query.{key} must be a non-negative integer")))
}

impl DefinitionParser {
    /// Decodes a JSON value into a definition term.
    pub fn term_from_json(&self, value: &Value) -> Result<Term> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| self.term_from_json(item))
                .collect::<Result<Vec<_>>>()
                .map(Term::List),
            Value::Object(map) => self.object_term(map),
            other => scalar(other).map(Term::Value),
        }
    }

    /// Decodes a JSON value and parses it as a condition.
    pub fn parse_json(&self, value: &Value) -> Result<Condition> {
        self.parse(self.term_from_json(value)?)
    }

    /// Parses JSON text as a condition.
    pub fn parse_json_str(&self, json: &str) -> Result<Condition> {
        let value: Value = serde_json::from_str(json)?;
        self.parse_json(&value)
    }

    fn object_term(&self, map: &Map<String, Value>) -> Result<Term> {
        if map.contains_key("$expr") {
            return expression(map).map(Term::Expression);
        }
        if map.contains_key("$param") {
            return typed_param(map).map(Term::Param);
        }
        if let Some(query) = map.get("$query") {
            return self
                .select_from_json(query)
                .map(|select| Term::Query(SubQuery::from(select)));
        }
        map.iter()
            .map(|(column, value)| Ok((column.clone(), self.term_from_json(value)?)))
            .collect::<Result<Vec<_>>>()
            .map(Term::Map)
    }

    fn select_from_json(&self, value: &Value) -> Result<Select> {
        let Value::Object(map) = value else {
            return Err(invalid("$query must be an object"));
        };
        let mut select = Select::new();
        for (key, value) in map {
            match key.as_str() {
                "select" => select.columns = strings(value, key)?,
                "from" => select.from = Some(string(value, key)?),
                "distinct" => {
                    select.distinct = value
                        .as_bool()
                        .ok_or_else(|| invalid("$query.distinct must be a boolean"))?;
                }
                "where" => select.where_clause = Some(self.parse_json(value)?),
                "group_by" => select.group_by = strings(value, key)?,
                "having" => select.having = Some(self.parse_json(value)?),
                "order_by" => select.order_by = strings(value, key)?,
                "limit" => select.limit = Some(count(value, key)?),
                "offset" => select.offset = Some(count(value, key)?),
                other => return Err(invalid(format!("unknown $query key '{other}'"))),
            }
        }
        Ok(select)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_values() {
        let parser = DefinitionParser::new();
        let term = parser.term_from_json(&json!(["IN", "id", [1, 2.5, null]])).unwrap();
        assert_eq!(
            term,
            Term::List(vec![
                Term::from("IN"),
                Term::from("id"),
                Term::List(vec![
                    Term::Value(SqlValue::Int(1)),
                    Term::Value(SqlValue::Float(2.5)),
                    Term::NULL,
                ]),
            ])
        );
    }

    #[test]
    fn test_integer_out_of_range_is_rejected() {
        let parser = DefinitionParser::new();
        let err = parser
            .parse_json_str(r#"["=", "id", 18446744073709551615]"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid condition definition: integer 18446744073709551615 is out of range"
        );

        let cond = parser.parse_json_str(r#"["=", "id", 9223372036854775807]"#).unwrap();
        assert_eq!(
            cond,
            parser
                .from_array_definition("=", vec![Term::from("id"), Term::from(i64::MAX)])
                .unwrap()
        );
    }

    #[test]
    fn test_objects_keep_key_order() {
        let parser = DefinitionParser::new();
        let term = parser.term_from_json(&json!({"zeta": 1, "alpha": 2})).unwrap();
        let Term::Map(pairs) = term else {
            panic!("Expected map");
        };
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_expression_with_params() {
        let parser = DefinitionParser::new();
        let term = parser
            .term_from_json(&json!({"$expr": "a > :min", "$params": {"min": 3}}))
            .unwrap();
        assert_eq!(term, Term::Expression(Expression::new("a > :min").bind("min", 3)));
    }

    #[test]
    fn test_typed_param() {
        let parser = DefinitionParser::new();
        let term = parser
            .term_from_json(&json!({"$param": "abc", "$type": "binary"}))
            .unwrap();
        assert_eq!(term, Term::Param(Param::typed("abc", ParamType::Binary)));

        let err = parser
            .term_from_json(&json!({"$param": 1, "$type": "uuid"}))
            .unwrap_err();
        assert!(matches!(err, ConditionError::Json(_)));
    }

    #[test]
    fn test_query() {
        let parser = DefinitionParser::new();
        let cond = parser
            .parse_json(&json!(["EXISTS", {"$query": {
                "select": "id",
                "from": "orders",
                "where": {"status": "paid"},
                "limit": 1
            }}]))
            .unwrap();
        let Condition::Exists(exists) = cond else {
            panic!("Expected EXISTS");
        };
        assert_eq!(exists.query.column_count(), Some(1));
    }

    #[test]
    fn test_unknown_query_key() {
        let parser = DefinitionParser::new();
        let err = parser
            .term_from_json(&json!({"$query": {"from": "t", "join": "u"}}))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid condition definition: unknown $query key 'join'"
        );
    }

    #[test]
    fn test_parse_json_str_rejects_bad_json() {
        let parser = DefinitionParser::new();
        assert!(matches!(
            parser.parse_json_str("[\"IN\", "),
            Err(ConditionError::Json(_))
        ));
    }
}
