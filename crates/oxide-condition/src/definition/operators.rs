//! Operator-list constructors for the built-in condition nodes.
//!
//! Every constructor validates operand count and operand types and either
//! returns a complete node or a [`ConditionError::MalformedCondition`]
//! naming the operator.

use super::{DefinitionParser, Term};
use crate::ast::{
    BetweenColumnsCondition, BetweenCondition, ColumnRef, CompareCondition, CompareOp, Condition,
    ConjunctionCondition, EscapeMap, ExistsCondition, HashCondition, HashValue, InCondition,
    InValues, LikeCondition, LogicalOp, NotCondition, Operand, Row,
};
use crate::builder::LikeOperator;
use crate::error::{ConditionError, Result};
use crate::value::{Param, SqlValue};

const LIKE_KEYWORDS: [&str; 8] = [
    "LIKE",
    "NOT LIKE",
    "OR LIKE",
    "OR NOT LIKE",
    "ILIKE",
    "NOT ILIKE",
    "OR ILIKE",
    "OR NOT ILIKE",
];

pub(super) fn register_defaults(parser: &mut DefinitionParser) {
    parser
        .register_operator("AND", conjunction)
        .register_operator("OR", conjunction)
        .register_operator("NOT", not)
        .register_operator("IN", in_list)
        .register_operator("NOT IN", in_list)
        .register_operator("BETWEEN", between)
        .register_operator("NOT BETWEEN", between)
        .register_operator("BETWEEN COLUMNS", between_columns)
        .register_operator("NOT BETWEEN COLUMNS", between_columns)
        .register_operator("EXISTS", exists)
        .register_operator("NOT EXISTS", exists);
    for keyword in LIKE_KEYWORDS {
        parser.register_operator(keyword, like);
    }
}

fn conjunction(
    parser: &DefinitionParser,
    operator: &str,
    operands: Vec<Term>,
) -> Result<Condition> {
    ConjunctionCondition::from_definition(parser, operator, operands).map(Condition::Conjunction)
}

fn not(parser: &DefinitionParser, operator: &str, operands: Vec<Term>) -> Result<Condition> {
    NotCondition::from_definition(parser, operator, operands).map(Condition::Not)
}

fn in_list(_: &DefinitionParser, operator: &str, operands: Vec<Term>) -> Result<Condition> {
    InCondition::from_definition(operator, operands).map(Condition::In)
}

fn like(_: &DefinitionParser, operator: &str, operands: Vec<Term>) -> Result<Condition> {
    LikeCondition::from_definition(operator, operands).map(Condition::Like)
}

fn between(_: &DefinitionParser, operator: &str, operands: Vec<Term>) -> Result<Condition> {
    BetweenCondition::from_definition(operator, operands).map(Condition::Between)
}

fn between_columns(_: &DefinitionParser, operator: &str, operands: Vec<Term>) -> Result<Condition> {
    BetweenColumnsCondition::from_definition(operator, operands).map(Condition::BetweenColumns)
}

fn exists(_: &DefinitionParser, operator: &str, operands: Vec<Term>) -> Result<Condition> {
    ExistsCondition::from_definition(operator, operands).map(Condition::Exists)
}

fn arity<const N: usize>(
    operator: &str,
    operands: Vec<Term>,
    expectation: &str,
) -> Result<[Term; N]> {
    <[Term; N]>::try_from(operands).map_err(|_| ConditionError::malformed(operator, expectation))
}

fn column_ref(operator: &str, term: Term, role: &str) -> Result<ColumnRef> {
    match term {
        Term::Value(SqlValue::Text(name)) => Ok(ColumnRef::Name(name)),
        Term::Expression(expr) => Ok(ColumnRef::Expression(expr)),
        Term::Query(query) => Ok(ColumnRef::Query(query)),
        _ => Err(ConditionError::malformed(
            operator,
            format!("requires {role} to be string, expression, or sub-query"),
        )),
    }
}

fn operand(operator: &str, term: Term) -> Result<Operand> {
    match term {
        Term::Value(value) => Ok(Operand::Value(Param::from(value))),
        Term::Param(param) => Ok(Operand::Value(param)),
        Term::Expression(expr) => Ok(Operand::Expression(expr)),
        Term::Query(query) => Ok(Operand::Query(query)),
        Term::List(_) | Term::Map(_) | Term::Condition(_) => Err(ConditionError::malformed(
            operator,
            "requires values to be scalars, expressions, or sub-queries",
        )),
    }
}

fn row(operator: &str, term: Term) -> Result<Row> {
    let Term::Map(pairs) = term else {
        return Err(ConditionError::malformed(
            operator,
            "requires values to be rows keyed by column name",
        ));
    };
    pairs
        .into_iter()
        .map(|(column, value)| Ok((column, operand(operator, value)?)))
        .collect()
}

fn normalize(operator: &str) -> String {
    operator.trim().to_uppercase()
}

impl CompareCondition {
    /// Creates a comparison from `[column, value]`.
    ///
    /// The operator is kept as given when it is not one of the standard
    /// comparison operators.
    pub fn from_definition(operator: &str, operands: Vec<Term>) -> Result<Self> {
        let [column, value] = arity(operator, operands, "requires two operands")?;
        Ok(Self::new(
            column_ref(operator, column, "column")?,
            CompareOp::parse(operator),
            operand(operator, value)?,
        ))
    }
}

impl InCondition {
    /// Creates an IN condition from `[column(s), values]`.
    ///
    /// A list of columns selects the composite form, whose values must be
    /// rows (maps). A single scalar value is treated as a one-element
    /// list.
    pub fn from_definition(operator: &str, operands: Vec<Term>) -> Result<Self> {
        let operator = normalize(operator);
        let negated = match operator.as_str() {
            "IN" => false,
            "NOT IN" => true,
            _ => return Err(ConditionError::invalid_operator("IN", operator)),
        };
        let [column, values] = arity(&operator, operands, "requires two operands")?;
        if values.is_null() {
            return Err(ConditionError::malformed(&operator, "requires two operands"));
        }

        let columns = match column {
            Term::List(items) if !items.is_empty() => items
                .into_iter()
                .map(|item| column_ref(&operator, item, "column"))
                .collect::<Result<Vec<_>>>()?,
            column @ (Term::Value(SqlValue::Text(_)) | Term::Expression(_) | Term::Query(_)) => {
                vec![column_ref(&operator, column, "column")?]
            }
            _ => {
                return Err(ConditionError::malformed(
                    &operator,
                    "requires column to be string, expression, or iterable",
                ))
            }
        };
        let composite = columns.len() > 1;

        let values = match values {
            Term::Query(query) => InValues::Query(query),
            Term::List(items) if composite || items.iter().any(|i| matches!(i, Term::Map(_))) => {
                InValues::Rows(
                    items
                        .into_iter()
                        .map(|item| row(&operator, item))
                        .collect::<Result<_>>()?,
                )
            }
            Term::List(items) => InValues::List(
                items
                    .into_iter()
                    .map(|item| operand(&operator, item))
                    .collect::<Result<_>>()?,
            ),
            map @ Term::Map(_) => InValues::Rows(vec![row(&operator, map)?]),
            _ if composite => {
                return Err(ConditionError::malformed(
                    &operator,
                    "requires values to be rows keyed by column name",
                ))
            }
            scalar => InValues::List(vec![operand(&operator, scalar)?]),
        };

        Ok(Self {
            columns,
            negated,
            values,
        })
    }
}

fn escape_map(operator: &str, term: Option<Term>) -> Result<Option<EscapeMap>> {
    match term {
        None | Some(Term::Value(SqlValue::Null)) => Ok(None),
        Some(Term::Value(SqlValue::Bool(false))) => Ok(Some(EscapeMap::new())),
        Some(Term::Map(pairs)) if pairs.is_empty() => Ok(None),
        Some(Term::Map(pairs)) => {
            let mut map = EscapeMap::new();
            for (from, to) in pairs {
                let mut chars = from.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return Err(ConditionError::malformed(
                        operator,
                        "requires escape map keys to be single characters",
                    ));
                };
                let Term::Value(SqlValue::Text(to)) = to else {
                    return Err(ConditionError::malformed(
                        operator,
                        "requires escape map values to be strings",
                    ));
                };
                map.insert(c, to);
            }
            Ok(Some(map))
        }
        Some(_) => Err(ConditionError::malformed(
            operator,
            "requires escape map to be a map or false",
        )),
    }
}

impl LikeCondition {
    /// Creates a LIKE condition from `[column, value(s), escape_map?]`.
    ///
    /// `false` as the escape map binds patterns verbatim; an empty map or
    /// NULL uses the default escaping.
    pub fn from_definition(operator: &str, operands: Vec<Term>) -> Result<Self> {
        LikeOperator::parse(operator)?;
        let operator = normalize(operator);
        if operands.len() > 3 {
            return Err(ConditionError::malformed(
                &operator,
                "accepts at most three operands",
            ));
        }
        let mut operands = operands.into_iter();
        let (Some(column), Some(values)) = (operands.next(), operands.next()) else {
            return Err(ConditionError::malformed(&operator, "requires two operands"));
        };
        if values.is_null() {
            return Err(ConditionError::malformed(&operator, "requires two operands"));
        }

        let column = column_ref(&operator, column, "column")?;
        let values = match values {
            Term::List(items) => items
                .into_iter()
                .map(|item| operand(&operator, item))
                .collect::<Result<_>>()?,
            value => vec![operand(&operator, value)?],
        };
        let escape = escape_map(&operator, operands.next())?;

        Ok(Self {
            column,
            operator,
            values,
            escape,
        })
    }
}

fn between_negation(operator: &str, columns: bool) -> Result<bool> {
    let (plain, negated) = if columns {
        ("BETWEEN COLUMNS", "NOT BETWEEN COLUMNS")
    } else {
        ("BETWEEN", "NOT BETWEEN")
    };
    match operator {
        op if op == plain || op == "BETWEEN" => Ok(false),
        op if op == negated || op == "NOT BETWEEN" => Ok(true),
        _ => Err(ConditionError::invalid_operator("BETWEEN", operator)),
    }
}

impl BetweenCondition {
    /// Creates a BETWEEN condition from `[column, start, end]`.
    pub fn from_definition(operator: &str, operands: Vec<Term>) -> Result<Self> {
        let operator = normalize(operator);
        let negated = between_negation(&operator, false)?;
        let [column, start, end] = arity(&operator, operands, "requires three operands")?;
        if start.is_null() || end.is_null() {
            return Err(ConditionError::malformed(&operator, "requires three operands"));
        }
        Ok(Self {
            column: column_ref(&operator, column, "column")?,
            negated,
            start: operand(&operator, start)?,
            end: operand(&operator, end)?,
        })
    }
}

impl BetweenColumnsCondition {
    /// Creates a BETWEEN condition from `[value, start_column, end_column]`.
    ///
    /// Accepts the `BETWEEN COLUMNS` keywords as well as plain `BETWEEN`.
    pub fn from_definition(operator: &str, operands: Vec<Term>) -> Result<Self> {
        let operator = normalize(operator);
        let negated = between_negation(&operator, true)?;
        let [value, start_column, end_column] =
            arity(&operator, operands, "requires three operands")?;
        if value.is_null() {
            return Err(ConditionError::malformed(&operator, "requires three operands"));
        }
        Ok(Self {
            value: operand(&operator, value)?,
            negated,
            start_column: column_ref(&operator, start_column, "start column")?,
            end_column: column_ref(&operator, end_column, "end column")?,
        })
    }
}

impl ExistsCondition {
    /// Creates an EXISTS condition from `[sub-query]`.
    pub fn from_definition(operator: &str, operands: Vec<Term>) -> Result<Self> {
        let operator = normalize(operator);
        let negated = match operator.as_str() {
            "EXISTS" => false,
            "NOT EXISTS" => true,
            _ => return Err(ConditionError::invalid_operator("EXISTS", operator)),
        };
        let [query] = arity(&operator, operands, "requires exactly one operand")?;
        let Term::Query(query) = query else {
            return Err(ConditionError::malformed(&operator, "requires a sub-query operand"));
        };
        Ok(Self { negated, query })
    }
}

impl NotCondition {
    /// Creates a NOT condition from `[condition]`. A NULL operand gives a
    /// condition that builds to nothing.
    pub fn from_definition(
        parser: &DefinitionParser,
        operator: &str,
        operands: Vec<Term>,
    ) -> Result<Self> {
        let operator = normalize(operator);
        let [inner] = arity(&operator, operands, "requires exactly one operand")?;
        if inner.is_null() {
            return Ok(Self::empty());
        }
        Ok(Self::new(parser.parse(inner)?))
    }
}

impl ConjunctionCondition {
    /// Creates an AND / OR conjunction; every operand is parsed as a
    /// condition.
    pub fn from_definition(
        parser: &DefinitionParser,
        operator: &str,
        operands: Vec<Term>,
    ) -> Result<Self> {
        let op = match normalize(operator).as_str() {
            "AND" => LogicalOp::And,
            "OR" => LogicalOp::Or,
            _ => return Err(ConditionError::invalid_operator("conjunction", operator)),
        };
        let members = operands
            .into_iter()
            .map(|term| parser.parse(term))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(op, members))
    }
}

impl HashCondition {
    /// Creates a hash condition from a column map.
    pub fn from_definition(pairs: Vec<(String, Term)>) -> Result<Self> {
        let mut hash = Self::new();
        for (column, value) in pairs {
            let value = match value {
                Term::List(items) => HashValue::List(
                    items
                        .into_iter()
                        .map(|item| operand("IN", item))
                        .collect::<Result<_>>()?,
                ),
                Term::Map(_) | Term::Condition(_) => {
                    return Err(ConditionError::InvalidDefinition(format!(
                        "value for column '{column}' must be a scalar, list, \
                         expression, or sub-query"
                    )));
                }
                value => HashValue::Operand(operand("=", value)?),
            };
            hash.pairs.push((column, value));
        }
        Ok(hash)
    }
}
