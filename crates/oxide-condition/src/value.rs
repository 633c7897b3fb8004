//! SQL values and bound parameters.
//!
//! Values never reach the SQL text directly: they are handed to a
//! [`ParamBinder`](crate::params::ParamBinder), which records them and
//! returns a placeholder token to splice instead.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar SQL value that can be bound as a parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Returns `true` for [`SqlValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the type a driver should bind this value as.
    #[must_use]
    pub const fn inferred_type(&self) -> ParamType {
        match self {
            Self::Null => ParamType::Null,
            Self::Bool(_) => ParamType::Boolean,
            Self::Int(_) => ParamType::Integer,
            Self::Float(_) => ParamType::Float,
            Self::Text(_) => ParamType::Text,
            Self::Blob(_) => ParamType::Binary,
        }
    }

    /// Returns the value as pattern text, as used by LIKE.
    ///
    /// Blobs are decoded lossily; NULL has no text form.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(if *b { "1" } else { "0" }.to_owned()),
            Self::Int(n) => Some(n.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::Blob(b) => Some(String::from_utf8_lossy(b).into_owned()),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Blob(b) => {
                write!(f, "X'")?;
                for byte in b {
                    write!(f, "{byte:02X}")?;
                }
                write!(f, "'")
            }
        }
    }
}

/// Driver-level type hint attached to a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    Binary,
}

/// A value together with an optional explicit type hint.
///
/// Once bound, a param is addressed only by its placeholder token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    /// The bound value.
    pub value: SqlValue,
    /// Explicit type hint, if the caller supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<ParamType>,
}

impl Param {
    /// Creates a param whose type is inferred from the value.
    #[must_use]
    pub fn new(value: impl ToSqlValue) -> Self {
        Self {
            value: value.to_sql_value(),
            type_hint: None,
        }
    }

    /// Creates a param with an explicit type hint.
    #[must_use]
    pub fn typed(value: impl ToSqlValue, type_hint: ParamType) -> Self {
        Self {
            value: value.to_sql_value(),
            type_hint: Some(type_hint),
        }
    }

    /// Returns the explicit type hint, or the one inferred from the value.
    #[must_use]
    pub fn param_type(&self) -> ParamType {
        self.type_hint.unwrap_or_else(|| self.value.inferred_type())
    }

    /// Returns `true` if the wrapped value is NULL.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

impl From<SqlValue> for Param {
    fn from(value: SqlValue) -> Self {
        Self {
            value,
            type_hint: None,
        }
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

impl ToSqlValue for i64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

macro_rules! widen_to_sql_value {
    ($($ty:ty => $variant:ident($wide:ty)),* $(,)?) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::$variant(<$wide>::from(self))
                }
            }
        )*
    };
}

widen_to_sql_value! {
    i32 => Int(i64),
    i16 => Int(i64),
    u32 => Int(i64),
    u16 => Int(i64),
    u8 => Int(i64),
    f32 => Float(f64),
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl ToSqlValue for &String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self.clone())
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self)
    }
}

impl ToSqlValue for &[u8] {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_escaping() {
        assert_eq!(SqlValue::Text(String::from("O'Brien")).to_string(), "'O''Brien'");
    }

    #[test]
    fn test_display_blob() {
        assert_eq!(
            SqlValue::Blob(vec![0x48, 0x45, 0x4C, 0x4C, 0x4F]).to_string(),
            "X'48454C4C4F'"
        );
    }

    #[test]
    fn test_to_sql_value_conversions() {
        assert_eq!(true.to_sql_value(), SqlValue::Bool(true));
        assert_eq!(42_i32.to_sql_value(), SqlValue::Int(42));
        assert_eq!(2.5_f64.to_sql_value(), SqlValue::Float(2.5));
        assert_eq!(
            "hello".to_sql_value(),
            SqlValue::Text(String::from("hello"))
        );
        assert_eq!(None::<i32>.to_sql_value(), SqlValue::Null);
        assert_eq!(Some(42_i32).to_sql_value(), SqlValue::Int(42));
    }

    #[test]
    fn test_param_type_inference() {
        assert_eq!(Param::new(1).param_type(), ParamType::Integer);
        assert_eq!(Param::new("a").param_type(), ParamType::Text);
        assert_eq!(Param::new(None::<i64>).param_type(), ParamType::Null);
        assert_eq!(
            Param::typed("010", ParamType::Binary).param_type(),
            ParamType::Binary
        );
    }

    #[test]
    fn test_param_serializes_value_untagged() {
        let json = serde_json::to_string(&Param::new(7)).unwrap();
        assert_eq!(json, r#"{"value":7}"#);
        let json = serde_json::to_string(&Param::typed("x", ParamType::Text)).unwrap();
        assert_eq!(json, r#"{"value":"x","type_hint":"text"}"#);
    }
}
