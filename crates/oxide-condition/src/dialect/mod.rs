//! SQL dialect support.
//!
//! Dialects act as the identifier [`Quoter`] collaborator for condition
//! building: builders decide *when* a name is quoted, the dialect decides
//! *how*.

mod generic;
mod mysql;
mod plain;

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

pub use generic::GenericDialect;
pub use mysql::MySqlDialect;
pub use plain::PlainDialect;

/// Matches `{{table}}`, `{{%table}}` and `[[column]]` markers in raw SQL.
fn marker_regex() -> &'static Regex {
    static MARKERS: OnceLock<Regex> = OnceLock::new();
    MARKERS.get_or_init(|| {
        Regex::new(r"(\{\{(%?[\w\-. ]+%?)\}\}|\[\[([\w\-. ]+)\]\])")
            .expect("Invalid quoting marker regex")
    })
}

/// Renders raw identifiers into their dialect-quoted form.
pub trait Quoter: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the opening and closing identifier quote characters, or
    /// `None` if the dialect leaves identifiers bare.
    fn identifier_quotes(&self) -> Option<(char, char)> {
        Some(('"', '"'))
    }

    /// Returns the prefix substituted for `%` in `{{%table}}` markers.
    fn table_prefix(&self) -> &str {
        ""
    }

    /// Quotes a single identifier, doubling embedded closing quotes.
    ///
    /// Already-quoted identifiers are returned unchanged.
    fn quote_identifier(&self, name: &str) -> String {
        let Some((open, close)) = self.identifier_quotes() else {
            return name.to_owned();
        };
        if name.starts_with(open) {
            return name.to_owned();
        }
        let escaped = name.replace(close, &format!("{close}{close}"));
        format!("{open}{escaped}{close}")
    }

    /// Quotes a column name without a table prefix. `*` stays bare.
    fn quote_simple_column_name(&self, name: &str) -> String {
        if name == "*" {
            return name.to_owned();
        }
        self.quote_identifier(name)
    }

    /// Quotes a table name without a schema prefix.
    fn quote_simple_table_name(&self, name: &str) -> String {
        self.quote_identifier(name)
    }

    /// Quotes a possibly table-qualified column name (`t.col`).
    ///
    /// Names containing `(` or `[[` are treated as expressions and left
    /// alone.
    fn quote_column_name(&self, name: &str) -> String {
        if name.contains('(') || name.contains("[[") {
            return name.to_owned();
        }
        match name.rsplit_once('.') {
            Some((table, column)) => format!(
                "{}.{}",
                self.quote_table_name(table),
                self.quote_simple_column_name(column)
            ),
            None => self.quote_simple_column_name(name),
        }
    }

    /// Quotes a possibly schema-qualified table name (`schema.table`).
    fn quote_table_name(&self, name: &str) -> String {
        if name.contains('(') || name.contains("{{") {
            return name.to_owned();
        }
        name.split('.')
            .map(|part| self.quote_simple_table_name(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Rewrites `[[column]]` and `{{table}}` markers in a raw SQL fragment.
    fn quote_sql(&self, sql: &str) -> String {
        marker_regex()
            .replace_all(sql, |caps: &Captures<'_>| {
                if let Some(column) = caps.get(3) {
                    return self.quote_column_name(column.as_str());
                }
                let table = caps.get(2).map_or("", |m| m.as_str());
                self.quote_table_name(table)
                    .replace('%', self.table_prefix())
            })
            .into_owned()
    }
}

/// Selects one of the built-in dialects, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// ANSI double-quoted identifiers.
    #[default]
    Generic,
    /// Backtick-quoted identifiers.
    MySql,
    /// No identifier quoting.
    Plain,
}

impl DialectKind {
    /// Parses a dialect name (`generic`, `mysql`, `plain`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "generic" | "ansi" | "postgres" | "sqlite" => Some(Self::Generic),
            "mysql" | "mariadb" => Some(Self::MySql),
            "plain" | "none" => Some(Self::Plain),
            _ => None,
        }
    }

    /// Creates the quoter for this dialect.
    #[must_use]
    pub fn quoter(self, table_prefix: &str) -> Box<dyn Quoter> {
        match self {
            Self::Generic => Box::new(GenericDialect::new().with_table_prefix(table_prefix)),
            Self::MySql => Box::new(MySqlDialect::new().with_table_prefix(table_prefix)),
            Self::Plain => Box::new(PlainDialect::new().with_table_prefix(table_prefix)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_sql_markers() {
        let dialect = GenericDialect::new().with_table_prefix("tbl_");
        assert_eq!(
            dialect.quote_sql("SELECT [[id]] FROM {{%user}} WHERE [[u.name]] = :n"),
            "SELECT \"id\" FROM \"tbl_user\" WHERE \"u\".\"name\" = :n"
        );
    }

    #[test]
    fn test_expressions_are_not_quoted() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.quote_column_name("COUNT(*)"), "COUNT(*)");
        assert_eq!(dialect.quote_column_name("[[a]]"), "[[a]]");
        assert_eq!(dialect.quote_column_name("t.*"), "\"t\".*");
    }

    #[test]
    fn test_dialect_kind_from_name() {
        assert_eq!(DialectKind::from_name("MySQL"), Some(DialectKind::MySql));
        assert_eq!(DialectKind::from_name("plain"), Some(DialectKind::Plain));
        assert_eq!(DialectKind::from_name("oracle"), None);
        assert_eq!(DialectKind::MySql.quoter("").quote_column_name("a"), "`a`");
    }
}
