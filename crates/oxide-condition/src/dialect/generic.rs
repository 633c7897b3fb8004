//! Generic SQL dialect.

use super::Quoter;

/// A generic SQL dialect using ANSI double-quoted identifiers.
///
/// Suitable for PostgreSQL and SQLite.
#[derive(Debug, Default, Clone)]
pub struct GenericDialect {
    table_prefix: String,
}

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table_prefix: String::new(),
        }
    }

    /// Sets the prefix substituted into `{{%table}}` markers.
    #[must_use]
    pub fn with_table_prefix(mut self, prefix: &str) -> Self {
        self.table_prefix = String::from(prefix);
        self
    }
}

impl Quoter for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn table_prefix(&self) -> &str {
        &self.table_prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.identifier_quotes(), Some(('"', '"')));
        assert_eq!(dialect.quote_column_name("name"), "\"name\"");
        assert_eq!(dialect.quote_column_name("users.name"), "\"users\".\"name\"");
        assert_eq!(dialect.quote_table_name("public.users"), "\"public\".\"users\"");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.quote_simple_column_name("a\"b"), "\"a\"\"b\"");
        assert_eq!(dialect.quote_simple_column_name("\"done\""), "\"done\"");
    }
}
