//! Dialect without identifier quoting.

use super::Quoter;

/// Leaves identifiers bare; `[[..]]`/`{{..}}` markers are simply stripped.
#[derive(Debug, Default, Clone)]
pub struct PlainDialect {
    table_prefix: String,
}

impl PlainDialect {
    /// Creates a new plain dialect.
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

impl Quoter for PlainDialect {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn identifier_quotes(&self) -> Option<(char, char)> {
        None
    }

    fn table_prefix(&self) -> &str {
        &self.table_prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_dialect() {
        let dialect = PlainDialect::new().with_table_prefix("app_");
        assert_eq!(dialect.quote_column_name("u.id"), "u.id");
        assert_eq!(
            dialect.quote_sql("[[id]] IN (SELECT id FROM {{%users}})"),
            "id IN (SELECT id FROM app_users)"
        );
    }
}
