//! MySQL dialect.

use super::Quoter;

/// MySQL/MariaDB dialect using backtick-quoted identifiers.
#[derive(Debug, Default, Clone)]
pub struct MySqlDialect {
    table_prefix: String,
}

impl MySqlDialect {
    /// Creates a new MySQL dialect.
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

impl Quoter for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quotes(&self) -> Option<(char, char)> {
        Some(('`', '`'))
    }

    fn table_prefix(&self) -> &str {
        &self.table_prefix
    }
}
