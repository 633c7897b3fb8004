//! LIKE / ILIKE conditions.

use std::collections::BTreeMap;

use super::{ColumnRef, ExpressionNode, Operand};

/// Replacements applied to each character of a LIKE pattern.
pub type EscapeMap = BTreeMap<char, String>;

/// `column [NOT] [I]LIKE pattern`, optionally with several patterns joined
/// by AND or OR.
///
/// Patterns are escaped with the escape map and wrapped in `%...%` before
/// binding. `escape` is `None` for the default map (`%`, `_` and `\`
/// prefixed with a backslash); an empty map disables both escaping and
/// wrapping, so the pattern is bound as given.
#[derive(Debug, Clone, PartialEq)]
pub struct LikeCondition {
    /// The matched column.
    pub column: ColumnRef,
    /// The operator, e.g. `LIKE`, `NOT ILIKE`, `OR NOT LIKE`.
    pub operator: String,
    /// The patterns.
    pub values: Vec<Operand>,
    /// Character replacements, or `None` for the default.
    pub escape: Option<EscapeMap>,
}

impl LikeCondition {
    /// Creates a LIKE condition with a single pattern.
    #[must_use]
    pub fn new(column: impl Into<ColumnRef>, operator: &str, value: impl Into<Operand>) -> Self {
        Self::many(column, operator, [value])
    }

    /// Creates a LIKE condition with several patterns.
    #[must_use]
    pub fn many<T: Into<Operand>>(
        column: impl Into<ColumnRef>,
        operator: &str,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        Self {
            column: column.into(),
            operator: String::from(operator),
            values: values.into_iter().map(Into::into).collect(),
            escape: None,
        }
    }

    /// Uses a custom escape map.
    #[must_use]
    pub fn with_escape(mut self, escape: EscapeMap) -> Self {
        self.escape = Some(escape);
        self
    }

    /// Binds patterns verbatim, without escaping or `%` wrapping.
    #[must_use]
    pub fn without_escaping(mut self) -> Self {
        self.escape = Some(EscapeMap::new());
        self
    }

    /// Returns the default escape map, using backslash.
    #[must_use]
    pub fn default_escape_map() -> EscapeMap {
        Self::escape_map_for('\\')
    }

    /// Returns the map that escapes `%`, `_` and `escape` itself with
    /// `escape`.
    #[must_use]
    pub fn escape_map_for(escape: char) -> EscapeMap {
        EscapeMap::from([
            ('%', format!("{escape}%")),
            ('_', format!("{escape}_")),
            (escape, format!("{escape}{escape}")),
        ])
    }
}

impl ExpressionNode for LikeCondition {}
