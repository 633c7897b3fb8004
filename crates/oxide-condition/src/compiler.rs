//! The condition compiler entry point.

use tracing::debug;

use crate::ast::{Condition, ExpressionNode, Select};
use crate::builder::{BuildContext, BuilderRegistry, build_select};
use crate::config::CompilerConfig;
use crate::definition::{DefinitionParser, Term};
use crate::dialect::Quoter;
use crate::error::Result;
use crate::params::{ParamBinder, ParamSink};

/// Compiles conditions to SQL with bound parameters.
///
/// A compiler is immutable once configured and can be shared between
/// threads; every build call gets its own param sink.
///
/// # Example
///
/// ```rust
/// use oxide_condition::definition::Term;
/// use oxide_condition::ConditionCompiler;
///
/// let compiler = ConditionCompiler::new();
/// let (sql, params) = compiler
///     .build_definition(Term::definition("IN", [Term::from("id"), Term::list([1, 2, 3])]))
///     .unwrap();
/// assert_eq!(sql, "\"id\" IN (:qp0, :qp1, :qp2)");
/// assert_eq!(params.len(), 3);
/// ```
pub struct ConditionCompiler {
    config: CompilerConfig,
    quoter: Box<dyn Quoter>,
    registry: BuilderRegistry,
    parser: DefinitionParser,
}

impl ConditionCompiler {
    /// Creates a compiler with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(CompilerConfig::default())
    }

    /// Creates a compiler from a configuration.
    #[must_use]
    pub fn from_config(config: CompilerConfig) -> Self {
        let quoter = config.quoter();
        Self {
            config,
            quoter,
            registry: BuilderRegistry::new(),
            parser: DefinitionParser::new(),
        }
    }

    /// Replaces the dialect's quoter.
    #[must_use]
    pub fn with_quoter(mut self, quoter: impl Quoter + 'static) -> Self {
        self.quoter = Box::new(quoter);
        self
    }

    /// Returns the configuration.
    pub const fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Returns the quoter.
    pub fn quoter(&self) -> &dyn Quoter {
        self.quoter.as_ref()
    }

    /// Returns the builder registry.
    pub const fn registry(&self) -> &BuilderRegistry {
        &self.registry
    }

    /// Returns the definition parser.
    pub const fn parser(&self) -> &DefinitionParser {
        &self.parser
    }

    /// Returns the definition parser for registering operators.
    pub fn parser_mut(&mut self) -> &mut DefinitionParser {
        &mut self.parser
    }

    /// Registers (or replaces) the builder for node type `T`.
    pub fn register<T, F>(&mut self, build: F) -> &mut Self
    where
        T: ExpressionNode + 'static,
        F: Fn(&T, &mut BuildContext<'_>) -> Result<String> + Send + Sync + 'static,
    {
        self.registry.register(build);
        self
    }

    /// Turns a definition into a condition node.
    pub fn create_condition(&self, definition: impl Into<Term>) -> Result<Condition> {
        self.parser.parse(definition.into())
    }

    /// Builds a condition with a fresh param sink.
    pub fn build_condition(&self, condition: &Condition) -> Result<(String, ParamSink)> {
        let mut params = self.config.param_sink();
        let sql = self.build_condition_into(condition, &mut params)?;
        debug!(sql = %sql, params = params.len(), "Built condition");
        Ok((sql, params))
    }

    /// Parses a definition and builds it with a fresh param sink.
    pub fn build_definition(&self, definition: impl Into<Term>) -> Result<(String, ParamSink)> {
        let condition = self.create_condition(definition)?;
        self.build_condition(&condition)
    }

    /// Builds a condition into a caller-supplied binder, e.g. one shared by
    /// several clauses of the same statement.
    pub fn build_condition_into(
        &self,
        condition: &Condition,
        params: &mut dyn ParamBinder,
    ) -> Result<String> {
        self.context(params).build(condition)
    }

    /// Builds any expression node, including custom ones.
    pub fn build_expression(
        &self,
        node: &dyn ExpressionNode,
        params: &mut dyn ParamBinder,
    ) -> Result<String> {
        self.context(params).build_node(node)
    }

    /// Builds a top-level SELECT; WHERE and HAVING share one sink.
    pub fn build_query(&self, select: &Select) -> Result<(String, ParamSink)> {
        let mut params = self.config.param_sink();
        let sql = build_select(select, &mut self.context(&mut params))?;
        debug!(sql = %sql, params = params.len(), "Built query");
        Ok((sql, params))
    }

    fn context<'a>(&'a self, params: &'a mut dyn ParamBinder) -> BuildContext<'a> {
        BuildContext::new(&self.registry, self.quoter.as_ref(), params)
            .with_like_escape_character(self.config.like_escape_character)
    }
}

impl Default for ConditionCompiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::col;
    use crate::dialect::{DialectKind, MySqlDialect};
    use crate::error::ConditionError;
    use crate::value::SqlValue;

    #[test]
    fn test_compiler_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConditionCompiler>();
    }

    #[test]
    fn test_build_condition_fresh_sink_per_call() {
        let compiler = ConditionCompiler::new();
        let cond = col("a").eq(1).and(col("b").in_list([2, 3]));
        let (first, p1) = compiler.build_condition(&cond).unwrap();
        let (second, p2) = compiler.build_condition(&cond).unwrap();
        assert_eq!(first, second);
        assert_eq!(p1.params(), p2.params());
        assert_eq!(first, "(\"a\" = :qp0) AND (\"b\" IN (:qp1, :qp2))");
    }

    #[test]
    fn test_build_condition_into_shared_sink() {
        let compiler = ConditionCompiler::new();
        let mut params = ParamSink::new();
        let first = compiler.build_condition_into(&col("a").eq(1), &mut params).unwrap();
        let second = compiler.build_condition_into(&col("b").eq(2), &mut params).unwrap();
        assert_eq!(first, "\"a\" = :qp0");
        assert_eq!(second, "\"b\" = :qp1");
    }

    #[test]
    fn test_config_drives_output() {
        let config = CompilerConfig::default()
            .with_dialect(DialectKind::MySql)
            .with_param_prefix(":p")
            .with_like_escape_character(Some('!'));
        let compiler = ConditionCompiler::from_config(config);
        let (sql, params) = compiler.build_condition(&col("name").like("50%")).unwrap();
        assert_eq!(sql, "`name` LIKE :p0 ESCAPE '!'");
        assert_eq!(params.get(":p0").unwrap().value, SqlValue::Text(String::from("%50!%%")));
    }

    #[test]
    fn test_max_params() {
        let compiler =
            ConditionCompiler::from_config(CompilerConfig::default().with_max_params(Some(2)));
        let err = compiler.build_condition(&col("id").in_list([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ConditionError::TooManyParams { limit: 2 }));
    }

    #[test]
    fn test_with_quoter() {
        let compiler = ConditionCompiler::new().with_quoter(MySqlDialect::new());
        let (sql, _) = compiler.build_condition(&col("a").gt(1)).unwrap();
        assert_eq!(sql, "`a` > :qp0");
    }

    #[test]
    fn test_build_query() {
        let compiler = ConditionCompiler::new();
        let select = Select::new()
            .columns(&["id"])
            .from("users")
            .where_clause(col("age").gt(18))
            .limit(5);
        let (sql, params) = compiler.build_query(&select).unwrap();
        assert_eq!(sql, "SELECT \"id\" FROM \"users\" WHERE \"age\" > :qp0 LIMIT 5");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_create_condition_from_definition() {
        let compiler = ConditionCompiler::new();
        let cond = compiler
            .create_condition(Term::definition("NOT", [Term::from("x=1")]))
            .unwrap();
        assert_eq!(compiler.build_condition(&cond).unwrap().0, "NOT (x=1)");
    }
}
