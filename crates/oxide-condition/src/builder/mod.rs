//! Condition builders.
//!
//! Each condition node is compiled by a builder looked up in a
//! [`BuilderRegistry`] by the node's runtime type. Builders render
//! identifiers through the dialect's quoter and route every value through
//! the shared param sink, so the SQL they return only ever contains
//! placeholders.
//!
//! # Example
//!
//! ```rust
//! use oxide_condition::ast::col;
//! use oxide_condition::builder::{BuildContext, BuilderRegistry};
//! use oxide_condition::dialect::GenericDialect;
//! use oxide_condition::params::ParamSink;
//!
//! let registry = BuilderRegistry::new();
//! let dialect = GenericDialect::new();
//! let mut params = ParamSink::new();
//! let mut ctx = BuildContext::new(&registry, &dialect, &mut params);
//!
//! let sql = ctx.build(&col("age").between(18, 30)).unwrap();
//! assert_eq!(sql, "\"age\" BETWEEN :qp0 AND :qp1");
//! assert_eq!(params.len(), 2);
//! ```

mod between;
mod compare;
mod conjunction;
mod context;
mod exists;
mod expression;
mod hash;
mod in_list;
mod like;
mod not;
mod registry;
mod select;

pub use between::{build_between, build_between_columns};
pub use compare::build_compare;
pub use conjunction::build_conjunction;
pub use context::BuildContext;
pub use exists::build_exists;
pub use expression::build_expression;
pub use hash::build_hash;
pub use in_list::build_in;
pub use like::{LikeOperator, build_like, escape_like_pattern};
pub use not::build_not;
pub use registry::{BuilderRegistry, ExpressionBuilder};
pub use select::{build_select, build_sub_query};
