//! # oxide-condition
//!
//! A database-agnostic SQL condition compiler.
//!
//! This crate provides:
//! - A condition AST (comparisons, hashes, IN, LIKE, BETWEEN, EXISTS, NOT,
//!   AND/OR) with fluent constructors
//! - An array-definition parser for the `["OPERATOR", operands...]` surface
//!   syntax, including a JSON decoding of it
//! - A builder registry that compiles conditions to SQL fragments and is
//!   open to application-defined node types
//! - Protection against SQL injection: values only ever reach the SQL as
//!   placeholders
//!
//! ## Building Conditions
//!
//! ```rust
//! use oxide_condition::ast::col;
//! use oxide_condition::ConditionCompiler;
//!
//! let compiler = ConditionCompiler::new();
//! let condition = col("age").between(18, 30).and(col("status").in_list([1, 2]));
//! let (sql, params) = compiler.build_condition(&condition).unwrap();
//!
//! assert_eq!(sql, "(\"age\" BETWEEN :qp0 AND :qp1) AND (\"status\" IN (:qp2, :qp3))");
//! assert_eq!(params.len(), 4);
//! ```
//!
//! ## SQL Injection Prevention
//!
//! User input is bound, never spliced:
//!
//! ```rust
//! use oxide_condition::ast::col;
//! use oxide_condition::value::SqlValue;
//! use oxide_condition::ConditionCompiler;
//!
//! let user_input = "'; DROP TABLE users; --";
//! let (sql, params) = ConditionCompiler::new()
//!     .build_condition(&col("name").eq(user_input))
//!     .unwrap();
//!
//! assert_eq!(sql, "\"name\" = :qp0");
//! assert_eq!(
//!     params.get(":qp0").unwrap().value,
//!     SqlValue::Text(String::from(user_input))
//! );
//! ```

pub mod ast;
pub mod builder;
pub mod compiler;
pub mod config;
pub mod definition;
pub mod dialect;
pub mod error;
pub mod lexer;
pub mod params;
pub mod value;

pub use ast::{Condition, col};
pub use compiler::ConditionCompiler;
pub use config::CompilerConfig;
pub use definition::{DefinitionParser, Term, from_array_definition};
pub use error::{ConditionError, Result};
pub use params::{ParamBinder, ParamSink};
pub use value::{Param, ParamType, SqlValue, ToSqlValue};
