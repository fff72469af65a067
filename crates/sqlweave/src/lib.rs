//! # sqlweave
//!
//! A fluent, stateful SQL statement builder.
//!
//! Builders accumulate columns, tables, joins, conditions, ordering and
//! limits, then compile to a single SQL string. Identifiers are quoted and
//! table-prefixed, and values are escaped, by a configurable [`Quoter`].
//!
//! ## Features
//!
//! - **Nested conditions**: AND/OR groups with open/close markers for WHERE and HAVING
//! - **Typed references**: columns and tables are names, aliases, expressions or sub-queries
//! - **Explicit parameters**: `Value::Param` references are resolved from the builder at compile time
//! - **Pluggable escaping**: standard, MySQL and PostgreSQL escapers, or bring your own [`Escaper`]
//! - **No execution**: the crate only produces SQL text
//!
//! ## Usage
//!
//! ```ignore
//! use sqlweave::prelude::*;
//!
//! // SELECT
//! let mut q = sqlweave::select_columns([("users.id", "id"), ("users.username", "name")]);
//! q.from(("users", "u")).where_("u.name", "=", "test");
//! assert_eq!(
//!     q.compile()?,
//!     "SELECT users.id AS id, users.username AS name FROM users AS u WHERE u.name = 'test'"
//! );
//!
//! // DELETE
//! let mut q = sqlweave::delete("posts");
//! q.where_("posts.id", "IN", ["1", "2", "3"])
//!     .order_by("posts.views", "ASC")
//!     .limit(5);
//!
//! // Quoted identifiers with a table prefix
//! let quoter = Quoter::new(QuoterConfig::postgres().with_table_prefix("app_"));
//! let sql = q.compile_with(&quoter)?;
//! ```

pub mod clause;
pub mod condition;
pub mod config;
pub mod error;
pub mod escape;
pub mod expr;
pub mod ident;
pub mod param;
pub mod prelude;
pub mod query;
pub mod quoter;
pub mod statement;
pub mod value;

pub use clause::{ClauseCompiler, OrderBy};
pub use condition::{Condition, ConditionEntry, ConditionGroup, ConditionList, Logic};
pub use config::QuoterConfig;
pub use error::{QueryError, QueryResult};
pub use escape::{Escaper, MySqlEscaper, PostgresEscaper, StandardEscaper};
pub use expr::Expression;
pub use ident::Ident;
pub use param::Params;
pub use query::{Delete, Insert, Join, Select, UnionOperand, Update};
pub use quoter::Quoter;
pub use statement::{SqlQuery, Statement, StatementType};
pub use value::Value;


/// Create an empty SELECT builder (`SELECT *`).
pub fn select() -> Select {
    Select::new()
}

/// Create a SELECT builder with an initial column list.
///
/// # Example
/// ```ignore
/// let q = sqlweave::select_columns(["id", "username"]);
/// ```
pub fn select_columns<I, C>(columns: I) -> Select
where
    I: IntoIterator<Item = C>,
    C: Into<Ident>,
{
    Select::with_columns(columns)
}

/// Create an INSERT builder for `table`.
pub fn insert(table: impl Into<String>) -> Insert {
    Insert::with_table(table)
}

/// Create an INSERT builder for `table` with its column list.
pub fn insert_columns<I, C>(table: impl Into<String>, columns: I) -> Insert
where
    I: IntoIterator<Item = C>,
    C: Into<Ident>,
{
    Insert::with_columns(table, columns)
}

/// Create an UPDATE builder for `table`. The table may be aliased.
pub fn update(table: impl Into<Ident>) -> Update {
    Update::with_table(table)
}

/// Create a DELETE builder for `table`.
pub fn delete(table: impl Into<String>) -> Delete {
    Delete::with_table(table)
}

/// Create a raw SQL expression.
pub fn expr(sql: impl Into<String>) -> Expression {
    Expression::new(sql)
}

/// Create a raw SQL expression with its placeholders bound.
///
/// # Example
/// ```ignore
/// let e = sqlweave::expr_with("COALESCE(:a, :b)", [(":a", 1), (":b", 2)]);
/// ```
pub fn expr_with<K, V, I>(sql: impl Into<String>, params: I) -> Expression
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    Expression::new(sql).parameters(params)
}

/// Reference a builder parameter, bound later with `param()`.
pub fn param_ref(key: impl Into<String>) -> Value {
    Value::param(key)
}
