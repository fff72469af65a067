//! Statement builders.
//!
//! Each builder accumulates state through `&mut self` setters and renders it
//! on [`compile`](Select::compile). Setters that can break an invariant
//! return `QueryResult<&mut Self>` so the error surfaces at the offending call.
//!
//! # Usage
//!
//! ```ignore
//! use sqlweave::prelude::*;
//!
//! let mut q = Select::new();
//! q.from(("users", "u"))
//!     .left_join(("posts", "p"))
//!     .on("p.user_id", "=", "u.id")?
//!     .where_("u.active", "=", true)
//!     .order_by("u.name", "ASC")
//!     .limit(10);
//! let sql = q.compile()?;
//! ```

mod delete;
mod insert;
mod join;
mod select;
mod update;
mod where_clause;

pub use delete::Delete;
pub use insert::Insert;
pub use join::{Join, JoinCondition, JoinOn};
pub use select::{Select, UnionOperand};
pub use update::Update;
pub use where_clause::WhereClause;

#[cfg(test)]
mod tests;
