//! Convenient imports for typical `sqlweave` usage.
//!
//! ```ignore
//! use sqlweave::prelude::*;
//! ```

pub use crate::{
    Delete, Expression, Ident, Insert, Join, QueryError, QueryResult, Quoter, QuoterConfig,
    Select, SqlQuery, Statement, StatementType, Update, Value,
};
