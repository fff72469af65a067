//! Error types for sqlweave

use thiserror::Error;

/// Result type alias for statement building.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while assembling or compiling a statement.
///
/// Builder invariants are checked at the call that breaks them, so most of
/// these surface from a setter rather than from `compile()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// An INSERT or DELETE target table was given an alias.
    #[error("{0}")]
    InvalidTableAlias(String),

    /// Two mutually exclusive clauses were combined on one statement.
    #[error("{0}")]
    IncompatibleClause(String),

    /// A builder of the wrong kind was passed where a SELECT is required.
    #[error("{0}")]
    InvalidArgument(String),

    /// A parameter reference had no bound value at compile time.
    #[error("Unbound parameter: {0}")]
    UnboundParameter(String),
}

impl QueryError {
    /// Create a table alias error
    pub fn table_alias(message: impl Into<String>) -> Self {
        Self::InvalidTableAlias(message.into())
    }

    /// Create an incompatible clause error
    pub fn incompatible(message: impl Into<String>) -> Self {
        Self::IncompatibleClause(message.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an unbound parameter error for `key`
    pub fn unbound(key: impl Into<String>) -> Self {
        Self::UnboundParameter(key.into())
    }

    /// Check if this is a table alias error
    pub fn is_invalid_table_alias(&self) -> bool {
        matches!(self, Self::InvalidTableAlias(_))
    }

    /// Check if this is an incompatible clause error
    pub fn is_incompatible_clause(&self) -> bool {
        matches!(self, Self::IncompatibleClause(_))
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an unbound parameter error
    pub fn is_unbound_parameter(&self) -> bool {
        matches!(self, Self::UnboundParameter(_))
    }
}
