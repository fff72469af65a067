//! Table and column references.
//!
//! An [`Ident`] is whatever may stand in a column or table position: a plain
//! (possibly dotted) name, an aliased reference, a raw expression, or a
//! nested statement. Each variant has its own quoting rule in
//! [`Quoter`](crate::Quoter).
//!
//! ```ignore
//! use sqlweave::Ident;
//!
//! let plain = Ident::from("users.id");
//! let aliased = Ident::from(("users.username", "name"));
//! ```

use std::sync::Arc;

use crate::expr::Expression;
use crate::query::Select;
use crate::statement::Statement;

/// A column or table reference.
#[derive(Debug, Clone)]
pub enum Ident {
    /// Plain name, optionally dotted (`schema.table.column`).
    Name(String),
    /// `target AS alias`.
    Aliased { target: Box<Ident>, alias: String },
    /// Raw SQL fragment.
    Expr(Expression),
    /// Nested statement, rendered as `(compiled sql)`.
    Query(Arc<Statement>),
}

impl Ident {
    /// Create a plain name.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Alias `target`. Aliasing an aliased reference replaces its alias.
    pub fn aliased(target: impl Into<Ident>, alias: impl Into<String>) -> Self {
        let target = match target.into() {
            Ident::Aliased { target, .. } => target,
            other => Box::new(other),
        };
        Self::Aliased {
            target,
            alias: alias.into(),
        }
    }

    /// The alias, if any.
    pub fn alias(&self) -> Option<&str> {
        match self {
            Ident::Aliased { alias, .. } => Some(alias.as_str()),
            _ => None,
        }
    }

    /// The reference with any alias removed.
    pub fn unaliased(&self) -> &Ident {
        match self {
            Ident::Aliased { target, .. } => target.as_ref(),
            other => other,
        }
    }

    pub(crate) fn is_empty_name(&self) -> bool {
        matches!(self, Ident::Name(name) if name.is_empty())
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::Name(name.to_string())
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Ident::Name(name)
    }
}

impl From<&String> for Ident {
    fn from(name: &String) -> Self {
        Ident::Name(name.clone())
    }
}

impl<A: Into<String>> From<(&str, A)> for Ident {
    fn from((name, alias): (&str, A)) -> Self {
        Ident::aliased(name, alias)
    }
}

impl<A: Into<String>> From<(String, A)> for Ident {
    fn from((name, alias): (String, A)) -> Self {
        Ident::aliased(name, alias)
    }
}

impl From<Expression> for Ident {
    fn from(expr: Expression) -> Self {
        Ident::Expr(expr)
    }
}

impl<A: Into<String>> From<(Expression, A)> for Ident {
    fn from((expr, alias): (Expression, A)) -> Self {
        Ident::aliased(expr, alias)
    }
}

impl From<Select> for Ident {
    fn from(query: Select) -> Self {
        Ident::Query(Arc::new(Statement::Select(query)))
    }
}

impl<A: Into<String>> From<(Select, A)> for Ident {
    fn from((query, alias): (Select, A)) -> Self {
        Ident::aliased(query, alias)
    }
}

impl From<Statement> for Ident {
    fn from(query: Statement) -> Self {
        Ident::Query(Arc::new(query))
    }
}
