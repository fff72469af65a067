//! Identifier quoting and value escaping.

use std::borrow::Cow;
use std::sync::Arc;

use crate::config::QuoterConfig;
use crate::error::{QueryError, QueryResult};
use crate::escape::{Escaper, MySqlEscaper, PostgresEscaper, StandardEscaper};
use crate::ident::Ident;
use crate::statement::SqlQuery;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Column,
    Table,
    Identifier,
}

/// Turns values and identifiers into SQL text.
///
/// Every piece of caller data passes through here on its way into a
/// statement. Identifiers are wrapped segment by segment in the configured
/// quote (doubling any embedded quote) and table names receive the table
/// prefix. Values are escaped by the configured [`Escaper`].
#[derive(Debug, Clone)]
pub struct Quoter {
    config: QuoterConfig,
    escaper: Arc<dyn Escaper>,
}

impl Default for Quoter {
    fn default() -> Self {
        Self::new(QuoterConfig::default())
    }
}

impl Quoter {
    /// Create a quoter with the standard escaper.
    pub fn new(config: QuoterConfig) -> Self {
        Self::with_escaper(config, StandardEscaper)
    }

    /// Create a quoter with a custom escaping strategy.
    pub fn with_escaper(config: QuoterConfig, escaper: impl Escaper + 'static) -> Self {
        Self {
            config,
            escaper: Arc::new(escaper),
        }
    }

    /// Backtick identifiers and MySQL string escaping.
    pub fn mysql() -> Self {
        Self::with_escaper(QuoterConfig::mysql(), MySqlEscaper)
    }

    /// Double-quoted identifiers and PostgreSQL string escaping.
    pub fn postgres() -> Self {
        Self::with_escaper(QuoterConfig::postgres(), PostgresEscaper)
    }

    pub fn table_prefix(&self) -> &str {
        &self.config.table_prefix
    }

    /// Escape raw text into a string literal.
    pub fn escape(&self, raw: &str) -> String {
        self.escaper.escape(raw)
    }

    /// Quote a value for embedding in SQL.
    ///
    /// Integers are emitted bare, floats in fixed notation, lists as
    /// `(a, b)`, expressions as their compiled text and sub-queries as
    /// `(sql)`. A [`Value::Param`] cannot be resolved here and yields
    /// [`QueryError::UnboundParameter`].
    pub fn quote_value(&self, value: &Value) -> QueryResult<String> {
        Ok(match value {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => self.escaper.bool_literal(*b),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => self.escaper.float_literal(*f),
            Value::Text(s) => self.escaper.escape(s),
            Value::List(items) => {
                let quoted = items
                    .iter()
                    .map(|item| self.quote_value(item))
                    .collect::<QueryResult<Vec<_>>>()?;
                format!("({})", quoted.join(", "))
            }
            Value::Expr(expr) => expr.compile(self)?,
            Value::Query(query) => format!("({})", query.build_sql(self)?),
            Value::Param(key) => return Err(QueryError::unbound(key.as_str())),
        })
    }

    /// Quote a column reference.
    ///
    /// The table prefix goes on the second-to-last dotted segment. A bare
    /// `*`, or a `*` segment, stays unquoted. Column aliases are not prefixed.
    pub fn quote_column(&self, column: &Ident) -> QueryResult<String> {
        self.quote(column, Position::Column)
    }

    /// Quote a table reference.
    ///
    /// The table prefix goes on the last dotted segment and on the alias.
    pub fn quote_table(&self, table: &Ident) -> QueryResult<String> {
        self.quote(table, Position::Table)
    }

    /// Quote each dotted segment without applying the table prefix.
    pub fn quote_identifier(&self, ident: &Ident) -> QueryResult<String> {
        self.quote(ident, Position::Identifier)
    }

    fn quote(&self, ident: &Ident, position: Position) -> QueryResult<String> {
        match ident {
            Ident::Name(name) => Ok(self.quote_name(name, position)),
            Ident::Expr(expr) => expr.compile(self),
            Ident::Query(query) => Ok(format!("({})", query.build_sql(self)?)),
            Ident::Aliased { target, alias } => {
                let quoted = self.quote(target, position)?;
                if position == Position::Column && quoted == "*" {
                    return Ok(quoted);
                }
                let q = self.config.identifier_quote.as_str();
                let prefix = match position {
                    Position::Table => self.table_prefix(),
                    _ => "",
                };
                Ok(format!(
                    "{quoted} AS {q}{prefix}{}{q}",
                    self.escape_identifier(alias)
                ))
            }
        }
    }

    fn quote_name(&self, name: &str, position: Position) -> String {
        let q = self.config.identifier_quote.as_str();
        let prefix = self.table_prefix();
        let name = self.escape_identifier(name);

        if position == Position::Column && name == "*" {
            return name.into_owned();
        }

        if !name.contains('.') {
            return match position {
                Position::Table => format!("{q}{prefix}{name}{q}"),
                _ => format!("{q}{name}{q}"),
            };
        }

        let mut parts: Vec<Cow<'_, str>> = name.split('.').map(Cow::Borrowed).collect();
        let prefixed = match position {
            Position::Column => parts.len().checked_sub(2),
            Position::Table => parts.len().checked_sub(1),
            Position::Identifier => None,
        };
        if let Some(index) = prefixed.filter(|_| !prefix.is_empty()) {
            parts[index] = Cow::Owned(format!("{prefix}{}", parts[index]));
        }

        parts
            .iter()
            .map(|part| {
                if position == Position::Column && part == "*" {
                    part.to_string()
                } else {
                    format!("{q}{part}{q}")
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    fn escape_identifier<'a>(&self, name: &'a str) -> Cow<'a, str> {
        let q = self.config.identifier_quote.as_str();
        if q.is_empty() || !name.contains(q) {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(name.replace(q, &format!("{q}{q}")))
        }
    }
}
