use std::fmt;

use crate::error::QueryResult;
use crate::query::{Delete, Insert, Select, Update};
use crate::quoter::Quoter;

/// Which kind of statement a builder produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementType {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementType {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementType::Select => "SELECT",
            StatementType::Insert => "INSERT",
            StatementType::Update => "UPDATE",
            StatementType::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base trait for statement builders.
pub trait SqlQuery {
    fn statement_type(&self) -> StatementType;

    /// Build the SQL string without touching the builder.
    fn build_sql(&self, quoter: &Quoter) -> QueryResult<String>;

    /// Build with the default [`Quoter`].
    fn to_sql(&self) -> QueryResult<String> {
        self.build_sql(&Quoter::default())
    }
}

/// Any builder, for places that accept more than one statement type.
#[derive(Debug, Clone)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl SqlQuery for Statement {
    fn statement_type(&self) -> StatementType {
        match self {
            Statement::Select(_) => StatementType::Select,
            Statement::Insert(_) => StatementType::Insert,
            Statement::Update(_) => StatementType::Update,
            Statement::Delete(_) => StatementType::Delete,
        }
    }

    fn build_sql(&self, quoter: &Quoter) -> QueryResult<String> {
        match self {
            Statement::Select(q) => q.build_sql(quoter),
            Statement::Insert(q) => q.build_sql(quoter),
            Statement::Update(q) => q.build_sql(quoter),
            Statement::Delete(q) => q.build_sql(quoter),
        }
    }
}

impl From<Select> for Statement {
    fn from(q: Select) -> Self {
        Statement::Select(q)
    }
}

impl From<Insert> for Statement {
    fn from(q: Insert) -> Self {
        Statement::Insert(q)
    }
}

impl From<Update> for Statement {
    fn from(q: Update) -> Self {
        Statement::Update(q)
    }
}

impl From<Delete> for Statement {
    fn from(q: Delete) -> Self {
        Statement::Delete(q)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_or_message(f, self.to_sql())
    }
}

/// Write compiled SQL, or the error message when compiling failed.
pub(crate) fn write_or_message(f: &mut fmt::Formatter<'_>, sql: QueryResult<String>) -> fmt::Result {
    match sql {
        Ok(sql) => f.write_str(&sql),
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "sqlweave", error = %err, "statement failed to compile for display");
            f.write_str(&err.to_string())
        }
    }
}

/// Generate the methods every builder shares: parameter binding, compiling
/// with a cache of the last SQL, `reset` and `Display`.
///
/// Expects `params: Params` and `sql: Option<String>` fields.
macro_rules! impl_builder {
    ($ty:ty) => {
        impl $ty {
            /// Bind a value for [`Value::Param`]($crate::Value::Param) references.
            pub fn param(
                &mut self,
                key: impl Into<String>,
                value: impl Into<$crate::Value>,
            ) -> &mut Self {
                self.params.insert(key, value);
                self
            }

            /// Bind several parameters. Later entries override earlier ones.
            pub fn parameters<K, V, I>(&mut self, values: I) -> &mut Self
            where
                K: Into<String>,
                V: Into<$crate::Value>,
                I: IntoIterator<Item = (K, V)>,
            {
                self.params.extend(values);
                self
            }

            pub fn params(&self) -> &$crate::Params {
                &self.params
            }

            /// Compile with the default quoter and remember the result.
            pub fn compile(&mut self) -> $crate::QueryResult<String> {
                self.compile_with(&$crate::Quoter::default())
            }

            /// Compile with `quoter` and remember the result.
            pub fn compile_with(&mut self, quoter: &$crate::Quoter) -> $crate::QueryResult<String> {
                let sql = $crate::SqlQuery::build_sql(self, quoter)?;
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "sqlweave.sql",
                    statement = %$crate::SqlQuery::statement_type(self),
                    sql = %sql,
                    "compiled statement"
                );
                self.sql = Some(sql.clone());
                Ok(sql)
            }

            /// SQL from the most recent successful compile.
            pub fn last_sql(&self) -> Option<&str> {
                self.sql.as_deref()
            }

            pub fn statement_type(&self) -> $crate::StatementType {
                $crate::SqlQuery::statement_type(self)
            }

            /// Return to the freshly constructed, empty state.
            pub fn reset(&mut self) -> &mut Self {
                *self = Self::default();
                self
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::statement::write_or_message(f, $crate::SqlQuery::to_sql(self))
            }
        }
    };
}

pub(crate) use impl_builder;
