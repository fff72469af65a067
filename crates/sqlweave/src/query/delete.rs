use super::where_clause::{filter_methods, WhereClause};
use crate::clause::ClauseCompiler;
use crate::error::{QueryError, QueryResult};
use crate::ident::Ident;
use crate::param::Params;
use crate::quoter::Quoter;
use crate::statement::{impl_builder, SqlQuery, StatementType};

const NO_ALIAS: &str = "DELETE FROM syntax does not allow table aliasing";

/// DELETE statement builder. The target table cannot be aliased.
#[derive(Debug, Clone, Default)]
pub struct Delete {
    table: Option<String>,
    filter: WhereClause,
    params: Params,
    sql: Option<String>,
}

impl Delete {
    pub fn new() -> Self {
        Self::default()
    }

    /// `DELETE FROM table`.
    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    /// Set the target table. Anything other than a bare name is rejected.
    pub fn table(&mut self, table: impl Into<Ident>) -> QueryResult<&mut Self> {
        match table.into() {
            Ident::Name(name) => {
                self.table = Some(name);
                Ok(self)
            }
            _ => Err(QueryError::table_alias(NO_ALIAS)),
        }
    }
}

filter_methods!(Delete);
impl_builder!(Delete);

impl SqlQuery for Delete {
    fn statement_type(&self) -> StatementType {
        StatementType::Delete
    }

    fn build_sql(&self, quoter: &Quoter) -> QueryResult<String> {
        let cx = ClauseCompiler::new(quoter, &self.params);
        let table = quoter.quote_table(&Ident::name(self.table.as_deref().unwrap_or_default()))?;

        let mut sql = format!("DELETE FROM {table}");
        self.filter.write_where(&mut sql, &cx)?;
        self.filter.write_order_limit(&mut sql, &cx)?;
        Ok(sql)
    }
}
