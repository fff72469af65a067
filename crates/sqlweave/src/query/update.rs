use super::where_clause::{filter_methods, WhereClause};
use crate::clause::ClauseCompiler;
use crate::error::QueryResult;
use crate::ident::Ident;
use crate::param::Params;
use crate::quoter::Quoter;
use crate::statement::{impl_builder, SqlQuery, StatementType};
use crate::value::Value;

/// UPDATE statement builder. Unlike INSERT and DELETE, the table may be aliased.
#[derive(Debug, Clone, Default)]
pub struct Update {
    table: Option<Ident>,
    set: Vec<(Ident, Value)>,
    filter: WhereClause,
    params: Params,
    sql: Option<String>,
}

impl Update {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: impl Into<Ident>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    pub fn table(&mut self, table: impl Into<Ident>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    /// Append assignments. A column set twice keeps its first position and
    /// takes the last value.
    pub fn set<I, C, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (C, V)>,
        C: Into<Ident>,
        V: Into<Value>,
    {
        self.set
            .extend(pairs.into_iter().map(|(c, v)| (c.into(), v.into())));
        self
    }

    /// Append a single assignment.
    pub fn value(&mut self, column: impl Into<Ident>, value: impl Into<Value>) -> &mut Self {
        self.set.push((column.into(), value.into()));
        self
    }
}

filter_methods!(Update);
impl_builder!(Update);

impl SqlQuery for Update {
    fn statement_type(&self) -> StatementType {
        StatementType::Update
    }

    fn build_sql(&self, quoter: &Quoter) -> QueryResult<String> {
        let cx = ClauseCompiler::new(quoter, &self.params);
        let table = match &self.table {
            Some(table) => quoter.quote_table(table)?,
            None => quoter.quote_table(&Ident::name(""))?,
        };

        let mut sql = format!("UPDATE {table} SET {}", cx.set(&self.set)?);
        self.filter.write_where(&mut sql, &cx)?;
        self.filter.write_order_limit(&mut sql, &cx)?;
        Ok(sql)
    }
}
