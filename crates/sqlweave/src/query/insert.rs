use super::select::Select;
use crate::clause::ClauseCompiler;
use crate::error::{QueryError, QueryResult};
use crate::ident::Ident;
use crate::param::Params;
use crate::quoter::Quoter;
use crate::statement::{impl_builder, SqlQuery, Statement, StatementType};
use crate::value::Value;

const NO_ALIAS: &str = "INSERT INTO syntax does not allow table aliasing";
const SELECT_ONLY: &str = "Only SELECT queries can be combined with INSERT queries";
const VALUES_VS_SELECT: &str =
    "INSERT INTO ... SELECT statements cannot be combined with INSERT INTO ... VALUES";

#[derive(Debug, Clone)]
enum InsertSource {
    Values(Vec<Vec<Value>>),
    Select(Box<Select>),
}

impl Default for InsertSource {
    fn default() -> Self {
        InsertSource::Values(Vec::new())
    }
}

/// INSERT statement builder.
///
/// Rows come either from [`values`](Self::values) or from a single
/// [`select`](Self::select) sub-query, never both. The target table cannot
/// be aliased.
#[derive(Debug, Clone, Default)]
pub struct Insert {
    table: Option<String>,
    columns: Vec<Ident>,
    source: InsertSource,
    params: Params,
    sql: Option<String>,
}

impl Insert {
    pub fn new() -> Self {
        Self::default()
    }

    /// `INSERT INTO table`.
    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    /// `INSERT INTO table (columns)`.
    pub fn with_columns<I, C>(table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Ident>,
    {
        let mut query = Self::with_table(table);
        query.columns(columns);
        query
    }

    /// Set the target table. Aliased tables, expressions and sub-queries
    /// are rejected.
    pub fn table(&mut self, table: impl Into<Ident>) -> QueryResult<&mut Self> {
        match table.into() {
            Ident::Name(name) => {
                self.table = Some(name);
                Ok(self)
            }
            _ => Err(QueryError::table_alias(NO_ALIAS)),
        }
    }

    /// Replace the column list.
    pub fn columns<I, C>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Ident>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Append one row of values.
    pub fn values<I, V>(&mut self, row: I) -> QueryResult<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        match &mut self.source {
            InsertSource::Values(rows) => {
                rows.push(row.into_iter().map(Into::into).collect());
                Ok(self)
            }
            InsertSource::Select(_) => Err(QueryError::incompatible(VALUES_VS_SELECT)),
        }
    }

    /// Append several rows.
    pub fn values_rows<R, I, V>(&mut self, rows: R) -> QueryResult<&mut Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for row in rows {
            self.values(row)?;
        }
        Ok(self)
    }

    /// Take rows from a SELECT instead of VALUES.
    pub fn select(&mut self, query: impl Into<Statement>) -> QueryResult<&mut Self> {
        let query = match query.into() {
            Statement::Select(query) => query,
            _ => return Err(QueryError::invalid_argument(SELECT_ONLY)),
        };
        if matches!(&self.source, InsertSource::Values(rows) if !rows.is_empty()) {
            return Err(QueryError::incompatible(VALUES_VS_SELECT));
        }
        self.source = InsertSource::Select(Box::new(query));
        Ok(self)
    }
}

impl_builder!(Insert);

impl SqlQuery for Insert {
    fn statement_type(&self) -> StatementType {
        StatementType::Insert
    }

    fn build_sql(&self, quoter: &Quoter) -> QueryResult<String> {
        let cx = ClauseCompiler::new(quoter, &self.params);
        let table = quoter.quote_table(&Ident::name(self.table.as_deref().unwrap_or_default()))?;
        let columns = self
            .columns
            .iter()
            .map(|c| quoter.quote_column(c))
            .collect::<QueryResult<Vec<_>>>()?;

        let mut sql = format!("INSERT INTO {table} ({}) ", columns.join(", "));

        match &self.source {
            InsertSource::Values(rows) => {
                let mut groups = Vec::with_capacity(rows.len());
                for row in rows {
                    let quoted = row
                        .iter()
                        .map(|v| cx.value(v))
                        .collect::<QueryResult<Vec<_>>>()?;
                    groups.push(format!("({})", quoted.join(", ")));
                }
                sql.push_str("VALUES ");
                sql.push_str(&groups.join(", "));
            }
            InsertSource::Select(query) => sql.push_str(&query.build_sql(quoter)?),
        }

        Ok(sql)
    }
}
