use super::join::Join;
use super::where_clause::{filter_methods, WhereClause};
use crate::clause::ClauseCompiler;
use crate::condition::{Condition, ConditionList, Logic};
use crate::error::{QueryError, QueryResult};
use crate::ident::Ident;
use crate::param::Params;
use crate::quoter::Quoter;
use crate::statement::{impl_builder, SqlQuery, Statement, StatementType};
use crate::value::Value;

const NO_JOIN: &str = "ON / USING requires a preceding join";

/// Right-hand side of a UNION.
#[derive(Debug, Clone)]
pub enum UnionOperand {
    /// Shorthand for `SELECT * FROM table`.
    Table(String),
    Query(Statement),
}

impl From<&str> for UnionOperand {
    fn from(table: &str) -> Self {
        UnionOperand::Table(table.to_string())
    }
}

impl From<String> for UnionOperand {
    fn from(table: String) -> Self {
        UnionOperand::Table(table)
    }
}

macro_rules! impl_union_from_query {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for UnionOperand {
                fn from(query: $ty) -> Self {
                    UnionOperand::Query(query.into())
                }
            }
        )*
    };
}

impl_union_from_query!(Select, super::Insert, super::Update, super::Delete, Statement);

#[derive(Debug, Clone)]
struct Union {
    query: Select,
    all: bool,
}

/// SELECT statement builder.
///
/// ```ignore
/// use sqlweave::prelude::*;
///
/// let mut q = Select::with_columns([("users.id", "id"), ("users.username", "name")]);
/// q.from(("users", "u")).where_("u.name", "=", "test");
/// assert_eq!(
///     q.compile()?,
///     "SELECT users.id AS id, users.username AS name FROM users AS u WHERE u.name = 'test'"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Select {
    columns: Vec<Ident>,
    distinct: bool,
    from: Vec<Ident>,
    joins: Vec<Join>,
    filter: WhereClause,
    group_by: Vec<Ident>,
    having: ConditionList,
    offset: Option<u64>,
    unions: Vec<Union>,
    params: Params,
    sql: Option<String>,
}

impl Select {
    /// `SELECT *` with nothing else set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a column list.
    pub fn with_columns<I, C>(columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Ident>,
    {
        let mut query = Self::new();
        query.select_array(columns);
        query
    }

    // ==================== Columns / tables ====================

    /// Append one column.
    pub fn select(&mut self, column: impl Into<Ident>) -> &mut Self {
        self.columns.push(column.into());
        self
    }

    /// Append several columns.
    pub fn select_array<I, C>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Ident>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn distinct(&mut self, distinct: bool) -> &mut Self {
        self.distinct = distinct;
        self
    }

    /// Append a table to FROM.
    pub fn from(&mut self, table: impl Into<Ident>) -> &mut Self {
        self.from.push(table.into());
        self
    }

    // ==================== JOIN ====================

    /// Start a plain JOIN. Follow with [`on`](Self::on) or [`using`](Self::using).
    pub fn join(&mut self, table: impl Into<Ident>) -> &mut Self {
        self.joins.push(Join::new(table));
        self
    }

    /// Start a `KIND JOIN`.
    pub fn join_with(&mut self, table: impl Into<Ident>, kind: impl Into<String>) -> &mut Self {
        self.joins.push(Join::with_kind(table, kind));
        self
    }

    pub fn inner_join(&mut self, table: impl Into<Ident>) -> &mut Self {
        self.join_with(table, "INNER")
    }

    pub fn left_join(&mut self, table: impl Into<Ident>) -> &mut Self {
        self.join_with(table, "LEFT")
    }

    pub fn right_join(&mut self, table: impl Into<Ident>) -> &mut Self {
        self.join_with(table, "RIGHT")
    }

    /// Add an ON condition to the most recent join.
    pub fn on(
        &mut self,
        left: impl Into<Ident>,
        op: impl Into<String>,
        right: impl Into<Ident>,
    ) -> QueryResult<&mut Self> {
        self.last_join()?.on(left, op, right)?;
        Ok(self)
    }

    /// Add USING columns to the most recent join.
    pub fn using<I, C>(&mut self, columns: I) -> QueryResult<&mut Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Ident>,
    {
        self.last_join()?.using(columns)?;
        Ok(self)
    }

    fn last_join(&mut self) -> QueryResult<&mut Join> {
        self.joins
            .last_mut()
            .ok_or_else(|| QueryError::invalid_argument(NO_JOIN))
    }

    // ==================== GROUP BY / HAVING ====================

    pub fn group_by(&mut self, column: impl Into<Ident>) -> &mut Self {
        self.group_by.push(column.into());
        self
    }

    /// Alias of [`and_having`](Self::and_having).
    pub fn having(
        &mut self,
        column: impl Into<Ident>,
        op: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.and_having(column, op, value)
    }

    pub fn and_having(
        &mut self,
        column: impl Into<Ident>,
        op: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.having
            .push(Logic::And, Condition::new(column, op, value));
        self
    }

    pub fn or_having(
        &mut self,
        column: impl Into<Ident>,
        op: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.having.push(Logic::Or, Condition::new(column, op, value));
        self
    }

    /// Alias of [`and_having_open`](Self::and_having_open).
    pub fn having_open(&mut self) -> &mut Self {
        self.and_having_open()
    }

    pub fn and_having_open(&mut self) -> &mut Self {
        self.having.open(Logic::And);
        self
    }

    pub fn or_having_open(&mut self) -> &mut Self {
        self.having.open(Logic::Or);
        self
    }

    /// Alias of [`and_having_close`](Self::and_having_close).
    pub fn having_close(&mut self) -> &mut Self {
        self.and_having_close()
    }

    pub fn and_having_close(&mut self) -> &mut Self {
        self.having.close(Logic::And);
        self
    }

    pub fn or_having_close(&mut self) -> &mut Self {
        self.having.close(Logic::Or);
        self
    }

    // ==================== OFFSET / UNION ====================

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    pub fn clear_offset(&mut self) -> &mut Self {
        self.offset = None;
        self
    }

    /// Append a UNION. A table name stands for `SELECT * FROM table`; any
    /// statement other than a SELECT is rejected.
    pub fn union(&mut self, operand: impl Into<UnionOperand>, all: bool) -> QueryResult<&mut Self> {
        let query = match operand.into() {
            UnionOperand::Table(table) => {
                let mut query = Select::new();
                query.from(table);
                query
            }
            UnionOperand::Query(Statement::Select(query)) => query,
            UnionOperand::Query(other) => {
                return Err(QueryError::invalid_argument(format!(
                    "UNION accepts only SELECT queries or table names, got {}",
                    other.statement_type()
                )));
            }
        };
        self.unions.push(Union { query, all });
        Ok(self)
    }

    /// `UNION ALL`.
    pub fn union_all(&mut self, operand: impl Into<UnionOperand>) -> QueryResult<&mut Self> {
        self.union(operand, true)
    }
}

filter_methods!(Select);
impl_builder!(Select);

impl SqlQuery for Select {
    fn statement_type(&self) -> StatementType {
        StatementType::Select
    }

    fn build_sql(&self, quoter: &Quoter) -> QueryResult<String> {
        let cx = ClauseCompiler::new(quoter, &self.params);
        let mut sql = String::from("SELECT ");

        if self.distinct {
            sql.push_str("DISTINCT ");
        }

        if self.columns.is_empty() {
            sql.push('*');
        } else {
            let columns = unique(
                self.columns
                    .iter()
                    .map(|c| quoter.quote_column(c))
                    .collect::<QueryResult<Vec<_>>>()?,
            );
            sql.push_str(&columns.join(", "));
        }

        if !self.from.is_empty() {
            let tables = unique(
                self.from
                    .iter()
                    .map(|t| quoter.quote_table(t))
                    .collect::<QueryResult<Vec<_>>>()?,
            );
            sql.push_str(" FROM ");
            sql.push_str(&tables.join(", "));
        }

        if !self.joins.is_empty() {
            sql.push(' ');
            sql.push_str(&cx.joins(&self.joins)?);
        }

        self.filter.write_where(&mut sql, &cx)?;

        if !self.group_by.is_empty() {
            sql.push(' ');
            sql.push_str(&cx.group_by(&self.group_by)?);
        }

        if !self.having.is_empty() {
            sql.push_str(" HAVING ");
            sql.push_str(&self.having.compile(&cx)?);
        }

        self.filter.write_order_limit(&mut sql, &cx)?;

        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        if !self.unions.is_empty() {
            sql = format!("({sql})");
            for union in &self.unions {
                sql.push_str(if union.all { " UNION ALL " } else { " UNION " });
                sql.push('(');
                sql.push_str(&union.query.build_sql(quoter)?);
                sql.push(')');
            }
        }

        Ok(sql)
    }
}

/// Drop repeats, keeping the first occurrence.
fn unique(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
