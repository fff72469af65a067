use std::fmt;

use crate::error::{QueryError, QueryResult};
use crate::ident::Ident;
use crate::quoter::Quoter;
use crate::statement::write_or_message;

const ON_USING_CONFLICT: &str = "JOIN ... ON ... cannot be combined with JOIN ... USING ...";

/// A join condition. ON and USING exclude each other for the join's lifetime.
#[derive(Debug, Clone, Default)]
pub enum JoinCondition {
    #[default]
    Empty,
    On(Vec<JoinOn>),
    Using(Vec<Ident>),
}

/// `left OP right` inside an ON clause. Both sides are column references.
#[derive(Debug, Clone)]
pub struct JoinOn {
    pub left: Ident,
    pub op: String,
    pub right: Ident,
}

/// One JOIN clause.
#[derive(Debug, Clone, Default)]
pub struct Join {
    kind: Option<String>,
    table: Option<Ident>,
    condition: JoinCondition,
}

impl Join {
    /// Plain `JOIN table`.
    pub fn new(table: impl Into<Ident>) -> Self {
        Self {
            kind: None,
            table: Some(table.into()),
            condition: JoinCondition::Empty,
        }
    }

    /// `KIND JOIN table`, e.g. `LEFT`. An empty kind is a plain join.
    pub fn with_kind(table: impl Into<Ident>, kind: impl Into<String>) -> Self {
        let kind = kind.into();
        Self {
            kind: (!kind.is_empty()).then_some(kind),
            ..Self::new(table)
        }
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn table(&self) -> Option<&Ident> {
        self.table.as_ref()
    }

    pub fn condition(&self) -> &JoinCondition {
        &self.condition
    }

    /// Add an ON condition. Fails if USING was already set.
    pub fn on(
        &mut self,
        left: impl Into<Ident>,
        op: impl Into<String>,
        right: impl Into<Ident>,
    ) -> QueryResult<&mut Self> {
        let on = JoinOn {
            left: left.into(),
            op: op.into(),
            right: right.into(),
        };
        match &mut self.condition {
            JoinCondition::Using(_) => return Err(QueryError::incompatible(ON_USING_CONFLICT)),
            JoinCondition::On(list) => list.push(on),
            JoinCondition::Empty => self.condition = JoinCondition::On(vec![on]),
        }
        Ok(self)
    }

    /// Add USING columns. Fails if ON was already set.
    pub fn using<I, C>(&mut self, columns: I) -> QueryResult<&mut Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Ident>,
    {
        let columns = columns.into_iter().map(Into::into);
        match &mut self.condition {
            JoinCondition::On(_) => return Err(QueryError::incompatible(ON_USING_CONFLICT)),
            JoinCondition::Using(list) => list.extend(columns),
            JoinCondition::Empty => self.condition = JoinCondition::Using(columns.collect()),
        }
        Ok(self)
    }

    /// Render the clause.
    pub fn compile(&self, quoter: &Quoter) -> QueryResult<String> {
        let mut sql = match &self.kind {
            Some(kind) => format!("{} JOIN", kind.to_uppercase()),
            None => "JOIN".to_string(),
        };

        let table = match &self.table {
            Some(table) => quoter.quote_table(table)?,
            None => quoter.quote_table(&Ident::name(""))?,
        };
        sql.push(' ');
        sql.push_str(&table);

        match &self.condition {
            JoinCondition::Using(columns) => {
                let quoted = columns
                    .iter()
                    .map(|c| quoter.quote_column(c))
                    .collect::<QueryResult<Vec<_>>>()?;
                sql.push_str(&format!(" USING ({})", quoted.join(", ")));
            }
            JoinCondition::On(conditions) => {
                let quoted = conditions
                    .iter()
                    .map(|on| compile_on(on, quoter))
                    .collect::<QueryResult<Vec<_>>>()?;
                sql.push_str(&format!(" ON ({})", quoted.join(" AND ")));
            }
            JoinCondition::Empty => sql.push_str(" ON ()"),
        }

        Ok(sql)
    }

    /// Render with the default [`Quoter`].
    pub fn to_sql(&self) -> QueryResult<String> {
        self.compile(&Quoter::default())
    }

    /// Back to an empty join with no table.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }
}

fn compile_on(on: &JoinOn, quoter: &Quoter) -> QueryResult<String> {
    let left = quoter.quote_column(&on.left)?;
    let right = quoter.quote_column(&on.right)?;
    if on.op.is_empty() {
        Ok(format!("{left} {right}"))
    } else {
        Ok(format!("{left} {} {right}", on.op.to_uppercase()))
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_or_message(f, self.to_sql())
    }
}
