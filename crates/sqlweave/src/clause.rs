//! Fragment compilers shared by the statement builders.

use crate::error::{QueryError, QueryResult};
use crate::ident::Ident;
use crate::param::Params;
use crate::query::Join;
use crate::quoter::Quoter;
use crate::value::Value;

/// One ORDER BY entry.
#[derive(Debug, Clone)]
pub struct OrderBy {
    pub column: Ident,
    pub direction: Option<String>,
}

impl OrderBy {
    pub fn new(column: impl Into<Ident>, direction: Option<String>) -> Self {
        Self {
            column: column.into(),
            direction: direction.filter(|d| !d.is_empty()),
        }
    }
}

/// Compile context for one statement: the quoter plus the statement's own
/// parameters.
#[derive(Debug, Clone, Copy)]
pub struct ClauseCompiler<'a> {
    quoter: &'a Quoter,
    params: &'a Params,
}

impl<'a> ClauseCompiler<'a> {
    pub fn new(quoter: &'a Quoter, params: &'a Params) -> Self {
        Self { quoter, params }
    }

    pub fn quoter(&self) -> &'a Quoter {
        self.quoter
    }

    /// Follow a parameter reference, through any chain of references, to
    /// its bound value. A chain that revisits a key is rejected.
    pub fn resolve<'v>(&self, value: &'v Value) -> QueryResult<&'v Value>
    where
        'a: 'v,
    {
        let mut current = value;
        let mut seen: Vec<&str> = Vec::new();
        while let Value::Param(key) = current {
            if seen.contains(&key.as_str()) {
                return Err(QueryError::invalid_argument(format!(
                    "Parameter {key} refers back to itself"
                )));
            }
            seen.push(key.as_str());
            current = self
                .params
                .get(key)
                .ok_or_else(|| QueryError::unbound(key.as_str()))?;
        }
        Ok(current)
    }

    /// Quote a value, resolving parameter references, including those nested
    /// in lists.
    pub fn value(&self, value: &Value) -> QueryResult<String> {
        self.quote_resolved(self.resolve(value)?)
    }

    /// Quote a value whose top level has already been resolved.
    pub(crate) fn quote_resolved(&self, value: &Value) -> QueryResult<String> {
        match value {
            Value::List(items) => {
                let quoted = items
                    .iter()
                    .map(|item| self.value(item))
                    .collect::<QueryResult<Vec<_>>>()?;
                Ok(format!("({})", quoted.join(", ")))
            }
            other => self.quoter.quote_value(other),
        }
    }

    /// `col = val, ...`. A repeated column keeps its first position and its
    /// last value.
    pub fn set(&self, pairs: &[(Ident, Value)]) -> QueryResult<String> {
        let mut assignments: Vec<(String, String)> = Vec::with_capacity(pairs.len());
        for (column, value) in pairs {
            let column = self.quoter.quote_column(column)?;
            let value = self.value(value)?;
            match assignments.iter_mut().find(|(c, _)| *c == column) {
                Some(existing) => existing.1 = value,
                None => assignments.push((column, value)),
            }
        }
        Ok(assignments
            .iter()
            .map(|(column, value)| format!("{column} = {value}"))
            .collect::<Vec<_>>()
            .join(", "))
    }

    /// `GROUP BY a, b`.
    pub fn group_by(&self, columns: &[Ident]) -> QueryResult<String> {
        let quoted = columns
            .iter()
            .map(|column| self.output_column(column))
            .collect::<QueryResult<Vec<_>>>()?;
        Ok(format!("GROUP BY {}", quoted.join(", ")))
    }

    /// `ORDER BY a ASC, b`.
    pub fn order_by(&self, columns: &[OrderBy]) -> QueryResult<String> {
        let mut sorts = Vec::with_capacity(columns.len());
        for order in columns {
            let mut sort = self.output_column(&order.column)?;
            if let Some(direction) = &order.direction {
                sort.push(' ');
                sort.push_str(&direction.to_uppercase());
            }
            sorts.push(sort);
        }
        Ok(format!("ORDER BY {}", sorts.join(", ")))
    }

    /// Compiled joins separated by single spaces.
    pub fn joins(&self, joins: &[Join]) -> QueryResult<String> {
        let compiled = joins
            .iter()
            .map(|join| join.compile(self.quoter))
            .collect::<QueryResult<Vec<_>>>()?;
        Ok(compiled.join(" "))
    }

    /// Aliased columns are referenced by alias.
    fn output_column(&self, column: &Ident) -> QueryResult<String> {
        match column.alias() {
            Some(alias) => self.quoter.quote_identifier(&Ident::name(alias)),
            None => self.quoter.quote_column(column),
        }
    }
}
