//! Raw SQL fragments.

use crate::error::QueryResult;
use crate::param::Params;
use crate::quoter::Quoter;
use crate::value::Value;

/// Pre-formatted SQL that bypasses identifier quoting.
///
/// Use it for function calls and other constructs the builders cannot
/// express, e.g. `COUNT(u.id)`. Placeholders inside the text can be bound
/// with [`param`](Self::param); each occurrence is replaced by the quoted
/// value on compile.
///
/// ```ignore
/// use sqlweave::Expression;
///
/// let e = Expression::new("LOWER(:name)").param(":name", "Alice");
/// assert_eq!(e.to_sql()?, "LOWER('Alice')");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Expression {
    sql: String,
    params: Params,
}

impl Expression {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Params::new(),
        }
    }

    /// Bind a placeholder.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Bind several placeholders. Later entries override earlier ones.
    pub fn parameters<K, V, I>(mut self, values: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.params.extend(values);
        self
    }

    /// The raw, unsubstituted text.
    pub fn value(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Render with bound placeholders replaced by quoted values.
    pub fn compile(&self, quoter: &Quoter) -> QueryResult<String> {
        if self.params.is_empty() {
            return Ok(self.sql.clone());
        }

        // Longest key first, so `:id` never shadows `:id2`.
        let mut replacements = self
            .params
            .iter()
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, value)| quoter.quote_value(value).map(|quoted| (key, quoted)))
            .collect::<QueryResult<Vec<_>>>()?;
        replacements.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Ok(substitute(&self.sql, &replacements))
    }

    /// Render with the default [`Quoter`].
    pub fn to_sql(&self) -> QueryResult<String> {
        self.compile(&Quoter::default())
    }
}

/// Single left-to-right pass; replaced text is never rescanned.
fn substitute(sql: &str, replacements: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut rest = sql;

    'scan: while let Some(ch) = rest.chars().next() {
        for (key, quoted) in replacements {
            if rest.starts_with(key) {
                out.push_str(quoted);
                rest = &rest[key.len()..];
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

impl From<&str> for Expression {
    fn from(sql: &str) -> Self {
        Expression::new(sql)
    }
}

impl From<String> for Expression {
    fn from(sql: String) -> Self {
        Expression::new(sql)
    }
}
