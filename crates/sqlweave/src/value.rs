//! Values that can appear on the right-hand side of a condition or in a
//! SET / VALUES list.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use uuid::Uuid;

use crate::expr::Expression;
use crate::query::{Delete, Insert, Select, Update};
use crate::statement::Statement;

/// A literal, expression, sub-query or parameter reference.
///
/// Values are quoted by the [`Quoter`](crate::Quoter) when a statement is
/// compiled. `Param` is resolved against the owning builder's parameters
/// first.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// `NULL`
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Rendered as a parenthesized, comma separated list.
    List(Vec<Value>),
    /// Raw SQL, inserted without escaping.
    Expr(Expression),
    /// Nested statement, rendered as `(compiled sql)`.
    Query(Arc<Statement>),
    /// Reference to a parameter bound on the builder.
    Param(String),
}

impl Value {
    /// Reference the builder parameter named `key`.
    pub fn param(key: impl Into<String>) -> Self {
        Self::Param(key.into())
    }

    /// Check if this is `NULL`
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(v) => Value::Int(v),
                        Err(_) => Value::Text(value.to_string()),
                    }
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, isize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Value::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl From<Expression> for Value {
    fn from(value: Expression) -> Self {
        Value::Expr(value)
    }
}

impl From<Statement> for Value {
    fn from(value: Statement) -> Self {
        Value::Query(Arc::new(value))
    }
}

impl From<Arc<Statement>> for Value {
    fn from(value: Arc<Statement>) -> Self {
        Value::Query(value)
    }
}

macro_rules! impl_from_builder {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Query(Arc::new(Statement::$ty(value)))
                }
            }
        )*
    };
}

impl_from_builder!(Select, Insert, Update, Delete);

// ==================== Ecosystem types ====================

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Text(value.format("%Y-%m-%d").to_string())
    }
}

impl From<NaiveTime> for Value {
    fn from(value: NaiveTime) -> Self {
        Value::Text(value.format("%H:%M:%S%.f").to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Text(value.format("%Y-%m-%d %H:%M:%S%.f").to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value
where
    Tz::Offset: std::fmt::Display,
{
    fn from(value: DateTime<Tz>) -> Self {
        Value::Text(value.to_rfc3339())
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Text(value.hyphenated().to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n
                    .as_f64()
                    .map_or_else(|| Value::Text(n.to_string()), Value::Float),
            },
            Json::String(s) => Value::Text(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            object @ Json::Object(_) => Value::Text(object.to_string()),
        }
    }
}
