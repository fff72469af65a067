//! Shared WHERE / ORDER BY / LIMIT state for SELECT, UPDATE and DELETE.

use crate::clause::{ClauseCompiler, OrderBy};
use crate::condition::ConditionList;
use crate::error::QueryResult;

/// Reusable WHERE clause state.
///
/// Builders embed this as their `filter` field and expose it through the
/// methods generated by `filter_methods!`.
#[derive(Debug, Clone, Default)]
pub struct WhereClause {
    pub(crate) conditions: ConditionList,
    pub(crate) order_by: Vec<OrderBy>,
    pub(crate) limit: Option<u64>,
}

impl WhereClause {
    /// Append ` WHERE ...` when any condition is present.
    pub(crate) fn write_where(&self, sql: &mut String, cx: &ClauseCompiler<'_>) -> QueryResult<()> {
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.compile(cx)?);
        }
        Ok(())
    }

    /// Append ` ORDER BY ...` and ` LIMIT n` when set.
    pub(crate) fn write_order_limit(
        &self,
        sql: &mut String,
        cx: &ClauseCompiler<'_>,
    ) -> QueryResult<()> {
        if !self.order_by.is_empty() {
            sql.push(' ');
            sql.push_str(&cx.order_by(&self.order_by)?);
        }
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        Ok(())
    }
}

/// Generate the WHERE / ORDER BY / LIMIT methods for a builder with a
/// `filter: WhereClause` field.
macro_rules! filter_methods {
    ($ty:ty) => {
        impl $ty {
            // ==================== WHERE ====================

            /// Alias of `and_where`.
            pub fn where_(
                &mut self,
                column: impl Into<$crate::Ident>,
                op: impl Into<String>,
                value: impl Into<$crate::Value>,
            ) -> &mut Self {
                self.and_where(column, op, value)
            }

            /// Add a condition joined with AND.
            pub fn and_where(
                &mut self,
                column: impl Into<$crate::Ident>,
                op: impl Into<String>,
                value: impl Into<$crate::Value>,
            ) -> &mut Self {
                self.filter.conditions.push(
                    $crate::condition::Logic::And,
                    $crate::condition::Condition::new(column, op, value),
                );
                self
            }

            /// Add a condition joined with OR.
            pub fn or_where(
                &mut self,
                column: impl Into<$crate::Ident>,
                op: impl Into<String>,
                value: impl Into<$crate::Value>,
            ) -> &mut Self {
                self.filter.conditions.push(
                    $crate::condition::Logic::Or,
                    $crate::condition::Condition::new(column, op, value),
                );
                self
            }

            /// Alias of `and_where_open`.
            pub fn where_open(&mut self) -> &mut Self {
                self.and_where_open()
            }

            /// Open a nested group joined with AND.
            pub fn and_where_open(&mut self) -> &mut Self {
                self.filter.conditions.open($crate::condition::Logic::And);
                self
            }

            /// Open a nested group joined with OR.
            pub fn or_where_open(&mut self) -> &mut Self {
                self.filter.conditions.open($crate::condition::Logic::Or);
                self
            }

            /// Alias of `and_where_close`.
            pub fn where_close(&mut self) -> &mut Self {
                self.and_where_close()
            }

            pub fn and_where_close(&mut self) -> &mut Self {
                self.filter.conditions.close($crate::condition::Logic::And);
                self
            }

            pub fn or_where_close(&mut self) -> &mut Self {
                self.filter.conditions.close($crate::condition::Logic::Or);
                self
            }

            /// Close the current group, or drop it if nothing was added since
            /// it was opened.
            pub fn where_close_empty(&mut self) -> &mut Self {
                self.filter.conditions.close_empty();
                self
            }

            // ==================== ORDER BY / LIMIT ====================

            /// Sort by `column`. An empty direction adds none.
            pub fn order_by(
                &mut self,
                column: impl Into<$crate::Ident>,
                direction: impl Into<String>,
            ) -> &mut Self {
                self.filter
                    .order_by
                    .push($crate::clause::OrderBy::new(column, Some(direction.into())));
                self
            }

            /// Sort by `column` without a direction.
            pub fn order_by_column(&mut self, column: impl Into<$crate::Ident>) -> &mut Self {
                self.filter
                    .order_by
                    .push($crate::clause::OrderBy::new(column, None));
                self
            }

            pub fn limit(&mut self, limit: u64) -> &mut Self {
                self.filter.limit = Some(limit);
                self
            }

            pub fn clear_limit(&mut self) -> &mut Self {
                self.filter.limit = None;
                self
            }
        }
    };
}

pub(crate) use filter_methods;
