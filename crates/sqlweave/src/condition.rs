//! Boolean condition trees for WHERE and HAVING.
//!
//! Conditions are stored flat: each entry carries the connective that
//! precedes it, and nesting is expressed with open/close markers. Compiling
//! walks the list once and emits parentheses as they appear, so an
//! unbalanced list produces unbalanced SQL rather than an error.

use std::fmt;

use crate::clause::ClauseCompiler;
use crate::error::QueryResult;
use crate::ident::Ident;
use crate::value::Value;

/// Connective placed before an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logic {
    And,
    Or,
}

impl Logic {
    pub fn as_str(self) -> &'static str {
        match self {
            Logic::And => "AND",
            Logic::Or => "OR",
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `column OP value` predicate.
#[derive(Debug, Clone)]
pub struct Condition {
    pub column: Ident,
    pub op: String,
    pub value: Value,
}

impl Condition {
    pub fn new(column: impl Into<Ident>, op: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            op: op.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConditionEntry {
    Open,
    Close,
    Predicate(Condition),
}

/// One entry tagged with its connective.
#[derive(Debug, Clone)]
pub struct ConditionGroup {
    pub logic: Logic,
    pub entry: ConditionEntry,
}

/// Ordered list of condition groups.
#[derive(Debug, Clone, Default)]
pub struct ConditionList {
    groups: Vec<ConditionGroup>,
}

impl ConditionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, logic: Logic, condition: Condition) {
        self.groups.push(ConditionGroup {
            logic,
            entry: ConditionEntry::Predicate(condition),
        });
    }

    pub fn open(&mut self, logic: Logic) {
        self.groups.push(ConditionGroup {
            logic,
            entry: ConditionEntry::Open,
        });
    }

    pub fn close(&mut self, logic: Logic) {
        self.groups.push(ConditionGroup {
            logic,
            entry: ConditionEntry::Close,
        });
    }

    /// Drop a group that was opened but never filled, otherwise close it.
    pub fn close_empty(&mut self) {
        match self.groups.last() {
            Some(ConditionGroup {
                entry: ConditionEntry::Open,
                ..
            }) => {
                self.groups.pop();
            }
            _ => self.close(Logic::And),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Render the list as a boolean expression, without a leading keyword.
    pub fn compile(&self, cx: &ClauseCompiler<'_>) -> QueryResult<String> {
        let mut sql = String::new();
        let mut after_open = false;

        for group in &self.groups {
            let needs_logic = !sql.is_empty() && !after_open;
            match &group.entry {
                ConditionEntry::Open => {
                    if needs_logic {
                        push_logic(&mut sql, group.logic);
                    }
                    sql.push('(');
                }
                ConditionEntry::Close => sql.push(')'),
                ConditionEntry::Predicate(condition) => {
                    if needs_logic {
                        push_logic(&mut sql, group.logic);
                    }
                    sql.push_str(&compile_condition(condition, cx)?);
                }
            }
            after_open = matches!(group.entry, ConditionEntry::Open);
        }

        Ok(sql)
    }
}

fn push_logic(sql: &mut String, logic: Logic) {
    sql.push(' ');
    sql.push_str(logic.as_str());
    sql.push(' ');
}

fn compile_condition(condition: &Condition, cx: &ClauseCompiler<'_>) -> QueryResult<String> {
    let value = cx.resolve(&condition.value)?;

    let op = match condition.op.as_str() {
        "=" if value.is_null() => "IS".to_string(),
        "!=" if value.is_null() => "IS NOT".to_string(),
        other => other.to_uppercase(),
    };

    let rendered = match value {
        Value::List(bounds) if op == "BETWEEN" => {
            let min = bounds.first().unwrap_or(&Value::Null);
            let max = bounds.get(1).unwrap_or(&Value::Null);
            format!("{} AND {}", cx.value(min)?, cx.value(max)?)
        }
        other => cx.quote_resolved(other)?,
    };

    // Aliases are ignored in conditions; only the name is quoted.
    let column = &condition.column;
    let column = if column.is_empty_name() {
        String::new()
    } else if column.alias().is_some() {
        cx.quoter().quote_identifier(column.unaliased())?
    } else {
        cx.quoter().quote_column(column)?
    };

    Ok(format!("{column} {op} {rendered}").trim().to_string())
}
