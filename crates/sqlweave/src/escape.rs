//! Value escaping strategies.
//!
//! An [`Escaper`] turns raw text into a literal that can be embedded in SQL
//! without changing the statement's syntax. It also decides how booleans and
//! floats are spelled.

use std::fmt;

/// Escaping capability consumed by [`Quoter`](crate::Quoter).
pub trait Escaper: Send + Sync + fmt::Debug {
    /// Escape `raw` into a complete, quoted SQL string literal.
    fn escape(&self, raw: &str) -> String;

    /// Boolean literal. Defaults to `'1'` / `'0'`.
    fn bool_literal(&self, value: bool) -> String {
        let literal = if value { "'1'" } else { "'0'" };
        literal.to_string()
    }

    /// Float literal in fixed notation with six decimals.
    ///
    /// Non-finite values have no numeric spelling and are escaped as text.
    fn float_literal(&self, value: f64) -> String {
        if value.is_finite() {
            format!("{value:.6}")
        } else {
            self.escape(&value.to_string())
        }
    }
}

/// ANSI escaping: single quotes, embedded `'` doubled.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEscaper;

impl Escaper for StandardEscaper {
    fn escape(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() + 2);
        out.push('\'');
        for ch in raw.chars() {
            if ch == '\'' {
                out.push('\'');
            }
            out.push(ch);
        }
        out.push('\'');
        out
    }
}

/// MySQL escaping, matching `mysql_real_escape_string`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlEscaper;

impl Escaper for MySqlEscaper {
    fn escape(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() + 2);
        out.push('\'');
        for ch in raw.chars() {
            match ch {
                '\0' => out.push_str("\\0"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\x1a' => out.push_str("\\Z"),
                '\\' | '\'' | '"' => {
                    out.push('\\');
                    out.push(ch);
                }
                _ => out.push(ch),
            }
        }
        out.push('\'');
        out
    }
}

/// PostgreSQL escaping.
///
/// Quotes are doubled. Input containing a backslash becomes an `E'...'`
/// literal with the backslashes doubled, so it reads the same regardless of
/// `standard_conforming_strings`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresEscaper;

impl Escaper for PostgresEscaper {
    fn escape(&self, raw: &str) -> String {
        let has_backslash = raw.contains('\\');
        let mut out = String::with_capacity(raw.len() + 3);
        if has_backslash {
            out.push('E');
        }
        out.push('\'');
        for ch in raw.chars() {
            match ch {
                '\'' => out.push_str("''"),
                '\\' => out.push_str("\\\\"),
                _ => out.push(ch),
            }
        }
        out.push('\'');
        out
    }

    fn bool_literal(&self, value: bool) -> String {
        let literal = if value { "TRUE" } else { "FALSE" };
        literal.to_string()
    }
}
