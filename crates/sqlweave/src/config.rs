use serde::{Deserialize, Serialize};

/// Identifier quoting configuration for a [`Quoter`](crate::Quoter).
///
/// The default matches a plain driver: no identifier quoting and no table
/// prefix. Missing fields deserialize to those defaults, so a partial config
/// section is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoterConfig {
    /// Delimiter wrapped around every identifier segment. Empty disables quoting.
    pub identifier_quote: String,
    /// Prepended to every table name.
    pub table_prefix: String,
}

impl QuoterConfig {
    /// Create a new configuration with defaults (no quoting, no prefix).
    pub fn new() -> Self {
        Self::default()
    }

    /// Backtick-quoted identifiers.
    pub fn mysql() -> Self {
        Self::new().with_identifier_quote("`")
    }

    /// Double-quoted identifiers.
    pub fn postgres() -> Self {
        Self::new().with_identifier_quote("\"")
    }

    /// Double-quoted identifiers.
    pub fn sqlite() -> Self {
        Self::postgres()
    }

    /// Set the identifier delimiter.
    pub fn with_identifier_quote(mut self, quote: impl Into<String>) -> Self {
        self.identifier_quote = quote.into();
        self
    }

    /// Set the table prefix.
    pub fn with_table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }
}
