//! Identifier newtypes for the two halves of a watchlist symbol.

use std::fmt;

/// Exchange prefix of a TradingView symbol, e.g. `NASDAQ` or `FX_IDC`.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExchangeCode(String);

impl ExchangeCode {
    /// Create a new `ExchangeCode` from a string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the exchange code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExchangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ExchangeCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Ticker part of a symbol, in either the source or the destination spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// Create a new `Ticker` from a string.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self(ticker.into())
    }

    /// Get the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
