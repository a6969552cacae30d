//! Parsing of `EXCHANGE:TICKER` tokens.

use thiserror::Error;

use super::id::{ExchangeCode, Ticker};

/// Reasons a token is not a usable symbol.
///
/// These never abort a conversion; the caller logs and drops the token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("missing ':' separator")]
    MissingSeparator,

    #[error("more than one ':' separator")]
    ExtraSeparator,
}

/// A watchlist symbol split into its exchange prefix and ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolToken {
    pub exchange: ExchangeCode,
    pub ticker: Ticker,
}

impl SymbolToken {
    /// Parse a raw token. Exactly one `:`; either side may be empty.
    pub fn parse(token: &str) -> Result<Self, SymbolError> {
        let (exchange, ticker) = token
            .split_once(':')
            .ok_or(SymbolError::MissingSeparator)?;

        if ticker.contains(':') {
            return Err(SymbolError::ExtraSeparator);
        }

        Ok(Self {
            exchange: ExchangeCode::new(exchange),
            ticker: Ticker::new(ticker),
        })
    }
}
