//! Records of the IBKR watchlist import format.
//!
//! An import file starts with a fixed preamble followed by one record per
//! line. `HED` records open a named section, `DES` records describe a
//! single instrument:
//!
//! ```text
//! CSVEXPORT
//! COLUMN,0
//! HED,US Stocks
//! DES,AAPL,STK,SMART/AMEX,,,,,
//! DES,USD,CASH,IDEALPRO,,,,,JPY
//! ```

use std::fmt;

use super::id::Ticker;

/// Lines written before any record.
pub const PREAMBLE: [&str; 2] = ["CSVEXPORT", "COLUMN,0"];

/// IBKR security type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityType {
    /// Stock or ETF.
    Stock,
    /// Index.
    Index,
    /// Forex pair.
    Cash,
}

impl SecurityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stock => "STK",
            Self::Index => "IND",
            Self::Cash => "CASH",
        }
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// IBKR routing destination column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Smart,
    SmartAmex,
    SmartLseEtf,
    IdealPro,
    Cboe,
    Nybot,
}

impl Venue {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smart => "SMART",
            Self::SmartAmex => "SMART/AMEX",
            Self::SmartLseEtf => "SMART/LSEETF",
            Self::IdealPro => "IDEALPRO",
            Self::Cboe => "CBOE",
            Self::Nybot => "NYBOT",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single instrument line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    pub ticker: Ticker,
    pub security_type: SecurityType,
    pub venue: Venue,
    /// Quote currency, only set for cash pairs.
    pub currency: Option<String>,
}

impl Instrument {
    /// A non-cash instrument.
    pub fn new(ticker: impl Into<Ticker>, security_type: SecurityType, venue: Venue) -> Self {
        Self {
            ticker: ticker.into(),
            security_type,
            venue,
            currency: None,
        }
    }

    /// A forex pair on IDEALPRO, `base` priced in `quote`.
    pub fn cash(base: impl Into<Ticker>, quote: impl Into<String>) -> Self {
        Self {
            ticker: base.into(),
            security_type: SecurityType::Cash,
            venue: Venue::IdealPro,
            currency: Some(quote.into()),
        }
    }

    pub fn stock(ticker: impl Into<Ticker>, venue: Venue) -> Self {
        Self::new(ticker, SecurityType::Stock, venue)
    }

    pub fn index(ticker: impl Into<Ticker>, venue: Venue) -> Self {
        Self::new(ticker, SecurityType::Index, venue)
    }
}

/// One output line after the preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Section header.
    Header(String),
    Instrument(Instrument),
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(section) => write!(f, "HED,{section}"),
            Self::Instrument(instrument) => write!(
                f,
                "DES,{},{},{},,,,,{}",
                instrument.ticker,
                instrument.security_type,
                instrument.venue,
                instrument.currency.as_deref().unwrap_or_default()
            ),
        }
    }
}

impl From<Instrument> for Record {
    fn from(instrument: Instrument) -> Self {
        Self::Instrument(instrument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_renders_section_verbatim() {
        let record = Record::Header("US Stocks".into());
        assert_eq!(record.to_string(), "HED,US Stocks");
    }

    #[test]
    fn non_cash_record_leaves_currency_column_empty() {
        let record = Record::from(Instrument::index("DX", Venue::Nybot));
        assert_eq!(record.to_string(), "DES,DX,IND,NYBOT,,,,,");
    }

    #[test]
    fn cash_record_ends_with_quote_currency() {
        let record = Record::from(Instrument::cash("GBP", "USD"));
        assert_eq!(record.to_string(), "DES,GBP,CASH,IDEALPRO,,,,,USD");
    }

    #[test]
    fn venue_with_slash_is_one_column() {
        let record = Record::from(Instrument::stock("IB01", Venue::SmartLseEtf));
        assert_eq!(record.to_string(), "DES,IB01,STK,SMART/LSEETF,,,,,");
    }
}
