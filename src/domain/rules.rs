//! Translation rules from TradingView symbols to IBKR instruments.
//!
//! Each exchange prefix selects one [`Rule`]. The tables below are fixed at
//! compile time; adding an exchange means adding a `match` arm.

use thiserror::Error;

use super::id::Ticker;
use super::record::{Instrument, Venue};
use super::symbol::SymbolToken;

/// Tickers listed on the LSE that IBKR only resolves through `SMART/LSEETF`.
pub const LSE_ETF_TICKERS: &[&str] = &["IB01", "IBTA", "VDTA", "URNU"];

/// US exchanges whose listings are routed through `SMART/AMEX`.
pub const US_EXCHANGES: &[&str] = &["NYSE", "NASDAQ", "AMEX"];

/// Base currencies that IBKR quotes against USD rather than the reverse.
const USD_QUOTED_BASES: &[&str] = &["GBP", "EUR"];

/// TradingView index tickers with a different IBKR symbol.
const TVC_SUBSTITUTIONS: &[(&str, &str, Venue)] = &[
    ("DXY", "DX", Venue::Nybot),
    ("US10Y", "TNX", Venue::Cboe),
    ("US05Y", "FVX", Venue::Cboe),
];

/// Why a well-formed symbol produced no instrument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    #[error("currency pair without a single USD leg")]
    InvalidCurrencyPair,

    #[error("unsupported TVC ticker")]
    UnsupportedTvc,

    #[error("economic indicators have no IBKR instrument")]
    Economics,
}

/// Translation strategy selected by exchange prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `FX`, `FX_IDC`
    CurrencyPair,
    /// `TVC`
    TvcIndex,
    /// `FRED`
    FredIndex,
    /// `CBOE`
    CboeIndex,
    /// `ECONOMICS`
    Economics,
    /// Everything else is treated as a stock or ETF listing.
    Stock,
}

impl Rule {
    /// Look up the rule for an exchange prefix.
    #[must_use]
    pub fn for_exchange(code: &str) -> Self {
        match code {
            "FX" | "FX_IDC" => Self::CurrencyPair,
            "TVC" => Self::TvcIndex,
            "FRED" => Self::FredIndex,
            "CBOE" => Self::CboeIndex,
            "ECONOMICS" => Self::Economics,
            _ => Self::Stock,
        }
    }
}

/// Translate a parsed symbol into the instrument IBKR should import.
pub fn translate(symbol: &SymbolToken) -> Result<Instrument, Skip> {
    let ticker = symbol.ticker.as_str();
    match Rule::for_exchange(symbol.exchange.as_str()) {
        Rule::CurrencyPair => currency_pair(ticker),
        Rule::TvcIndex => tvc_index(ticker),
        Rule::FredIndex => Ok(Instrument::index(ticker, Venue::Smart)),
        Rule::CboeIndex => Ok(Instrument::index(ticker, Venue::Cboe)),
        Rule::Economics => Err(Skip::Economics),
        Rule::Stock => Ok(stock(symbol.exchange.as_str(), ticker)),
    }
}

/// `GBPUSD` and `EURUSD` stay base-first; every other pair is expressed as
/// USD against the foreign currency.
fn currency_pair(ticker: &str) -> Result<Instrument, Skip> {
    let legs: Vec<&str> = ticker.split("USD").collect();
    let [base, quote] = legs.as_slice() else {
        return Err(Skip::InvalidCurrencyPair);
    };
    // USD must be exactly one leg of the pair.
    if base.is_empty() == quote.is_empty() {
        return Err(Skip::InvalidCurrencyPair);
    }

    if USD_QUOTED_BASES.contains(base) {
        return Ok(Instrument::cash(*base, "USD"));
    }

    let foreign = if quote.is_empty() { *base } else { *quote };
    // IBKR has no CNY cash pair; HKD is the nearest tradable proxy.
    let foreign = if foreign == "CNY" { "HKD" } else { foreign };
    Ok(Instrument::cash("USD", foreign))
}

fn tvc_index(ticker: &str) -> Result<Instrument, Skip> {
    if let Some((_, symbol, venue)) = TVC_SUBSTITUTIONS
        .iter()
        .find(|(source, _, _)| *source == ticker)
    {
        return Ok(Instrument::index(*symbol, *venue));
    }
    if is_treasury_yield(ticker) {
        return Ok(Instrument::index(ticker, Venue::Smart));
    }
    Err(Skip::UnsupportedTvc)
}

/// Matches `US*Y` treasury yield tickers such as `US30Y`.
fn is_treasury_yield(ticker: &str) -> bool {
    ticker.starts_with("US") && ticker.ends_with('Y')
}

fn stock(exchange: &str, ticker: &str) -> Instrument {
    let ticker = match ticker {
        "BRK.B" => Ticker::new("BRK B"),
        other => Ticker::new(other),
    };

    let venue = if LSE_ETF_TICKERS.contains(&ticker.as_str()) {
        Venue::SmartLseEtf
    } else if US_EXCHANGES.contains(&exchange) {
        Venue::SmartAmex
    } else {
        Venue::Smart
    };

    Instrument::stock(ticker, venue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;

    fn line(token: &str) -> Option<String> {
        let symbol = SymbolToken::parse(token).unwrap();
        translate(&symbol).ok().map(|i| Record::from(i).to_string())
    }

    #[test]
    fn gbp_and_eur_are_quoted_in_usd() {
        assert_eq!(
            line("FX:GBPUSD").as_deref(),
            Some("DES,GBP,CASH,IDEALPRO,,,,,USD")
        );
        assert_eq!(
            line("FX_IDC:EURUSD").as_deref(),
            Some("DES,EUR,CASH,IDEALPRO,,,,,USD")
        );
    }

    #[test]
    fn usd_base_pair_uses_foreign_quote() {
        assert_eq!(
            line("FX:USDJPY").as_deref(),
            Some("DES,USD,CASH,IDEALPRO,,,,,JPY")
        );
    }

    #[test]
    fn foreign_base_pair_is_inverted() {
        assert_eq!(
            line("FX_IDC:JPYUSD").as_deref(),
            Some("DES,USD,CASH,IDEALPRO,,,,,JPY")
        );
    }

    #[test]
    fn cny_is_remapped_to_hkd() {
        assert_eq!(
            line("FX:USDCNY").as_deref(),
            Some("DES,USD,CASH,IDEALPRO,,,,,HKD")
        );
        assert_eq!(
            line("FX:CNYUSD").as_deref(),
            Some("DES,USD,CASH,IDEALPRO,,,,,HKD")
        );
    }

    #[test]
    fn cross_pairs_and_degenerate_pairs_are_skipped() {
        let symbol = SymbolToken::parse("FX:EURUSDGBP").unwrap();
        assert_eq!(translate(&symbol), Err(Skip::InvalidCurrencyPair));
        assert_eq!(line("FX:EURGBP"), None);
        assert_eq!(line("FX:USD"), None);
        assert_eq!(line("FX:USDUSD"), None);
    }

    #[test]
    fn tvc_substitutions() {
        assert_eq!(line("TVC:DXY").as_deref(), Some("DES,DX,IND,NYBOT,,,,,"));
        assert_eq!(line("TVC:US10Y").as_deref(), Some("DES,TNX,IND,CBOE,,,,,"));
        assert_eq!(line("TVC:US05Y").as_deref(), Some("DES,FVX,IND,CBOE,,,,,"));
    }

    #[test]
    fn tvc_treasury_yields_pass_through() {
        assert_eq!(line("TVC:US30Y").as_deref(), Some("DES,US30Y,IND,SMART,,,,,"));
        assert_eq!(line("TVC:US02Y").as_deref(), Some("DES,US02Y,IND,SMART,,,,,"));
    }

    #[test]
    fn other_tvc_tickers_are_skipped() {
        let symbol = SymbolToken::parse("TVC:GOLD").unwrap();
        assert_eq!(translate(&symbol), Err(Skip::UnsupportedTvc));
        assert_eq!(line("TVC:DE10Y"), None);
    }

    #[test]
    fn fred_and_cboe_are_indices() {
        assert_eq!(
            line("FRED:WALCL").as_deref(),
            Some("DES,WALCL,IND,SMART,,,,,")
        );
        assert_eq!(line("CBOE:VIX").as_deref(), Some("DES,VIX,IND,CBOE,,,,,"));
    }

    #[test]
    fn economics_is_always_skipped() {
        let symbol = SymbolToken::parse("ECONOMICS:USGDP").unwrap();
        assert_eq!(translate(&symbol), Err(Skip::Economics));
    }

    #[test]
    fn brk_b_is_respelled() {
        assert_eq!(
            line("NASDAQ:BRK.B").as_deref(),
            Some("DES,BRK B,STK,SMART/AMEX,,,,,")
        );
        assert_eq!(
            line("NYSE:BRK.B").as_deref(),
            Some("DES,BRK B,STK,SMART/AMEX,,,,,")
        );
    }

    #[test]
    fn lse_etfs_override_exchange_routing() {
        assert_eq!(
            line("LSE:IB01").as_deref(),
            Some("DES,IB01,STK,SMART/LSEETF,,,,,")
        );
        assert_eq!(
            line("NASDAQ:URNU").as_deref(),
            Some("DES,URNU,STK,SMART/LSEETF,,,,,")
        );
    }

    #[test]
    fn us_listings_route_through_amex() {
        for token in ["NYSE:IBM", "NASDAQ:AAPL", "AMEX:SPY"] {
            let rendered = line(token).unwrap();
            assert!(rendered.ends_with(",STK,SMART/AMEX,,,,,"), "{rendered}");
        }
    }

    #[test]
    fn empty_exchange_falls_through_to_stock_rule() {
        assert_eq!(line(":AAPL").as_deref(), Some("DES,AAPL,STK,SMART,,,,,"));
    }

    #[test]
    fn empty_ticker_is_translated_as_is() {
        assert_eq!(line("FRED:").as_deref(), Some("DES,,IND,SMART,,,,,"));
        assert_eq!(line("FX:"), None);
    }

    #[test]
    fn other_listings_use_smart() {
        assert_eq!(line("XETR:SAP").as_deref(), Some("DES,SAP,STK,SMART,,,,,"));
        assert_eq!(line("LSE:VOD").as_deref(), Some("DES,VOD,STK,SMART,,,,,"));
    }

    #[test]
    fn exchange_lookup_is_case_sensitive() {
        assert_eq!(Rule::for_exchange("fx"), Rule::Stock);
        assert_eq!(Rule::for_exchange("FX"), Rule::CurrencyPair);
    }
}
