//! Watchlist symbols, IBKR records and the rules that map one to the other.

pub mod id;
pub mod record;
pub mod rules;
pub mod symbol;

pub use id::{ExchangeCode, Ticker};
pub use record::{Instrument, Record, SecurityType, Venue, PREAMBLE};
pub use rules::{translate, Rule, Skip};
pub use symbol::{SymbolError, SymbolToken};
