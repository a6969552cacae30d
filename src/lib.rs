//! tv2ibkr - TradingView to Interactive Brokers watchlist conversion.
//!
//! A TradingView export is a comma-separated list of `EXCHANGE:TICKER`
//! symbols interleaved with `###Section` markers. This crate rewrites it
//! into the CSV import format understood by IBKR Trader Workstation.
//!
//! # Modules
//!
//! - [`domain`] - Symbol parsing, IBKR records and the translation rules
//! - [`application`] - The line-by-line conversion pipeline
//! - [`cli`] - Argument parsing, logging and terminal output
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use tv2ibkr::application::convert;
//!
//! let mut out = Vec::new();
//! convert("###Forex,FX:GBPUSD\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "CSVEXPORT\nCOLUMN,0\nHED,Forex\nDES,GBP,CASH,IDEALPRO,,,,,USD\n"
//! );
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;

pub use error::{Error, Result};
