//! Application services built on the domain rules.

pub mod convert;

pub use convert::{convert, convert_file, ConversionSummary};
