//! CLI module graph.

pub mod command;
pub mod logging;
pub mod output;
pub mod run;

pub use command::Cli;
