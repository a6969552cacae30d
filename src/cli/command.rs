//! Command-line interface definitions.

use std::path::PathBuf;

use clap::Parser;

/// Convert a TradingView watchlist to IBKR format
#[derive(Parser, Debug)]
#[command(name = "tv2ibkr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the input TradingView watchlist file
    pub input_file: PathBuf,

    /// Path to the output IBKR watchlist file
    pub output_file: PathBuf,

    /// JSON output for scripting
    #[arg(long)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_paths_and_flags() {
        let cli = Cli::try_parse_from(["tv2ibkr", "-vv", "in.txt", "out.csv", "--json"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("in.txt"));
        assert_eq!(cli.output_file, PathBuf::from("out.csv"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn requires_both_paths() {
        assert!(Cli::try_parse_from(["tv2ibkr", "in.txt"]).is_err());
        assert!(Cli::try_parse_from(["tv2ibkr", "a", "b", "c"]).is_err());
    }
}
