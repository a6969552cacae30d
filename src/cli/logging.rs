//! Logging configuration and initialization.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable selecting the log format (`pretty` or `json`).
pub const LOG_FORMAT_ENV: &str = "TV2IBKR_LOG_FORMAT";

/// Logging configuration derived from CLI flags and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Map `-q` / `-v` flags to a default filter level.
    #[must_use]
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        let level = match (quiet, verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        };
        Self {
            level: level.into(),
            format: std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "pretty".into()),
        }
    }

    /// Initialize the tracing subscriber. `RUST_LOG` overrides the level.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}
