use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Fatal conversion errors. Malformed symbols are never reported here.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("error opening input file {}", .path.display())]
    #[diagnostic(
        code(tv2ibkr::input::open),
        help("check that the TradingView export exists and is readable")
    )]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error creating output file {}", .path.display())]
    #[diagnostic(
        code(tv2ibkr::output::create),
        help("check that the destination directory exists and is writable")
    )]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading input file {}", .path.display())]
    #[diagnostic(
        code(tv2ibkr::input::read),
        help("check that the input file is readable")
    )]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing output file {}", .path.display())]
    #[diagnostic(code(tv2ibkr::output::write))]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Path of the file the failed operation was working on.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::OpenInput { path, .. }
            | Self::CreateOutput { path, .. }
            | Self::ReadInput { path, .. }
            | Self::WriteOutput { path, .. } => path,
        }
    }
}
