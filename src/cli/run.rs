//! Handler for a conversion run.

use std::process::ExitCode;

use serde_json::json;
use tracing::error;

use crate::application::convert_file;
use crate::cli::logging::LoggingConfig;
use crate::cli::output::{self, OutputConfig};
use crate::cli::Cli;
use crate::error::Result;

/// Configure output and logging, run the conversion and map the outcome to
/// a process exit code.
pub fn main(cli: &Cli) -> ExitCode {
    output::configure(OutputConfig::new(cli.json, cli.quiet));
    LoggingConfig::from_flags(cli.verbose, cli.quiet).init();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, path = %e.path().display(), "Conversion failed");
            if output::is_json() {
                output::error(&e.to_string());
            } else {
                eprintln!("{:?}", miette::Report::new(e));
            }
            ExitCode::FAILURE
        }
    }
}

/// Convert `cli.input_file` into `cli.output_file` and report the result.
pub fn execute(cli: &Cli) -> Result<()> {
    let summary = convert_file(&cli.input_file, &cli.output_file)?;

    output::success(
        &format!(
            "Conversion completed. Output saved to {}",
            cli.output_file.display()
        ),
        json!({
            "output": cli.output_file.display().to_string(),
            "summary": summary,
        }),
    );
    output::field("Sections", summary.sections);
    output::field("Instruments", summary.instruments);
    output::field("Skipped", summary.skipped);
    Ok(())
}
