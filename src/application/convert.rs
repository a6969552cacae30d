//! Watchlist conversion pipeline.
//!
//! Reads a TradingView export line by line, classifies each comma-separated
//! token and writes the IBKR import file. Tokens that cannot be translated
//! are dropped; only I/O failures abort a conversion.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::domain::{translate, Record, SymbolToken, PREAMBLE};
use crate::error::{Error, Result};

/// Prefix marking a section name in a TradingView export.
pub const SECTION_PREFIX: &str = "###";

/// Counts gathered while converting one watchlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub lines: usize,
    pub sections: usize,
    pub instruments: usize,
    pub skipped: usize,
}

impl ConversionSummary {
    fn record(&mut self, record: Option<&Record>) {
        match record {
            Some(Record::Header(_)) => self.sections += 1,
            Some(Record::Instrument(_)) => self.instruments += 1,
            None => self.skipped += 1,
        }
    }
}

/// I/O failure on one side of a stream conversion.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

/// Classify a single token: section marker, translatable symbol, or noise.
pub fn classify(token: &str) -> Option<Record> {
    if let Some(section) = token.strip_prefix(SECTION_PREFIX) {
        return Some(Record::Header(section.to_string()));
    }

    let symbol = match SymbolToken::parse(token) {
        Ok(symbol) => symbol,
        Err(reason) => {
            debug!(token, %reason, "Skipping malformed token");
            return None;
        }
    };

    match translate(&symbol) {
        Ok(instrument) => Some(instrument.into()),
        Err(reason) => {
            debug!(token, %reason, "Skipping untranslatable symbol");
            None
        }
    }
}

/// Writes the IBKR preamble and records.
pub struct RecordWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> RecordWriter<W> {
    /// Wrap `writer` and emit the fixed preamble.
    pub fn new(writer: W) -> io::Result<Self> {
        let mut inner = BufWriter::new(writer);
        for line in PREAMBLE {
            writeln!(inner, "{line}")?;
        }
        Ok(Self { inner })
    }

    pub fn write_record(&mut self, record: &Record) -> io::Result<()> {
        trace!(%record, "Writing record");
        writeln!(self.inner, "{record}")
    }

    /// Flush buffered output and return the underlying writer.
    pub fn finish(self) -> io::Result<W> {
        self.inner.into_inner().map_err(io::IntoInnerError::into_error)
    }
}

/// Convert a whole watchlist from `reader` into `writer`.
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    writer: W,
) -> std::result::Result<ConversionSummary, StreamError> {
    let mut out = RecordWriter::new(writer).map_err(StreamError::Write)?;
    let mut summary = ConversionSummary::default();

    for line in reader.split(b'\n') {
        let mut line = line.map_err(StreamError::Read)?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        // Non-UTF-8 bytes are content noise, not a read failure.
        let line = String::from_utf8_lossy(&line);
        summary.lines += 1;

        for token in line.split(',') {
            let record = classify(token);
            summary.record(record.as_ref());
            if let Some(record) = record {
                out.write_record(&record).map_err(StreamError::Write)?;
            }
        }
    }

    out.finish().map_err(StreamError::Write)?;
    Ok(summary)
}

/// Convert the watchlist at `input` into a new import file at `output`.
///
/// The input is opened first so a missing input never creates or truncates
/// the output file.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionSummary> {
    let reader = File::open(input).map_err(|source| Error::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| Error::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    info!(input = %input.display(), output = %output.display(), "Converting watchlist");

    let summary = convert(BufReader::new(reader), writer).map_err(|e| match e {
        StreamError::Read(source) => Error::ReadInput {
            path: input.to_path_buf(),
            source,
        },
        StreamError::Write(source) => Error::WriteOutput {
            path: output.to_path_buf(),
            source,
        },
    })?;

    info!(
        lines = summary.lines,
        sections = summary.sections,
        instruments = summary.instruments,
        skipped = summary.skipped,
        "Conversion finished"
    );
    Ok(summary)
}
