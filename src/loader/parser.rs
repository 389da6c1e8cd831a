//! CSV → point parsing using the csv crate

use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{LoadError, RowError, RowErrorKind};
use crate::point::Point;

/// Message printed when the requested file does not exist
pub const NOT_FOUND_MESSAGE: &str = "File not found.";

/// Supported field delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    pub fn byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Pipe => b'|',
            Delimiter::Semicolon => b';',
        }
    }
}

/// What to do with a data row that is not two numeric fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Stop at the first bad row and return it as an error
    #[default]
    Abort,
    /// Drop bad rows and report them alongside the points
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub delimiter: Delimiter,
    pub policy: RowPolicy,
}

/// Result of a successful load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loaded {
    /// Points in file row order
    pub points: Vec<Point>,
    /// Rows dropped under [`RowPolicy::Skip`], in file order
    pub skipped: Vec<RowError>,
}

impl Loaded {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Load points from a CSV file on disk.
///
/// A missing file is not an error: the not-found message is printed to stdout
/// and an empty result is returned. The file handle is closed before returning.
pub fn load_points(path: &Path, options: &LoadOptions) -> Result<Loaded, LoadError> {
    load_points_to(path, options, &mut io::stdout().lock())
}

/// [`load_points`] with the not-found message written to `out`
pub fn load_points_to<W: Write>(
    path: &Path,
    options: &LoadOptions,
    out: &mut W,
) -> Result<Loaded, LoadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "CSV file not found");
            if let Err(e) = writeln!(out, "{}", NOT_FOUND_MESSAGE) {
                tracing::warn!(error = %e, "Could not print not-found message");
            }
            return Ok(Loaded::default());
        }
        Err(source) => {
            return Err(LoadError::Open {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    tracing::debug!(path = %path.display(), ?options, "Loading points");
    parse_points(file, options)
}

/// Parse points from any CSV source.
///
/// The first line is the header and is discarded unconditionally, even when it
/// is blank. Other blank lines are ignored. Every remaining record must hold
/// exactly two numeric fields.
pub fn parse_points<R: Read>(mut source: R, options: &LoadOptions) -> Result<Loaded, LoadError> {
    let mut data = Vec::new();
    source.read_to_end(&mut data).map_err(LoadError::Read)?;
    parse_bytes(&data, options)
}

fn parse_bytes(data: &[u8], options: &LoadOptions) -> Result<Loaded, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter.byte())
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut loaded = Loaded::default();
    let mut header_pending = true;
    let mut row = 0;

    for result in reader.records() {
        let record = result.map_err(|err| {
            let line = err.position().map_or(0, |pos| start_line(data, pos));
            (line, err.to_string())
        });
        let line = match &record {
            Ok(record) => record.position().map_or(0, |pos| start_line(data, pos)),
            Err((line, _)) => *line,
        };

        // A record after a blank first line is data: the blank line was the header
        if std::mem::take(&mut header_pending) && line <= 1 {
            continue;
        }

        let parsed = match record {
            Ok(record) => parse_record(&record, line, row),
            Err((line, message)) => Err(RowError {
                line,
                row,
                kind: RowErrorKind::Record(message),
            }),
        };
        row += 1;

        match parsed {
            Ok(point) => loaded.points.push(point),
            Err(err) => match options.policy {
                RowPolicy::Abort => return Err(err.into()),
                RowPolicy::Skip => {
                    tracing::warn!(%err, "Skipping malformed row");
                    loaded.skipped.push(err);
                }
            },
        }
    }

    tracing::debug!(
        points = loaded.points.len(),
        skipped = loaded.skipped.len(),
        "Parsed CSV points"
    );
    Ok(loaded)
}

/// Line a record actually starts on.
///
/// The csv reader stamps a record with the position where it began looking,
/// which is before any blank lines it skipped.
fn start_line(data: &[u8], pos: &csv::Position) -> u64 {
    let rest = usize::try_from(pos.byte())
        .ok()
        .and_then(|byte| data.get(byte..))
        .unwrap_or_default();
    let skipped = rest
        .iter()
        .take_while(|&&b| b == b'\n' || b == b'\r')
        .filter(|&&b| b == b'\n')
        .count();
    pos.line() + skipped as u64
}

fn parse_record(record: &csv::StringRecord, line: u64, row: usize) -> Result<Point, RowError> {
    let fail = |kind| RowError { line, row, kind };

    if record.len() != 2 {
        return Err(fail(RowErrorKind::FieldCount {
            found: record.len(),
        }));
    }

    let x = parse_field(&record[0], 0).map_err(fail)?;
    let y = parse_field(&record[1], 1).map_err(fail)?;
    Ok(Point::new(x, y))
}

fn parse_field(field: &str, column: usize) -> Result<f64, RowErrorKind> {
    let value: f64 = field.parse().map_err(|_| RowErrorKind::NotANumber {
        column,
        value: field.to_string(),
    })?;

    if !value.is_finite() {
        return Err(RowErrorKind::NotFinite {
            column,
            value: field.to_string(),
        });
    }

    Ok(value)
}
