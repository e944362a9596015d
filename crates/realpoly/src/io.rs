//! Line-oriented persistence: one polynomial per file, one line.
//!
//! Reading takes the first line and parses it; anything after it is
//! ignored. Writing emits the serialized form followed by a newline.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use realpoly_poly::{parse, ParseError, Polynomial};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from loading or saving a polynomial.
#[derive(Debug, Error)]
pub enum IoError {
    /// The underlying read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input has no line at all.
    #[error("no polynomial line found")]
    MissingLine,

    /// The first line is not a valid polynomial.
    #[error("malformed polynomial: {0}")]
    Parse(#[from] ParseError),
}

/// Reads a polynomial from the first line of `reader`.
///
/// # Errors
///
/// Returns [`IoError::MissingLine`] for empty input, [`IoError::Parse`]
/// if the line is malformed and [`IoError::Io`] if reading fails.
pub fn read_polynomial<R: BufRead>(mut reader: R) -> Result<Polynomial, IoError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(IoError::MissingLine);
    }
    let poly = parse(&line)?;

    if !reader.fill_buf()?.is_empty() {
        warn!("ignoring content after the first line");
    }

    Ok(poly)
}

/// Writes `poly` as a single line.
///
/// # Errors
///
/// Returns [`IoError::Io`] if writing fails.
pub fn write_polynomial<W: Write>(mut writer: W, poly: &Polynomial) -> Result<(), IoError> {
    writeln!(writer, "{poly}")?;
    Ok(())
}

/// Loads a polynomial from the first line of the file at `path`.
///
/// # Errors
///
/// See [`read_polynomial`]; opening the file can also fail with
/// [`IoError::Io`].
pub fn load(path: impl AsRef<Path>) -> Result<Polynomial, IoError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let poly = read_polynomial(BufReader::new(file))?;
    debug!(path = %path.display(), terms = poly.len(), "loaded polynomial");
    Ok(poly)
}

/// Saves `poly` to the file at `path`, replacing its contents.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created or written.
pub fn save(path: impl AsRef<Path>, poly: &Polynomial) -> Result<(), IoError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_polynomial(&mut writer, poly)?;
    writer.flush()?;
    debug!(path = %path.display(), terms = poly.len(), "saved polynomial");
    Ok(())
}
