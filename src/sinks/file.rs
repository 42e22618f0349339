//! Opening the log file and pairing it with stdout

use super::multi::MultiSink;
use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter};
use std::path::Path;

/// Open `path` for append, creating it if absent
pub fn open_file(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::sink_open(path.display().to_string(), e))
}

/// A sink writing every record to the file at `path` and then to stdout
///
/// # Errors
///
/// Returns [`LoggerError::SinkOpen`] when the file cannot be created or
/// opened for append.
///
/// ```no_run
/// use rust_custom_logger::sinks::open_sink;
///
/// let sink = open_sink("/var/log/app.log")?;
/// # Ok::<(), rust_custom_logger::LoggerError>(())
/// ```
pub fn open_sink(path: impl AsRef<Path>) -> Result<MultiSink> {
    let path = path.as_ref();
    let file = open_file(path)?;

    Ok(MultiSink::new()
        .with_writer(path.display().to_string(), BufWriter::new(file))
        .with_writer("stdout", io::stdout()))
}
