//! Fan-out sink that writes each record to several writers

use crate::core::{LoggerError, Result, WriteTarget};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};

struct Target {
    name: String,
    writer: Box<dyn Write + Send>,
}

/// Writes every record to all of its writers, in the order they were added
///
/// A single lock is held for the whole record, so concurrent callers never
/// interleave partial records on any writer. A failing writer does not
/// stop the record from reaching the others.
pub struct MultiSink {
    name: String,
    targets: Mutex<Option<Vec<Target>>>,
}

impl MultiSink {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            targets: Mutex::new(Some(Vec::new())),
        }
    }

    /// A sink writing to the process's standard output only
    pub fn stdout() -> Self {
        Self::new().with_writer("stdout", io::stdout())
    }

    /// Add a writer under `name`
    #[must_use]
    pub fn with_writer<W>(mut self, name: impl Into<String>, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let name = name.into();
        if !self.name.is_empty() {
            self.name.push('+');
        }
        self.name.push_str(&name);

        if let Some(targets) = self.targets.get_mut().as_mut() {
            targets.push(Target {
                name,
                writer: Box::new(writer),
            });
        }
        self
    }

    /// Names of the writers, in write order. Empty after close.
    pub fn writer_names(&self) -> Vec<String> {
        self.targets
            .lock()
            .as_ref()
            .map(|targets| targets.iter().map(|t| t.name.clone()).collect())
            .unwrap_or_default()
    }

    pub fn is_closed(&self) -> bool {
        self.targets.lock().is_none()
    }
}

impl fmt::Debug for MultiSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSink")
            .field("name", &self.name)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl Default for MultiSink {
    fn default() -> Self {
        Self::new()
    }
}

fn flush_all(targets: &mut [Target]) -> Result<()> {
    let failures: Vec<String> = targets
        .iter_mut()
        .filter_map(|t| t.writer.flush().err().map(|e| format!("{}: {}", t.name, e)))
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(LoggerError::writer(format!("flush failed ({})", failures.join("; "))))
    }
}

impl WriteTarget for MultiSink {
    fn write_record(&self, record: &[u8]) -> Result<()> {
        let mut guard = self.targets.lock();
        let targets = guard.as_mut().ok_or(LoggerError::LoggerClosed)?;

        let failures: Vec<String> = targets
            .iter_mut()
            .filter_map(|t| {
                t.writer
                    .write_all(record)
                    .and_then(|()| t.writer.flush())
                    .err()
                    .map(|e| format!("{}: {}", t.name, e))
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LoggerError::writer(format!("write failed ({})", failures.join("; "))))
        }
    }

    fn sync(&self) -> Result<()> {
        match self.targets.lock().as_mut() {
            Some(targets) => flush_all(targets),
            None => Ok(()),
        }
    }

    fn close(&self) -> Result<()> {
        // taking the writers out drops (and closes) them once the flush is done
        let taken = self.targets.lock().take();
        match taken {
            Some(mut targets) => flush_all(&mut targets),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
