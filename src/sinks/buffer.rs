//! In-memory writer that can be shared with a sink and read back later

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable in-memory writer; every clone appends to the same buffer
///
/// ```
/// use rust_custom_logger::sinks::{MultiSink, SharedBuffer};
/// use rust_custom_logger::WriteTarget;
///
/// let buffer = SharedBuffer::new();
/// let sink = MultiSink::new().with_writer("memory", buffer.clone());
/// sink.write_record(b"hello\n").unwrap();
/// assert_eq!(buffer.contents_string(), "hello\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.inner.lock().clone()
    }

    /// Contents decoded as UTF-8, invalid sequences replaced
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
