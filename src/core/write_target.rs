//! WriteTarget trait for record destinations

use super::error::Result;

/// A destination for encoded records
///
/// Implementations take `&self` and must serialize concurrent writes
/// themselves so one record is never interleaved with another.
pub trait WriteTarget: Send + Sync {
    /// Write one complete record
    fn write_record(&self, record: &[u8]) -> Result<()>;
    fn sync(&self) -> Result<()>;
    /// Flush and release the underlying handles. Calling it again is a no-op.
    fn close(&self) -> Result<()>;
    fn name(&self) -> &str;
}
