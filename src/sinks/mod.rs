//! Write targets for encoded records

pub mod buffer;
pub mod file;
pub mod multi;

pub use buffer::SharedBuffer;
pub use file::{open_file, open_sink};
pub use multi::MultiSink;

// Re-export trait for convenience
pub use crate::core::WriteTarget;
