//! Buffer cursor error type.

use thiserror::Error;

use crate::Kind;

/// Error type for buffer cursor operations.
///
/// A failed operation never changes the cursor: storage and both offsets
/// are exactly as they were before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Construction requested a negative or unallocatable capacity.
    #[error("invalid buffer capacity")]
    InvalidCapacity,
    /// A write would extend past the end of storage.
    #[error("buffer overflow: writing {len} byte(s) at offset {offset} exceeds capacity {capacity}")]
    BufferOverflow {
        /// Kind being written, `None` for raw bytes.
        kind: Option<Kind>,
        /// Write offset at the time of the call.
        offset: usize,
        /// Number of bytes the write needed.
        len: usize,
        /// Storage length.
        capacity: usize,
    },
    /// A read would extend past the end of storage.
    #[error("buffer underflow: reading {kind} at offset {offset} exceeds capacity {capacity}")]
    BufferUnderflow {
        /// Kind being read.
        kind: Kind,
        /// Read offset at the time of the call.
        offset: usize,
        /// Storage length.
        capacity: usize,
    },
    /// The value does not fit the target kind.
    #[error("value out of range for {kind}")]
    ValueOutOfRange {
        /// Kind the value was meant for.
        kind: Kind,
    },
}
