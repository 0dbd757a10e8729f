//! Fixed-capacity binary buffer with independent read and write cursors.
//!
//! [`BufferCursor`] owns a byte region whose size is fixed at construction
//! and exposes typed accessors for 8/16/32/64-bit signed and unsigned
//! integers and 32/64-bit floats, plus raw byte writes. It is meant as a
//! building block for code that assembles or parses binary packets and
//! records.
//!
//! # Byte order
//!
//! All multi-byte values are encoded **big-endian** (network order). This is
//! fixed and part of the public contract.
//!
//! # Errors
//!
//! Every accessor returns a [`BufferError`] instead of truncating or
//! wrapping. Failed calls leave storage and both offsets unchanged.
//!
//! # Example
//!
//! ```
//! use buffer_cursor::{BufferCursor, BufferError, Kind};
//!
//! let mut cursor = BufferCursor::new(Kind::Int8.width() * 2)?;
//! cursor.write_i8(-128)?;
//! cursor.write_i8(127)?;
//! assert_eq!(cursor.read_i8()?, -128);
//! assert_eq!(cursor.read_i8()?, 127);
//!
//! // 300 does not fit in an int8.
//! cursor.reset_write_offset();
//! assert_eq!(
//!     cursor.write_i8(300),
//!     Err(BufferError::ValueOutOfRange { kind: Kind::Int8 })
//! );
//! # Ok::<(), BufferError>(())
//! ```

#![warn(missing_docs)]

mod cursor;
mod error;
mod kind;

pub use cursor::BufferCursor;
pub use error::BufferError;
pub use kind::{Integer, Kind};
