//! Numeric kinds and their storage widths.

use std::fmt;

/// A numeric kind that can be written to or read from a
/// [`BufferCursor`](crate::BufferCursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// IEEE-754 single-precision float.
    Float32,
    /// IEEE-754 double-precision float.
    Float64,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    Uint64,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 10] = [
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Uint8,
        Kind::Uint16,
        Kind::Uint32,
        Kind::Float32,
        Kind::Float64,
        Kind::Int64,
        Kind::Uint64,
    ];

    /// Number of bytes a value of this kind occupies in storage.
    ///
    /// # Example
    ///
    /// ```
    /// use buffer_cursor::Kind;
    ///
    /// assert_eq!(Kind::Int16.width(), 2);
    /// assert_eq!(Kind::Float64.width(), 8);
    /// ```
    pub const fn width(self) -> usize {
        match self {
            Kind::Int8 | Kind::Uint8 => 1,
            Kind::Int16 | Kind::Uint16 => 2,
            Kind::Int32 | Kind::Uint32 | Kind::Float32 => 4,
            Kind::Float64 | Kind::Int64 | Kind::Uint64 => 8,
        }
    }

    /// Lowercase name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Int64 => "int64",
            Kind::Uint64 => "uint64",
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types accepted by the integer writers and by
/// [`BufferCursor::new`](crate::BufferCursor::new).
///
/// This trait is sealed; it cannot be implemented outside this crate.
pub trait Integer: sealed::Sealed + Copy {}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Integer for $t {}
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
