//! Fixed-capacity buffer with independent read and write cursors.

use crate::{BufferError, Integer, Kind};

/// A fixed-capacity byte buffer with independent read and write offsets.
///
/// Multi-byte values are always stored big-endian. Every typed write checks
/// that the value fits its kind and that the whole encoding fits in the
/// remaining storage before touching any byte; every typed read checks that
/// the whole encoding lies inside storage. A failed call leaves storage and
/// both offsets untouched.
///
/// Reads are bounded by the storage length, not by what has been written, so
/// reading past the write offset yields zero bytes (or whatever was written
/// there before a seek).
///
/// # Example
///
/// ```
/// use buffer_cursor::{BufferCursor, BufferError};
///
/// let mut cursor = BufferCursor::new(3)?;
/// cursor.write_u8(0x01)?;
/// cursor.write_u16(0x0203)?;
/// assert_eq!(cursor.as_bytes(), &[0x01, 0x02, 0x03]);
///
/// assert_eq!(cursor.read_u8()?, 0x01);
/// assert_eq!(cursor.read_u16()?, 0x0203);
/// assert!(cursor.read_u8().is_err());
/// # Ok::<(), BufferError>(())
/// ```
///
/// Integer writers accept any primitive integer and range check it against
/// the target kind. Other types that convert to integers are not accepted:
///
/// ```compile_fail
/// use buffer_cursor::BufferCursor;
///
/// let mut cursor = BufferCursor::new(1).unwrap();
/// cursor.write_u8(true).unwrap();
/// ```
///
/// ```compile_fail
/// use buffer_cursor::BufferCursor;
///
/// let mut cursor = BufferCursor::new(8).unwrap();
/// cursor.write_i64('a').unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferCursor {
    storage: Vec<u8>,
    write_offset: usize,
    read_offset: usize,
}

impl BufferCursor {
    /// Creates a cursor over `capacity` zeroed bytes.
    ///
    /// Fails with [`BufferError::InvalidCapacity`] when `capacity` is negative,
    /// does not fit in `usize`, or cannot be allocated.
    pub fn new<C>(capacity: C) -> Result<Self, BufferError>
    where
        C: Integer + TryInto<usize>,
    {
        let capacity = capacity
            .try_into()
            .map_err(|_| BufferError::InvalidCapacity)?;
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| BufferError::InvalidCapacity)?;
        storage.resize(capacity, 0);
        Ok(Self {
            storage,
            write_offset: 0,
            read_offset: 0,
        })
    }

    /// Returns the storage length in bytes.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the position of the next write.
    pub fn write_offset(&self) -> usize {
        self.write_offset
    }

    /// Returns the position of the next read.
    pub fn read_offset(&self) -> usize {
        self.read_offset
    }

    /// Returns the whole storage, written or not.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Returns the whole storage mutably. Offsets are not affected.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.storage
    }

    /// Returns the storage up to the write offset.
    pub fn written(&self) -> &[u8] {
        &self.storage[..self.write_offset.min(self.storage.len())]
    }

    /// Number of bytes that can still be written at the write offset.
    pub fn remaining_write(&self) -> usize {
        self.storage.len().saturating_sub(self.write_offset)
    }

    /// Number of bytes that can still be read at the read offset.
    pub fn remaining_read(&self) -> usize {
        self.storage.len().saturating_sub(self.read_offset)
    }

    /// Consumes the cursor and returns its storage.
    pub fn into_inner(self) -> Vec<u8> {
        self.storage
    }

    /// Moves the write offset. Any value is accepted; the next write checks it.
    pub fn set_write_offset(&mut self, offset: usize) {
        self.write_offset = offset;
    }

    /// Moves the read offset. Any value is accepted; the next read checks it.
    pub fn set_read_offset(&mut self, offset: usize) {
        self.read_offset = offset;
    }

    /// Moves the write offset back to the start of storage.
    pub fn reset_write_offset(&mut self) {
        self.write_offset = 0;
    }

    /// Moves the read offset back to the start of storage.
    pub fn reset_read_offset(&mut self) {
        self.read_offset = 0;
    }

    /// Zeroes the storage and resets both offsets. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.storage.fill(0);
        self.write_offset = 0;
        self.read_offset = 0;
    }

    /// Copies `bytes` at the write offset and advances it.
    fn put(&mut self, kind: Option<Kind>, bytes: &[u8]) -> Result<(), BufferError> {
        let start = self.write_offset;
        let end = start
            .checked_add(bytes.len())
            .filter(|&end| end <= self.storage.len())
            .ok_or(BufferError::BufferOverflow {
                kind,
                offset: start,
                len: bytes.len(),
                capacity: self.storage.len(),
            })?;
        self.storage[start..end].copy_from_slice(bytes);
        self.write_offset = end;
        Ok(())
    }

    /// Copies `N` bytes out from the read offset and advances it.
    fn take<const N: usize>(&mut self, kind: Kind) -> Result<[u8; N], BufferError> {
        debug_assert_eq!(N, kind.width());
        let start = self.read_offset;
        let end = start
            .checked_add(N)
            .filter(|&end| end <= self.storage.len())
            .ok_or(BufferError::BufferUnderflow {
                kind,
                offset: start,
                capacity: self.storage.len(),
            })?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.storage[start..end]);
        self.read_offset = end;
        Ok(bytes)
    }

    /// Writes raw bytes at the write offset.
    ///
    /// The write is all-or-nothing: if the slice does not fit, nothing is
    /// copied and the write offset stays where it was.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.put(None, bytes)
    }

    /// Writes a signed 8-bit integer.
    pub fn write_i8(&mut self, value: impl Integer + TryInto<i8>) -> Result<(), BufferError> {
        let value: i8 = value.try_into().map_err(|_| out_of_range(Kind::Int8))?;
        self.put(Some(Kind::Int8), &value.to_be_bytes())
    }

    /// Writes a signed 16-bit integer (big-endian).
    pub fn write_i16(&mut self, value: impl Integer + TryInto<i16>) -> Result<(), BufferError> {
        let value: i16 = value.try_into().map_err(|_| out_of_range(Kind::Int16))?;
        self.put(Some(Kind::Int16), &value.to_be_bytes())
    }

    /// Writes a signed 32-bit integer (big-endian).
    pub fn write_i32(&mut self, value: impl Integer + TryInto<i32>) -> Result<(), BufferError> {
        let value: i32 = value.try_into().map_err(|_| out_of_range(Kind::Int32))?;
        self.put(Some(Kind::Int32), &value.to_be_bytes())
    }

    /// Writes an unsigned 8-bit integer.
    pub fn write_u8(&mut self, value: impl Integer + TryInto<u8>) -> Result<(), BufferError> {
        let value: u8 = value.try_into().map_err(|_| out_of_range(Kind::Uint8))?;
        self.put(Some(Kind::Uint8), &[value])
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    pub fn write_u16(&mut self, value: impl Integer + TryInto<u16>) -> Result<(), BufferError> {
        let value: u16 = value.try_into().map_err(|_| out_of_range(Kind::Uint16))?;
        self.put(Some(Kind::Uint16), &value.to_be_bytes())
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    pub fn write_u32(&mut self, value: impl Integer + TryInto<u32>) -> Result<(), BufferError> {
        let value: u32 = value.try_into().map_err(|_| out_of_range(Kind::Uint32))?;
        self.put(Some(Kind::Uint32), &value.to_be_bytes())
    }

    /// Writes a 32-bit float (big-endian).
    ///
    /// The value is rounded to the nearest single-precision float. Finite
    /// values that round to infinity are rejected; NaN and infinities are
    /// stored as their single-precision counterparts.
    pub fn write_f32(&mut self, value: impl Into<f64>) -> Result<(), BufferError> {
        let value: f64 = value.into();
        let narrowed = value as f32;
        if value.is_finite() && narrowed.is_infinite() {
            return Err(out_of_range(Kind::Float32));
        }
        self.put(Some(Kind::Float32), &narrowed.to_be_bytes())
    }

    /// Writes a 64-bit float (big-endian).
    pub fn write_f64(&mut self, value: impl Into<f64>) -> Result<(), BufferError> {
        let value: f64 = value.into();
        self.put(Some(Kind::Float64), &value.to_be_bytes())
    }

    /// Writes a signed 64-bit integer (big-endian).
    pub fn write_i64(&mut self, value: impl Integer + TryInto<i64>) -> Result<(), BufferError> {
        let value: i64 = value.try_into().map_err(|_| out_of_range(Kind::Int64))?;
        self.put(Some(Kind::Int64), &value.to_be_bytes())
    }

    /// Writes an unsigned 64-bit integer (big-endian).
    pub fn write_u64(&mut self, value: impl Integer + TryInto<u64>) -> Result<(), BufferError> {
        let value: u64 = value.try_into().map_err(|_| out_of_range(Kind::Uint64))?;
        self.put(Some(Kind::Uint64), &value.to_be_bytes())
    }

    /// Reads a signed 8-bit integer.
    pub fn read_i8(&mut self) -> Result<i8, BufferError> {
        self.take(Kind::Int8).map(i8::from_be_bytes)
    }

    /// Reads a signed 16-bit integer (big-endian).
    pub fn read_i16(&mut self) -> Result<i16, BufferError> {
        self.take(Kind::Int16).map(i16::from_be_bytes)
    }

    /// Reads a signed 32-bit integer (big-endian).
    pub fn read_i32(&mut self) -> Result<i32, BufferError> {
        self.take(Kind::Int32).map(i32::from_be_bytes)
    }

    /// Reads an unsigned 8-bit integer.
    pub fn read_u8(&mut self) -> Result<u8, BufferError> {
        self.take(Kind::Uint8).map(u8::from_be_bytes)
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    pub fn read_u16(&mut self) -> Result<u16, BufferError> {
        self.take(Kind::Uint16).map(u16::from_be_bytes)
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    pub fn read_u32(&mut self) -> Result<u32, BufferError> {
        self.take(Kind::Uint32).map(u32::from_be_bytes)
    }

    /// Reads a 32-bit float (big-endian).
    pub fn read_f32(&mut self) -> Result<f32, BufferError> {
        self.take(Kind::Float32).map(f32::from_be_bytes)
    }

    /// Reads a 64-bit float (big-endian).
    pub fn read_f64(&mut self) -> Result<f64, BufferError> {
        self.take(Kind::Float64).map(f64::from_be_bytes)
    }

    /// Reads a signed 64-bit integer (big-endian).
    pub fn read_i64(&mut self) -> Result<i64, BufferError> {
        self.take(Kind::Int64).map(i64::from_be_bytes)
    }

    /// Reads an unsigned 64-bit integer (big-endian).
    pub fn read_u64(&mut self) -> Result<u64, BufferError> {
        self.take(Kind::Uint64).map(u64::from_be_bytes)
    }
}

impl AsRef<[u8]> for BufferCursor {
    fn as_ref(&self) -> &[u8] {
        &self.storage
    }
}

fn out_of_range(kind: Kind) -> BufferError {
    BufferError::ValueOutOfRange { kind }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let cursor = BufferCursor::new(4).unwrap();
        assert_eq!(cursor.capacity(), 4);
        assert_eq!(cursor.as_bytes(), &[0, 0, 0, 0]);
        assert_eq!(cursor.write_offset(), 0);
        assert_eq!(cursor.read_offset(), 0);
    }

    #[test]
    fn test_new_invalid_capacity() {
        assert_eq!(BufferCursor::new(-1), Err(BufferError::InvalidCapacity));
        assert_eq!(
            BufferCursor::new(i64::MIN),
            Err(BufferError::InvalidCapacity)
        );
        assert_eq!(
            BufferCursor::new(usize::MAX),
            Err(BufferError::InvalidCapacity)
        );
    }

    #[test]
    fn test_zero_capacity() {
        let mut cursor = BufferCursor::new(0usize).unwrap();
        assert!(cursor.write_u8(1u8).is_err());
        assert!(cursor.read_u8().is_err());
        assert!(cursor.write_bytes(&[]).is_ok());
    }

    #[test]
    fn test_big_endian_layout() {
        let mut cursor = BufferCursor::new(15).unwrap();
        cursor.write_u16(0x0102u16).unwrap();
        cursor.write_i32(-2i32).unwrap();
        cursor.write_u64(0x0102_0304_0506_0708u64).unwrap();
        cursor.write_i8(-1i8).unwrap();
        assert_eq!(
            cursor.as_bytes(),
            &[
                0x01, 0x02, 0xFF, 0xFF, 0xFF, 0xFE, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
                0x08, 0xFF
            ]
        );
    }

    #[test]
    fn test_float_layout() {
        let mut cursor = BufferCursor::new(12).unwrap();
        cursor.write_f32(1.0f32).unwrap();
        cursor.write_f64(-2.0f64).unwrap();
        assert_eq!(&cursor.as_bytes()[..4], &[0x3F, 0x80, 0x00, 0x00]);
        assert_eq!(
            &cursor.as_bytes()[4..],
            &[0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_overflow_leaves_state() {
        let mut cursor = BufferCursor::new(3).unwrap();
        cursor.write_u8(0xAAu8).unwrap();
        let err = cursor.write_u32(0xFFFF_FFFFu32).unwrap_err();
        assert_eq!(
            err,
            BufferError::BufferOverflow {
                kind: Some(Kind::Uint32),
                offset: 1,
                len: 4,
                capacity: 3,
            }
        );
        assert_eq!(cursor.write_offset(), 1);
        assert_eq!(cursor.as_bytes(), &[0xAA, 0, 0]);
    }

    #[test]
    fn test_underflow_leaves_state() {
        let mut cursor = BufferCursor::new(3).unwrap();
        cursor.read_u16().unwrap();
        let err = cursor.read_u16().unwrap_err();
        assert_eq!(
            err,
            BufferError::BufferUnderflow {
                kind: Kind::Uint16,
                offset: 2,
                capacity: 3,
            }
        );
        assert_eq!(cursor.read_offset(), 2);
    }

    #[test]
    fn test_seek_near_usize_max() {
        let mut cursor = BufferCursor::new(8).unwrap();
        cursor.set_write_offset(usize::MAX);
        cursor.set_read_offset(usize::MAX - 1);
        assert!(matches!(
            cursor.write_u16(1u16),
            Err(BufferError::BufferOverflow { .. })
        ));
        assert!(matches!(
            cursor.read_u64(),
            Err(BufferError::BufferUnderflow { .. })
        ));
        assert_eq!(cursor.write_offset(), usize::MAX);
        assert_eq!(cursor.read_offset(), usize::MAX - 1);
        assert_eq!(cursor.remaining_write(), 0);
        assert_eq!(cursor.remaining_read(), 0);
        assert_eq!(cursor.written().len(), 8);
    }

    #[test]
    fn test_value_checked_before_bounds() {
        let mut cursor = BufferCursor::new(0usize).unwrap();
        assert_eq!(
            cursor.write_u8(256u16),
            Err(BufferError::ValueOutOfRange { kind: Kind::Uint8 })
        );
    }

    #[test]
    fn test_f32_range() {
        let mut cursor = BufferCursor::new(16).unwrap();
        assert_eq!(
            cursor.write_f32(f64::MAX),
            Err(BufferError::ValueOutOfRange {
                kind: Kind::Float32
            })
        );
        assert_eq!(cursor.write_offset(), 0);
        cursor.write_f32(f32::MAX).unwrap();
        cursor.write_f32(f64::INFINITY).unwrap();
        cursor.write_f32(f64::NAN).unwrap();
        assert_eq!(cursor.read_f32().unwrap(), f32::MAX);
        assert_eq!(cursor.read_f32().unwrap(), f32::INFINITY);
        assert!(cursor.read_f32().unwrap().is_nan());
    }

    #[test]
    fn test_f32_rounds_down_to_max() {
        let mut cursor = BufferCursor::new(8).unwrap();
        // One f64 ulp above f32::MAX still rounds to f32::MAX.
        let above = f64::from_bits((f32::MAX as f64).to_bits() + 1);
        assert_eq!(above as f32, f32::MAX);
        cursor.write_f32(above).unwrap();
        cursor.write_f32(-above).unwrap();
        assert_eq!(cursor.read_f32().unwrap(), f32::MAX);
        assert_eq!(cursor.read_f32().unwrap(), -f32::MAX);

        // Half an f32 ulp above f32::MAX rounds to infinity.
        let halfway = f32::MAX as f64 + 2f64.powi(103);
        assert!((halfway as f32).is_infinite());
        assert_eq!(
            cursor.write_f32(halfway),
            Err(BufferError::ValueOutOfRange {
                kind: Kind::Float32
            })
        );
        assert_eq!(cursor.write_offset(), 8);
    }

    #[test]
    fn test_written_and_into_inner() {
        let mut cursor = BufferCursor::new(4).unwrap();
        cursor.write_bytes(&[1, 2]).unwrap();
        assert_eq!(cursor.written(), &[1, 2]);
        assert_eq!(cursor.remaining_write(), 2);
        assert_eq!(cursor.into_inner(), vec![1, 2, 0, 0]);
    }

    #[test]
    fn test_as_bytes_mut() {
        let mut cursor = BufferCursor::new(2).unwrap();
        cursor.as_bytes_mut().copy_from_slice(&[0x12, 0x34]);
        assert_eq!(cursor.write_offset(), 0);
        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.as_ref(), &[0x12, 0x34]);
    }
}
