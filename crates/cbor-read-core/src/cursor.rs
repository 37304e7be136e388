//! Bounded binary cursor over a byte slice.

use crate::error::ReadError;

/// A forward-only reader over a byte slice.
///
/// Every read is bounds-checked against `end`. A failed read returns
/// [`ReadError::OutOfBounds`] and leaves the cursor where it was.
///
/// # Example
///
/// ```
/// use cbor_read_core::Cursor;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut cursor = Cursor::new(&data);
///
/// assert_eq!(cursor.u8().unwrap(), 0x01);
/// assert_eq!(cursor.u16().unwrap(), 0x0203);
/// assert!(cursor.u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    uint8: &'a [u8],
    x: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(uint8: &'a [u8]) -> Self {
        Self {
            uint8,
            x: 0,
            end: uint8.len(),
        }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Number of bytes left before `end`.
    pub fn remaining(&self) -> usize {
        self.end - self.x
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let bytes = self.buf(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Returns the next `size` bytes and advances past them.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], ReadError> {
        let end = self.x.checked_add(size).ok_or(ReadError::OutOfBounds)?;
        if end > self.end {
            return Err(ReadError::OutOfBounds);
        }
        let bin = &self.uint8[self.x..end];
        self.x = end;
        Ok(bin)
    }

    #[inline]
    pub fn u8(&mut self) -> Result<u8, ReadError> {
        Ok(self.take::<1>()?[0])
    }

    /// Reads a big-endian `u16`.
    #[inline]
    pub fn u16(&mut self) -> Result<u16, ReadError> {
        self.take().map(u16::from_be_bytes)
    }

    /// Reads a big-endian `u32`.
    #[inline]
    pub fn u32(&mut self) -> Result<u32, ReadError> {
        self.take().map(u32::from_be_bytes)
    }

    /// Reads a big-endian `u64`.
    #[inline]
    pub fn u64(&mut self) -> Result<u64, ReadError> {
        self.take().map(u64::from_be_bytes)
    }
}
