//! Fixed-width primitive encoding/decoding.
//!
//! All multi-byte values are big-endian; integers are two's complement and
//! floating point values are IEEE 754.

use crate::error::DecodeError;

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and tracks the current offset so every failure can
/// report where it happened.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Builds the truncation error for a read of `needed` bytes at the current position.
    pub fn truncated(&self, needed: usize, context: &'static str) -> DecodeError {
        DecodeError::TruncatedInput {
            context,
            offset: self.pos,
            needed,
            remaining: self.remaining_len(),
        }
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(self.truncated(1, context));
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining_len() {
            return Err(self.truncated(n, context));
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    #[inline]
    fn read_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N], DecodeError> {
        let bytes = self.read_bytes(N, context)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads a signed byte.
    #[inline]
    pub fn read_i8(&mut self, context: &'static str) -> Result<i8, DecodeError> {
        Ok(self.read_byte(context)? as i8)
    }

    /// Reads a big-endian i16.
    #[inline]
    pub fn read_i16(&mut self, context: &'static str) -> Result<i16, DecodeError> {
        Ok(i16::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian u16.
    #[inline]
    pub fn read_u16(&mut self, context: &'static str) -> Result<u16, DecodeError> {
        Ok(u16::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian i32.
    #[inline]
    pub fn read_i32(&mut self, context: &'static str) -> Result<i32, DecodeError> {
        Ok(i32::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian i64.
    #[inline]
    pub fn read_i64(&mut self, context: &'static str) -> Result<i64, DecodeError> {
        Ok(i64::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian f32.
    #[inline]
    pub fn read_f32(&mut self, context: &'static str) -> Result<f32, DecodeError> {
        Ok(f32::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian f64.
    ///
    /// NaN payloads are kept bit-for-bit.
    #[inline]
    pub fn read_f64(&mut self, context: &'static str) -> Result<f64, DecodeError> {
        Ok(f64::from_be_bytes(self.read_array(context)?))
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a signed byte.
    #[inline]
    pub fn write_i8(&mut self, value: i8) {
        self.buf.push(value as u8);
    }

    /// Writes a big-endian i16.
    #[inline]
    pub fn write_i16(&mut self, value: i16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian u16.
    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian i32.
    #[inline]
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian i64.
    #[inline]
    pub fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian f32.
    #[inline]
    pub fn write_f32(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian f64.
    #[inline]
    pub fn write_f64(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_layout() {
        let mut writer = Writer::new();
        writer.write_i16(0x0102);
        writer.write_i32(0x0304_0506);
        writer.write_u16(0xFFFE);

        assert_eq!(writer.as_bytes(), &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0xFF, 0xFE]);
    }

    #[test]
    fn test_signed_extremes() {
        let mut writer = Writer::new();
        writer.write_i8(i8::MIN);
        writer.write_i16(-1);
        writer.write_i32(i32::MIN);
        writer.write_i64(i64::MAX);

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(reader.read_i8("test").unwrap(), i8::MIN);
        assert_eq!(reader.read_i16("test").unwrap(), -1);
        assert_eq!(reader.read_i32("test").unwrap(), i32::MIN);
        assert_eq!(reader.read_i64("test").unwrap(), i64::MAX);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_float_values() {
        let mut writer = Writer::new();
        writer.write_f32(1.5);
        writer.write_f64(-0.25);

        assert_eq!(&writer.as_bytes()[..4], &[0x3F, 0xC0, 0x00, 0x00]);

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(reader.read_f32("test").unwrap(), 1.5);
        assert_eq!(reader.read_f64("test").unwrap(), -0.25);
    }

    #[test]
    fn test_nan_bits_preserved() {
        let bits = 0x7FF8_0000_0000_0001u64;
        let mut writer = Writer::new();
        writer.write_f64(f64::from_bits(bits));

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(reader.read_f64("test").unwrap().to_bits(), bits);
    }

    #[test]
    fn test_truncated_int() {
        let data = [0x00, 0x00, 0x01];
        let mut reader = Reader::new(&data);
        let result = reader.read_i32("int");
        assert!(matches!(
            result,
            Err(DecodeError::TruncatedInput {
                context: "int",
                offset: 0,
                needed: 4,
                remaining: 3
            })
        ));
        // A failed read consumes nothing
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_bytes_past_end() {
        let data = [0u8; 5];
        let mut reader = Reader::new(&data);
        reader.read_bytes(2, "test").unwrap();
        let result = reader.read_bytes(10, "test");
        assert!(matches!(result, Err(DecodeError::TruncatedInput { offset: 2, .. })));
    }
}
