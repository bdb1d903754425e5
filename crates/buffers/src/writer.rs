//! Binary buffer writer backed by a growable vector.

/// A binary buffer writer that grows as needed.
///
/// Integers are written big-endian. Floats have explicit little-endian
/// writers because the rencode wire format stores them that way.
///
/// Everything written since the last [`Writer::reset`] is the pending
/// region: [`Writer::flush`] hands it out and [`Writer::discard`] drops it.
///
/// # Example
///
/// ```
/// use rencode_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.i16(0x0203);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Default)]
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
    /// Start of the pending region.
    pub x0: usize,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates an empty writer with `capacity` bytes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
            x0: 0,
        }
    }

    /// Number of bytes in the pending region.
    pub fn len(&self) -> usize {
        self.uint8.len() - self.x0
    }

    /// Returns `true` if nothing was written since the last reset.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Starts a new pending region at the current end of the buffer.
    pub fn reset(&mut self) {
        self.x0 = self.uint8.len();
    }

    /// Drops everything written since the last reset.
    pub fn discard(&mut self) {
        self.uint8.truncate(self.x0);
    }

    /// Returns the pending region and clears the buffer.
    pub fn flush(&mut self) -> Vec<u8> {
        let out = self.uint8.split_off(self.x0);
        self.uint8.clear();
        self.x0 = 0;
        out
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.uint8.push(val as u8);
    }

    /// Writes a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a 32-bit float (little-endian).
    #[inline]
    pub fn f32_le(&mut self, val: f32) {
        self.uint8.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a 64-bit float (little-endian).
    #[inline]
    pub fn f64_le(&mut self, val: f64) {
        self.uint8.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a tag byte followed by a big-endian `i16`.
    pub fn u8i16(&mut self, tag: u8, val: i16) {
        self.u8(tag);
        self.i16(val);
    }

    /// Writes a tag byte followed by a big-endian `i32`.
    pub fn u8i32(&mut self, tag: u8, val: i32) {
        self.u8(tag);
        self.i32(val);
    }

    /// Writes a tag byte followed by a big-endian `i64`.
    pub fn u8i64(&mut self, tag: u8, val: i64) {
        self.u8(tag);
        self.i64(val);
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        self.uint8.extend_from_slice(buf);
    }

    /// Writes an ASCII string.
    pub fn ascii(&mut self, s: &str) {
        debug_assert!(s.is_ascii());
        self.uint8.extend_from_slice(s.as_bytes());
    }
}
