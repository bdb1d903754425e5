//! `RencodeEncoder`: writes [`Value`] trees as rencode bytes.
//!
//! Wire format written:
//! - Null / Bool: a single tag byte.
//! - Integers: fixed-width tag followed by the value big-endian
//!   (`62` + 1 byte, `63` + 2, `64` + 4, `65` + 8). With
//!   [`RencodeOptions::compact_integers`] small values use one byte instead.
//! - Floats: `66` + 4 bytes or `44` + 8 bytes, little-endian.
//! - Text: `128 + n` then the bytes when `n < 64` characters, otherwise the
//!   decimal character count, `':'`, then the bytes.
//! - List: `192 + n` then the items when `n < 64`, otherwise `59`, the items
//!   and `127`.
//! - Map: `102 + n` then key/value pairs when `n < 25`, otherwise `60`, the
//!   pairs and `127`. Keys are always written as text.

use rencode_buffers::Writer;

use crate::constants::*;
use crate::error::RencodeError;
use crate::json;
use crate::options::RencodeOptions;
use crate::value::{Map, Value};

pub struct RencodeEncoder {
    pub writer: Writer,
    options: RencodeOptions,
}

impl Default for RencodeEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RencodeEncoder {
    pub fn new() -> Self {
        Self::with_options(RencodeOptions::default())
    }

    pub fn with_options(options: RencodeOptions) -> Self {
        Self {
            writer: Writer::new(),
            options,
        }
    }

    pub fn options(&self) -> &RencodeOptions {
        &self.options
    }

    /// Encodes `value` into a fresh byte vector.
    ///
    /// On error nothing written for this call is kept.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, RencodeError> {
        self.writer.reset();
        match self.write_any(value) {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                self.writer.discard();
                Err(err)
            }
        }
    }

    /// Encodes a JSON document without building a [`Value`] first.
    ///
    /// Integers are written as `Int64` and other numbers as `Float64`.
    /// Unsigned integers above `i64::MAX` have no tag and are rejected.
    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<Vec<u8>, RencodeError> {
        self.writer.reset();
        match self.write_json(value) {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                self.writer.discard();
                Err(err)
            }
        }
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), RencodeError> {
        match value {
            Value::Null => self.write_null(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Int8(i) => self.write_i8(*i),
            Value::Int16(i) => self.write_i16(*i),
            Value::Int32(i) => self.write_i32(*i),
            Value::Int64(i) => self.write_i64(*i),
            Value::Float32(f) => self.write_f32(*f),
            Value::Float64(f) => self.write_f64(*f),
            Value::Text(s) => return self.write_str(s),
            Value::List(items) => return self.write_list(items),
            Value::Map(map) => return self.write_map(map),
        }
        Ok(())
    }

    pub fn write_json(&mut self, value: &serde_json::Value) -> Result<(), RencodeError> {
        match value {
            serde_json::Value::Null => self.write_null(),
            serde_json::Value::Bool(b) => self.write_boolean(*b),
            serde_json::Value::Number(n) => return self.write_any(&json::number(n)?),
            serde_json::Value::String(s) => return self.write_str(s),
            serde_json::Value::Array(arr) => {
                let open = self.write_list_header(arr.len());
                for item in arr {
                    self.write_json(item)?;
                }
                if open {
                    self.write_end();
                }
            }
            serde_json::Value::Object(obj) => {
                let open = self.write_map_header(obj.len());
                for (key, val) in obj {
                    self.write_str(key)?;
                    self.write_json(val)?;
                }
                if open {
                    self.write_end();
                }
            }
        }
        Ok(())
    }

    pub fn write_null(&mut self) {
        self.writer.u8(NULL);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.u8(if b { TRUE } else { FALSE });
    }

    /// Writes a compact integer tag if enabled and `int` fits one.
    fn write_compact(&mut self, int: i64) -> bool {
        if !self.options.compact_integers {
            return false;
        }
        match int {
            0..=COMPACT_INT_MAX => self.writer.u8(POS_INT_START + int as u8),
            COMPACT_INT_MIN..=-1 => self.writer.u8((i64::from(NEG_INT_START) - 1 - int) as u8),
            _ => return false,
        }
        true
    }

    pub fn write_i8(&mut self, int: i8) {
        if !self.write_compact(int.into()) {
            self.writer.u8(INT8);
            self.writer.i8(int);
        }
    }

    pub fn write_i16(&mut self, int: i16) {
        if !self.write_compact(int.into()) {
            self.writer.u8i16(INT16, int);
        }
    }

    pub fn write_i32(&mut self, int: i32) {
        if !self.write_compact(int.into()) {
            self.writer.u8i32(INT32, int);
        }
    }

    pub fn write_i64(&mut self, int: i64) {
        if !self.write_compact(int) {
            self.writer.u8i64(INT64, int);
        }
    }

    pub fn write_f32(&mut self, float: f32) {
        self.writer.u8(FLOAT32);
        self.writer.f32_le(float);
    }

    pub fn write_f64(&mut self, float: f64) {
        self.writer.u8(FLOAT64);
        self.writer.f64_le(float);
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), RencodeError> {
        let encoding = self.options.text_encoding;
        let count = encoding.char_count(s);
        if count < usize::from(TEXT_COUNT) {
            self.writer.u8(TEXT_START + count as u8);
        } else {
            self.writer.ascii(&count.to_string());
            self.writer.u8(LENGTH_DELIMITER);
        }
        encoding.write(&mut self.writer, s)
    }

    /// Writes the list tag for `len` items. Returns `true` if the list is
    /// open-ended and must be closed with [`Self::write_end`].
    pub fn write_list_header(&mut self, len: usize) -> bool {
        if len < usize::from(LIST_COUNT) {
            self.writer.u8(LIST_START + len as u8);
            false
        } else {
            self.writer.u8(LIST);
            true
        }
    }

    /// Writes the map tag for `len` entries. Returns `true` if the map is
    /// open-ended and must be closed with [`Self::write_end`].
    pub fn write_map_header(&mut self, len: usize) -> bool {
        if len < usize::from(MAP_COUNT) {
            self.writer.u8(MAP_START + len as u8);
            false
        } else {
            self.writer.u8(MAP);
            true
        }
    }

    pub fn write_end(&mut self) {
        self.writer.u8(END);
    }

    pub fn write_list(&mut self, items: &[Value]) -> Result<(), RencodeError> {
        let open = self.write_list_header(items.len());
        for item in items {
            self.write_any(item)?;
        }
        if open {
            self.write_end();
        }
        Ok(())
    }

    pub fn write_map(&mut self, map: &Map) -> Result<(), RencodeError> {
        let open = self.write_map_header(map.len());
        for (key, val) in map {
            self.write_str(key)?;
            self.write_any(val)?;
        }
        if open {
            self.write_end();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextEncoding;

    fn enc(value: Value) -> Vec<u8> {
        RencodeEncoder::new().encode(&value).unwrap()
    }

    #[test]
    fn scalars() {
        assert_eq!(enc(Value::Null), [NULL]);
        assert_eq!(enc(Value::Bool(true)), [TRUE]);
        assert_eq!(enc(Value::Bool(false)), [FALSE]);
        assert_eq!(enc(Value::Int8(-2)), [INT8, 0xfe]);
        assert_eq!(enc(Value::Int16(-2)), [INT16, 0xff, 0xfe]);
        assert_eq!(enc(Value::Int32(2)), [INT32, 0, 0, 0, 2]);
        assert_eq!(enc(Value::Int64(1)), [INT64, 0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn floats_use_little_endian() {
        let mut expected = vec![FLOAT64];
        expected.extend_from_slice(&2.5f64.to_le_bytes());
        assert_eq!(enc(Value::Float64(2.5)), expected);

        let mut expected = vec![FLOAT32];
        expected.extend_from_slice(&2.5f32.to_le_bytes());
        assert_eq!(enc(Value::Float32(2.5)), expected);
    }

    #[test]
    fn small_integers_stay_fixed_width_by_default() {
        assert_eq!(enc(Value::Int64(0)).len(), 9);
        assert_eq!(enc(Value::Int8(5)), [INT8, 5]);
    }

    #[test]
    fn compact_integers_option() {
        let options = RencodeOptions::new().with_compact_integers(true);
        let mut encoder = RencodeEncoder::with_options(options);
        assert_eq!(encoder.encode(&Value::Int64(0)).unwrap(), [0]);
        assert_eq!(encoder.encode(&Value::Int32(43)).unwrap(), [43]);
        assert_eq!(encoder.encode(&Value::Int16(-1)).unwrap(), [70]);
        assert_eq!(encoder.encode(&Value::Int8(-32)).unwrap(), [101]);
        assert_eq!(encoder.encode(&Value::Int32(44)).unwrap(), [INT32, 0, 0, 0, 44]);
        assert_eq!(encoder.encode(&Value::Int8(-33)).unwrap(), [INT8, 0xdf]);
    }

    #[test]
    fn text_forms() {
        assert_eq!(enc(Value::from("")), [TEXT_START]);
        assert_eq!(enc(Value::from("Test")), [132, b'T', b'e', b's', b't']);

        let long = "0".repeat(128);
        let bytes = enc(Value::from(long.as_str()));
        assert_eq!(&bytes[..4], b"128:");
        assert_eq!(&bytes[4..], long.as_bytes());
    }

    #[test]
    fn text_tag_counts_characters() {
        // 2 characters, 3 bytes.
        assert_eq!(enc(Value::from("é!")), [130, 0xc3, 0xa9, b'!']);
    }

    #[test]
    fn list_and_map_headers() {
        let mut encoder = RencodeEncoder::new();
        assert!(!encoder.write_list_header(63));
        assert!(encoder.write_list_header(64));
        assert!(!encoder.write_map_header(24));
        assert!(encoder.write_map_header(25));
        assert_eq!(encoder.writer.flush(), [255, LIST, 126, MAP]);
    }

    #[test]
    fn failed_encode_leaves_no_output() {
        let options = RencodeOptions::new().with_text_encoding(TextEncoding::Latin1);
        let mut encoder = RencodeEncoder::with_options(options);
        let value = Value::List(vec![Value::Int32(1), Value::from("€")]);
        assert_eq!(
            encoder.encode(&value),
            Err(RencodeError::UnencodableText('€'))
        );
        assert!(encoder.writer.is_empty());
        assert_eq!(encoder.encode(&Value::Null).unwrap(), [NULL]);
    }

    #[test]
    fn json_unsigned_overflow_is_unsupported() {
        let mut encoder = RencodeEncoder::new();
        let value = serde_json::json!([1, u64::MAX]);
        assert!(matches!(
            encoder.encode_json(&value),
            Err(RencodeError::UnsupportedValueKind(_))
        ));
        assert!(encoder.writer.is_empty());
    }

    #[test]
    fn json_object_keeps_key_order() {
        let mut encoder = RencodeEncoder::new();
        let value = serde_json::json!({"b": null, "a": true});
        assert_eq!(
            encoder.encode_json(&value).unwrap(),
            [MAP_START + 2, 129, b'b', NULL, 129, b'a', TRUE]
        );
    }
}
