//! Text encodings for rencode string payloads.
//!
//! Text lengths on the wire count characters, not bytes, so every encoding
//! knows how to count characters when writing and how to consume exactly
//! `n` characters when reading.

use std::fmt;
use std::str::FromStr;

use rencode_buffers::{Reader, Writer};

use crate::error::RencodeError;

/// Character encoding used for text payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1: one byte per character, U+0000..=U+00FF.
    Latin1,
}

/// Byte width of a UTF-8 sequence from its lead byte.
#[inline]
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc2..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf4 => Some(4),
        _ => None,
    }
}

impl TextEncoding {
    /// Canonical encoding name.
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Latin1 => "ISO-8859-1",
        }
    }

    /// Number of characters `s` occupies in this encoding.
    ///
    /// Characters are Unicode scalar values. Encoders that count UTF-16 code
    /// units instead write a larger count for text outside the Basic
    /// Multilingual Plane (one emoji counts 2 there, 1 here), so such text
    /// does not interoperate with them.
    pub fn char_count(self, s: &str) -> usize {
        // Both encodings map one char to one character.
        s.chars().count()
    }

    /// Writes the encoded bytes of `s`.
    pub fn write(self, writer: &mut Writer, s: &str) -> Result<(), RencodeError> {
        match self {
            TextEncoding::Utf8 => writer.buf(s.as_bytes()),
            TextEncoding::Latin1 => {
                for ch in s.chars() {
                    let code = u32::from(ch);
                    if code > 0xff {
                        return Err(RencodeError::UnencodableText(ch));
                    }
                    writer.u8(code as u8);
                }
            }
        }
        Ok(())
    }

    /// Reads exactly `count` characters.
    pub fn read(self, reader: &mut Reader<'_>, count: usize) -> Result<String, RencodeError> {
        // Every character takes at least one byte.
        if count > reader.size() {
            return Err(RencodeError::TruncatedInput);
        }
        let start = reader.x;
        match self {
            TextEncoding::Latin1 => {
                let bytes = reader.buf(count)?;
                Ok(bytes.iter().map(|&b| char::from(b)).collect())
            }
            TextEncoding::Utf8 => {
                let mut len = 0usize;
                for _ in 0..count {
                    let lead = *reader
                        .uint8
                        .get(start + len)
                        .ok_or(RencodeError::TruncatedInput)?;
                    len += utf8_width(lead).ok_or(RencodeError::InvalidText(start + len))?;
                }
                let bytes = reader.buf(len)?;
                std::str::from_utf8(bytes)
                    .map(str::to_owned)
                    .map_err(|_| RencodeError::InvalidText(start))
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = RencodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(TextEncoding::Latin1),
            _ => Err(RencodeError::UnknownEncoding(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(enc: TextEncoding, s: &str) -> Result<Vec<u8>, RencodeError> {
        let mut writer = Writer::new();
        enc.write(&mut writer, s)?;
        Ok(writer.flush())
    }

    #[test]
    fn parse_names() {
        assert_eq!("UTF-8".parse::<TextEncoding>(), Ok(TextEncoding::Utf8));
        assert_eq!("utf8".parse::<TextEncoding>(), Ok(TextEncoding::Utf8));
        assert_eq!("ISO-8859-1".parse::<TextEncoding>(), Ok(TextEncoding::Latin1));
        assert_eq!("Latin1".parse::<TextEncoding>(), Ok(TextEncoding::Latin1));
        assert_eq!(
            "ebcdic".parse::<TextEncoding>(),
            Err(RencodeError::UnknownEncoding("ebcdic".into()))
        );
        assert_eq!(TextEncoding::Latin1.to_string(), "ISO-8859-1");
    }

    #[test]
    fn char_count_is_not_byte_count() {
        assert_eq!(TextEncoding::Utf8.char_count("héllo"), 5);
        assert_eq!("héllo".len(), 6);
        assert_eq!(TextEncoding::Utf8.char_count("🌍"), 1);
        assert_eq!("🌍".encode_utf16().count(), 2);
    }

    #[test]
    fn utf8_reads_counted_characters() {
        let data = "añ🌍xyz".as_bytes();
        let mut reader = Reader::new(data);
        assert_eq!(TextEncoding::Utf8.read(&mut reader, 3).unwrap(), "añ🌍");
        assert_eq!(reader.x, 1 + 2 + 4);
        assert_eq!(TextEncoding::Utf8.read(&mut reader, 3).unwrap(), "xyz");
    }

    #[test]
    fn utf8_truncated_sequence() {
        let data = &"🌍".as_bytes()[..3];
        let mut reader = Reader::new(data);
        assert_eq!(
            TextEncoding::Utf8.read(&mut reader, 1),
            Err(RencodeError::TruncatedInput)
        );
    }

    #[test]
    fn utf8_invalid_lead_and_continuation() {
        let mut reader = Reader::new(&[0x80, 0x41]);
        assert_eq!(
            TextEncoding::Utf8.read(&mut reader, 1),
            Err(RencodeError::InvalidText(0))
        );
        let mut reader = Reader::new(&[0xc3, 0x41]);
        assert_eq!(
            TextEncoding::Utf8.read(&mut reader, 1),
            Err(RencodeError::InvalidText(0))
        );
    }

    #[test]
    fn count_beyond_buffer() {
        let mut reader = Reader::new(b"ab");
        assert_eq!(
            TextEncoding::Latin1.read(&mut reader, 3),
            Err(RencodeError::TruncatedInput)
        );
        assert_eq!(reader.x, 0);
    }

    #[test]
    fn latin1_roundtrip() {
        let bytes = write(TextEncoding::Latin1, "café").unwrap();
        assert_eq!(bytes, [b'c', b'a', b'f', 0xe9]);
        let mut reader = Reader::new(&bytes);
        assert_eq!(TextEncoding::Latin1.read(&mut reader, 4).unwrap(), "café");
    }

    #[test]
    fn latin1_rejects_wide_characters() {
        assert_eq!(
            write(TextEncoding::Latin1, "€"),
            Err(RencodeError::UnencodableText('€'))
        );
    }
}
