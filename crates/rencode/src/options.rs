//! Codec configuration.

use crate::text::TextEncoding;

/// Default nesting limit for decoded lists and maps.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options shared by [`RencodeEncoder`](crate::RencodeEncoder) and
/// [`RencodeDecoder`](crate::RencodeDecoder).
///
/// Both sides of a stream must agree on `text_encoding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RencodeOptions {
    /// Encoding of text payloads.
    pub text_encoding: TextEncoding,
    /// Write integers in -32..=43 with the single-byte compact tags instead
    /// of their fixed-width tag. Off by default.
    ///
    /// The compact tags carry no width, so decoding them always yields
    /// `Int8`. With this on, an `Int16`, `Int32` or `Int64` in that range
    /// decodes with the same value but as `Int8`, and the round trip is
    /// exact only up to [`Value::as_i64`](crate::Value::as_i64).
    pub compact_integers: bool,
    /// Maximum list/map nesting the decoder accepts.
    pub max_depth: usize,
}

impl Default for RencodeOptions {
    fn default() -> Self {
        RencodeOptions {
            text_encoding: TextEncoding::Utf8,
            compact_integers: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RencodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.text_encoding = text_encoding;
        self
    }

    pub fn with_compact_integers(mut self, compact_integers: bool) -> Self {
        self.compact_integers = compact_integers;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
