//! `RencodeDecoder`: reads rencode bytes back into [`Value`] trees.
//!
//! Decoding is a single forward pass over a bounds-checked [`Reader`]. The
//! only lookahead is the scan for the `':'` that ends a long-form text
//! length. A malformed buffer fails the whole call; no partial tree is
//! returned.

use indexmap::map::Entry;
use rencode_buffers::Reader;

use crate::classify::*;
use crate::constants::*;
use crate::error::RencodeError;
use crate::options::RencodeOptions;
use crate::value::{Map, Value};

/// Stateless rencode decoder.
#[derive(Debug, Clone, Default)]
pub struct RencodeDecoder {
    options: RencodeOptions,
}

impl RencodeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RencodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RencodeOptions {
        &self.options
    }

    /// Decodes the first value in `input`. Bytes after it are ignored.
    pub fn decode(&self, input: &[u8]) -> Result<Value, RencodeError> {
        self.decode_with_consumed(input).map(|(value, _)| value)
    }

    /// Decodes the first value in `input` and reports how many bytes it used.
    pub fn decode_with_consumed(&self, input: &[u8]) -> Result<(Value, usize), RencodeError> {
        let mut reader = Reader::new(input);
        let value = self.read_any(&mut reader, 0)?;
        Ok((value, reader.x))
    }

    /// Decodes `input`, which must hold exactly one value.
    pub fn decode_exact(&self, input: &[u8]) -> Result<Value, RencodeError> {
        let (value, consumed) = self.decode_with_consumed(input)?;
        if consumed != input.len() {
            return Err(RencodeError::TrailingData(input.len() - consumed));
        }
        Ok(value)
    }

    /// Reads one value at the reader's cursor. `depth` is the number of
    /// enclosing collections.
    pub fn read_any(&self, r: &mut Reader<'_>, depth: usize) -> Result<Value, RencodeError> {
        let offset = r.x;
        let token = r.u8()?;
        self.read_token(r, token, offset, depth)
    }

    fn read_token(
        &self,
        r: &mut Reader<'_>,
        token: u8,
        offset: usize,
        depth: usize,
    ) -> Result<Value, RencodeError> {
        match token {
            MAP => self.read_map(r, depth),
            LIST => self.read_list(r, depth),
            INT8 => Ok(Value::Int8(r.i8()?)),
            INT16 => Ok(Value::Int16(r.i16()?)),
            INT32 => Ok(Value::Int32(r.i32()?)),
            INT64 => Ok(Value::Int64(r.i64()?)),
            FLOAT32 => Ok(Value::Float32(r.f32_le()?)),
            FLOAT64 => Ok(Value::Float64(r.f64_le()?)),
            TRUE => Ok(Value::Bool(true)),
            FALSE => Ok(Value::Bool(false)),
            NULL => Ok(Value::Null),
            t if is_short_map(t) => self.read_short_map(r, t, offset, depth),
            t if is_short_list(t) => self.read_short_list(r, t, offset, depth),
            t if is_compact_neg_int(t) => Ok(Value::Int8(
                (i16::from(NEG_INT_START) - 1 - i16::from(t)) as i8,
            )),
            t if is_compact_pos_int(t) => Ok(Value::Int8((t - POS_INT_START) as i8)),
            t if is_text(t) => self.read_text(r, t, offset).map(Value::Text),
            _ => Err(RencodeError::UnrecognizedToken { token, offset }),
        }
    }

    fn enter(&self, depth: usize) -> Result<usize, RencodeError> {
        if depth >= self.options.max_depth {
            return Err(RencodeError::NestingTooDeep(self.options.max_depth));
        }
        Ok(depth + 1)
    }

    fn read_list(&self, r: &mut Reader<'_>, depth: usize) -> Result<Value, RencodeError> {
        let depth = self.enter(depth)?;
        let mut items = Vec::new();
        loop {
            let offset = r.x;
            let token = r.u8()?;
            if token == END {
                break;
            }
            items.push(self.read_token(r, token, offset, depth)?);
        }
        Ok(Value::List(items))
    }

    fn read_short_list(
        &self,
        r: &mut Reader<'_>,
        token: u8,
        offset: usize,
        depth: usize,
    ) -> Result<Value, RencodeError> {
        let count = token
            .checked_sub(LIST_START)
            .ok_or(RencodeError::MalformedLength(offset))?;
        let depth = self.enter(depth)?;
        let mut items = Vec::with_capacity(count.into());
        for _ in 0..count {
            items.push(self.read_any(r, depth)?);
        }
        Ok(Value::List(items))
    }

    fn read_map(&self, r: &mut Reader<'_>, depth: usize) -> Result<Value, RencodeError> {
        let depth = self.enter(depth)?;
        let mut map = Map::new();
        loop {
            let offset = r.x;
            let token = r.u8()?;
            if token == END {
                break;
            }
            self.read_entry(r, &mut map, token, offset, depth)?;
        }
        Ok(Value::Map(map))
    }

    fn read_short_map(
        &self,
        r: &mut Reader<'_>,
        token: u8,
        offset: usize,
        depth: usize,
    ) -> Result<Value, RencodeError> {
        let count = token
            .checked_sub(MAP_START)
            .ok_or(RencodeError::MalformedLength(offset))?;
        let depth = self.enter(depth)?;
        let mut map = Map::with_capacity(count.into());
        for _ in 0..count {
            let offset = r.x;
            let token = r.u8()?;
            self.read_entry(r, &mut map, token, offset, depth)?;
        }
        Ok(Value::Map(map))
    }

    /// Reads one key/value pair whose key lead byte was already consumed.
    fn read_entry(
        &self,
        r: &mut Reader<'_>,
        map: &mut Map,
        token: u8,
        offset: usize,
        depth: usize,
    ) -> Result<(), RencodeError> {
        if !is_text(token) {
            return Err(RencodeError::InvalidKey { token, offset });
        }
        let key = self.read_text(r, token, offset)?;
        let val = self.read_any(r, depth)?;
        match map.entry(key) {
            Entry::Occupied(entry) => Err(RencodeError::DuplicateKey(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(val);
                Ok(())
            }
        }
    }

    /// Reads a text value whose lead byte (short tag or first length digit)
    /// was already consumed.
    fn read_text(
        &self,
        r: &mut Reader<'_>,
        token: u8,
        offset: usize,
    ) -> Result<String, RencodeError> {
        let count = if is_short_text(token) {
            usize::from(token - TEXT_START)
        } else {
            self.read_length(r, token, offset)?
        };
        self.options.text_encoding.read(r, count)
    }

    /// Reads the decimal length prefix of long-form text up to and including
    /// the delimiter. `first` is the already consumed leading digit.
    fn read_length(
        &self,
        r: &mut Reader<'_>,
        first: u8,
        offset: usize,
    ) -> Result<usize, RencodeError> {
        if !is_digit(first) {
            return Err(RencodeError::MalformedLength(offset));
        }
        let mut len = usize::from(first - b'0');
        let mut digits = 1usize;
        loop {
            let ch = r.u8()?;
            if ch == LENGTH_DELIMITER {
                return Ok(len);
            }
            digits += 1;
            if !is_digit(ch) || digits > MAX_LENGTH_DIGITS {
                return Err(RencodeError::MalformedLength(offset));
            }
            len = len
                .checked_mul(10)
                .and_then(|l| l.checked_add(usize::from(ch - b'0')))
                .ok_or(RencodeError::MalformedLength(offset))?;
        }
    }
}
