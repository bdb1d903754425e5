//! Type tags of the rencode wire format.
//!
//! The bencode type codes (`i`, `l`, `d`, ...) are relocated onto the
//! base-256 byte range and extended with fixed-width numbers and short forms
//! that embed small values or counts directly in the lead byte.
//!
//! | Lead byte  | Meaning                                   |
//! |------------|-------------------------------------------|
//! | `0..=43`   | compact positive integer, value = tag     |
//! | `44`       | `f64`                                     |
//! | `'0'..='9'`| long-form text length prefix              |
//! | `':'`      | long-form text length delimiter           |
//! | `59`       | open-ended list                           |
//! | `60`       | open-ended map                            |
//! | `61`       | arbitrary-precision number (unsupported)  |
//! | `62..=65`  | `i8`, `i16`, `i32`, `i64`                 |
//! | `66`       | `f32`                                     |
//! | `67..=69`  | `true`, `false`, `null`                   |
//! | `70..=101` | compact negative integer, value = 69 − tag|
//! | `102..=126`| short map, count = tag − 102              |
//! | `127`      | end of open-ended collection              |
//! | `128..=191`| short text, count = tag − 128             |
//! | `192..=255`| short list, count = tag − 192             |
//!
//! Tag `61` introduces a fixed-point decimal payload that no
//! [`Value`](crate::Value) variant represents. It is never written, and the
//! decoder rejects it as an unrecognized token.

pub const LIST: u8 = 59;
pub const MAP: u8 = 60;
pub const NUMBER: u8 = 61;
pub const INT8: u8 = 62;
pub const INT16: u8 = 63;
pub const INT32: u8 = 64;
pub const INT64: u8 = 65;
pub const FLOAT32: u8 = 66;
pub const FLOAT64: u8 = 44;
pub const TRUE: u8 = 67;
pub const FALSE: u8 = 68;
pub const NULL: u8 = 69;
pub const END: u8 = 127;
pub const LENGTH_DELIMITER: u8 = b':';

pub const POS_INT_START: u8 = 0;
pub const POS_INT_COUNT: u8 = 44;

pub const NEG_INT_START: u8 = 70;
pub const NEG_INT_COUNT: u8 = 32;

pub const MAP_START: u8 = 102;
pub const MAP_COUNT: u8 = 25;

pub const TEXT_START: u8 = 128;
pub const TEXT_COUNT: u8 = 64;

pub const LIST_START: u8 = TEXT_START + TEXT_COUNT;
pub const LIST_COUNT: u8 = 64;

/// Longest decimal length prefix accepted for long-form text.
pub const MAX_LENGTH_DIGITS: usize = 19;

/// Smallest integer representable by a compact tag.
pub const COMPACT_INT_MIN: i64 = -(NEG_INT_COUNT as i64);
/// Largest integer representable by a compact tag.
pub const COMPACT_INT_MAX: i64 = POS_INT_COUNT as i64 - 1;
