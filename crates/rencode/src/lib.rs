//! rencode is a compact binary serialization format derived from bencode.
//!
//! Every value starts with a single lead byte that selects its type. Small
//! integers, short strings, short lists and small maps embed their value or
//! count in that byte; larger values use fixed-width payloads, a decimal
//! length prefix, or an open-ended form closed by a terminator byte.
//!
//! ```
//! use rencode::{decode, encode, Value};
//!
//! let value = Value::List(vec![Value::from("Test"), Value::Int32(2), Value::Null]);
//! let bytes = encode(&value).unwrap();
//! assert_eq!(bytes[0], 192 + 3);
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

pub mod classify;
pub mod constants;
mod codec;
mod decoder;
mod encoder;
mod error;
mod json;
mod options;
mod text;
mod value;

pub use codec::{decode, encode, RencodeCodec};
pub use decoder::RencodeDecoder;
pub use encoder::RencodeEncoder;
pub use error::RencodeError;
pub use options::{RencodeOptions, DEFAULT_MAX_DEPTH};
pub use text::TextEncoding;
pub use value::{Map, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_roundtrip_matrix() {
        let inner: Value = [
            ("k1", Value::Int32(1)),
            ("k2", Value::from("v2")),
            ("k3", Value::Null),
        ]
        .into_iter()
        .collect();
        let cases = vec![
            Value::Float64(2.5),
            Value::Float32(2.5),
            Value::Bool(true),
            Value::Bool(false),
            Value::Int32(2),
            Value::from("Test"),
            Value::from("0".repeat(128)),
            inner.clone(),
            Value::List(vec![Value::from("1"), Value::from("2"), Value::from("3")]),
            Value::List(vec![Value::Int32(1), Value::Int32(2), Value::Int32(3)]),
            Value::List(vec![Value::from("1"), Value::Int32(2), Value::from("3")]),
            Value::List(vec![inner, Value::List(vec![]), Value::Map(Map::new())]),
        ];
        for case in cases {
            let bytes = encode(&case).expect("encode");
            assert_eq!(decode(&bytes).expect("decode"), case, "bytes: {bytes:?}");
        }
    }
}
