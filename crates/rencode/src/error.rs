//! rencode error type.

use rencode_buffers::BufferError;
use thiserror::Error;

/// Error type for rencode encoding and decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RencodeError {
    #[error("unsupported value kind: {0}")]
    UnsupportedValueKind(String),

    #[error("unrecognized token 0x{token:02x} at offset {offset}")]
    UnrecognizedToken { token: u8, offset: usize },

    #[error("unexpected end of input")]
    TruncatedInput,

    #[error("malformed length at offset {0}")]
    MalformedLength(usize),

    #[error("map key token 0x{token:02x} at offset {offset} is not text")]
    InvalidKey { token: u8, offset: usize },

    #[error("duplicate map key: {0:?}")]
    DuplicateKey(String),

    #[error("invalid text at offset {0}")]
    InvalidText(usize),

    #[error("character {0:?} cannot be represented in the text encoding")]
    UnencodableText(char),

    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),

    #[error("{0} trailing bytes after value")]
    TrailingData(usize),

    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),
}

impl From<BufferError> for RencodeError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => RencodeError::TruncatedInput,
        }
    }
}
