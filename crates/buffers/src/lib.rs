//! Byte-level building blocks for the rencode codec.
//!
//! [`Writer`] is the growable output sink used by the encoder and [`Reader`]
//! is the forward-only, bounds-checked cursor used by the decoder.

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use std::fmt;

/// Errors raised by [`Reader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A read needed more bytes than remained in the buffer.
    EndOfBuffer,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::EndOfBuffer => f.write_str("end of buffer"),
        }
    }
}

impl std::error::Error for BufferError {}
