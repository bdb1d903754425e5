//! Codec facade: one-shot `encode`/`decode` and the configured
//! [`RencodeCodec`] pair.

use tracing::{debug, trace};

use crate::decoder::RencodeDecoder;
use crate::encoder::RencodeEncoder;
use crate::error::RencodeError;
use crate::options::RencodeOptions;
use crate::value::Value;

/// Encodes `value` with default options (UTF-8 text, fixed-width integers).
pub fn encode(value: &Value) -> Result<Vec<u8>, RencodeError> {
    RencodeCodec::new().encode(value)
}

/// Decodes the first value in `bytes` with default options.
pub fn decode(bytes: &[u8]) -> Result<Value, RencodeError> {
    RencodeCodec::new().decode(bytes)
}

/// Encoder/decoder pair sharing one set of [`RencodeOptions`].
#[derive(Default)]
pub struct RencodeCodec {
    encoder: RencodeEncoder,
    decoder: RencodeDecoder,
}

impl RencodeCodec {
    pub fn new() -> Self {
        Self::with_options(RencodeOptions::default())
    }

    pub fn with_options(options: RencodeOptions) -> Self {
        Self {
            encoder: RencodeEncoder::with_options(options),
            decoder: RencodeDecoder::with_options(options),
        }
    }

    pub fn options(&self) -> &RencodeOptions {
        self.decoder.options()
    }

    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, RencodeError> {
        self.encoder
            .encode(value)
            .inspect(|bytes| trace!(kind = value.kind(), len = bytes.len(), "encoded value"))
            .inspect_err(|err| debug!(kind = value.kind(), %err, "rejected value"))
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Value, RencodeError> {
        self.decoder
            .decode(bytes)
            .inspect(|value| trace!(kind = value.kind(), len = bytes.len(), "decoded value"))
            .inspect_err(|err| debug!(len = bytes.len(), %err, "rejected input"))
    }

    /// Like [`Self::decode`], but fails if bytes follow the value.
    pub fn decode_exact(&self, bytes: &[u8]) -> Result<Value, RencodeError> {
        self.decoder
            .decode_exact(bytes)
            .inspect_err(|err| debug!(len = bytes.len(), %err, "rejected input"))
    }

    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<Vec<u8>, RencodeError> {
        self.encoder
            .encode_json(value)
            .inspect_err(|err| debug!(%err, "rejected json value"))
    }

    pub fn decode_json(&self, bytes: &[u8]) -> Result<serde_json::Value, RencodeError> {
        self.decode(bytes).map(serde_json::Value::from)
    }
}
