//! Reversible mapping between UTF-8 text and its padded base64 form.
//! Both directions use the standard alphabet with canonical `=` padding, so
//! anything produced by [`encode`] decodes back to the exact input.

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid base64 encoding: {0}")]
    InvalidEncoding(String),
    #[error("decoded bytes are not valid utf-8: {0}")]
    InvalidUtf8(String),
}

/// Encodes the UTF-8 bytes of `text`. The result is always a multiple of four
/// characters long.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decodes padded base64 back into text.
pub fn decode(encoded: &str) -> Result<String, CodecError> {
    let bytes = STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| CodecError::InvalidEncoding(format!("{e}")))?;
    String::from_utf8(bytes).map_err(|e| CodecError::InvalidUtf8(format!("{e}")))
}
