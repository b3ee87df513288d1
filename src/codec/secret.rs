//! JSON secret documents that carry a PEM key as a base64 string in their
//! `pem` field.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::text::{self, CodecError};

const PEM_FIELD: &str = "pem";

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret value could not be decoded: {0}")]
    Codec(#[from] CodecError),
    #[error("secret document is not valid json: {0}")]
    Json(String),
    #[error("secret document has no string field `{0}`")]
    MissingField(&'static str),
}

/// Serializable form of a secret document. [`pem_from_secret_json`] reads
/// documents loosely and ignores any other fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PemSecret {
    pub pem: String,
}

/// Decodes a base64 secret value back into PEM text. Line breaks are
/// skipped, so values wrapped by `base64` tools decode as stored.
pub fn decode_secret_to_pem(secret: &str) -> Result<String, SecretError> {
    let joined: String = secret.chars().filter(|c| !matches!(*c, '\r' | '\n')).collect();
    Ok(text::decode(&joined)?)
}

/// Extracts and decodes the `pem` field of a JSON secret document.
pub fn pem_from_secret_json(json: &str) -> Result<String, SecretError> {
    let document: Value =
        serde_json::from_str(json).map_err(|e| SecretError::Json(format!("{e}")))?;
    let encoded = document
        .get(PEM_FIELD)
        .and_then(Value::as_str)
        .ok_or(SecretError::MissingField(PEM_FIELD))?;
    log::debug!("decoding {} base64 characters from secret", encoded.len());
    decode_secret_to_pem(encoded)
}

/// Builds the JSON secret document for a PEM text.
pub fn encode_pem_secret(pem: &str) -> Result<String, SecretError> {
    let secret = PemSecret {
        pem: text::encode(pem),
    };
    serde_json::to_string(&secret).map_err(|e| SecretError::Json(format!("{e}")))
}
