//! The read → encode → decode pipeline. Each stage hands its value to the
//! next and the three values come back together so callers can print or
//! assert on them.

use std::path::Path;

use thiserror::Error;

use crate::codec::text::{self, CodecError};
use crate::source::{self, SourceError};

#[derive(Debug, Error)]
pub enum RoundTripError {
    #[error("read failed: {0}")]
    Source(#[from] SourceError),
    #[error("codec failed: {0}")]
    Codec(#[from] CodecError),
}

/// The three checkpoints of a round-trip run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    pub source: String,
    pub encoded: String,
    pub recovered: String,
}

impl RoundTrip {
    /// Runs the codec over already-loaded text.
    pub fn from_text(source: String) -> Result<Self, CodecError> {
        log::info!("checkpoint 1: source text ({} bytes)", source.len());
        log::debug!("source text:\n{source}");

        let encoded = text::encode(&source);
        log::info!("checkpoint 2: encoded text ({} bytes)", encoded.len());
        log::debug!("encoded text: {encoded}");

        let recovered = text::decode(&encoded)?;
        log::info!("checkpoint 3: recovered text ({} bytes)", recovered.len());
        log::debug!("recovered text:\n{recovered}");

        Ok(Self {
            source,
            encoded,
            recovered,
        })
    }

    pub fn is_faithful(&self) -> bool {
        self.source == self.recovered
    }
}

/// Reads `path` and round-trips its contents.
pub fn run(path: impl AsRef<Path>) -> Result<RoundTrip, RoundTripError> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    let source = source::read_text(path)?;
    Ok(RoundTrip::from_text(source)?)
}
