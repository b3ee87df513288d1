//! Base64 round-trip of PEM key files. The codec treats the PEM as opaque
//! text; nothing here parses or validates key material.

pub mod cli;
pub mod codec;
pub mod config;
pub mod logging;
pub mod roundtrip;
pub mod source;
