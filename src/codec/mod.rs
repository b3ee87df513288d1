//! Base64 handling for PEM text. `text` holds the reversible text codec and
//! `secret` wraps it for the JSON secret documents that store PEM keys.

pub mod secret;
pub mod text;
