//! Resources decoded from API responses.
//!
//! Each resource maps the JSON field names of the API onto its own field
//! names. Decoding is all-or-nothing: a missing or mistyped required field
//! fails the whole resource with a [`DecodeError`] naming it.

pub mod release;

use log::debug;
use serde::de::DeserializeOwned;
use std::fmt;

pub use release::{Asset, Release};

/// A type that an API response body can be decoded into.
pub trait Resource: DeserializeOwned {
    /// Human readable name used in decode errors.
    fn kind() -> String;
}

impl Resource for Release {
    fn kind() -> String {
        "Release".to_string()
    }
}

impl Resource for Asset {
    fn kind() -> String {
        "Asset".to_string()
    }
}

impl<T: Resource> Resource for Vec<T> {
    fn kind() -> String {
        format!("[{}]", T::kind())
    }
}

/// A response body that could not be decoded into a resource.
#[derive(Debug)]
pub struct DecodeError {
    kind: String,
    source: serde_json::Error,
}

impl DecodeError {
    /// The resource that failed to decode, e.g. `Release` or `[Release]`.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to decode {}: {}", self.kind, self.source)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Decodes a JSON response body.
pub fn decode<T: Resource>(body: &[u8]) -> Result<T, DecodeError> {
    debug!("Decoding {} from {} bytes", T::kind(), body.len());
    serde_json::from_slice(body).map_err(|source| DecodeError {
        kind: T::kind(),
        source,
    })
}

/// Decodes a JSON document given as text.
pub fn decode_str<T: Resource>(json: &str) -> Result<T, DecodeError> {
    decode(json.as_bytes())
}
