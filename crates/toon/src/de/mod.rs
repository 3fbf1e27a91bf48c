//! Typed decoding: TOON text into `DeserializeOwned` host types.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::options::DecodeOptions;

/// Decode a document and bind it into `T`. Binding failures (wrong shapes,
/// overflowing integers, missing variants) surface as `Error::InternalType`.
pub fn from_str<T: DeserializeOwned>(s: &str, options: &DecodeOptions) -> Result<T> {
    let value = crate::decode::decode_str(s, options)?;
    serde_json::from_value(value.to_json()).map_err(|e| Error::InternalType(e.to_string()))
}
