//! Encoding pipeline: normalized values in, TOON lines out.

pub mod encoders;
pub mod normalize;
pub mod primitives;
pub mod writer;

use crate::error::Result;
use crate::options::EncodeOptions;
use crate::value::Value;

/// Render a data-model value as a TOON document.
pub fn encode_value_to_string(value: &Value, options: &EncodeOptions) -> Result<String> {
    let mut enc = encoders::Encoder::new(options);
    enc.encode_root(value)?;
    Ok(enc.into_string())
}
