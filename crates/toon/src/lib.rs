#![doc = include_str!("../README.md")]

pub mod de;
pub mod decode;
pub mod encode;
pub mod error;
pub mod number;
pub mod options;
pub mod ser;
pub mod value;

pub use crate::encode::normalize::ToToon;
pub use crate::error::{Error, Result};
pub use crate::number::Number;
pub use crate::options::{DecodeOptions, Delimiter, EncodeOptions};
pub use crate::value::{Field, Object, Value};

use std::io::{Read, Write};

/// Encode a host value as a TOON document.
pub fn encode_to_string<T: ToToon + ?Sized>(value: &T, options: &EncodeOptions) -> Result<String> {
    let normalized = value.to_toon(options)?;
    encode::encode_value_to_string(&normalized, options)
}

pub fn encode_to_writer<W: Write, T: ToToon + ?Sized>(
    mut writer: W,
    value: &T,
    options: &EncodeOptions,
) -> Result<()> {
    let s = encode_to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

/// Decode a TOON document into a data-model value.
pub fn decode_from_str(input: &str, options: &DecodeOptions) -> Result<Value> {
    decode::decode_str(input, options)
}

pub fn decode_from_reader<R: Read>(mut reader: R, options: &DecodeOptions) -> Result<Value> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    decode_from_str(&buf, options)
}
