//! Serde encoding: `Serialize` host types into TOON text.

mod value_builder;

use serde::Serialize;

use crate::encode::encode_value_to_string;
use crate::error::Result;
use crate::options::EncodeOptions;
use crate::value::Value;

/// Build a data-model value from any `Serialize` type.
pub fn to_value<T: Serialize + ?Sized>(value: &T, _options: &EncodeOptions) -> Result<Value> {
    value_builder::to_value(value)
}

pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &EncodeOptions) -> Result<String> {
    let v = to_value(value, options)?;
    encode_value_to_string(&v, options)
}

pub fn to_writer<W: std::io::Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    options: &EncodeOptions,
) -> Result<()> {
    let s = to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
