//! Normalization of host values into the TOON data model.
//!
//! `ToToon` is the to-value protocol: one implementation per supported host
//! kind. Integers beyond the safe range become strings, non-finite floats
//! become null, generic maps sort by key, and date-times go through the
//! configured formatter. Derived struct types enter through the serde layer
//! instead (see `crate::ser`).

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, TimeZone, Utc};

use crate::error::Result;
use crate::number::{Number, MAX_SAFE_INTEGER};
use crate::options::EncodeOptions;
use crate::value::{Field, Object, Value};

pub trait ToToon {
    fn to_toon(&self, options: &EncodeOptions) -> Result<Value>;
}

pub(crate) fn normalize_i128(value: i128) -> Value {
    if value.unsigned_abs() > MAX_SAFE_INTEGER as u128 {
        Value::String(value.to_string())
    } else {
        Value::Number(Number::from_i64(value as i64))
    }
}

pub(crate) fn normalize_u128(value: u128) -> Value {
    if value > MAX_SAFE_INTEGER as u128 {
        Value::String(value.to_string())
    } else {
        Value::Number(Number::from_u64(value as u64))
    }
}

pub(crate) fn normalize_f64(value: f64) -> Value {
    match Number::from_f64(value) {
        Some(n) => Value::Number(n),
        None => Value::Null,
    }
}

/// Re-parse a pre-formatted numeric string: kept as a number only when a
/// finite double round-trips its exact digits.
pub fn numeric_string(s: &str) -> Value {
    match Number::from_literal_str(s) {
        Some(n) => Value::Number(n),
        None => Value::String(s.to_string()),
    }
}

macro_rules! to_toon_signed {
    ($($ty:ty),*) => {$(
        impl ToToon for $ty {
            fn to_toon(&self, _options: &EncodeOptions) -> Result<Value> {
                Ok(normalize_i128(*self as i128))
            }
        }
    )*};
}

macro_rules! to_toon_unsigned {
    ($($ty:ty),*) => {$(
        impl ToToon for $ty {
            fn to_toon(&self, _options: &EncodeOptions) -> Result<Value> {
                Ok(normalize_u128(*self as u128))
            }
        }
    )*};
}

to_toon_signed!(i8, i16, i32, i64, i128, isize);
to_toon_unsigned!(u8, u16, u32, u64, u128, usize);

impl ToToon for bool {
    fn to_toon(&self, _options: &EncodeOptions) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}

impl ToToon for f32 {
    fn to_toon(&self, _options: &EncodeOptions) -> Result<Value> {
        Ok(normalize_f64(*self as f64))
    }
}

impl ToToon for f64 {
    fn to_toon(&self, _options: &EncodeOptions) -> Result<Value> {
        Ok(normalize_f64(*self))
    }
}

impl ToToon for str {
    fn to_toon(&self, _options: &EncodeOptions) -> Result<Value> {
        Ok(Value::String(self.to_string()))
    }
}

impl ToToon for String {
    fn to_toon(&self, _options: &EncodeOptions) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }
}

impl ToToon for () {
    fn to_toon(&self, _options: &EncodeOptions) -> Result<Value> {
        Ok(Value::Null)
    }
}

impl<T: ToToon + ?Sized> ToToon for &T {
    fn to_toon(&self, options: &EncodeOptions) -> Result<Value> {
        (**self).to_toon(options)
    }
}

impl<T: ToToon> ToToon for Option<T> {
    fn to_toon(&self, options: &EncodeOptions) -> Result<Value> {
        match self {
            Some(inner) => inner.to_toon(options),
            None => Ok(Value::Null),
        }
    }
}

impl<T: ToToon> ToToon for [T] {
    fn to_toon(&self, options: &EncodeOptions) -> Result<Value> {
        let mut items = Vec::with_capacity(self.len());
        for item in self {
            items.push(item.to_toon(options)?);
        }
        Ok(Value::Array(items))
    }
}

impl<T: ToToon> ToToon for Vec<T> {
    fn to_toon(&self, options: &EncodeOptions) -> Result<Value> {
        self.as_slice().to_toon(options)
    }
}

impl<T: ToToon> ToToon for BTreeMap<String, T> {
    fn to_toon(&self, options: &EncodeOptions) -> Result<Value> {
        let mut obj = Object::default();
        for (key, value) in self {
            obj.push(key.clone(), value.to_toon(options)?);
        }
        Ok(Value::Object(obj))
    }
}

impl<T: ToToon> ToToon for HashMap<String, T> {
    fn to_toon(&self, options: &EncodeOptions) -> Result<Value> {
        let mut keys: Vec<&String> = self.keys().collect();
        keys.sort();
        let mut obj = Object::default();
        for key in keys {
            obj.push(key.clone(), self[key].to_toon(options)?);
        }
        Ok(Value::Object(obj))
    }
}

impl<Tz: TimeZone> ToToon for DateTime<Tz> {
    fn to_toon(&self, options: &EncodeOptions) -> Result<Value> {
        let utc = self.with_timezone(&Utc);
        Ok(Value::String((options.time_formatter)(&utc)))
    }
}

impl ToToon for serde_json::Value {
    fn to_toon(&self, options: &EncodeOptions) -> Result<Value> {
        Ok(from_json(self, options))
    }
}

impl ToToon for Value {
    fn to_toon(&self, _options: &EncodeOptions) -> Result<Value> {
        Ok(self.clone())
    }
}

impl ToToon for Object {
    fn to_toon(&self, _options: &EncodeOptions) -> Result<Value> {
        Ok(Value::Object(self.clone()))
    }
}

impl ToToon for Field {
    fn to_toon(&self, _options: &EncodeOptions) -> Result<Value> {
        Ok(Value::Object(Object::new([self.clone()])))
    }
}

/// Map a JSON tree into the data model. `serde_json` objects iterate in key
/// order, which gives maps their deterministic field order.
pub fn from_json(value: &serde_json::Value, options: &EncodeOptions) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                normalize_i128(i as i128)
            } else if let Some(u) = n.as_u64() {
                normalize_u128(u as u128)
            } else {
                normalize_f64(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => {
            Value::Array(items.iter().map(|v| from_json(v, options)).collect())
        }
        serde_json::Value::Object(map) => {
            let mut obj = Object::default();
            for (key, value) in map {
                obj.push(key.clone(), from_json(value, options));
            }
            Value::Object(obj)
        }
    }
}
