use crate::number::Number;

/// A value in the TOON data model.
///
/// Objects preserve field order; generic host maps are sorted by key during
/// normalization, so two encodings of the same model value are identical.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    /// Convert into the equivalent `serde_json` tree. Number literals with a
    /// fractional part or exponent become JSON floats, the rest integers.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => n.to_json(),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(obj) => {
                let mut map = serde_json::Map::new();
                for field in &obj.fields {
                    map.insert(field.key.clone(), field.value.to_json());
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

/// A single key/value pair in an ordered object.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: Value,
}

impl Field {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// An object that preserves the encounter order of its fields, ensuring
/// deterministic emission by the encoder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    pub fields: Vec<Field>,
}

impl Object {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn push(&mut self, key: impl Into<String>, value: Value) {
        self.fields.push(Field::new(key, value));
    }

    /// First field with the given key, if any. Duplicate keys are preserved
    /// as parsed; later duplicates are only reachable by iteration.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| Field { key, value })
                .collect(),
        }
    }
}
