use std::collections::BTreeMap;

use crate::equality::structural::{equals, StructuralEq};
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Array,
    Buffer, // fixed-size numeric samples
    Object,
    Named(String),
}

#[derive(Debug, Clone)]
pub enum Value {
    Missing, // present but unset, unlike an absent field
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Kind, Vec<Value>),
    Record(Kind, BTreeMap<String, Value>),
}

impl Value {
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(Kind::Array, items.into_iter().collect())
    }

    pub fn buffer(samples: impl IntoIterator<Item = f64>) -> Self {
        Value::List(Kind::Buffer, samples.into_iter().map(Value::Number).collect())
    }

    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Record(Kind::Object, collect_fields(fields))
    }

    pub fn named<K: Into<String>>(
        shape: &str,
        fields: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Value::Record(Kind::Named(shape.to_string()), collect_fields(fields))
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        Ok(parsed.into())
    }

    pub fn kind(&self) -> Option<&Kind> {
        match self {
            Value::List(kind, _) | Value::Record(kind, _) => Some(kind),
            _ => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        self.kind().is_some()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            Value::Record(_, fields) => fields.get(field),
            _ => None,
        }
    }
}

fn collect_fields<K: Into<String>>(
    fields: impl IntoIterator<Item = (K, Value)>,
) -> BTreeMap<String, Value> {
    fields
        .into_iter()
        .map(|(name, value)| (name.into(), value))
        .collect()
}

impl StructuralEq for Value {
    fn structural_eq(&self, other: &Self) -> bool {
        compare(self, other)
    }
}

fn identical(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Missing, Value::Missing) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => equals(a, b),
        (Value::Text(a), Value::Text(b)) => a == b,
        _ => std::ptr::eq(x, y),
    }
}

// Walks both trees with an explicit work list, so nesting depth is bounded by
// memory rather than by the call stack.
fn compare(x: &Value, y: &Value) -> bool {
    let mut pending = vec![(x, y)];

    while let Some((x, y)) = pending.pop() {
        if identical(x, y) {
            continue;
        }

        let (Some(x_kind), Some(y_kind)) = (x.kind(), y.kind()) else {
            return false;
        };
        if x_kind != y_kind {
            return false;
        }

        let matches = match (x, y) {
            // Indices are the own fields of a sequence.
            (Value::List(_, xs), Value::List(_, ys)) => {
                xs.len() == ys.len()
                    && xs
                        .iter()
                        .zip(ys)
                        .all(|(a, b)| field_matches(a, b, &mut pending))
            }
            (Value::Record(_, xs), Value::Record(_, ys)) => {
                xs.len() == ys.len()
                    && xs.iter().all(|(name, a)| match ys.get(name) {
                        Some(b) => field_matches(a, b, &mut pending),
                        None => false,
                    })
            }
            _ => false,
        };
        if !matches {
            return false;
        }
    }

    true
}

fn field_matches<'a>(
    a: &'a Value,
    b: &'a Value,
    pending: &mut Vec<(&'a Value, &'a Value)>,
) -> bool {
    if identical(a, b) {
        return true;
    }
    if !a.is_composite() {
        return false;
    }
    pending.push((a, b));
    true
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&[f64]> for Value {
    fn from(samples: &[f64]) -> Self {
        Value::array(samples.iter().copied().map(Value::Number))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Missing, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::array(items.into_iter().map(Value::from)),
            serde_json::Value::Object(fields) => {
                Value::object(fields.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}
